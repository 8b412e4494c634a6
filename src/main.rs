use candle_calc::app::commands;
use candle_calc::config::{CliConfig, Command};
use candle_calc::utils::logger;
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let result = match &config.command {
        Command::Candles(args) => commands::run_candles(args),
        Command::Total(args) => commands::run_total(args),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ Candle calculation failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
