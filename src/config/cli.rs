use crate::app::report::OutputFormat;
use crate::utils::error::{CandleError, Result};
use crate::utils::validation::{self, Validate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "candle-calc", version)]
#[command(about = "Count the candles needed for birthday cakes")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Candles for a single birthday.
    Candles(CandlesArgs),
    /// Total candles for a list of people.
    Total(TotalArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CandlesArgs {
    /// Birthday as YYYY-MM-DD.
    pub birthday: String,

    /// Reference date as YYYY-MM-DD (defaults to the local date).
    #[arg(long)]
    pub today: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct TotalArgs {
    /// People file (.toml or .csv).
    #[arg(short, long)]
    pub file: Option<String>,

    /// Extra person as NAME=YYYY-MM-DD, repeatable.
    #[arg(short, long = "person", value_parser = parse_person)]
    pub people: Vec<(String, String)>,

    /// Reference date as YYYY-MM-DD (overrides the file's `today`).
    #[arg(long)]
    pub today: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

fn parse_person(value: &str) -> std::result::Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(name, birthday)| (name.to_string(), birthday.to_string()))
        .ok_or_else(|| format!("expected NAME=YYYY-MM-DD, got '{}'", value))
}

impl Validate for TotalArgs {
    fn validate(&self) -> Result<()> {
        if self.file.is_none() && self.people.is_empty() {
            return Err(CandleError::MissingConfigError {
                field: "--file or --person".to_string(),
            });
        }

        if let Some(file) = &self.file {
            validation::validate_path("file", file)?;
            validation::validate_file_extension(
                "file",
                file,
                crate::config::people::SUPPORTED_EXTENSIONS,
            )?;
        }

        for (name, _) in &self.people {
            validation::validate_non_empty_string("person", name)?;
        }

        Ok(())
    }
}
