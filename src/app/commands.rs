use crate::app::report::{render_candles, render_report};
use crate::config::people::PeopleConfig;
use crate::config::{CandlesArgs, TotalArgs};
use crate::core::age::calculate_candles;
use crate::core::aggregate::BirthdayAggregator;
use crate::core::parser::parse_date_text;
use crate::domain::model::{BirthdayInput, CalendarDate, PersonRecord};
use crate::domain::ports::{Clock, FixedClock, SystemClock};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Picks the clock for a run: a pinned date when one is given, the local
/// date otherwise.
pub fn resolve_clock(pinned: Option<CalendarDate>) -> Box<dyn Clock> {
    match pinned {
        Some(date) => {
            tracing::debug!(%date, "using pinned reference date");
            Box::new(FixedClock::new(date))
        }
        None => Box::new(SystemClock),
    }
}

pub fn run_candles(args: &CandlesArgs) -> Result<String> {
    let pinned = args.today.as_deref().map(parse_date_text).transpose()?;
    let today = resolve_clock(pinned).today();

    let candles = calculate_candles(&BirthdayInput::from(args.birthday.as_str()), today)?;
    Ok(render_candles(candles))
}

pub fn run_total(args: &TotalArgs) -> Result<String> {
    args.validate()?;

    let config = match &args.file {
        Some(file) => {
            let config = PeopleConfig::from_file(file)?;
            config.validate()?;
            config
        }
        None => PeopleConfig::default(),
    };

    // 命令列的 --today 優先於檔案設定
    let pinned = match args.today.as_deref() {
        Some(text) => Some(parse_date_text(text)?),
        None => config.today()?,
    };

    let mut people = config.records();
    people.extend(
        args.people
            .iter()
            .map(|(name, birthday)| PersonRecord::new(name.clone(), birthday.clone())),
    );
    tracing::info!("Counting candles for {} people", people.len());

    let report = BirthdayAggregator::new(resolve_clock(pinned)).run(&people)?;
    render_report(&report, args.format)
}
