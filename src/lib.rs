pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::report::OutputFormat;
pub use crate::config::people::PeopleConfig;
pub use crate::core::age::{calculate_age, calculate_candles};
pub use crate::core::aggregate::{aggregate, BirthdayAggregator};
pub use crate::core::parser::{parse_birthday, parse_date_text};
pub use crate::domain::model::{AggregateReport, BirthdayInput, CalendarDate, PersonCandles, PersonRecord};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::{CandleError, Result};
