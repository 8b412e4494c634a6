pub mod age;
pub mod aggregate;
pub mod parser;

pub use crate::domain::model::{AggregateReport, BirthdayInput, CalendarDate, PersonCandles, PersonRecord};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::Result;
