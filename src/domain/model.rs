use crate::utils::error::CandleError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A civil (year, month, day) date.
///
/// Always holds a real calendar day with a four-digit year (0001..=9999),
/// so its `YYYY-MM-DD` form is canonical in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub const MIN_YEAR: i32 = 1;
    pub const MAX_YEAR: i32 = 9999;

    /// Returns `None` when the triple is not a real calendar day or the
    /// year has more or fewer than four digits.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(|date| Self::try_from(date).ok())
    }

    /// Pins an out-of-range date to 0001-01-01 or 9999-12-31.
    pub fn saturating(date: NaiveDate) -> Self {
        let year = date.year().clamp(Self::MIN_YEAR, Self::MAX_YEAR);
        if year == date.year() {
            return Self(date);
        }

        let (month, day) = if year == Self::MIN_YEAR { (1, 1) } else { (12, 31) };
        NaiveDate::from_ymd_opt(year, month, day).map_or(Self(date), Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = CandleError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(CandleError::InvalidFormat)
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for CalendarDate {
    type Err = CandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::core::parser::parse_date_text(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CandleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

/// A birthday as supplied by a caller: already structured, or raw text
/// still waiting for the strict parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthdayInput {
    Date(CalendarDate),
    Text(String),
}

impl From<CalendarDate> for BirthdayInput {
    fn from(date: CalendarDate) -> Self {
        BirthdayInput::Date(date)
    }
}

impl TryFrom<NaiveDate> for BirthdayInput {
    type Error = CandleError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        CalendarDate::try_from(date).map(BirthdayInput::Date)
    }
}

impl From<&str> for BirthdayInput {
    fn from(text: &str) -> Self {
        BirthdayInput::Text(text.to_string())
    }
}

impl From<String> for BirthdayInput {
    fn from(text: String) -> Self {
        BirthdayInput::Text(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub name: String,
    pub birthday: BirthdayInput,
}

impl PersonRecord {
    pub fn new(name: impl Into<String>, birthday: impl Into<BirthdayInput>) -> Self {
        Self {
            name: name.into(),
            birthday: birthday.into(),
        }
    }
}

/// One line of an [`AggregateReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonCandles {
    pub name: String,
    pub birthday: String,
    pub candles: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub total: i64,
    pub details: Vec<PersonCandles>,
}
