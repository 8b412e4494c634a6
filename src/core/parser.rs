use crate::domain::model::{BirthdayInput, CalendarDate};
use crate::utils::error::{CandleError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Canonical birthday layout, the only text format accepted.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

// chrono 的 %Y/%m 會接受未補零或帶正負號的欄位，先用正規表達式鎖定長度
static STRICT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("static pattern compiles"));

/// Resolves a [`BirthdayInput`] into a [`CalendarDate`].
///
/// Structured dates pass straight through. Text goes through
/// [`parse_date_text`].
pub fn parse_birthday(input: &BirthdayInput) -> Result<CalendarDate> {
    match input {
        BirthdayInput::Date(date) => Ok(*date),
        BirthdayInput::Text(text) => parse_date_text(text),
    }
}

/// Parses text that must be exactly `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`CandleError::InvalidFormat`] on any deviation: separators,
/// digit counts, surrounding whitespace, out-of-range fields, or a day
/// that does not exist in the given month. Year `0000` is rejected as well.
pub fn parse_date_text(text: &str) -> Result<CalendarDate> {
    if !STRICT_PATTERN.is_match(text) {
        tracing::debug!(input = text, "birthday text does not match YYYY-MM-DD");
        return Err(CandleError::InvalidFormat);
    }

    let date = NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT).map_err(|e| {
        tracing::debug!(input = text, error = %e, "birthday text is not a calendar date");
        CandleError::InvalidFormat
    })?;

    CalendarDate::try_from(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_text_round_trips() {
        for text in ["1981-01-14", "2009-09-24", "2000-02-29", "0001-01-01", "9999-12-31"] {
            let date = parse_date_text(text).unwrap();
            assert_eq!(date.to_string(), text);
        }
    }

    #[test]
    fn test_malformed_text_is_rejected() {
        let cases = [
            "14-01-1981",
            "1981/01/14",
            "1981-1-14",
            "1981-01-4",
            "81-01-14",
            "1981-13-01",
            "1981-00-10",
            "1981-01-32",
            "1981-01-00",
            "1981-02-30",
            "2023-02-29",
            "1981-01-14T00:00",
            " 1981-01-14",
            "1981-01-14\n",
            "+1981-01-14",
            "198a-01-14",
            "1981-01",
            "0000-01-01",
            "",
        ];
        for text in cases {
            assert!(
                matches!(parse_date_text(text), Err(CandleError::InvalidFormat)),
                "expected InvalidFormat for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_error_message_is_fixed() {
        let err = parse_date_text("14-01-1981").unwrap_err();
        assert_eq!(err.to_string(), "Birthday should be in format 'YYYY-MM-DD'");
    }

    #[test]
    fn test_structured_input_passes_through() {
        let date = CalendarDate::from_ymd(1981, 1, 14).unwrap();
        assert_eq!(parse_birthday(&BirthdayInput::Date(date)).unwrap(), date);
    }

    #[test]
    fn test_text_input_is_parsed() {
        let parsed = parse_birthday(&BirthdayInput::from("2009-09-24")).unwrap();
        assert_eq!(parsed, CalendarDate::from_ymd(2009, 9, 24).unwrap());
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        // 全形數字
        assert!(parse_date_text("１９８１-01-14").is_err());
    }
}
