use crate::core::parser::parse_birthday;
use crate::domain::model::{BirthdayInput, CalendarDate};
use crate::utils::error::Result;

/// Whole years between `birth` and `today`.
///
/// The year difference is reduced by one while `today`'s (month, day) is
/// still before the birthday's. A `today` earlier than `birth` gives a
/// negative result.
pub fn calculate_age(birth: CalendarDate, today: CalendarDate) -> i32 {
    let mut age = today.year() - birth.year();

    // 今年生日還沒到
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }

    age
}

/// Candles needed for a single birthday cake.
pub fn calculate_candles(birthday: &BirthdayInput, today: CalendarDate) -> Result<i32> {
    let birth = parse_birthday(birthday)?;
    Ok(calculate_age(birth, today))
}
