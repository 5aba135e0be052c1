//! Parsing of the interactive selectors: month, day of week, yes/no.
//!
//! All matching is case-insensitive and ignores surrounding whitespace.
//! `all` means "no filter" for both month and day.

use chrono::{Month, Weekday};
use thiserror::Error;

/// Months covered by the trip data, in calendar order.
pub const SELECTABLE_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Input outside one of the accepted closed sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown city `{0}`; expected chicago, new york city or washington")]
    UnknownCity(String),
    #[error("unknown month `{0}`; expected all, january, february, ..., june")]
    UnknownMonth(String),
    #[error("unknown day `{0}`; expected all, monday, tuesday, ..., sunday")]
    UnknownDay(String),
    #[error("expected yes or no, got `{0}`")]
    NotYesNo(String),
}

/// Canonical capitalized English name of a weekday, e.g. `Monday`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// English month name for a 1-based month number.
pub fn month_name(number: u32) -> Option<&'static str> {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .map(|m| m.name())
}

/// `all` gives `None`; otherwise one of January to June.
pub fn parse_month(input: &str) -> Result<Option<Month>, SelectionError> {
    let wanted = input.trim().to_lowercase();
    if wanted == "all" {
        return Ok(None);
    }
    SELECTABLE_MONTHS
        .into_iter()
        .find(|m| m.name().to_lowercase() == wanted)
        .map(Some)
        .ok_or_else(|| SelectionError::UnknownMonth(input.trim().to_string()))
}

/// `all` gives `None`; otherwise a full weekday name.
pub fn parse_day(input: &str) -> Result<Option<Weekday>, SelectionError> {
    let wanted = input.trim().to_lowercase();
    if wanted == "all" {
        return Ok(None);
    }
    WEEKDAYS
        .into_iter()
        .find(|d| weekday_name(*d).to_lowercase() == wanted)
        .map(Some)
        .ok_or_else(|| SelectionError::UnknownDay(input.trim().to_string()))
}

pub fn parse_yes_no(input: &str) -> Result<bool, SelectionError> {
    match input.trim().to_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(SelectionError::NotYesNo(input.trim().to_string())),
    }
}
