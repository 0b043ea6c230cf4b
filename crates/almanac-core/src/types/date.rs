//! Date type for holiday calendars.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AlmanacError, AlmanacResult};

/// A calendar date.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// operations holiday rollover needs and ensuring type safety.
///
/// # Example
///
/// ```rust
/// use almanac_core::types::Date;
///
/// let date = Date::from_ymd(2021, 3, 17).unwrap();
/// let shifted = date.with_year(2022).unwrap();
/// assert_eq!(shifted.year(), 2022);
/// assert_eq!(shifted.month(), 3);
/// assert_eq!(shifted.day(), 17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> AlmanacResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| AlmanacError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> AlmanacResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| AlmanacError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Checks if the date is February 29th.
    #[must_use]
    pub fn is_leap_day(&self) -> bool {
        self.month() == 2 && self.day() == 29
    }

    /// Substitutes the year, keeping month and day unchanged.
    ///
    /// This is plain calendar-year substitution, not clamped arithmetic:
    /// Feb 29 moved into a non-leap year does not exist.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if the substituted date does
    /// not exist in the target year.
    pub fn with_year(&self, year: i32) -> AlmanacResult<Self> {
        Self::from_ymd(year, self.month(), self.day())
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd_valid() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_from_ymd_invalid() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2021-03-17").unwrap();
        assert_eq!(date, Date::from_ymd(2021, 3, 17).unwrap());
        assert!(Date::parse("not-a-date").is_err());
    }

    #[test]
    fn test_with_year() {
        let date = Date::from_ymd(2021, 3, 17).unwrap();
        let shifted = date.with_year(2022).unwrap();
        assert_eq!(shifted, Date::from_ymd(2022, 3, 17).unwrap());
    }

    #[test]
    fn test_with_year_leap_day_into_leap_year() {
        let date = Date::from_ymd(2020, 2, 29).unwrap();
        let shifted = date.with_year(2024).unwrap();
        assert_eq!(shifted, Date::from_ymd(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_with_year_leap_day_into_common_year() {
        let date = Date::from_ymd(2020, 2, 29).unwrap();
        assert!(date.with_year(2021).is_err());
    }

    #[test]
    fn test_is_leap_day() {
        assert!(Date::from_ymd(2020, 2, 29).unwrap().is_leap_day());
        assert!(!Date::from_ymd(2020, 2, 28).unwrap().is_leap_day());
        assert!(!Date::from_ymd(2020, 3, 29).unwrap().is_leap_day());
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2025, 1, 5).unwrap();
        assert_eq!(date.to_string(), "2025-01-05");
    }

    #[test]
    fn test_serde_transparent() {
        let date = Date::from_ymd(2025, 12, 25).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-12-25\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
