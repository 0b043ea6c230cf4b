//! Holiday calendars and their create payloads.
//!
//! A [`HolidayCalendar`] is a persisted record owned by the store; a
//! [`CalendarSpec`] is the payload handed to
//! [`CalendarStore::create`](crate::store::CalendarStore::create).
//! The copy-style constructors ([`HolidayCalendar::copy_with_year`],
//! [`HolidayLine::copy_with_date`]) build specs from existing records
//! with selected fields replaced, so callers never re-declare fields by
//! hand.

use serde::{Deserialize, Serialize};

use super::{CalendarId, CountryCode, Date};

/// One public holiday within a calendar.
///
/// Owned exclusively by its parent [`HolidayCalendar`]; line order is
/// insertion order and is preserved by rollover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayLine {
    /// Holiday name (e.g., "Christmas").
    pub name: String,
    /// Date the holiday falls on.
    pub date: Date,
    /// Whether the date shifts year-to-year (e.g., Easter) as opposed
    /// to being fixed (e.g., a national day).
    pub variable: bool,
}

impl HolidayLine {
    /// Create a new holiday line.
    pub fn new(name: impl Into<String>, date: Date, variable: bool) -> Self {
        Self {
            name: name.into(),
            date,
            variable,
        }
    }

    /// Copy this line into a create payload with the date replaced.
    ///
    /// Every other field is carried over unchanged.
    pub fn copy_with_date(&self, date: Date) -> LineSpec {
        LineSpec {
            name: self.name.clone(),
            date,
            variable: self.variable,
        }
    }
}

/// A public holiday calendar: one country, one reference year, and its
/// ordered list of holidays.
///
/// Immutable once persisted except through explicit edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    /// Store-assigned identifier.
    pub id: CalendarId,
    /// Country this calendar applies to.
    pub country: CountryCode,
    /// Reference year.
    pub year: i32,
    /// Holidays, in insertion order.
    pub lines: Vec<HolidayLine>,
}

impl HolidayCalendar {
    /// Create a new calendar record.
    pub fn new(
        id: CalendarId,
        country: CountryCode,
        year: i32,
        lines: Vec<HolidayLine>,
    ) -> Self {
        Self {
            id,
            country,
            year,
            lines,
        }
    }

    /// Copy this calendar into a create payload with the year replaced.
    ///
    /// Lines are not carried over: rollover re-dates every line and
    /// attaches its own line specs.
    pub fn copy_with_year(&self, year: i32) -> CalendarSpec {
        CalendarSpec {
            country: self.country.clone(),
            year,
            lines: Vec::new(),
        }
    }
}

/// Create payload for a new calendar, with nested line specs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSpec {
    /// Country of the new calendar.
    pub country: CountryCode,
    /// Reference year of the new calendar.
    pub year: i32,
    /// Line payloads, in the order they should be persisted.
    pub lines: Vec<LineSpec>,
}

/// Create payload for one holiday line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpec {
    /// Holiday name.
    pub name: String,
    /// Date the holiday falls on.
    pub date: Date,
    /// Whether the date shifts year-to-year.
    pub variable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar() -> HolidayCalendar {
        HolidayCalendar::new(
            CalendarId::new(3),
            CountryCode::new("IE"),
            2021,
            vec![
                HolidayLine::new("St. Patrick's Day", Date::from_ymd(2021, 3, 17).unwrap(), false),
                HolidayLine::new("Easter Monday", Date::from_ymd(2021, 4, 5).unwrap(), true),
            ],
        )
    }

    #[test]
    fn test_copy_with_year_replaces_year_only() {
        let spec = calendar().copy_with_year(2022);
        assert_eq!(spec.country, CountryCode::new("IE"));
        assert_eq!(spec.year, 2022);
        assert!(spec.lines.is_empty());
    }

    #[test]
    fn test_copy_with_date_carries_other_fields() {
        let cal = calendar();
        let line = &cal.lines[1];
        let spec = line.copy_with_date(Date::from_ymd(2022, 4, 18).unwrap());
        assert_eq!(spec.name, "Easter Monday");
        assert!(spec.variable);
        assert_eq!(spec.date, Date::from_ymd(2022, 4, 18).unwrap());
    }

    #[test]
    fn test_calendar_serde_roundtrip() {
        let cal = calendar();
        let json = serde_json::to_string(&cal).unwrap();
        let back: HolidayCalendar = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cal);
    }
}
