//! Storage trait for holiday calendars.
//!
//! [`CalendarStore`] is the interface persistence backends implement.
//! Implementations are EXTENSIONS (in-memory, JSON file, a database);
//! the rollover engine only ever talks to the trait.
//!
//! The trait is synchronous: the whole rollover runs single-threaded
//! inside one external transaction boundary owned by the caller.

use crate::error::AlmanacResult;
use crate::types::{CalendarId, CalendarSpec, CountryCode, HolidayCalendar};

/// Calendar filter for storage queries.
///
/// The default filter matches every calendar; `search` with it fetches
/// the whole store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarFilter {
    /// Country filter (ISO 3166-1 alpha-2).
    pub country: Option<CountryCode>,
    /// Reference year filter.
    pub year: Option<i32>,
}

impl CalendarFilter {
    /// Create filter for a specific country.
    pub fn by_country(country: impl Into<CountryCode>) -> Self {
        Self {
            country: Some(country.into()),
            ..Default::default()
        }
    }

    /// Create filter for a specific year.
    pub fn by_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Default::default()
        }
    }

    /// Check if this filter matches a calendar.
    pub fn matches(&self, calendar: &HolidayCalendar) -> bool {
        if let Some(ref country) = self.country {
            if &calendar.country != country {
                return false;
            }
        }

        if let Some(year) = self.year {
            if calendar.year != year {
                return false;
            }
        }

        true
    }
}

/// Holiday calendar storage.
///
/// Backends must keep line order and return search results in id order
/// so callers see deterministic output.
pub trait CalendarStore {
    /// Fetch calendars matching a filter.
    fn search(&self, filter: &CalendarFilter) -> AlmanacResult<Vec<HolidayCalendar>>;

    /// Persist a new calendar (with nested line specs) and return its id.
    fn create(&self, spec: &CalendarSpec) -> AlmanacResult<CalendarId>;
}
