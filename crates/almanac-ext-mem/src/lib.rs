//! # Almanac Ext Mem
//!
//! In-memory [`CalendarStore`] backend.
//!
//! The default store for tests and for callers that manage persistence
//! themselves. Calendars live in an id-ordered map behind a
//! `parking_lot::RwLock`; ids are assigned sequentially from 1.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::collections::BTreeMap;

use parking_lot::RwLock;

use almanac_core::error::AlmanacResult;
use almanac_core::store::{CalendarFilter, CalendarStore};
use almanac_core::types::{CalendarId, CalendarSpec, HolidayCalendar, HolidayLine};

#[derive(Debug, Default)]
struct Inner {
    calendars: BTreeMap<CalendarId, HolidayCalendar>,
    next_id: u64,
}

/// In-memory calendar store.
///
/// # Example
///
/// ```
/// use almanac_core::prelude::*;
/// use almanac_ext_mem::MemoryCalendarStore;
///
/// let store = MemoryCalendarStore::new();
/// let spec = CalendarSpec {
///     country: CountryCode::new("FR"),
///     year: 2025,
///     lines: vec![],
/// };
/// let id = store.create(&spec).unwrap();
/// assert_eq!(id, CalendarId::new(1));
/// ```
#[derive(Debug, Default)]
pub struct MemoryCalendarStore {
    inner: RwLock<Inner>,
}

impl MemoryCalendarStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing calendars.
    ///
    /// Seed ids are kept; newly created calendars get ids above the
    /// highest seeded one.
    pub fn with_calendars(calendars: impl IntoIterator<Item = HolidayCalendar>) -> Self {
        let mut inner = Inner::default();
        for calendar in calendars {
            inner.next_id = inner.next_id.max(calendar.id.value());
            inner.calendars.insert(calendar.id, calendar);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Fetch one calendar by id.
    pub fn get(&self, id: CalendarId) -> Option<HolidayCalendar> {
        self.inner.read().calendars.get(&id).cloned()
    }

    /// Number of stored calendars.
    pub fn len(&self) -> usize {
        self.inner.read().calendars.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().calendars.is_empty()
    }
}

impl CalendarStore for MemoryCalendarStore {
    fn search(&self, filter: &CalendarFilter) -> AlmanacResult<Vec<HolidayCalendar>> {
        let inner = self.inner.read();
        Ok(inner
            .calendars
            .values()
            .filter(|calendar| filter.matches(calendar))
            .cloned()
            .collect())
    }

    fn create(&self, spec: &CalendarSpec) -> AlmanacResult<CalendarId> {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let id = CalendarId::new(inner.next_id);

        let lines = spec
            .lines
            .iter()
            .map(|line| HolidayLine::new(line.name.clone(), line.date, line.variable))
            .collect();

        inner
            .calendars
            .insert(id, HolidayCalendar::new(id, spec.country.clone(), spec.year, lines));
        Ok(id)
    }
}
