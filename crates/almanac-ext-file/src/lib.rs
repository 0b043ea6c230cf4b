//! # Almanac Ext File
//!
//! JSON-file [`CalendarStore`] backend.
//!
//! The whole store is one JSON document:
//!
//! ```json
//! {
//!   "calendars": [
//!     {
//!       "id": 1,
//!       "country": "FR",
//!       "year": 2025,
//!       "lines": [
//!         {"name": "New Year", "date": "2025-01-01", "variable": false}
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! The document is read eagerly on open (a missing file is an empty
//! store) and rewritten through a sibling temp file plus rename on
//! every create, so a crash mid-write never truncates the store.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use almanac_core::error::{AlmanacError, AlmanacResult};
use almanac_core::store::{CalendarFilter, CalendarStore};
use almanac_core::types::{CalendarId, CalendarSpec, HolidayCalendar, HolidayLine};

/// On-disk document shape.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    calendars: Vec<HolidayCalendar>,
}

#[derive(Debug, Default)]
struct Inner {
    calendars: Vec<HolidayCalendar>,
    next_id: u64,
}

/// JSON-file calendar store.
#[derive(Debug)]
pub struct JsonCalendarStore {
    path: PathBuf,
    inner: RwLock<Inner>,
}

impl JsonCalendarStore {
    /// Open a store at `path`, loading the document if it exists.
    ///
    /// A missing file is treated as an empty store; the file is written
    /// on the first create.
    pub fn open(path: impl AsRef<Path>) -> AlmanacResult<Self> {
        let path = path.as_ref().to_path_buf();

        let document = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| AlmanacError::store(format!("failed to read {}: {e}", path.display())))?;
            serde_json::from_str::<StoreDocument>(&content)
                .map_err(|e| AlmanacError::store(format!("failed to parse {}: {e}", path.display())))?
        } else {
            StoreDocument::default()
        };

        let next_id = document
            .calendars
            .iter()
            .map(|calendar| calendar.id.value())
            .max()
            .unwrap_or(0);

        Ok(Self {
            path,
            inner: RwLock::new(Inner {
                calendars: document.calendars,
                next_id,
            }),
        })
    }

    /// Fetch one calendar by id.
    pub fn get(&self, id: CalendarId) -> Option<HolidayCalendar> {
        self.inner
            .read()
            .calendars
            .iter()
            .find(|calendar| calendar.id == id)
            .cloned()
    }

    fn persist(&self, calendars: &[HolidayCalendar]) -> AlmanacResult<()> {
        let document = StoreDocument {
            calendars: calendars.to_vec(),
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| AlmanacError::store(format!("failed to serialize store: {e}")))?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .map_err(|e| AlmanacError::store(format!("failed to write {}: {e}", tmp.display())))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            AlmanacError::store(format!("failed to replace {}: {e}", self.path.display()))
        })
    }
}

impl CalendarStore for JsonCalendarStore {
    fn search(&self, filter: &CalendarFilter) -> AlmanacResult<Vec<HolidayCalendar>> {
        let inner = self.inner.read();
        Ok(inner
            .calendars
            .iter()
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
            .push(HolidayCalendar::new(id, spec.country.clone(), spec.year, lines));

        // Persist while holding the lock so concurrent creates cannot
        // interleave document rewrites.
        self.persist(&inner.calendars)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::types::{CountryCode, Date, LineSpec};

    fn spec(country: &str, year: i32) -> CalendarSpec {
        CalendarSpec {
            country: CountryCode::new(country),
            year,
            lines: vec![LineSpec {
                name: "New Year".into(),
                date: Date::from_ymd(year, 1, 1).unwrap(),
                variable: false,
            }],
        }
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonCalendarStore::open(dir.path().join("holidays.json")).unwrap();
        assert!(store.search(&CalendarFilter::default()).unwrap().is_empty());
    }

    #[test]
    fn test_create_persists_and_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holidays.json");

        let store = JsonCalendarStore::open(&path).unwrap();
        let id = store.create(&spec("FR", 2025)).unwrap();
        assert_eq!(id, CalendarId::new(1));

        let reopened = JsonCalendarStore::open(&path).unwrap();
        let all = reopened.search(&CalendarFilter::default()).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].country, CountryCode::new("FR"));
        assert_eq!(all[0].lines[0].date, Date::from_ymd(2025, 1, 1).unwrap());
    }

    #[test]
    fn test_ids_continue_after_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holidays.json");

        {
            let store = JsonCalendarStore::open(&path).unwrap();
            store.create(&spec("FR", 2024)).unwrap();
            store.create(&spec("FR", 2025)).unwrap();
        }

        let reopened = JsonCalendarStore::open(&path).unwrap();
        assert_eq!(reopened.create(&spec("BE", 2025)).unwrap(), CalendarId::new(3));
    }

    #[test]
    fn test_filtered_search() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonCalendarStore::open(dir.path().join("holidays.json")).unwrap();
        store.create(&spec("FR", 2024)).unwrap();
        store.create(&spec("BE", 2024)).unwrap();

        let filtered = store.search(&CalendarFilter::by_country("BE")).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, CalendarId::new(2));
    }

    #[test]
    fn test_garbage_document_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holidays.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonCalendarStore::open(&path).unwrap_err();
        assert!(matches!(err, AlmanacError::Store { .. }));
    }
}
