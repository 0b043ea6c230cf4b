//! Template selection: latest calendar per country.

use std::collections::BTreeMap;

use almanac_core::error::{AlmanacError, AlmanacResult};
use almanac_core::store::{CalendarFilter, CalendarStore};
use almanac_core::types::{CountryCode, HolidayCalendar};

/// Reduce a template set to the latest calendar of each country.
///
/// If `templates` is empty the source set becomes every calendar in the
/// store. For each country only the calendar with the maximum reference
/// year is kept; when two calendars of the same country share that
/// year, the one with the lowest id wins.
///
/// Pure selection over already-loaded data; the store is only read, and
/// only when no explicit templates were given.
///
/// # Errors
///
/// Returns [`AlmanacError::NoTemplates`] when the source set is empty,
/// i.e. no explicit templates and an empty store.
pub fn select_latest_per_country<S>(
    store: &S,
    templates: &[HolidayCalendar],
) -> AlmanacResult<BTreeMap<CountryCode, HolidayCalendar>>
where
    S: CalendarStore + ?Sized,
{
    let source = if templates.is_empty() {
        store.search(&CalendarFilter::default())?
    } else {
        templates.to_vec()
    };

    if source.is_empty() {
        return Err(AlmanacError::NoTemplates);
    }

    let mut latest: BTreeMap<CountryCode, HolidayCalendar> = BTreeMap::new();
    for candidate in source {
        let replace = match latest.get(&candidate.country) {
            None => true,
            Some(held) => {
                candidate.year > held.year
                    || (candidate.year == held.year && candidate.id < held.id)
            }
        };
        if replace {
            latest.insert(candidate.country.clone(), candidate);
        }
    }

    Ok(latest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::types::{CalendarId, Date, HolidayLine};
    use almanac_ext_mem::MemoryCalendarStore;
    use proptest::prelude::*;

    fn calendar(id: u64, country: &str, year: i32) -> HolidayCalendar {
        HolidayCalendar::new(
            CalendarId::new(id),
            CountryCode::new(country),
            year,
            vec![HolidayLine::new(
                "New Year",
                Date::from_ymd(year, 1, 1).unwrap(),
                false,
            )],
        )
    }

    #[test]
    fn test_one_calendar_per_country() {
        let store = MemoryCalendarStore::new();
        let templates = vec![
            calendar(1, "FR", 2012),
            calendar(2, "FR", 2015),
            calendar(3, "BE", 2014),
        ];

        let selected = select_latest_per_country(&store, &templates).unwrap();

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[&CountryCode::new("FR")].year, 2015);
        assert_eq!(selected[&CountryCode::new("BE")].year, 2014);
    }

    #[test]
    fn test_equal_year_tie_breaks_to_lowest_id() {
        let store = MemoryCalendarStore::new();
        let templates = vec![calendar(9, "FR", 2015), calendar(4, "FR", 2015)];

        let selected = select_latest_per_country(&store, &templates).unwrap();

        assert_eq!(selected[&CountryCode::new("FR")].id, CalendarId::new(4));
    }

    #[test]
    fn test_empty_templates_fall_back_to_store() {
        let store = MemoryCalendarStore::with_calendars(vec![
            calendar(1, "FR", 2020),
            calendar(2, "FR", 2021),
        ]);

        let selected = select_latest_per_country(&store, &[]).unwrap();

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[&CountryCode::new("FR")].year, 2021);
    }

    #[test]
    fn test_empty_everything_is_no_templates() {
        let store = MemoryCalendarStore::new();
        let err = select_latest_per_country(&store, &[]).unwrap_err();
        assert_eq!(err, AlmanacError::NoTemplates);
    }

    proptest! {
        #[test]
        fn prop_selection_is_maximal_per_country(
            entries in prop::collection::vec(
                (0..4usize, 2000..2030i32),
                1..20,
            )
        ) {
            let countries = ["AT", "BE", "FR", "NL"];
            let templates: Vec<_> = entries
                .iter()
                .enumerate()
                .map(|(i, &(c, year))| calendar(i as u64 + 1, countries[c], year))
                .collect();

            let store = MemoryCalendarStore::new();
            let selected = select_latest_per_country(&store, &templates).unwrap();

            let distinct: std::collections::BTreeSet<_> =
                templates.iter().map(|t| t.country.clone()).collect();
            prop_assert_eq!(selected.len(), distinct.len());

            for template in &templates {
                let winner = &selected[&template.country];
                prop_assert!(winner.year >= template.year);
            }
        }
    }
}
