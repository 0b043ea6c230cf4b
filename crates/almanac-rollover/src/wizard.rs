//! The next-year rollover wizard.

use almanac_core::error::{AlmanacError, AlmanacResult};
use almanac_core::store::CalendarStore;
use almanac_core::types::{CalendarId, CalendarSpec, Date, HolidayCalendar};

use crate::selector::select_latest_per_country;

/// One previewed holiday for the target year.
///
/// Produced by [`RolloverWizard::compute_preview`], one entry per
/// template line, for user review before the create step. The user may
/// edit `next_date` or delete entries; a deleted entry means "do not
/// create this day". Transient: consumed once during creation, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideEntry {
    /// Template calendar the line comes from.
    pub template: CalendarId,
    /// Holiday name, carried from the template line.
    pub name: String,
    /// Whether the date shifts year-to-year, carried from the line.
    pub variable: bool,
    /// The line's date in the template year.
    pub last_date: Date,
    /// The date to use in the target year.
    pub next_date: Date,
}

/// Creates next-year public holidays from existing calendars.
///
/// The wizard mirrors a transactional form: set the template list, the
/// target year, and optionally an edited preview, then run
/// [`create_next_year_holidays`](Self::create_next_year_holidays).
///
/// With no explicit templates, the latest calendar of each country in
/// the store is used. The target year defaults to each template's year
/// plus one.
///
/// # Example
///
/// ```no_run
/// use almanac_core::prelude::*;
/// use almanac_rollover::RolloverWizard;
/// # fn demo(store: &impl CalendarStore, templates: Vec<HolidayCalendar>) -> AlmanacResult<()> {
/// let wizard = RolloverWizard::new(store)
///     .templates(templates)
///     .target_year(2022);
/// let preview = wizard.compute_preview()?;
/// // ...user reviews and edits the preview...
/// let created = wizard.overrides(preview).create_next_year_holidays()?;
/// # Ok(())
/// # }
/// ```
pub struct RolloverWizard<'a, S: CalendarStore + ?Sized> {
    store: &'a S,
    templates: Vec<HolidayCalendar>,
    year: Option<i32>,
    overrides: Vec<OverrideEntry>,
}

impl<'a, S: CalendarStore + ?Sized> RolloverWizard<'a, S> {
    /// Create a wizard with no templates, no explicit year, and no
    /// overrides.
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            templates: Vec::new(),
            year: None,
            overrides: Vec::new(),
        }
    }

    /// Set the explicit template calendars.
    ///
    /// Leave empty to use the latest calendar of each country in the
    /// store.
    pub fn templates(mut self, templates: Vec<HolidayCalendar>) -> Self {
        self.templates = templates;
        self
    }

    /// Set the target year for every generated calendar.
    ///
    /// Defaults to each template's reference year plus one.
    pub fn target_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Supply an override list, normally an edited preview.
    ///
    /// An empty list counts as "no overrides supplied": every line is
    /// re-dated by plain year substitution. A non-empty list switches
    /// to match-or-omit semantics per line.
    pub fn overrides(mut self, overrides: Vec<OverrideEntry>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Compute the per-day preview for the current templates and year.
    ///
    /// One entry per line of every explicit template, in template then
    /// line order, re-dated by naive year substitution. No leap-day
    /// policy is applied here: a Feb 29 line previews into a leap
    /// target year even though the create step will reject it. The
    /// substitution itself fails with
    /// [`AlmanacError::InvalidDate`] when the target year has no
    /// Feb 29.
    pub fn compute_preview(&self) -> AlmanacResult<Vec<OverrideEntry>> {
        let mut preview = Vec::new();
        for template in &self.templates {
            let new_year = self.year.unwrap_or(template.year + 1);
            for line in &template.lines {
                preview.push(OverrideEntry {
                    template: template.id,
                    name: line.name.clone(),
                    variable: line.variable,
                    last_date: line.date,
                    next_date: line.date.with_year(new_year)?,
                });
            }
        }
        Ok(preview)
    }

    /// Create next-year calendars from the selected templates.
    ///
    /// Selects the latest calendar per country, builds every new
    /// calendar spec, and only then persists the whole batch: either
    /// all calendars are created or none is.
    ///
    /// # Errors
    ///
    /// - [`AlmanacError::NoTemplates`] when no source calendar exists
    /// - [`AlmanacError::LeapDayTemplate`] when any template line falls
    ///   on February 29th; nothing is persisted
    /// - store failures propagate unchanged
    pub fn create_next_year_holidays(&self) -> AlmanacResult<Vec<CalendarId>> {
        let selected = select_latest_per_country(self.store, &self.templates)?;

        // Build pass. Every template is validated and turned into a
        // spec before anything touches the store.
        let mut specs: Vec<CalendarSpec> = Vec::with_capacity(selected.len());
        for template in selected.values() {
            let new_year = self.year.unwrap_or(template.year + 1);
            let mut spec = template.copy_with_year(new_year);

            for line in &template.lines {
                if line.date.is_leap_day() {
                    return Err(AlmanacError::LeapDayTemplate {
                        year: template.year,
                    });
                }

                let new_date = if self.overrides.is_empty() {
                    line.date.with_year(new_year)?
                } else {
                    // The user worked from a preview: a missing entry
                    // means the day was deleted.
                    match self.overrides.iter().find(|o| o.last_date == line.date) {
                        None => continue,
                        Some(entry) => entry.next_date,
                    }
                };

                spec.lines.push(line.copy_with_date(new_date));
            }

            tracing::debug!(
                country = %spec.country,
                source_year = template.year,
                target_year = new_year,
                lines = spec.lines.len(),
                "prepared next-year calendar"
            );
            specs.push(spec);
        }

        // Persist pass.
        let mut created = Vec::with_capacity(specs.len());
        for spec in &specs {
            created.push(self.store.create(spec)?);
        }

        tracing::info!(calendars = created.len(), "created next-year public holidays");
        Ok(created)
    }
}
