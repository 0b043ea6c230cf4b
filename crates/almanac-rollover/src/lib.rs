//! # Almanac Rollover
//!
//! Next-year rollover for public holiday calendars: pick the latest
//! calendar of each country as a template, shift every holiday forward
//! into the target year, and persist the result through a
//! [`CalendarStore`](almanac_core::store::CalendarStore).
//!
//! Two pieces:
//!
//! - [`select_latest_per_country`]: reduce a template set (or the whole
//!   store) to one latest-year calendar per country
//! - [`RolloverWizard`]: the preview/create form logic, including
//!   per-day user overrides and the February 29th guard
//!
//! ## Example
//!
//! ```no_run
//! use almanac_core::prelude::*;
//! use almanac_rollover::RolloverWizard;
//! # fn demo(store: &impl CalendarStore) -> AlmanacResult<()> {
//! let created = RolloverWizard::new(store).create_next_year_holidays()?;
//! println!("created {} calendars", created.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

mod selector;
mod wizard;

pub use selector::select_latest_per_country;
pub use wizard::{OverrideEntry, RolloverWizard};
