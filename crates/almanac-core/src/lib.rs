//! # Almanac Core
//!
//! Core types, traits, and abstractions for the Almanac public holiday
//! calendar library.
//!
//! This crate provides the foundational building blocks used throughout
//! Almanac:
//!
//! - **Types**: Domain-specific types like [`Date`], [`CountryCode`],
//!   [`HolidayCalendar`] and its create payload [`CalendarSpec`](types::CalendarSpec)
//! - **Store**: The [`CalendarStore`](store::CalendarStore) trait that persistence
//!   backends implement, with [`CalendarFilter`](store::CalendarFilter) for queries
//! - **Errors**: The [`AlmanacError`] taxonomy shared by every crate
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//! - **Storage as Extension**: backends live in separate crates behind
//!   the store trait
//!
//! ## Example
//!
//! ```rust
//! use almanac_core::prelude::*;
//!
//! let date = Date::from_ymd(2025, 12, 25).unwrap();
//! let line = HolidayLine::new("Christmas", date, false);
//! assert!(!line.date.is_leap_day());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod store;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AlmanacError, AlmanacResult};
    pub use crate::store::{CalendarFilter, CalendarStore};
    pub use crate::types::{
        CalendarId, CalendarSpec, CountryCode, Date, HolidayCalendar, HolidayLine, LineSpec,
    };
}

// Re-export commonly used types at crate root
pub use error::{AlmanacError, AlmanacResult};
pub use types::{CalendarId, CountryCode, Date, HolidayCalendar, HolidayLine};
