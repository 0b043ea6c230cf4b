//! Error types for the Almanac library.
//!
//! This module defines the error types used throughout Almanac,
//! providing structured error handling with context.
//!
//! The two wizard errors ([`NoTemplates`](AlmanacError::NoTemplates) and
//! [`LeapDayTemplate`](AlmanacError::LeapDayTemplate)) carry fixed,
//! user-facing messages: callers surface them verbatim and must not
//! retry or partially commit.

use thiserror::Error;

/// A specialized Result type for Almanac operations.
pub type AlmanacResult<T> = Result<T, AlmanacError>;

/// The main error type for Almanac operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlmanacError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// No calendar is available to use as a rollover template.
    #[error(
        "No public holiday calendars found to use as a template. \
         Please create the first public holidays manually."
    )]
    NoTemplates,

    /// A template line falls on February 29th.
    ///
    /// Re-dating such a holiday would require resolving conflicts with
    /// adjacent days, which is not supported.
    #[error(
        "The public holidays of {year} include a holiday on 29th of February \
         and cannot be used as a template. Please select a template from \
         another year."
    )]
    LeapDayTemplate {
        /// Reference year of the offending template.
        year: i32,
    },

    /// Storage backend failure (I/O, serialization, constraint).
    #[error("Store error: {reason}")]
    Store {
        /// Description of the failure.
        reason: String,
    },
}

impl AlmanacError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a store error.
    #[must_use]
    pub fn store(reason: impl Into<String>) -> Self {
        Self::Store {
            reason: reason.into(),
        }
    }
}
