//! Error types for calendar queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the range-query layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryError {
    /// Year/month pair does not name a representable calendar month.
    InvalidMonth {
        /// Requested Gregorian year.
        year: i32,
        /// Requested Gregorian month.
        month: u32,
    },
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth { year, month } => {
                write!(f, "invalid calendar month: {year}-{month:02}")
            }
        }
    }
}

impl Error for QueryError {}
