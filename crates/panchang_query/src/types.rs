//! Serialized wrapper types for query results.

use chrono::NaiveDate;
use serde::Serialize;

use crate::panchang::PanchangInfo;

/// One Gregorian month of Panchang records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPanchang {
    /// Gregorian year.
    pub year: i32,
    /// Gregorian month, 1-12.
    pub month: u32,
    /// Marathi month name shown for the whole Gregorian month
    /// (approximate mapping).
    pub marathi_month: &'static str,
    /// One record per day, ascending.
    pub days: Vec<PanchangInfo>,
}

/// A festival with its resolved calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalInfo {
    /// Festival date.
    pub date: NaiveDate,
    /// Marathi festival name.
    pub name: &'static str,
    /// English festival name.
    pub english_name: &'static str,
    /// Marathi month the festival falls in.
    pub marathi_month: &'static str,
    /// Tithi label, e.g. "शु. एकादशी".
    pub tithi: &'static str,
}

/// All festivals known for one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualFestivals {
    /// The queried year.
    pub year: i32,
    /// Festivals in ascending date order; empty outside table coverage.
    pub festivals: Vec<FestivalInfo>,
}
