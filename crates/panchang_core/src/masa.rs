//! Marathi month and Shaka year derivation.
//!
//! The month name comes from a fixed Gregorian-month mapping; the true
//! luni-solar month would require new-moon tracking. The mapping values
//! are opaque constants of the scheme, reproduced as-is for output
//! compatibility.

use chrono::{Datelike, NaiveDate};

/// The 12 Marathi luni-solar month names, index 0 = चैत्र.
pub const MARATHI_MONTHS: [&str; 12] = [
    "चैत्र",
    "वैशाख",
    "ज्येष्ठ",
    "आषाढ",
    "श्रावण",
    "भाद्रपद",
    "आश्विन",
    "कार्तिक",
    "मार्गशीर्ष",
    "पौष",
    "माघ",
    "फाल्गुन",
];

/// Shaka era offset from the Gregorian year.
pub const SHAKA_YEAR_OFFSET: i32 = 78;

/// Gregorian month in which the Shaka new year falls.
pub const SHAKA_NEW_YEAR_MONTH: u32 = 4;

/// Index into [`MARATHI_MONTHS`] for a Gregorian month number (1-12).
///
/// Out-of-range input maps to 0, like the rest of the fixed table.
pub const fn marathi_month_index(gregorian_month: u32) -> usize {
    match gregorian_month {
        1 => 10,
        2 => 11,
        3 => 11,
        4 => 0,
        5 => 1,
        6 => 2,
        7 => 3,
        8 => 4,
        9 => 5,
        10 => 6,
        11 => 7,
        12 => 9,
        _ => 0,
    }
}

/// Marathi month name for a date.
pub fn marathi_month_for_date(date: NaiveDate) -> &'static str {
    MARATHI_MONTHS[marathi_month_index(date.month())]
}

/// Shalivahana Shaka year for a date.
///
/// The Gregorian year minus 78, one less before the new-year month
/// (April). Holds for all years, including the boundary months.
pub fn shaka_year_for_date(date: NaiveDate) -> i32 {
    let mut year = date.year() - SHAKA_YEAR_OFFSET;
    if date.month() < SHAKA_NEW_YEAR_MONTH {
        year -= 1;
    }
    year
}
