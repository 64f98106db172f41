//! Yoga derivation: a whole-day fold into the 27-entry yoga cycle.

use chrono::NaiveDate;
use serde::Serialize;

use crate::cycle::{CYCLE_EPOCH, days_since};

/// The 27 yogas, index 0 = विष्कुम्भ.
pub const YOGA_NAMES: [&str; 27] = [
    "विष्कुम्भ",
    "प्रीति",
    "आयुष्मान",
    "सौभाग्य",
    "शोभन",
    "अतिगण्ड",
    "सुकर्मा",
    "धृति",
    "शूल",
    "गण्ड",
    "वृद्धि",
    "ध्रुव",
    "व्याघात",
    "हर्षण",
    "वज्र",
    "सिद्धि",
    "व्यतिपात",
    "वरीयान",
    "परिघ",
    "शिव",
    "सिद्ध",
    "साध्य",
    "शुभ",
    "शुक्ल",
    "ब्रह्म",
    "ऐन्द्र",
    "वैधृति",
];

/// Yoga classification result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaInfo {
    /// Yoga name (Devanagari).
    pub name: &'static str,
}

/// Determine the yoga for a date: the day count since the cycle epoch,
/// folded into the 27-entry table.
pub fn yoga_for_date(date: NaiveDate) -> YogaInfo {
    let days = days_since(CYCLE_EPOCH, date);
    let index = days.rem_euclid(27) as usize;

    YogaInfo {
        name: YOGA_NAMES[index],
    }
}
