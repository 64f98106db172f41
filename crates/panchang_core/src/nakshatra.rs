//! Nakshatra (lunar mansion) derivation.
//!
//! The Moon's path divides into 27 nakshatras. The position is a fold of
//! the day count since the cycle epoch into the sidereal month, scaled to
//! a 27-way table index.

use chrono::NaiveDate;
use serde::Serialize;

use crate::cycle::{CYCLE_EPOCH, SIDEREAL_MONTH, cyclic_position, days_since};

/// The 27 nakshatras in Marathi, index 0 = अश्विनी.
pub const NAKSHATRA_NAMES: [&str; 27] = [
    "अश्विनी",
    "भरणी",
    "कृत्तिका",
    "रोहिणी",
    "मृगशिरा",
    "आर्द्रा",
    "पुनर्वसु",
    "पुष्य",
    "आश्लेषा",
    "मघा",
    "पूर्वा फाल्गुनी",
    "उत्तरा फाल्गुनी",
    "हस्त",
    "चित्रा",
    "स्वाती",
    "विशाखा",
    "अनुराधा",
    "ज्येष्ठा",
    "मूळ",
    "पूर्वाषाढा",
    "उत्तराषाढा",
    "श्रवण",
    "धनिष्ठा",
    "शततारका",
    "पूर्वाभाद्रपदा",
    "उत्तराभाद्रपदा",
    "रेवती",
];

/// Nakshatra classification result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    /// Marathi nakshatra name.
    pub name: &'static str,
    /// 1-based nakshatra number (1 = अश्विनी .. 27 = रेवती).
    pub number: u8,
}

/// Determine the nakshatra for a date.
///
/// Position in [0, 27): `cyclic_position(days, SIDEREAL_MONTH) /
/// SIDEREAL_MONTH * 27`, floored to a table index.
pub fn nakshatra_for_date(date: NaiveDate) -> NakshatraInfo {
    let days = days_since(CYCLE_EPOCH, date);
    let position = cyclic_position(days, SIDEREAL_MONTH) / SIDEREAL_MONTH * 27.0;
    let index = (position.floor() as usize).min(26);

    NakshatraInfo {
        name: NAKSHATRA_NAMES[index],
        number: index as u8 + 1,
    }
}
