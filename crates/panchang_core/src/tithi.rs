//! Tithi (lunar day) derivation.
//!
//! The synodic month divides into 30 tithis, grouped into two 15-tithi
//! pakshas. The position is a closed-form fold of the day count since a
//! reference new moon; no ephemeris is consulted, and the fixed period
//! drifts slowly against the real moon over long horizons.

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::cycle::{SYNODIC_MONTH, TITHI_EPOCH, cyclic_position, days_since};

/// The two halves of the lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Bright (waxing) half.
    Shukla,
    /// Dark (waning) half.
    Krishna,
}

impl Paksha {
    /// Marathi name of the paksha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "शुक्ल पक्ष",
            Self::Krishna => "कृष्ण पक्ष",
        }
    }
}

impl Display for Paksha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Paksha {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Generic tithi names, index 0 = प्रतिपदा.
///
/// The 15th entry is a placeholder: tithi 15 is named [`PURNIMA`] in the
/// bright half and [`AMAVASYA`] in the dark half.
pub const TITHI_NAMES: [&str; 15] = [
    "प्रतिपदा",
    "द्वितीया",
    "तृतीया",
    "चतुर्थी",
    "पंचमी",
    "षष्ठी",
    "सप्तमी",
    "अष्टमी",
    "नवमी",
    "दशमी",
    "एकादशी",
    "द्वादशी",
    "त्रयोदशी",
    "चतुर्दशी",
    "पौर्णिमा/अमावस्या",
];

/// Full moon: tithi 15 of the bright half.
pub const PURNIMA: &str = "पौर्णिमा";

/// New moon: tithi 15 of the dark half.
pub const AMAVASYA: &str = "अमावस्या";

/// Tithi classification result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiInfo {
    /// Marathi tithi name.
    pub name: &'static str,
    /// Paksha (Shukla or Krishna).
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub number: u8,
}

/// Name of a tithi given its number (1-15) and paksha.
///
/// Tithi 15 is पौर्णिमा in the bright half and अमावस्या in the dark half;
/// the other numbers share names across the two pakshas.
pub fn tithi_name(number: u8, paksha: Paksha) -> &'static str {
    match (number, paksha) {
        (15, Paksha::Shukla) => PURNIMA,
        (15, Paksha::Krishna) => AMAVASYA,
        _ => TITHI_NAMES[(number.clamp(1, 14) - 1) as usize],
    }
}

/// Determine the tithi for a date.
///
/// The day count since [`TITHI_EPOCH`] is folded into the synodic month
/// and scaled into a lunar-day position in [0, 30); the first 15
/// positions are the bright half.
pub fn tithi_for_date(date: NaiveDate) -> TithiInfo {
    let days = days_since(TITHI_EPOCH, date);
    let lunar_day = cyclic_position(days, SYNODIC_MONTH) / SYNODIC_MONTH * 30.0;

    let number = (lunar_day % 15.0).floor() as u8 + 1;
    let paksha = if lunar_day < 15.0 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };

    TithiInfo {
        name: tithi_name(number, paksha),
        paksha,
        number,
    }
}
