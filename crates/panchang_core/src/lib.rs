//! Pure Panchang classification for the Maharashtra (Shalivahana Shaka)
//! calendar convention.
//!
//! This crate provides:
//! - Day-count and cyclic-position primitives against fixed reference epochs
//! - Tithi, nakshatra, yoga, karana, vaar, and masa derivation
//! - Closed-form sunrise/sunset and the fixed Rahu Kaal table
//! - The static 2024-2025 festival table
//!
//! All derivations are pure, total functions of the target date and the
//! static tables. The arithmetic is a deliberate closed-form approximation
//! (fixed synodic/sidereal periods, no ephemeris); its constants are kept
//! stable for output compatibility.

pub mod clock;
pub mod cycle;
pub mod festival;
pub mod karana;
pub mod masa;
pub mod nakshatra;
pub mod rahu_kaal;
pub mod riseset;
pub mod tithi;
pub mod vaar;
pub mod yoga;

pub use clock::{ClockTime, TimePeriod};
pub use cycle::{
    CYCLE_EPOCH, SIDEREAL_MONTH, SYNODIC_MONTH, TITHI_EPOCH, cyclic_position, days_since,
};
pub use festival::{FESTIVALS, Festival, festival_for_date, festivals_for_year};
pub use karana::{KARANA_NAMES, KaranaInfo, karana_for_date};
pub use masa::{
    MARATHI_MONTHS, SHAKA_NEW_YEAR_MONTH, SHAKA_YEAR_OFFSET, marathi_month_for_date,
    marathi_month_index, shaka_year_for_date,
};
pub use nakshatra::{NAKSHATRA_NAMES, NakshatraInfo, nakshatra_for_date};
pub use rahu_kaal::{rahu_kaal_for_date, rahu_kaal_for_weekday};
pub use riseset::{Location, SunTimes, sun_times};
pub use tithi::{AMAVASYA, PURNIMA, Paksha, TITHI_NAMES, TithiInfo, tithi_for_date, tithi_name};
pub use vaar::{ALL_VAARS, Vaar, vaar_for_date};
pub use yoga::{YOGA_NAMES, YogaInfo, yoga_for_date};
