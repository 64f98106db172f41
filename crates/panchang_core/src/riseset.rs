//! Sunrise/sunset approximation.
//!
//! A sinusoidal model over day-of-year with a fixed ±30 minute amplitude
//! around 06:00 / 18:30 local time. The model is location-insensitive:
//! [`Location`] is accepted for interface compatibility but does not
//! enter the formula, so the times are representative of the default
//! Maharashtra region only.

use std::f64::consts::TAU;

use chrono::{Datelike, NaiveDate};

use crate::clock::ClockTime;

/// Observer location in decimal degrees.
///
/// Defaults to Mumbai (19.0760 N, 72.8777 E). Not consulted by the
/// sun-time formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in decimal degrees, east positive.
    pub longitude_deg: f64,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            latitude_deg: 19.0760,
            longitude_deg: 72.8777,
        }
    }
}

/// Sunrise and sunset pair for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    /// Approximate sunrise.
    pub sunrise: ClockTime,
    /// Approximate sunset.
    pub sunset: ClockTime,
}

/// Day-of-year at which the seasonal sine crosses zero (near the March
/// equinox).
const EQUINOX_DAY_OFFSET: f64 = 80.0;

/// Approximate sunrise/sunset for a date.
///
/// `sunrise = 6 + 0.5 * sin(tau * (doy - 80) / 365)` hours and
/// `sunset = 18.5 - 0.5 * sin(tau * (doy - 80) / 365)` hours, truncated
/// to whole minutes.
pub fn sun_times(date: NaiveDate, _location: &Location) -> SunTimes {
    let day_of_year = date.ordinal() as f64;
    let seasonal = 0.5 * (TAU * (day_of_year - EQUINOX_DAY_OFFSET) / 365.0).sin();

    SunTimes {
        sunrise: clock_from_hours(6.0 + seasonal),
        sunset: clock_from_hours(18.5 - seasonal),
    }
}

/// Truncate fractional hours to an hour/minute pair.
fn clock_from_hours(hours: f64) -> ClockTime {
    ClockTime::new(hours as u8, (hours.fract() * 60.0) as u8)
}
