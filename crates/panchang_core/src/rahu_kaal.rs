//! Rahu Kaal (inauspicious window) lookup.
//!
//! Fixed clock-time windows per weekday. Traditionally the window is a
//! sun-relative eighth of the day; this table uses the conventional
//! fixed times and does not depend on the computed sunrise/sunset.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::clock::{ClockTime, TimePeriod};

/// Rahu Kaal window for a weekday.
pub const fn rahu_kaal_for_weekday(weekday: Weekday) -> TimePeriod {
    let ((sh, sm), (eh, em)) = match weekday {
        Weekday::Mon => ((7, 30), (9, 0)),
        Weekday::Tue => ((15, 0), (16, 30)),
        Weekday::Wed => ((12, 0), (13, 30)),
        Weekday::Thu => ((13, 30), (15, 0)),
        Weekday::Fri => ((10, 30), (12, 0)),
        Weekday::Sat => ((9, 0), (10, 30)),
        Weekday::Sun => ((16, 30), (18, 0)),
    };
    TimePeriod::new(ClockTime::new(sh, sm), ClockTime::new(eh, em))
}

/// Rahu Kaal window for a date.
pub fn rahu_kaal_for_date(date: NaiveDate) -> TimePeriod {
    rahu_kaal_for_weekday(date.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monday_window() {
        let period = rahu_kaal_for_weekday(Weekday::Mon);
        assert_eq!(period.start.to_string(), "07:30");
        assert_eq!(period.end.to_string(), "09:00");
    }

    #[test]
    fn sunday_window() {
        let period = rahu_kaal_for_weekday(Weekday::Sun);
        assert_eq!(period.start.to_string(), "16:30");
        assert_eq!(period.end.to_string(), "18:00");
    }

    #[test]
    fn date_lookup_follows_weekday() {
        // 2024-04-09 was a Tuesday
        let period = rahu_kaal_for_date(date(2024, 4, 9));
        assert_eq!(period, rahu_kaal_for_weekday(Weekday::Tue));
        assert_eq!(period.start.to_string(), "15:00");
    }

    #[test]
    fn windows_are_ninety_minutes() {
        for weekday in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            let p = rahu_kaal_for_weekday(weekday);
            let start_min = p.start.hour as u16 * 60 + p.start.minute as u16;
            let end_min = p.end.hour as u16 * 60 + p.end.minute as u16;
            assert_eq!(end_min - start_min, 90, "{weekday}");
        }
    }
}
