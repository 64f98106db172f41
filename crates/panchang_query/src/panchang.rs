//! Per-date Panchang assembly.

use chrono::NaiveDate;
use serde::Serialize;

use panchang_core::{
    ClockTime, KaranaInfo, Location, NakshatraInfo, Paksha, TimePeriod, TithiInfo, YogaInfo,
    festival_for_date, karana_for_date, marathi_month_for_date, nakshatra_for_date,
    rahu_kaal_for_date, shaka_year_for_date, sun_times, tithi_for_date, vaar_for_date,
    yoga_for_date,
};

/// Full Panchang record for a single date.
///
/// Serializes with the camelCase field names of the public calendar API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanchangInfo {
    /// The Gregorian date the record describes.
    pub date: NaiveDate,
    /// Marathi weekday name.
    pub weekday: &'static str,
    /// English weekday name.
    pub weekday_english: &'static str,
    /// Marathi month name (approximate Gregorian mapping).
    pub marathi_month: &'static str,
    /// Shalivahana Shaka year.
    pub marathi_year: i32,
    /// Tithi (lunar day).
    pub tithi: TithiInfo,
    /// Nakshatra (lunar mansion).
    pub nakshatra: NakshatraInfo,
    /// Yoga.
    pub yoga: YogaInfo,
    /// Karana.
    pub karana: KaranaInfo,
    /// Approximate sunrise.
    pub sunrise: ClockTime,
    /// Approximate sunset.
    pub sunset: ClockTime,
    /// Rahu Kaal window for the weekday.
    pub rahu_kaal: TimePeriod,
    /// True when the tithi number is 11, either paksha.
    pub is_ekadashi: bool,
    /// True when the tithi is 15 of the bright half.
    pub is_purnima: bool,
    /// True when the tithi is 15 of the dark half.
    pub is_amavasya: bool,
    /// Marathi festival name, if the date is in the festival table.
    pub festival: Option<&'static str>,
    /// English festival name, if any.
    pub festival_english: Option<&'static str>,
}

/// Assemble the full Panchang for a date.
///
/// Pure composition of the per-attribute derivations. The special-day
/// flags are read off the tithi result, never recomputed, so they cannot
/// disagree with it.
pub fn panchang_for_date(date: NaiveDate, location: &Location) -> PanchangInfo {
    let vaar = vaar_for_date(date);
    let tithi = tithi_for_date(date);
    let sun = sun_times(date, location);
    let festival = festival_for_date(date);

    PanchangInfo {
        date,
        weekday: vaar.name_marathi(),
        weekday_english: vaar.name_english(),
        marathi_month: marathi_month_for_date(date),
        marathi_year: shaka_year_for_date(date),
        tithi,
        nakshatra: nakshatra_for_date(date),
        yoga: yoga_for_date(date),
        karana: karana_for_date(date),
        sunrise: sun.sunrise,
        sunset: sun.sunset,
        rahu_kaal: rahu_kaal_for_date(date),
        is_ekadashi: tithi.number == 11,
        is_purnima: tithi.number == 15 && tithi.paksha == Paksha::Shukla,
        is_amavasya: tithi.number == 15 && tithi.paksha == Paksha::Krishna,
        festival: festival.map(|f| f.name),
        festival_english: festival.map(|f| f.english),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assemble(y: i32, m: u32, d: u32) -> PanchangInfo {
        panchang_for_date(date(y, m, d), &Location::default())
    }

    #[test]
    fn gudi_padwa_record() {
        let p = assemble(2024, 4, 9);
        assert_eq!(p.weekday, "मंगळवार");
        assert_eq!(p.weekday_english, "Tuesday");
        assert_eq!(p.marathi_month, "चैत्र");
        assert_eq!(p.marathi_year, 1946);
        assert_eq!(p.tithi.number, 1);
        assert_eq!(p.festival, Some("गुढीपाडवा"));
        assert_eq!(p.festival_english, Some("Gudi Padwa"));
    }

    #[test]
    fn flags_follow_tithi() {
        let mut d = date(2024, 1, 1);
        let end = date(2025, 1, 1);
        let location = Location::default();
        while d < end {
            let p = panchang_for_date(d, &location);
            assert_eq!(p.is_ekadashi, p.tithi.number == 11, "{d}");
            assert_eq!(
                p.is_purnima,
                p.tithi.number == 15 && p.tithi.paksha == Paksha::Shukla,
                "{d}"
            );
            assert_eq!(
                p.is_amavasya,
                p.tithi.number == 15 && p.tithi.paksha == Paksha::Krishna,
                "{d}"
            );
            assert!(!(p.is_purnima && p.is_amavasya), "{d}");
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn purnima_record() {
        let p = assemble(2024, 6, 21);
        assert!(p.is_purnima);
        assert!(!p.is_amavasya);
        assert!(!p.is_ekadashi);
        assert_eq!(p.festival_english, Some("Vat Purnima"));
    }

    #[test]
    fn plain_date_has_no_festival() {
        let p = assemble(2024, 4, 10);
        assert_eq!(p.festival, None);
        assert_eq!(p.festival_english, None);
    }

    #[test]
    fn assembly_is_idempotent() {
        let location = Location::default();
        let a = panchang_for_date(date(2024, 7, 17), &location);
        let b = panchang_for_date(date(2024, 7, 17), &location);
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let p = assemble(2024, 7, 1);
        let json = serde_json::to_value(&p).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "date",
            "weekday",
            "weekdayEnglish",
            "marathiMonth",
            "marathiYear",
            "tithi",
            "nakshatra",
            "yoga",
            "karana",
            "sunrise",
            "sunset",
            "rahuKaal",
            "isEkadashi",
            "isPurnima",
            "isAmavasya",
            "festival",
            "festivalEnglish",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(json["date"], "2024-07-01");
        assert_eq!(json["sunrise"], "06:29");
        assert_eq!(json["sunset"], "18:00");
        assert_eq!(json["tithi"]["paksha"], "कृष्ण पक्ष");
    }
}
