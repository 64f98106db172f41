//! Static festival table for the Maharashtra calendar, 2024-2025.
//!
//! The table is the authoritative set of festivals the engine can
//! report: dates outside its coverage simply have no festival.

use chrono::{Datelike, NaiveDate};

/// One festival entry. Dates are unique within the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Festival {
    /// Gregorian year.
    pub year: i32,
    /// Gregorian month, 1-12.
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Marathi festival name.
    pub name: &'static str,
    /// English festival name.
    pub english: &'static str,
    /// Marathi month the festival falls in.
    pub masa: &'static str,
    /// Tithi label, e.g. "शु. प्रतिपदा".
    pub tithi_label: &'static str,
}

impl Festival {
    /// The festival's calendar date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

const fn festival(
    year: i32,
    month: u32,
    day: u32,
    name: &'static str,
    english: &'static str,
    masa: &'static str,
    tithi_label: &'static str,
) -> Festival {
    Festival {
        year,
        month,
        day,
        name,
        english,
        masa,
        tithi_label,
    }
}

/// Maharashtra festivals for 2024-2025, ascending by date.
pub static FESTIVALS: [Festival; 25] = [
    festival(2024, 4, 9, "गुढीपाडवा", "Gudi Padwa", "चैत्र", "शु. प्रतिपदा"),
    festival(2024, 4, 17, "राम नवमी", "Ram Navami", "चैत्र", "शु. नवमी"),
    festival(2024, 4, 23, "हनुमान जयंती", "Hanuman Jayanti", "चैत्र", "शु. पौर्णिमा"),
    festival(2024, 5, 10, "अक्षय्य तृतीया", "Akshaya Tritiya", "वैशाख", "शु. तृतीया"),
    festival(2024, 6, 21, "वट पौर्णिमा", "Vat Purnima", "ज्येष्ठ", "शु. पौर्णिमा"),
    festival(2024, 7, 17, "आषाढी एकादशी", "Ashadhi Ekadashi", "आषाढ", "शु. एकादशी"),
    festival(2024, 7, 21, "गुरु पौर्णिमा", "Guru Purnima", "आषाढ", "शु. पौर्णिमा"),
    festival(2024, 8, 9, "नाग पंचमी", "Nag Panchami", "श्रावण", "शु. पंचमी"),
    festival(2024, 8, 19, "रक्षाबंधन", "Raksha Bandhan", "श्रावण", "शु. पौर्णिमा"),
    festival(2024, 8, 26, "गोकुळाष्टमी", "Gokulashtami", "श्रावण", "कृ. अष्टमी"),
    festival(2024, 9, 7, "गणेश चतुर्थी", "Ganesh Chaturthi", "भाद्रपद", "शु. चतुर्थी"),
    festival(2024, 9, 17, "अनंत चतुर्दशी", "Anant Chaturdashi", "भाद्रपद", "शु. चतुर्दशी"),
    festival(2024, 10, 3, "नवरात्री प्रारंभ", "Navratri Begins", "आश्विन", "शु. प्रतिपदा"),
    festival(2024, 10, 12, "दसरा", "Dussehra", "आश्विन", "शु. दशमी"),
    festival(2024, 10, 17, "कोजागिरी पौर्णिमा", "Kojagiri Purnima", "आश्विन", "शु. पौर्णिमा"),
    festival(2024, 10, 29, "धनत्रयोदशी", "Dhanteras", "कार्तिक", "कृ. त्रयोदशी"),
    festival(2024, 11, 1, "लक्ष्मीपूजन", "Lakshmi Pujan", "कार्तिक", "अमावस्या"),
    festival(2024, 11, 2, "बलिप्रतिपदा", "Bali Pratipada", "कार्तिक", "शु. प्रतिपदा"),
    festival(2024, 11, 3, "भाऊबीज", "Bhau Beej", "कार्तिक", "शु. द्वितीया"),
    festival(2024, 11, 12, "तुलसी विवाह", "Tulsi Vivah", "कार्तिक", "शु. एकादशी"),
    festival(2024, 12, 14, "दत्त जयंती", "Datta Jayanti", "मार्गशीर्ष", "शु. पौर्णिमा"),
    festival(2025, 1, 14, "मकर संक्रांति", "Makar Sankranti", "पौष", "-"),
    festival(2025, 2, 26, "महाशिवरात्री", "Mahashivratri", "माघ", "कृ. चतुर्दशी"),
    festival(2025, 3, 14, "होळी", "Holi", "फाल्गुन", "शु. पौर्णिमा"),
    festival(2025, 3, 18, "रंगपंचमी", "Rang Panchami", "फाल्गुन", "कृ. पंचमी"),
];

/// Exact-date festival lookup.
///
/// At most one match; `None` for dates outside the table's coverage.
pub fn festival_for_date(date: NaiveDate) -> Option<&'static Festival> {
    FESTIVALS
        .iter()
        .find(|f| (f.year, f.month, f.day) == (date.year(), date.month(), date.day()))
}

/// All festivals in a calendar year, ascending by date.
///
/// Empty for years outside the table's coverage.
pub fn festivals_for_year(year: i32) -> Vec<&'static Festival> {
    let mut rows: Vec<&Festival> = FESTIVALS.iter().filter(|f| f.year == year).collect();
    rows.sort_by_key(|f| (f.month, f.day));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn table_dates_are_valid_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for f in &FESTIVALS {
            let d = f.date().expect("table date must be valid");
            assert!(seen.insert(d), "duplicate festival date {d}");
            assert!(!f.name.is_empty());
            assert!(!f.english.is_empty());
        }
    }

    #[test]
    fn gudi_padwa_lookup() {
        let f = festival_for_date(date(2024, 4, 9)).expect("Gudi Padwa");
        assert_eq!(f.name, "गुढीपाडवा");
        assert_eq!(f.english, "Gudi Padwa");
        assert_eq!(f.masa, "चैत्र");
    }

    #[test]
    fn uncovered_date_has_no_festival() {
        assert!(festival_for_date(date(2024, 4, 10)).is_none());
        assert!(festival_for_date(date(2023, 4, 9)).is_none());
        assert!(festival_for_date(date(2026, 4, 9)).is_none());
    }

    #[test]
    fn year_filter_counts() {
        assert_eq!(festivals_for_year(2024).len(), 21);
        assert_eq!(festivals_for_year(2025).len(), 4);
        assert!(festivals_for_year(2023).is_empty());
        assert!(festivals_for_year(2026).is_empty());
    }

    #[test]
    fn year_filter_sorted_ascending() {
        for year in [2024, 2025] {
            let rows = festivals_for_year(year);
            for pair in rows.windows(2) {
                assert!(
                    (pair[0].month, pair[0].day) < (pair[1].month, pair[1].day),
                    "{year}: {} before {}",
                    pair[0].english,
                    pair[1].english
                );
            }
        }
    }

    #[test]
    fn holi_2025() {
        let f = festival_for_date(date(2025, 3, 14)).expect("Holi");
        assert_eq!(f.english, "Holi");
    }
}
