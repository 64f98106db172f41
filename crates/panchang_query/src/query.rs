//! Monthly, annual-festival, and bounded forward-scan queries.

use chrono::NaiveDate;

use panchang_core::{Location, MARATHI_MONTHS, festivals_for_year};

use crate::error::QueryError;
use crate::panchang::{PanchangInfo, panchang_for_date};
use crate::types::{AnnualFestivals, FestivalInfo, MonthlyPanchang};

/// Tithi number shared by both ekadashis of a lunar month.
pub const EKADASHI_TITHI: u8 = 11;

/// Forward-scan safety horizon in days.
pub const SCAN_HORIZON_DAYS: i64 = 365;

/// Panchang records for every day of a Gregorian month, ascending.
///
/// The month name on the wrapper uses the fixed `(month + 8) mod 12`
/// mapping of the public calendar surface.
pub fn monthly_panchang(
    year: i32,
    month: u32,
    location: &Location,
) -> Result<MonthlyPanchang, QueryError> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(QueryError::InvalidMonth { year, month })?;
    let last = last_day_of_month(year, month).ok_or(QueryError::InvalidMonth { year, month })?;

    let mut days = Vec::with_capacity(31);
    let mut current = first;
    while current <= last {
        days.push(panchang_for_date(current, location));
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    Ok(MonthlyPanchang {
        year,
        month,
        marathi_month: MARATHI_MONTHS[(month as usize + 8) % 12],
        days,
    })
}

/// Last day of a Gregorian month: the day before the first of the next.
fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_first.and_then(|d| d.pred_opt())
}

/// All festivals for a year, ascending by date.
///
/// Years outside the table's coverage yield an empty list, not an error.
pub fn annual_festivals(year: i32) -> AnnualFestivals {
    let festivals = festivals_for_year(year)
        .into_iter()
        .filter_map(|f| {
            f.date().map(|date| FestivalInfo {
                date,
                name: f.name,
                english_name: f.english,
                marathi_month: f.masa,
                tithi: f.tithi_label,
            })
        })
        .collect();

    AnnualFestivals { year, festivals }
}

/// Scan forward from `from` (inclusive), collecting records that satisfy
/// `predicate` until `count` matches are found or the safety horizon is
/// exhausted.
///
/// May return fewer than `count` records. The predicate sees one
/// assembled record at a time, with no cross-date state.
pub fn upcoming_matches<F>(
    from: NaiveDate,
    count: usize,
    location: &Location,
    predicate: F,
) -> Vec<PanchangInfo>
where
    F: Fn(&PanchangInfo) -> bool,
{
    let mut matches = Vec::with_capacity(count);
    let mut current = from;

    for _ in 0..=SCAN_HORIZON_DAYS {
        if matches.len() >= count {
            break;
        }
        let record = panchang_for_date(current, location);
        if predicate(&record) {
            matches.push(record);
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    matches
}

/// The next `count` ekadashis on or after `from`.
pub fn upcoming_ekadashis(from: NaiveDate, count: usize, location: &Location) -> Vec<PanchangInfo> {
    upcoming_matches(from, count, location, |p| p.is_ekadashi)
}
