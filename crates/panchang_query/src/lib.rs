//! Assembled Panchang records and calendar range queries.
//!
//! Builds full per-date [`PanchangInfo`] records from the derivations in
//! `panchang_core`, and provides the monthly, annual-festival, and
//! bounded forward-scan queries the calendar surface exposes.

pub mod error;
pub mod panchang;
pub mod query;
pub mod types;

pub use error::QueryError;
pub use panchang::{PanchangInfo, panchang_for_date};
pub use query::{
    EKADASHI_TITHI, SCAN_HORIZON_DAYS, annual_festivals, monthly_panchang, upcoming_ekadashis,
    upcoming_matches,
};
pub use types::{AnnualFestivals, FestivalInfo, MonthlyPanchang};
