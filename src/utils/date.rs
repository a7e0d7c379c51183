use crate::errors::{AppError, AppResult};
use crate::models::today::Today;
use chrono::{Datelike, NaiveDate};

/// Read the local wall clock once.
pub fn today() -> Today {
    from_date(chrono::Local::now().date_naive())
}

pub fn from_date(d: NaiveDate) -> Today {
    Today::new(d.month(), d.day())
}

/// Parse a `--today` override.
///
/// Accepted forms: `YYYY-MM-DD` (year is dropped) or `M/D`, as printed in the
/// attendance book date column.
pub fn parse_today(s: &str) -> AppResult<Today> {
    let s = s.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(from_date(d));
    }

    if let Some((m, d)) = s.split_once('/') {
        let month: u32 = m.parse().map_err(|_| AppError::InvalidDate(s.to_string()))?;
        let day: u32 = d.parse().map_err(|_| AppError::InvalidDate(s.to_string()))?;

        // any leap year accepts every valid month/day pair
        if NaiveDate::from_ymd_opt(2024, month, day).is_some() {
            return Ok(Today::new(month, day));
        }
    }

    Err(AppError::InvalidDate(s.to_string()))
}
