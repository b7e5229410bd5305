use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a "YYYY-MM" month selector into (year, month).
pub fn parse_month(p: &str) -> AppResult<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(p.to_string()))?;
    Ok((d.year(), d.month()))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let Some(mut d) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return out;
    };

    while d.month() == month {
        out.push(d);
        d = match d.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    out
}
