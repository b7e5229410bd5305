use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::date::all_days_of_month;
use chrono::{Datelike, Weekday};
use serde::Deserialize;
use std::collections::HashMap;

pub const HOLIDAY_URL: &str = "https://timor.tech/api/holiday/year";

/// Fallback when the calendar cannot be fetched.
pub const DEFAULT_WORKING_DAYS: u32 = 22;

#[derive(Debug, Deserialize)]
struct HolidayResponse {
    code: i64,
    #[serde(rename = "type")]
    kind: Option<String>,
    holiday: Option<HashMap<String, DayFlag>>,
}

#[derive(Debug, Deserialize)]
struct DayFlag {
    holiday: bool,
}

/// Holiday-aware working-days count for a month.
///
/// Fetches the public holiday calendar for `year`-`month` and counts
/// weekdays not flagged as holidays, plus weekend days flagged as
/// compensatory workdays. Any failure yields the constant default.
/// Idempotent per (year, month).
pub fn working_days(year: i32, month: u32) -> u32 {
    match try_fetch(year, month) {
        Ok(flags) => count_working_days(year, month, &flags),
        Err(e) => {
            messages::warning(format!(
                "holiday calendar fetch failed ({}), assuming {} working days",
                e, DEFAULT_WORKING_DAYS
            ));
            DEFAULT_WORKING_DAYS
        }
    }
}

fn try_fetch(year: i32, month: u32) -> AppResult<HashMap<String, bool>> {
    let url = format!("{}/{}-{:02}", HOLIDAY_URL, year, month);
    let body = super::http_client()?.get(url).send()?.text()?;
    parse_holiday_flags(&body)
}

/// Parse the calendar payload: `{code: 0, type: "success", holiday: {"YYYY-MM-DD": {holiday: bool}}}`.
/// Returns date → holiday flag; `false` marks a compensatory workday.
pub fn parse_holiday_flags(body: &str) -> AppResult<HashMap<String, bool>> {
    let resp: HolidayResponse = serde_json::from_str(body)?;
    if resp.code != 0 || resp.kind.as_deref() != Some("success") {
        return Err(AppError::UnexpectedResponse(format!(
            "holiday endpoint returned code {}",
            resp.code
        )));
    }
    Ok(resp
        .holiday
        .unwrap_or_default()
        .into_iter()
        .map(|(date, flag)| (date, flag.holiday))
        .collect())
}

/// Count the month's working days against a date → holiday-flag map.
pub fn count_working_days(year: i32, month: u32, flags: &HashMap<String, bool>) -> u32 {
    let mut count = 0;
    for day in all_days_of_month(year, month) {
        let key = day.format("%Y-%m-%d").to_string();
        let is_weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);

        match (is_weekend, flags.get(&key)) {
            // Weekend flagged holiday:false → compensatory workday
            (true, Some(false)) => count += 1,
            (true, _) => {}
            // Weekday flagged holiday:true → public holiday
            (false, Some(true)) => {}
            (false, _) => count += 1,
        }
    }
    count
}
