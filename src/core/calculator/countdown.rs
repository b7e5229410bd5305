use crate::utils::time::minutes_between;
use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Weekday};

pub const WEEKEND_TEXT: &str = "currently on weekend break";
pub const WEEKEND_BEGUN_TEXT: &str = "the weekend has begun";

/// Human-readable countdown to the end of the working week.
///
/// The end of shift is the configured `work_end`, evaluated on Friday.
/// State machine over the day of week:
/// - Saturday/Sunday: a fixed weekend string
/// - Friday at or past the end of shift: the weekend has begun
/// - Friday before the end of shift: hours/minutes until the end of shift
/// - Monday-Thursday: days/hours/minutes until Friday's end of shift
pub fn weekend_countdown(shift_end: NaiveTime, now: NaiveDateTime) -> String {
    match now.weekday() {
        Weekday::Sat | Weekday::Sun => WEEKEND_TEXT.to_string(),
        Weekday::Fri => {
            if now.time() >= shift_end {
                WEEKEND_BEGUN_TEXT.to_string()
            } else {
                let left = minutes_between(now.time(), shift_end);
                format!(
                    "{} hours {} minutes until the end of shift",
                    left / 60,
                    left % 60
                )
            }
        }
        wd => {
            let days_ahead = 4 - wd.num_days_from_monday() as i64;
            let friday_end = (now.date() + Duration::days(days_ahead)).and_time(shift_end);
            let total = (friday_end - now).num_minutes();
            format!(
                "{} days {} hours {} minutes until Friday's end of shift",
                total / (24 * 60),
                (total % (24 * 60)) / 60,
                total % 60
            )
        }
    }
}
