use crate::config::{DEFAULT_WORK_END, Settings};
use crate::core::calculator::countdown::weekend_countdown;
use crate::core::calculator::earnings::{compute_earnings, hourly_rate};
use crate::core::calculator::progress::compute_progress;
use crate::core::calculator::shift::Shift;
use crate::models::result::ComputationResult;
use crate::utils::time::parse_time;
use chrono::NaiveDateTime;

pub struct Engine;

impl Engine {
    /// One tick of the work clock: a pure function of the settings record
    /// and a timestamp. Never fails — a record that cannot describe a shift
    /// yields zero progress and earnings, and the countdown falls back to
    /// the default end of shift.
    pub fn compute(settings: &Settings, now: NaiveDateTime) -> ComputationResult {
        match Shift::from_settings(settings) {
            Some(shift) => ComputationResult {
                progress_percent: compute_progress(&shift, now.time()),
                earned_today: compute_earnings(settings, &shift, now.time()),
                hourly_rate: hourly_rate(settings, &shift),
                countdown_text: weekend_countdown(shift.work_end, now),
            },
            None => {
                let shift_end = parse_time(&settings.work_end)
                    .unwrap_or_else(|| parse_time(DEFAULT_WORK_END).unwrap());
                ComputationResult {
                    countdown_text: weekend_countdown(shift_end, now),
                    ..ComputationResult::default()
                }
            }
        }
    }
}
