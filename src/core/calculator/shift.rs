use crate::config::Settings;
use crate::utils::time::{minutes_between, parse_time};
use chrono::NaiveTime;

/// The configured shift resolved into wall-clock times.
///
/// The lunch window, if any, is clamped into the shift so that a hand-edited
/// record with a break leaking outside the shift still yields sane minute
/// counts. A break covering the whole shift is allowed and simply leaves
/// zero paid minutes.
#[derive(Debug, Clone, Copy)]
pub struct Shift {
    pub work_start: NaiveTime,
    pub work_end: NaiveTime,
    pub lunch: Option<(NaiveTime, NaiveTime)>,
}

impl Shift {
    /// Resolve `settings` into a shift, or None when the record cannot
    /// describe one (unparsable times, or end not after start).
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        let work_start = parse_time(&settings.work_start)?;
        let work_end = parse_time(&settings.work_end)?;
        if work_end <= work_start {
            return None;
        }

        let lunch = if settings.has_break {
            let b_start = parse_time(&settings.break_start)?;
            let b_end = parse_time(&settings.break_end)?;
            let b_start = b_start.clamp(work_start, work_end);
            let b_end = b_end.clamp(b_start, work_end);
            Some((b_start, b_end))
        } else {
            None
        };

        Some(Self {
            work_start,
            work_end,
            lunch,
        })
    }

    pub fn shift_minutes(&self) -> i64 {
        minutes_between(self.work_start, self.work_end)
    }

    pub fn break_minutes(&self) -> i64 {
        match self.lunch {
            Some((start, end)) => minutes_between(start, end),
            None => 0,
        }
    }

    /// Paid work minutes: shift duration minus the lunch break.
    /// The denominator for both progress and the per-minute wage.
    pub fn paid_minutes(&self) -> i64 {
        self.shift_minutes() - self.break_minutes()
    }
}
