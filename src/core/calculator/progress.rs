use crate::core::calculator::shift::Shift;
use crate::utils::time::minutes_between;
use chrono::NaiveTime;

/// Paid minutes elapsed at `now`: time since the shift start, capped at the
/// shift end, with any overlap with the lunch window excluded.
pub fn paid_elapsed_minutes(shift: &Shift, now: NaiveTime) -> i64 {
    if now <= shift.work_start {
        return 0;
    }
    let capped = now.min(shift.work_end);
    let mut elapsed = minutes_between(shift.work_start, capped);

    if let Some((b_start, b_end)) = shift.lunch
        && capped > b_start
    {
        let in_break_until = capped.min(b_end);
        elapsed -= minutes_between(b_start, in_break_until);
    }

    elapsed.max(0)
}

/// Work progress in percent, clamped to [0, 100].
///
/// Progress is measured against paid minutes only, so it holds steady during
/// the lunch break just like the accrued wage does. A degenerate shift
/// (zero or negative paid minutes) reports 0.
pub fn compute_progress(shift: &Shift, now: NaiveTime) -> f64 {
    let paid = shift.paid_minutes();
    if paid <= 0 {
        return 0.0;
    }
    let elapsed = paid_elapsed_minutes(shift, now);
    (elapsed as f64 / paid as f64 * 100.0).clamp(0.0, 100.0)
}
