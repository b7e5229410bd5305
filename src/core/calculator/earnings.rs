use crate::config::Settings;
use crate::core::calculator::shift::Shift;
use crate::utils::time::minutes_between;
use chrono::NaiveTime;

/// Salary attributed to a single working day.
pub fn daily_salary(settings: &Settings) -> f64 {
    if settings.working_days_per_month == 0 {
        return 0.0;
    }
    settings.monthly_salary / settings.working_days_per_month as f64
}

/// Wage accrued at `now`.
///
/// Zero outside the shift window. Inside the lunch break the amount is
/// frozen at its `break_start` value; after the break the break duration is
/// excluded from paid accrual, so the amount resumes exactly where it froze.
pub fn compute_earnings(settings: &Settings, shift: &Shift, now: NaiveTime) -> f64 {
    let paid = shift.paid_minutes();
    if paid <= 0 {
        return 0.0;
    }
    if now < shift.work_start || now > shift.work_end {
        return 0.0;
    }

    let mut worked = minutes_between(shift.work_start, now);
    if let Some((b_start, b_end)) = shift.lunch {
        if now >= b_start && now <= b_end {
            worked = minutes_between(shift.work_start, b_start);
        } else if now > b_end {
            worked -= minutes_between(b_start, b_end);
        }
    }

    let minute_rate = daily_salary(settings) / paid as f64;
    (minute_rate * worked as f64).max(0.0)
}

/// Derived hourly rate: daily salary over paid hours.
pub fn hourly_rate(settings: &Settings, shift: &Shift) -> f64 {
    let paid = shift.paid_minutes();
    if paid <= 0 {
        return 0.0;
    }
    daily_salary(settings) * 60.0 / paid as f64
}
