//! Library-level tests for the pure computation core.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use workclock::config::Settings;
use workclock::core::calculator::countdown::{
    WEEKEND_BEGUN_TEXT, WEEKEND_TEXT, weekend_countdown,
};
use workclock::core::calculator::earnings::{compute_earnings, daily_salary, hourly_rate};
use workclock::core::calculator::progress::compute_progress;
use workclock::core::calculator::shift::Shift;
use workclock::core::engine::Engine;

fn example_settings() -> Settings {
    Settings {
        monthly_salary: 22000.0,
        working_days_per_month: 22,
        work_start: "09:00".to_string(),
        work_end: "18:00".to_string(),
        has_break: true,
        break_start: "12:00".to_string(),
        break_end: "13:00".to_string(),
    }
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// 2025-01-15 is a Wednesday.
fn wednesday(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn friday(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 17)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn saturday(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 18)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn paid_minutes_subtracts_the_break() {
    let shift = Shift::from_settings(&example_settings()).unwrap();
    assert_eq!(shift.shift_minutes(), 540);
    assert_eq!(shift.break_minutes(), 60);
    assert_eq!(shift.paid_minutes(), 480);
}

#[test]
fn worked_example_earnings() {
    let settings = example_settings();
    let shift = Shift::from_settings(&settings).unwrap();

    assert_close(daily_salary(&settings), 1000.0);
    // 10:00 → 60 worked minutes at 1000/480 per minute
    assert_close(compute_earnings(&settings, &shift, t(10, 0)), 125.0);
    // 12:30 → inside the break, frozen at the 12:00 value
    assert_close(compute_earnings(&settings, &shift, t(12, 30)), 375.0);
    // 15:00 → 300 paid minutes worked
    assert_close(compute_earnings(&settings, &shift, t(15, 0)), 625.0);
    // 18:00 → the full daily salary
    assert_close(compute_earnings(&settings, &shift, t(18, 0)), 1000.0);
}

#[test]
fn earnings_zero_outside_the_shift() {
    let settings = example_settings();
    let shift = Shift::from_settings(&settings).unwrap();

    assert_close(compute_earnings(&settings, &shift, t(8, 59)), 0.0);
    assert_close(compute_earnings(&settings, &shift, t(18, 1)), 0.0);
    assert_close(compute_earnings(&settings, &shift, t(23, 0)), 0.0);
}

#[test]
fn earnings_frozen_across_the_break_window() {
    let settings = example_settings();
    let shift = Shift::from_settings(&settings).unwrap();

    let frozen = compute_earnings(&settings, &shift, t(12, 0));
    for minute in [1, 15, 30, 45, 59, 60] {
        let now = t(12, 0) + chrono::Duration::minutes(minute);
        assert_close(compute_earnings(&settings, &shift, now), frozen);
    }
}

#[test]
fn earnings_resume_continuously_after_the_break() {
    let settings = example_settings();
    let shift = Shift::from_settings(&settings).unwrap();

    let frozen = compute_earnings(&settings, &shift, t(12, 0));
    let at_break_end = compute_earnings(&settings, &shift, t(13, 0));
    assert_close(at_break_end, frozen);

    // One paid minute later the amount has grown by exactly one minute-rate
    let minute_rate = daily_salary(&settings) / 480.0;
    let one_later = compute_earnings(&settings, &shift, t(13, 1));
    assert_close(one_later, frozen + minute_rate);
}

#[test]
fn progress_endpoints_and_monotonicity() {
    let settings = example_settings();
    let shift = Shift::from_settings(&settings).unwrap();

    assert_close(compute_progress(&shift, t(9, 0)), 0.0);
    assert_close(compute_progress(&shift, t(18, 0)), 100.0);
    // clamped outside the window
    assert_close(compute_progress(&shift, t(7, 0)), 0.0);
    assert_close(compute_progress(&shift, t(20, 0)), 100.0);

    let mut last = -1.0;
    for minutes in (0..=540).step_by(5) {
        let now = t(9, 0) + chrono::Duration::minutes(minutes);
        let p = compute_progress(&shift, now);
        assert!(
            p >= last,
            "progress decreased at +{minutes} min: {p} < {last}"
        );
        last = p;
    }
}

#[test]
fn progress_holds_steady_during_the_break() {
    let settings = example_settings();
    let shift = Shift::from_settings(&settings).unwrap();

    let at_break_start = compute_progress(&shift, t(12, 0));
    assert_close(at_break_start, 180.0 / 480.0 * 100.0);
    assert_close(compute_progress(&shift, t(12, 30)), at_break_start);
    assert_close(compute_progress(&shift, t(13, 0)), at_break_start);
}

#[test]
fn hourly_rate_is_daily_salary_over_paid_hours() {
    let settings = example_settings();
    let shift = Shift::from_settings(&settings).unwrap();
    assert_close(hourly_rate(&settings, &shift), 125.0);
}

#[test]
fn degenerate_zero_length_shift_yields_neutral_result() {
    let settings = Settings {
        work_start: "09:00".to_string(),
        work_end: "09:00".to_string(),
        break_start: "09:00".to_string(),
        break_end: "09:00".to_string(),
        ..example_settings()
    };

    assert!(Shift::from_settings(&settings).is_none());

    let result = Engine::compute(&settings, wednesday(10, 0));
    assert_close(result.progress_percent, 0.0);
    assert_close(result.earned_today, 0.0);
    assert_close(result.hourly_rate, 0.0);
    assert!(!result.countdown_text.is_empty());
}

#[test]
fn degenerate_break_spanning_whole_shift_yields_neutral_result() {
    let settings = Settings {
        break_start: "09:00".to_string(),
        break_end: "18:00".to_string(),
        ..example_settings()
    };

    let shift = Shift::from_settings(&settings).unwrap();
    assert_eq!(shift.paid_minutes(), 0);

    let result = Engine::compute(&settings, wednesday(12, 0));
    assert_close(result.progress_percent, 0.0);
    assert_close(result.earned_today, 0.0);
    assert_close(result.hourly_rate, 0.0);
}

#[test]
fn unparsable_times_yield_neutral_result() {
    let settings = Settings {
        work_start: "nine".to_string(),
        ..example_settings()
    };

    let result = Engine::compute(&settings, wednesday(12, 0));
    assert_close(result.progress_percent, 0.0);
    assert_close(result.earned_today, 0.0);
}

#[test]
fn countdown_midweek_counts_down_to_friday_shift_end() {
    assert_eq!(
        weekend_countdown(t(18, 0), wednesday(14, 30)),
        "2 days 3 hours 30 minutes until Friday's end of shift"
    );
    assert_eq!(
        weekend_countdown(t(18, 0), wednesday(15, 0)),
        "2 days 3 hours 0 minutes until Friday's end of shift"
    );
}

#[test]
fn countdown_friday_before_and_after_shift_end() {
    assert_eq!(
        weekend_countdown(t(18, 0), friday(14, 30)),
        "3 hours 30 minutes until the end of shift"
    );
    // exact hour boundary: no 60-minutes artifact
    assert_eq!(
        weekend_countdown(t(18, 0), friday(17, 0)),
        "1 hours 0 minutes until the end of shift"
    );
    assert_eq!(weekend_countdown(t(18, 0), friday(18, 0)), WEEKEND_BEGUN_TEXT);
    assert_eq!(weekend_countdown(t(18, 0), friday(21, 15)), WEEKEND_BEGUN_TEXT);
}

#[test]
fn countdown_tracks_the_configured_shift_end() {
    assert_eq!(
        weekend_countdown(t(17, 30), friday(17, 0)),
        "0 hours 30 minutes until the end of shift"
    );
    assert_eq!(
        weekend_countdown(t(17, 30), wednesday(14, 30)),
        "2 days 3 hours 0 minutes until Friday's end of shift"
    );
}

#[test]
fn countdown_on_the_weekend() {
    assert_eq!(weekend_countdown(t(18, 0), saturday(10, 0)), WEEKEND_TEXT);
    let sunday = NaiveDate::from_ymd_opt(2025, 1, 19)
        .unwrap()
        .and_hms_opt(23, 59, 0)
        .unwrap();
    assert_eq!(weekend_countdown(t(18, 0), sunday), WEEKEND_TEXT);
}

#[test]
fn engine_bundles_all_fields() {
    let result = Engine::compute(&example_settings(), wednesday(15, 0));
    assert_close(result.earned_today, 625.0);
    assert_close(result.hourly_rate, 125.0);
    assert_close(result.progress_percent, 62.5);
    assert_eq!(
        result.countdown_text,
        "2 days 3 hours 0 minutes until Friday's end of shift"
    );
}
