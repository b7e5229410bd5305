//! Settings store: defaults, round-trip persistence, validation.

use std::env;
use std::fs;
use std::path::PathBuf;
use workclock::config::Settings;

fn temp_path(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_workclock_settings.conf", name));
    fs::remove_file(&path).ok();
    path
}

#[test]
fn absent_file_loads_defaults() {
    let path = temp_path("absent");
    let settings = Settings::load_from(&path);

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.working_days_per_month, 22);
    assert_eq!(settings.work_start, "09:00");
    assert_eq!(settings.work_end, "18:00");
    assert!(settings.has_break);
    assert_eq!(settings.break_start, "12:00");
    assert_eq!(settings.break_end, "13:00");
}

#[test]
fn corrupted_file_loads_defaults() {
    let path = temp_path("corrupted");
    fs::write(&path, ": this is [ not yaml }").unwrap();

    assert_eq!(Settings::load_from(&path), Settings::default());
}

#[test]
fn save_then_load_round_trips() {
    let path = temp_path("roundtrip");
    let settings = Settings {
        monthly_salary: 31500.5,
        working_days_per_month: 20,
        work_start: "08:30".to_string(),
        work_end: "17:15".to_string(),
        has_break: false,
        ..Settings::default()
    };

    settings.save_to(&path).unwrap();
    assert_eq!(Settings::load_from(&path), settings);
}

#[test]
fn saving_a_just_loaded_record_changes_nothing() {
    let path = temp_path("idempotent");
    Settings::default().save_to(&path).unwrap();

    let first = fs::read_to_string(&path).unwrap();
    Settings::load_from(&path).save_to(&path).unwrap();
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let path = temp_path("partial");
    fs::write(&path, "monthly_salary: 5000.0\n").unwrap();

    let settings = Settings::load_from(&path);
    assert_eq!(settings.monthly_salary, 5000.0);
    assert_eq!(settings.working_days_per_month, 22);
    assert!(settings.has_break);
}

#[test]
fn validate_accepts_the_defaults() {
    assert!(Settings::default().validate().is_ok());
}

#[test]
fn validate_rejects_reversed_shift() {
    let settings = Settings {
        work_start: "18:00".to_string(),
        work_end: "09:00".to_string(),
        ..Settings::default()
    };
    assert!(settings.validate().is_err());
}

#[test]
fn validate_rejects_break_outside_the_shift() {
    let settings = Settings {
        break_start: "08:00".to_string(),
        break_end: "08:30".to_string(),
        ..Settings::default()
    };
    assert!(settings.validate().is_err());
}

#[test]
fn validate_rejects_negative_salary_and_zero_days() {
    let negative = Settings {
        monthly_salary: -1.0,
        ..Settings::default()
    };
    assert!(negative.validate().is_err());

    let zero_days = Settings {
        working_days_per_month: 0,
        ..Settings::default()
    };
    assert!(zero_days.validate().is_err());
}

#[test]
fn validate_ignores_break_times_when_break_disabled() {
    let settings = Settings {
        has_break: false,
        break_start: "23:00".to_string(),
        break_end: "07:00".to_string(),
        ..Settings::default()
    };
    assert!(settings.validate().is_ok());
}
