use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default shift: 09:00-18:00 with a 12:00-13:00 lunch break.
pub const DEFAULT_WORK_START: &str = "09:00";
pub const DEFAULT_WORK_END: &str = "18:00";
pub const DEFAULT_BREAK_START: &str = "12:00";
pub const DEFAULT_BREAK_END: &str = "13:00";
pub const DEFAULT_WORKING_DAYS: u32 = 22;

/// User-configured salary and shift record.
///
/// Persisted as a whole: `save` always rewrites the full record, there are
/// no partial-field updates. Times are stored as "HH:MM" strings and parsed
/// at the use site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub monthly_salary: f64,
    #[serde(default = "default_working_days")]
    pub working_days_per_month: u32,
    #[serde(default = "default_work_start")]
    pub work_start: String,
    #[serde(default = "default_work_end")]
    pub work_end: String,
    #[serde(default = "default_has_break")]
    pub has_break: bool,
    #[serde(default = "default_break_start")]
    pub break_start: String,
    #[serde(default = "default_break_end")]
    pub break_end: String,
}

fn default_working_days() -> u32 {
    DEFAULT_WORKING_DAYS
}
fn default_work_start() -> String {
    DEFAULT_WORK_START.to_string()
}
fn default_work_end() -> String {
    DEFAULT_WORK_END.to_string()
}
fn default_has_break() -> bool {
    true
}
fn default_break_start() -> String {
    DEFAULT_BREAK_START.to_string()
}
fn default_break_end() -> String {
    DEFAULT_BREAK_END.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monthly_salary: 0.0,
            working_days_per_month: DEFAULT_WORKING_DAYS,
            work_start: default_work_start(),
            work_end: default_work_end(),
            has_break: true,
            break_start: default_break_start(),
            break_end: default_break_end(),
        }
    }
}

impl Settings {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("workclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".workclock")
        }
    }

    /// Return the full path of the settings file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("workclock.conf")
    }

    /// Load the settings record from the default location.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    /// Load the settings record from `path`.
    ///
    /// An absent, unreadable or unparsable file all yield the defaults:
    /// persistence problems are never surfaced by load.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Settings::default(),
        }
    }

    /// Persist the whole record to `path`, creating the parent directory
    /// if needed.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Check the record the way the settings form does: well-formed numbers,
    /// parsable HH:MM times, and an ordered shift/break window.
    ///
    /// The engine itself never calls this: a degenerate record that slipped
    /// into the file by hand-editing still renders as a zero/neutral result.
    pub fn validate(&self) -> AppResult<()> {
        if !self.monthly_salary.is_finite() || self.monthly_salary < 0.0 {
            return Err(AppError::InvalidSettings(format!(
                "monthly salary must be a non-negative number, got {}",
                self.monthly_salary
            )));
        }
        if self.working_days_per_month == 0 {
            return Err(AppError::InvalidSettings(
                "working days per month must be positive".to_string(),
            ));
        }

        let start = parse_time(&self.work_start)
            .ok_or_else(|| AppError::InvalidTime(self.work_start.clone()))?;
        let end = parse_time(&self.work_end)
            .ok_or_else(|| AppError::InvalidTime(self.work_end.clone()))?;
        if end <= start {
            return Err(AppError::InvalidSettings(format!(
                "work end {} must be after work start {}",
                self.work_end, self.work_start
            )));
        }

        if self.has_break {
            let b_start = parse_time(&self.break_start)
                .ok_or_else(|| AppError::InvalidTime(self.break_start.clone()))?;
            let b_end = parse_time(&self.break_end)
                .ok_or_else(|| AppError::InvalidTime(self.break_end.clone()))?;
            if !(start <= b_start && b_start <= b_end && b_end <= end) {
                return Err(AppError::InvalidSettings(format!(
                    "break window {}-{} must fall inside the shift {}-{}",
                    self.break_start, self.break_end, self.work_start, self.work_end
                )));
            }
        }

        Ok(())
    }

    /// Initialize the configuration directory and write a default record.
    pub fn init_all(custom_path: Option<String>) -> AppResult<PathBuf> {
        let path = match custom_path {
            Some(p) => {
                let p = crate::utils::path::expand_tilde(&p);
                if p.is_absolute() {
                    p
                } else {
                    Self::config_dir().join(p)
                }
            }
            None => Self::config_file(),
        };

        let settings = Settings::default();
        settings.save_to(&path)?;

        Ok(path)
    }
}
