use crate::cli::parser::Commands;
use crate::config::Settings;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::time::parse_required_time;
use std::path::Path;

/// Handle the `set` subcommand: the settings form boundary.
///
/// All validation happens here. A rejected update leaves the last-known-good
/// record on disk untouched; an accepted one re-persists the whole record.
pub fn handle(cmd: &Commands, settings: &Settings, path: &Path) -> AppResult<()> {
    if let Commands::Set {
        salary,
        days,
        start,
        end,
        break_start,
        break_end,
        no_break,
    } = cmd
    {
        if salary.is_none()
            && days.is_none()
            && start.is_none()
            && end.is_none()
            && break_start.is_none()
            && break_end.is_none()
            && !no_break
        {
            messages::warning(
                "nothing to set (use --salary/--days/--start/--end/--break-start/--break-end/--no-break)",
            );
            return Ok(());
        }

        let mut updated = settings.clone();
        match apply(&mut updated, salary, days, start, end, break_start, break_end, *no_break) {
            Ok(()) => {}
            Err(e) => {
                messages::error(format!("{}; settings unchanged", e));
                return Ok(());
            }
        }

        updated.save_to(path)?;
        messages::success(format!("Settings saved to {}", path.display()));
        print_record(&updated);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn apply(
    updated: &mut Settings,
    salary: &Option<f64>,
    days: &Option<u32>,
    start: &Option<String>,
    end: &Option<String>,
    break_start: &Option<String>,
    break_end: &Option<String>,
    no_break: bool,
) -> AppResult<()> {
    if let Some(s) = salary {
        if !s.is_finite() || *s < 0.0 {
            return Err(AppError::InvalidNumber(format!(
                "salary must be non-negative, got {}",
                s
            )));
        }
        updated.monthly_salary = *s;
    }

    if let Some(d) = days {
        if *d == 0 {
            return Err(AppError::InvalidNumber(
                "working days must be positive".to_string(),
            ));
        }
        updated.working_days_per_month = *d;
    }

    if let Some(t) = start {
        parse_required_time(t)?;
        updated.work_start = t.clone();
    }
    if let Some(t) = end {
        parse_required_time(t)?;
        updated.work_end = t.clone();
    }

    if no_break {
        updated.has_break = false;
    }
    if let Some(t) = break_start {
        parse_required_time(t)?;
        updated.break_start = t.clone();
        updated.has_break = true;
    }
    if let Some(t) = break_end {
        parse_required_time(t)?;
        updated.break_end = t.clone();
        updated.has_break = true;
    }

    // Whole-record check: window ordering across old and new fields together.
    updated.validate()
}

fn print_record(s: &Settings) {
    println!();
    println!(
        "  Salary {} over {} working days | Shift {} - {} | Break {}",
        s.monthly_salary,
        s.working_days_per_month,
        s.work_start,
        s.work_end,
        if s.has_break {
            format!("{} - {}", s.break_start, s.break_end)
        } else {
            "none".to_string()
        }
    );
}
