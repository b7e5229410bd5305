use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::net::holiday::working_days;
use crate::utils::date;
use chrono::Datelike;

/// Handle the `days` subcommand
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Days { month } = cmd {
        let (year, month) = match month {
            Some(m) => date::parse_month(m)?,
            None => {
                let today = date::today();
                (today.year(), today.month())
            }
        };

        let days = working_days(year, month);
        println!("📅 {:04}-{:02}: {} working days", year, month, days);
    }
    Ok(())
}
