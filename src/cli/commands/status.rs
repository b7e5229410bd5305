use crate::cli::parser::Commands;
use crate::config::Settings;
use crate::core::engine::Engine;
use crate::errors::AppResult;
use crate::net::poem::fetch_poem;
use crate::ui::render;
use crate::utils::time::parse_timestamp;
use chrono::NaiveDateTime;

/// Handle the `status` subcommand: one computation tick, rendered once.
pub fn handle(cmd: &Commands, settings: &Settings) -> AppResult<()> {
    if let Commands::Status { at, poem, json } = cmd {
        let now = resolve_now(at)?;
        let result = Engine::compute(settings, now);

        if *json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        render::render_status(&result, now);

        if *poem {
            render::render_poem(&fetch_poem());
        }
    }
    Ok(())
}

fn resolve_now(at: &Option<String>) -> AppResult<NaiveDateTime> {
    match at {
        Some(ts) => parse_timestamp(ts),
        None => Ok(chrono::Local::now().naive_local()),
    }
}
