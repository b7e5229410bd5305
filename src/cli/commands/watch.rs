use crate::cli::parser::Commands;
use crate::config::Settings;
use crate::core::engine::Engine;
use crate::errors::AppResult;
use crate::ui::render;
use std::thread;
use std::time::Duration;

/// Refresh interval between recomputations.
pub const TICK_SECONDS: u64 = 60;

/// Handle the `watch` subcommand: re-render every tick until interrupted
/// (or for `--ticks N` cycles).
///
/// Each tick is a fresh computation from the wall clock and the in-memory
/// settings; the loop itself owns no state, so stopping it at any point
/// loses nothing.
pub fn handle(cmd: &Commands, settings: &Settings) -> AppResult<()> {
    if let Commands::Watch { ticks } = cmd {
        let mut remaining = *ticks;

        loop {
            let now = chrono::Local::now().naive_local();
            render::render_status(&Engine::compute(settings, now), now);

            if let Some(n) = remaining.as_mut() {
                *n = n.saturating_sub(1);
                if *n == 0 {
                    break;
                }
            }

            thread::sleep(Duration::from_secs(TICK_SECONDS));
        }
    }
    Ok(())
}
