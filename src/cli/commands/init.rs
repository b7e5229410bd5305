use crate::config::Settings;
use crate::errors::AppResult;
use crate::ui::messages;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// Creates the configuration directory (if missing) and writes a default
/// settings file, honoring a `--config` override.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Settings::init_all(cli.config.clone())?;

    messages::info("Initializing workclock…");
    messages::success(format!("Settings file: {}", path.display()));
    messages::info("Set your salary and shift with `workclock set` (see --help)");

    Ok(())
}
