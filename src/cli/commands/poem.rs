use crate::errors::AppResult;
use crate::net::poem::fetch_poem;
use crate::ui::render;

/// Handle the `poem` subcommand
pub fn handle() -> AppResult<()> {
    render::render_poem(&fetch_poem());
    Ok(())
}
