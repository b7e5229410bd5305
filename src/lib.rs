//! workclock library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod net;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Settings;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, settings: &Settings, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, settings, config_path),
        Commands::Set { .. } => cli::commands::set::handle(&cli.command, settings, config_path),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, settings),
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, settings),
        Commands::Poem => cli::commands::poem::handle(),
        Commands::Days { .. } => cli::commands::days::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Resolve the settings file once: --config override or the platform default
    let config_path: PathBuf = match &cli.config {
        Some(p) => utils::path::expand_tilde(p),
        None => Settings::config_file(),
    };

    // Load the record once; absence or corruption means defaults
    let settings = Settings::load_from(&config_path);

    dispatch(&cli, &settings, &config_path)
}
