//! Morpion - game entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use morpion::cli::{Cli, Command};
use morpion::{Controller, MorpionConfig};
use morpion_rules::Session;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Command::Gui);

    match &command {
        Command::Gui => initialize_tracing(),
        Command::Tui { log_file } => initialize_file_tracing(log_file)?,
    }

    let config = load_config(&cli)?;
    let session = Session::new(*config.first_player());
    let controller = Controller::new(session, config.banner_duration());

    match command {
        Command::Gui => morpion::gui::run_gui(controller, config),
        Command::Tui { .. } => morpion::tui::run_tui(controller, config),
    }
}

#[instrument(skip(cli), fields(path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<MorpionConfig> {
    let mut config = MorpionConfig::load_or_default(&cli.config)
        .with_context(|| format!("Invalid configuration in {}", cli.config.display()))?;

    if let Some(first) = cli.first {
        info!(?first, "Overriding first player");
        config = config.with_first_player(first.into());
    }

    Ok(config)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,morpion=debug".into())
}

fn initialize_tracing() {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();
    info!("Tracing initialized");
}

/// Logs to a file so output does not corrupt the terminal frontend.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    info!(path = %path.display(), "Tracing initialized");
    Ok(())
}
