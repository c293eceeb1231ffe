//! tictac - play tic-tac-toe against the computer in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tictac::{App, Cli, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Log to a file so output does not corrupt the TUI
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    let config = Config::load(&cli)?;
    info!(?config, "Starting tictac");

    let mut app = App::new(&config);
    tictac::run(&mut app)
}
