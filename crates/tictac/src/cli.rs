//! Command-line interface for tictac.

use crate::ViewKind;
use clap::Parser;
use std::path::PathBuf;
use tictac_core::StrategyKind;

/// Tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe against a random or blocking computer player", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Computer strategy (random, blocking)
    #[arg(short, long)]
    pub strategy: Option<StrategyKind>,

    /// Board view (grid, coordinates)
    #[arg(short, long)]
    pub view: Option<ViewKind>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write logs; the terminal belongs to the board
    #[arg(long, default_value = "tictac.log")]
    pub log_file: PathBuf,
}
