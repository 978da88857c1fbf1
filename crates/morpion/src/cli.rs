//! Command-line interface for morpion.

use clap::{Parser, Subcommand, ValueEnum};
use morpion_rules::Player;
use std::path::PathBuf;

/// Morpion - two-player tic-tac-toe on one screen
#[derive(Parser, Debug)]
#[command(name = "morpion")]
#[command(about = "Two-player same-screen tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults are used if it is missing)
    #[arg(short, long, default_value = "morpion.toml", global = true)]
    pub config: PathBuf,

    /// Who opens the first round (overrides the configuration file)
    #[arg(long, value_enum, global = true)]
    pub first: Option<FirstPlayer>,

    /// Frontend to run (defaults to the window)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available frontends
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in a window with the mouse
    Gui,

    /// Play in the terminal with the mouse or keyboard
    Tui {
        /// File receiving log output while the terminal is in use
        #[arg(long, default_value = "morpion_tui.log")]
        log_file: PathBuf,
    },
}

/// Opening player as typed on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstPlayer {
    /// Player 1, circles
    O,
    /// Player 2, crosses
    X,
}

impl From<FirstPlayer> for Player {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::O => Player::O,
            FirstPlayer::X => Player::X,
        }
    }
}
