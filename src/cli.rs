//! Command-line interface for perfect_tictactoe.

use crate::games::tictactoe::Player;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Perfect Tic-Tac-Toe - play against an exhaustive minimax engine
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an engine config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Side selection on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game, entering moves as `row column`
    Play,

    /// Compute the engine's reply for a board given as nine cells
    Solve {
        /// Cells in row-major order (X, O, or the empty marker), either nine
        /// separate arguments or one nine-character string
        #[arg(required = true, num_args = 1..=9)]
        cells: Vec<String>,

        /// Side to move (defaults to the configured engine side)
        #[arg(short, long, value_enum)]
        player: Option<Side>,

        /// Also print the minimax score of the chosen move
        #[arg(long)]
        score: bool,
    },
}
