//! Perfect Tic-Tac-Toe - Unified CLI
//!
//! Play against, or query, an exhaustive minimax engine.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use perfect_tictactoe::cli::{Cli, Command};
use perfect_tictactoe::{EngineConfig, Player, Session, parse_board, solve};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    initialize_tracing();

    let cli = Cli::parse();
    let config = EngineConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play => run_play(&config),
        Command::Solve {
            cells,
            player,
            score,
        } => {
            let player = player.map(Player::from).unwrap_or(*config.computer());
            run_solve(&config, &cells, player, score)
        }
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all)]
fn run_play(config: &EngineConfig) -> Result<()> {
    info!(human = %config.human(), "Starting interactive game");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let outcome = Session::new(config).run(stdin.lock(), &mut stdout)?;
    info!(%outcome, "Game loop exited");
    Ok(())
}

/// Print the engine's move for a board given on the command line
#[instrument(skip(config, cells))]
fn run_solve(config: &EngineConfig, cells: &[String], player: Player, score: bool) -> Result<()> {
    let mut board =
        parse_board(cells, *config.empty_marker()).context("Failed to parse board cells")?;
    let mut stdout = std::io::stdout();
    solve(config, &mut board, player, score, &mut stdout)?;
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
