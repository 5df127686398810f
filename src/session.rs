//! Terminal sessions: the interactive game loop and one-shot solving.
//!
//! Sessions own all I/O. They read from any [`BufRead`] and write to any
//! [`Write`], so the same code drives stdin/stdout and in-memory tests.

use crate::config::EngineConfig;
use crate::games::tictactoe::{BestMove, Board, Game, Outcome, Player, render, search_best};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// An interactive game between a human and the engine.
#[derive(Debug)]
pub struct Session<'c> {
    config: &'c EngineConfig,
    game: Game,
}

impl<'c> Session<'c> {
    /// Creates a session with a fresh game.
    #[instrument(skip(config), fields(computer = %config.computer()))]
    pub fn new(config: &'c EngineConfig) -> Self {
        info!("Creating new game session");
        Self {
            config,
            game: Game::new(),
        }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until a terminal outcome or end of input.
    ///
    /// Returns the outcome reached, which is [`Outcome::Ongoing`] if input
    /// ran out first.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<Outcome> {
        let human = self.config.human();

        if self.game.to_move() != human {
            self.engine_turn(output)?;
        }

        let mut buf = Vec::new();
        loop {
            writeln!(output, "{}", self.render())?;
            write!(output, "{}: ", human)?;
            output.flush()?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("Failed to read move from input")?;
            if read == 0 {
                info!("Input closed before the game concluded");
                writeln!(output)?;
                return Ok(self.game.outcome());
            }
            // Invalid UTF-8 becomes replacement characters and fails to parse.
            let line = String::from_utf8_lossy(&buf);

            let Some((row, column)) = parse_coordinates(&line) else {
                debug!(input = line.trim(), "Unparsable move");
                writeln!(output, "illegal move")?;
                continue;
            };
            let outcome = match self.game.play_at(row, column) {
                Ok(outcome) => outcome,
                Err(e) => {
                    debug!(error = %e, input = line.trim(), "Rejected human move");
                    writeln!(output, "illegal move")?;
                    continue;
                }
            };

            if outcome.is_terminal() {
                return self.finish(outcome, output);
            }

            let outcome = self.engine_turn(output)?;
            if outcome.is_terminal() {
                return self.finish(outcome, output);
            }
        }
    }

    fn engine_turn<W: Write>(&mut self, output: &mut W) -> Result<Outcome> {
        let player = self.game.to_move();
        let best = self.game.play_best()?;
        writeln!(output, "{} moves to: {}", player, best.mv())?;
        if *self.config.show_score() {
            writeln!(output, "score: {}", best.score())?;
        }
        Ok(self.game.outcome())
    }

    fn finish<W: Write>(&self, outcome: Outcome, output: &mut W) -> Result<Outcome> {
        writeln!(output, "{}", self.render())?;
        writeln!(output, "{}", outcome)?;
        info!(%outcome, "Session finished");
        Ok(outcome)
    }

    fn render(&self) -> String {
        render(self.game.board(), *self.config.empty_marker())
    }
}

/// Parses `row column` from a line of input.
fn parse_coordinates(line: &str) -> Option<(i64, i64)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let column = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((row, column))
}

/// Computes and prints the engine's move for `player` on `board`.
#[instrument(skip(config, board, output))]
pub fn solve<W: Write>(
    config: &EngineConfig,
    board: &mut Board,
    player: Player,
    show_score: bool,
    output: &mut W,
) -> Result<BestMove> {
    writeln!(output, "{}", render(board, *config.empty_marker()))?;
    let best = search_best(board, player)
        .inspect_err(|e| warn!(error = %e, "Board cannot be solved"))?;
    writeln!(output, "{}: {}", player, best.mv())?;
    if show_score || *config.show_score() {
        writeln!(output, "score: {}", best.score())?;
    }
    Ok(best)
}
