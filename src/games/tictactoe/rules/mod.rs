//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search engine can call them at every node.

pub mod draw;
pub mod legality;
pub mod win;

pub use draw::{is_draw, is_full};
pub use legality::{ensure_searchable, is_balanced, is_legal, validate};
pub use win::{check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies the board.
///
/// A completed line always takes precedence over a full board, so a board
/// that is both won and full reports the win.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
