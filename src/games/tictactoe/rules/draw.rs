//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the game is drawn: a full board with no winner.
///
/// A full board that also holds a completed line is a win, not a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
