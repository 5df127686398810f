//! Move legality and board consistency checks.
//!
//! These checks read the board and never mutate it.

use super::super::{Board, Move, MoveError, Player};
use tracing::instrument;

/// Checks whether `(row, column)` is a legal move on the board.
///
/// True iff both coordinates are in `[0, 3)` and the cell is empty.
/// Out-of-range input yields `false` without touching the board.
#[instrument(level = "trace", skip(board))]
pub fn is_legal(board: &Board, row: i64, column: i64) -> bool {
    validate(board, row, column).is_ok()
}

/// Validates `(row, column)` as a move on the board.
///
/// # Errors
///
/// - [`MoveError::OutOfBounds`] if a coordinate is off the grid.
/// - [`MoveError::CellOccupied`] if the cell already holds a mark.
#[instrument(level = "trace", skip(board))]
pub fn validate(board: &Board, row: i64, column: i64) -> Result<Move, MoveError> {
    let mv = Move::try_new(row, column)?;
    if board.is_empty(mv.row(), mv.column()) {
        Ok(mv)
    } else {
        Err(MoveError::CellOccupied(mv))
    }
}

/// Checks that the X and O mark counts differ by at most one.
#[instrument(level = "trace", skip(board))]
pub fn is_balanced(board: &Board) -> bool {
    board
        .mark_count(Player::X)
        .abs_diff(board.mark_count(Player::O))
        <= 1
}

/// Verifies the search preconditions: a balanced board with an empty cell.
///
/// # Errors
///
/// - [`MoveError::UnbalancedBoard`] if mark counts differ by more than one.
/// - [`MoveError::NoLegalMoves`] if the board is full.
pub fn ensure_searchable(board: &Board) -> Result<(), MoveError> {
    if !is_balanced(board) {
        return Err(MoveError::UnbalancedBoard {
            x: board.mark_count(Player::X),
            o: board.mark_count(Player::O),
        });
    }
    if board.is_full() {
        return Err(MoveError::NoLegalMoves);
    }
    Ok(())
}
