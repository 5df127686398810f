//! Move and error types for tic-tac-toe.
//!
//! A [`Move`] is always in bounds: the only way to build one from untrusted
//! coordinates is [`Move::try_new`], which rejects anything outside the grid.

use super::types::{Outcome, SIZE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell coordinate, `(row, column)`, each in `[0, 3)`.
///
/// Serialized as a `[row, column]` pair; deserialization applies the same
/// bounds check as [`Move::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[i64; 2]", into = "[i64; 2]")]
pub struct Move {
    row: usize,
    column: usize,
}

impl Move {
    /// All nine cells in row-major order.
    pub const ALL: [Move; SIZE * SIZE] = {
        let mut all = [Move { row: 0, column: 0 }; SIZE * SIZE];
        let mut i = 0;
        while i < SIZE * SIZE {
            all[i] = Move {
                row: i / SIZE,
                column: i % SIZE,
            };
            i += 1;
        }
        all
    };

    /// Creates a move from raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if either coordinate is outside
    /// `[0, 3)`. Coordinates are never clamped or wrapped.
    #[instrument]
    pub fn try_new(row: i64, column: i64) -> Result<Self, MoveError> {
        let in_range = |v: i64| (0..SIZE as i64).contains(&v);
        if in_range(row) && in_range(column) {
            Ok(Self {
                row: row as usize,
                column: column as usize,
            })
        } else {
            Err(MoveError::OutOfBounds { row, column })
        }
    }

    /// Creates a move from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the row-major index (0-8) of this move.
    pub fn to_index(self) -> usize {
        self.row * SIZE + self.column
    }

    /// Returns the row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the column.
    pub fn column(self) -> usize {
        self.column
    }

    /// Returns true for the four corner cells.
    pub fn is_corner(self) -> bool {
        (self.row == 0 || self.row == SIZE - 1) && (self.column == 0 || self.column == SIZE - 1)
    }
}

impl TryFrom<[i64; 2]> for Move {
    type Error = MoveError;

    fn try_from([row, column]: [i64; 2]) -> Result<Self, Self::Error> {
        Self::try_new(row, column)
    }
}

impl From<Move> for [i64; 2] {
    fn from(mv: Move) -> Self {
        [mv.row as i64, mv.column as i64]
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.row, self.column)
    }
}

/// Error that can occur when validating a move or searching for one.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate is outside the 3x3 grid.
    #[display("Move ({}, {}) is off the board", row, column)]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        column: i64,
    },

    /// The cell is already marked.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Move),

    /// The board has no empty cell left to play.
    #[display("No legal moves remain")]
    NoLegalMoves,

    /// X and O counts differ by more than one.
    #[display("Board is unbalanced ({} X, {} O)", x, o)]
    UnbalancedBoard {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },

    /// The game has already reached a terminal state.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),
}

impl std::error::Error for MoveError {}
