//! Core domain types for tic-tac-toe.

use super::action::Move;
use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// Player in the game.
///
/// X is always the maximizing side of the search and O the minimizing side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes).
    X,
    /// Player O (goes second, minimizes).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player's mark.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed by `[row][column]`.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from rows of cells.
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the rows of cells.
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Gets the cell targeted by a move.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row()][mv.column()]
    }

    /// Checks if the cell at `(row, column)` holds no mark.
    ///
    /// Coordinates must be in bounds; use
    /// [`is_legal`](super::rules::is_legal) for unchecked input.
    pub fn is_empty(&self, row: usize, column: usize) -> bool {
        self.cells[row][column] == Cell::Empty
    }

    /// Checks if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| *c != Cell::Empty)
    }

    /// Writes a player's mark, returning the cell's previous value.
    pub fn place(&mut self, mv: Move, player: Player) -> Cell {
        self.replace(mv, Cell::Occupied(player))
    }

    /// Clears a cell back to empty.
    pub fn clear(&mut self, mv: Move) {
        self.replace(mv, Cell::Empty);
    }

    pub(crate) fn replace(&mut self, mv: Move, cell: Cell) -> Cell {
        std::mem::replace(&mut self.cells[mv.row()][mv.column()], cell)
    }

    /// Counts the marks a player has on the board.
    pub fn mark_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Iterates over empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL
            .into_iter()
            .filter(|mv| self.is_empty(mv.row(), mv.column()))
    }
}

/// Classification of a board position.
///
/// Derived from a [`Board`] on demand and never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    #[display("in progress")]
    Ongoing,
    /// A player completed a line.
    #[display("{_0} wins")]
    Won(Player),
    /// The board is full with no completed line.
    #[display("draw")]
    Draw,
}

impl Outcome {
    /// Returns true once the game has concluded.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }
}
