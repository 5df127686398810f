//! Text notation for boards.
//!
//! A board is written as nine cells in row-major order, each `X`, `O`, or
//! the empty marker (`_` by default). Rendering produces the ASCII grid:
//!
//! ```text
//!  X | _ | _
//! ---+---+---
//!  _ | O | _
//! ---+---+---
//!  _ | _ | _
//! ```

use super::types::{Board, Cell, Player, SIZE};
use derive_more::{Display, Error};
use tracing::instrument;

/// Default marker for an empty cell.
pub const EMPTY_MARKER: char = '_';

/// Board notation error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Notation error: {} at {}:{}", message, file, line)]
pub struct NotationError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl NotationError {
    /// Creates a new notation error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses a single cell symbol.
fn parse_cell(symbol: char, empty_marker: char) -> Result<Cell, NotationError> {
    match symbol {
        'X' | 'x' => Ok(Cell::Occupied(Player::X)),
        'O' | 'o' => Ok(Cell::Occupied(Player::O)),
        c if c == empty_marker => Ok(Cell::Empty),
        c => Err(NotationError::new(format!(
            "Unknown cell symbol '{}' (expected X, O, or '{}')",
            c, empty_marker
        ))),
    }
}

/// Returns the symbol for a cell.
pub fn cell_symbol(cell: Cell, empty_marker: char) -> char {
    match cell {
        Cell::Empty => empty_marker,
        Cell::Occupied(Player::X) => 'X',
        Cell::Occupied(Player::O) => 'O',
    }
}

/// Parses a board from cell arguments.
///
/// Accepts either nine single-character arguments or a single
/// nine-character argument.
#[instrument(skip(args), fields(count = args.len()))]
pub fn parse_board<S: AsRef<str>>(args: &[S], empty_marker: char) -> Result<Board, NotationError> {
    let symbols: Vec<char> = match args {
        [single] => single.as_ref().trim().chars().collect(),
        many => many
            .iter()
            .map(|arg| {
                let mut chars = arg.as_ref().trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(NotationError::new(format!(
                        "Cell argument '{}' must be a single character",
                        arg.as_ref()
                    ))),
                }
            })
            .collect::<Result<_, _>>()?,
    };

    if symbols.len() != SIZE * SIZE {
        return Err(NotationError::new(format!(
            "Expected {} cells, got {}",
            SIZE * SIZE,
            symbols.len()
        )));
    }

    let mut cells = [[Cell::Empty; SIZE]; SIZE];
    for (i, symbol) in symbols.into_iter().enumerate() {
        cells[i / SIZE][i % SIZE] = parse_cell(symbol, empty_marker)?;
    }
    Ok(Board::from_cells(cells))
}

/// Renders the board as an ASCII grid using the given empty marker.
pub fn render(board: &Board, empty_marker: char) -> String {
    board
        .cells()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!(" {} ", cell_symbol(*cell, empty_marker)))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(self, EMPTY_MARKER))
    }
}

impl std::str::FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(&[s], EMPTY_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Move;

    #[test]
    fn test_parse_nine_arguments() {
        let args = ["X", "_", "_", "_", "O", "_", "_", "_", "x"];
        let board = parse_board(&args, EMPTY_MARKER).unwrap();
        assert_eq!(board.get(Move::ALL[0]), Cell::Occupied(Player::X));
        assert_eq!(board.get(Move::ALL[4]), Cell::Occupied(Player::O));
        assert_eq!(board.get(Move::ALL[8]), Cell::Occupied(Player::X));
        assert_eq!(board.mark_count(Player::X), 2);
    }

    #[test]
    fn test_parse_single_string() {
        let board: Board = "XO_______".parse().unwrap();
        assert_eq!(board.get(Move::ALL[1]), Cell::Occupied(Player::O));
        assert_eq!(board.empty_cells().count(), 7);
    }

    #[test]
    fn test_custom_empty_marker() {
        let board = parse_board(&["X........"], '.').unwrap();
        assert_eq!(board.mark_count(Player::X), 1);
        assert!(parse_board(&["X________"], '.').is_err());
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!("XO".parse::<Board>().is_err());
        assert!(parse_board(&["X", "O"], EMPTY_MARKER).is_err());
    }

    #[test]
    fn test_multi_char_argument_rejected() {
        let args = ["XO", "_", "_", "_", "_", "_", "_", "_", "_"];
        let err = parse_board(&args, EMPTY_MARKER).unwrap_err();
        assert!(err.message.contains("single character"));
    }

    #[test]
    fn test_render() {
        let board: Board = "X___O___X".parse().unwrap();
        assert_eq!(
            board.to_string(),
            " X | _ | _ \n---+---+---\n _ | O | _ \n---+---+---\n _ | _ | X "
        );
    }
}
