//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Move, Player};
use tracing::instrument;

/// The eight winning lines, in scan order: rows, then columns, then the
/// main diagonal and the anti-diagonal.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line in scan order holding three
/// identical marks, `None` otherwise. Boards where both players hold a line
/// cannot arise in play and are unsupported; whichever line is scanned first
/// is reported.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    LINES.iter().find_map(|[a, b, c]| {
        let sq = cells[a.0][a.1];
        match sq {
            Cell::Occupied(player) if sq == cells[b.0][b.1] && sq == cells[c.0][c.1] => {
                Some(player)
            }
            _ => None,
        }
    })
}

/// Returns the cells of the first completed line, if any.
pub fn winning_line(board: &Board) -> Option<[Move; 3]> {
    let winner = check_winner(board)?;
    LINES.iter().find_map(|line| {
        let moves = line.map(|(r, c)| Move::ALL[r * 3 + c]);
        moves
            .iter()
            .all(|mv| board.get(*mv) == Cell::Occupied(winner))
            .then_some(moves)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: i64, column: i64) -> Move {
        Move::try_new(row, column).unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(at(0, 0), Player::X);
        board.place(at(0, 1), Player::X);
        board.place(at(0, 2), Player::X);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        board.place(at(0, 1), Player::O);
        board.place(at(1, 1), Player::O);
        board.place(at(2, 1), Player::O);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.place(at(0, 2), Player::O);
        board.place(at(1, 1), Player::O);
        board.place(at(2, 0), Player::O);
        assert_eq!(check_winner(&board), Some(Player::O));
        assert_eq!(winning_line(&board), Some([at(0, 2), at(1, 1), at(2, 0)]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(at(0, 0), Player::X);
        board.place(at(0, 1), Player::X);
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.place(at(0, 0), Player::X);
        board.place(at(1, 1), Player::O);
        board.place(at(2, 2), Player::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        // Malformed two-winner board; only the scan order is pinned down.
        let mut board = Board::new();
        for c in 0..3 {
            board.place(at(0, c), Player::X);
            board.place(at(2, c), Player::O);
        }
        assert_eq!(check_winner(&board), Some(Player::X));
    }
}
