//! Tic-tac-toe with a perfect minimax opponent.

mod action;
mod game;
mod notation;
pub mod rules;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use notation::{EMPTY_MARKER, NotationError, cell_symbol, parse_board, render};
pub use search::{BestMove, Score, WIN_SCORE, find_best_move, minimax, search_best};
pub use types::{Board, Cell, Outcome, Player, SIZE};
