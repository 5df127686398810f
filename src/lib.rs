//! Perfect Tic-Tac-Toe library
//!
//! Plays tic-tac-toe perfectly by exhaustive minimax search over the full
//! game tree.
//!
//! # Architecture
//!
//! - **Games**: board model, outcome evaluation, legality, minimax search,
//!   and best-move selection (pure, no I/O)
//! - **Session**: interactive game loop and one-shot solving over any reader
//!   and writer
//! - **Config**: TOML engine settings
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Board, Player, find_best_move};
//!
//! # fn example() -> Result<(), perfect_tictactoe::MoveError> {
//! let mut board: Board = "X___X_OO_".parse().expect("valid notation");
//! let mv = find_best_move(&mut board, Player::O)?;
//! assert_eq!((mv.row(), mv.column()), (2, 2));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Sessions
pub use session::{Session, solve};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BestMove, Board, Cell, EMPTY_MARKER, Game, Move, MoveError, NotationError, Outcome, Player,
    SIZE, Score, WIN_SCORE, cell_symbol, find_best_move, minimax, parse_board, render, rules,
    search_best,
};
