//! Game state machine for tic-tac-toe.
//!
//! A [`Game`] alternates moves between the two sides and stops accepting
//! moves once a terminal outcome is reached. Terminal states are absorbing.

use super::rules;
use super::search::{self, BestMove};
use super::{Board, Move, MoveError, Outcome, Player};
use tracing::{debug, info, instrument};

/// A game in progress or concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::X)
    }

    /// Resumes a game from an existing board.
    ///
    /// The history starts empty; only moves made through this game are
    /// recorded.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            to_move,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the moves made so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Plays `(row, column)` for the side to move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already concluded.
    /// - [`MoveError::OutOfBounds`] or [`MoveError::CellOccupied`] if the
    ///   move is illegal. The board is untouched on error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play_at(&mut self, row: i64, column: i64) -> Result<Outcome, MoveError> {
        self.ensure_ongoing()?;
        let mv = rules::validate(&self.board, row, column)?;
        Ok(self.apply(mv))
    }

    /// Plays a move for the side to move.
    ///
    /// # Errors
    ///
    /// Same as [`Game::play_at`].
    pub fn play(&mut self, mv: Move) -> Result<Outcome, MoveError> {
        self.play_at(mv.row() as i64, mv.column() as i64)
    }

    /// Lets the engine choose and play the move for the side to move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already concluded.
    /// - [`MoveError::UnbalancedBoard`] if the game was resumed from a board
    ///   the search cannot accept.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play_best(&mut self) -> Result<BestMove, MoveError> {
        self.ensure_ongoing()?;
        let best = search::search_best(&mut self.board, self.to_move)?;
        self.apply(best.mv());
        Ok(best)
    }

    fn ensure_ongoing(&self) -> Result<(), MoveError> {
        match self.outcome() {
            Outcome::Ongoing => Ok(()),
            outcome => Err(MoveError::GameOver(outcome)),
        }
    }

    fn apply(&mut self, mv: Move) -> Outcome {
        self.board.place(mv, self.to_move);
        self.history.push(mv);
        debug!(%mv, player = %self.to_move, "Move applied");
        self.to_move = self.to_move.opponent();

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game concluded");
        }
        outcome
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
