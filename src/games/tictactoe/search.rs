//! Exhaustive minimax search and best-move selection.
//!
//! X maximizes and O minimizes. Terminal scores are shaped by depth so that
//! faster wins (and slower losses) are preferred:
//!
//! | Outcome   | Score          |
//! |-----------|----------------|
//! | `Won(X)`  | `10 - depth`   |
//! | `Won(O)`  | `-10 + depth`  |
//! | `Draw`    | `0`            |
//!
//! The search mutates the caller's board in place. Every trial mark is held
//! by a [`Placement`] guard that restores the cell when dropped, so the board
//! is identical before and after every call on every exit path.

use super::rules::{self, ensure_searchable};
use super::{Board, Cell, Move, MoveError, Outcome, Player};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument, trace};

/// Minimax value of a position, in `[-10, 10]`.
pub type Score = i32;

/// Score magnitude of an immediate win.
pub const WIN_SCORE: Score = 10;

/// Starting bound for the selector's running best; worse than any real score.
const SENTINEL: Score = 100;

/// A move chosen by the selector together with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct BestMove {
    mv: Move,
    score: Score,
}

impl BestMove {
    /// The chosen move.
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// Value of the position after the move, from X's point of view.
    pub fn score(&self) -> Score {
        self.score
    }
}

/// Scoped trial placement of a mark.
///
/// Writes the mark on construction and restores the previous cell value on
/// drop. Derefs to the board so the search can recurse through the guard.
struct Placement<'a> {
    board: &'a mut Board,
    mv: Move,
    previous: Cell,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, mv: Move, player: Player) -> Self {
        let previous = board.place(mv, player);
        Self {
            board,
            mv,
            previous,
        }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.replace(self.mv, self.previous);
    }
}

/// Scores a terminal outcome at the given depth, or `None` if ongoing.
fn terminal_score(outcome: Outcome, depth: Score) -> Option<Score> {
    match outcome {
        Outcome::Won(Player::X) => Some(WIN_SCORE - depth),
        Outcome::Won(Player::O) => Some(-WIN_SCORE + depth),
        Outcome::Draw => Some(0),
        Outcome::Ongoing => None,
    }
}

/// Computes the game-theoretic value of `board` with `player` to move.
///
/// `depth` is the ply distance from the search root and only shapes terminal
/// scores. The whole remaining tree is explored; there is no pruning. The
/// board is unchanged when this returns.
pub fn minimax(board: &mut Board, player: Player, depth: Score) -> Score {
    if let Some(score) = terminal_score(rules::evaluate(board), depth) {
        return score;
    }

    let opponent = player.opponent();
    let mut best = match player {
        Player::X => -SENTINEL,
        Player::O => SENTINEL,
    };

    for mv in Move::ALL {
        if !board.is_empty(mv.row(), mv.column()) {
            continue;
        }
        let mut trial = Placement::new(board, mv, player);
        let score = minimax(&mut trial, opponent, depth + 1);
        best = match player {
            Player::X => best.max(score),
            Player::O => best.min(score),
        };
    }

    best
}

/// Finds the best move for `player` along with its minimax value.
///
/// Candidates are tried in row-major order and each is scored by
/// `minimax(board, opponent, 0)`. A candidate replaces the running best only
/// when strictly better for `player`, so the first of several equally good
/// moves is chosen.
///
/// # Errors
///
/// - [`MoveError::UnbalancedBoard`] if mark counts differ by more than one.
/// - [`MoveError::NoLegalMoves`] if the board has no empty cell.
#[instrument(skip(board))]
pub fn search_best(board: &mut Board, player: Player) -> Result<BestMove, MoveError> {
    ensure_searchable(board)?;

    let opponent = player.opponent();
    let mut best: Option<BestMove> = None;
    let mut best_score = match player {
        Player::X => -SENTINEL,
        Player::O => SENTINEL,
    };

    for mv in Move::ALL {
        if !board.is_empty(mv.row(), mv.column()) {
            continue;
        }
        let score = {
            let mut trial = Placement::new(board, mv, player);
            minimax(&mut trial, opponent, 0)
        };
        trace!(%mv, score, "Scored candidate");

        let improves = match player {
            Player::X => score > best_score,
            Player::O => score < best_score,
        };
        if improves {
            best_score = score;
            best = Some(BestMove::new(mv, score));
        }
    }

    let best = best.ok_or(MoveError::NoLegalMoves)?;
    debug!(mv = %best.mv(), score = best.score(), "Selected move");
    Ok(best)
}

/// Finds the best move for `player`.
///
/// See [`search_best`] for the selection rule and errors.
pub fn find_best_move(board: &mut Board, player: Player) -> Result<Move, MoveError> {
    search_best(board, player).map(|best| best.mv())
}
