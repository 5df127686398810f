//! Tests for minimax search and best-move selection.

use perfect_tictactoe::{Board, Move, MoveError, Player, find_best_move, minimax, rules, search_best};

fn at(row: i64, column: i64) -> Move {
    Move::try_new(row, column).unwrap()
}

fn board(notation: &str) -> Board {
    notation.parse().expect("valid board notation")
}

#[test]
fn test_empty_board_opening_is_corner() {
    let mut board = Board::new();
    let mv = find_best_move(&mut board, Player::X).unwrap();
    assert!(mv.is_corner(), "expected a corner, got {mv}");
    assert_eq!(mv, at(0, 0));
    assert_eq!(board, Board::new());
}

#[test]
fn test_empty_board_is_a_forced_draw() {
    let mut board = Board::new();
    assert_eq!(minimax(&mut board, Player::X, 0), 0);
    assert_eq!(board, Board::new());

    let best = search_best(&mut board, Player::X).unwrap();
    assert_eq!(best.score(), 0);
}

#[test]
fn test_o_takes_diagonal_block_that_also_wins() {
    // X _ _ / _ X _ / O O _
    let mut b = board("X___X_OO_");
    let before = b.clone();
    let best = search_best(&mut b, Player::O).unwrap();
    assert_eq!(best.mv(), at(2, 2));
    assert_eq!(best.score(), -10);
    assert_eq!(b, before);

    // No X reply wins on the next ply.
    b.place(best.mv(), Player::O);
    for reply in b.empty_cells().collect::<Vec<_>>() {
        let mut next = b.clone();
        next.place(reply, Player::X);
        assert_ne!(rules::check_winner(&next), Some(Player::X));
    }
}

#[test]
fn test_o_blocks_row_threat() {
    // X X _ / O _ _ / _ _ _
    let mut b = board("XX_O_____");
    let best = search_best(&mut b, Player::O).unwrap();
    assert_eq!(best.mv(), at(0, 2));
    // X still forces a win, but three plies later instead of one.
    assert_eq!(best.score(), 7);
}

#[test]
fn test_immediate_win_preferred_over_block() {
    // X X _ / O O _ / _ _ _ : O completing row 1 scores -10, beating the block.
    let mut b = board("XX_OO____");
    let best = search_best(&mut b, Player::O).unwrap();
    assert_eq!(best.mv(), at(1, 2));
    assert_eq!(best.score(), -10);
}

#[test]
fn test_x_wins_fastest() {
    // X X _ / O O _ / _ _ _ with X to move: (0, 2) wins at once.
    let mut b = board("XX_OO____");
    let best = search_best(&mut b, Player::X).unwrap();
    assert_eq!(best.mv(), at(0, 2));
    assert_eq!(best.score(), 10);
}

#[test]
fn test_full_board_has_no_legal_moves() {
    // X O X / O X X / O X O
    let mut b = board("XOXOXXOXO");
    assert_eq!(find_best_move(&mut b, Player::X), Err(MoveError::NoLegalMoves));
    assert_eq!(find_best_move(&mut b, Player::O), Err(MoveError::NoLegalMoves));
}

#[test]
fn test_unbalanced_board_rejected() {
    let mut b = board("XXX______");
    assert_eq!(
        find_best_move(&mut b, Player::O),
        Err(MoveError::UnbalancedBoard { x: 3, o: 0 })
    );
}

#[test]
fn test_minimax_on_terminal_boards() {
    // O wins column 0; depth shapes the score.
    let mut b = board("OX_OX_O_X");
    assert_eq!(minimax(&mut b, Player::X, 0), -10);
    assert_eq!(minimax(&mut b, Player::X, 3), -7);

    let mut draw = board("XOXOXXOXO");
    assert_eq!(minimax(&mut draw, Player::O, 4), 0);
}

#[test]
fn test_search_never_mutates_board() {
    let positions = [
        "X________",
        "X___O____",
        "XO__X____",
        "X___X_OO_",
        "XX_O_____",
        "XOXOX____",
        "XOXOXXOX_",
    ];
    for notation in positions {
        let mut b = board(notation);
        let before = b.clone();
        for player in [Player::X, Player::O] {
            let _ = minimax(&mut b, player, 0);
            assert_eq!(b, before, "minimax mutated {notation}");
            let _ = find_best_move(&mut b, player);
            assert_eq!(b, before, "find_best_move mutated {notation}");
        }
    }
}

#[test]
fn test_ties_resolve_to_first_in_row_major_order() {
    // Corner replies to a centre opening draw and edge replies lose; the
    // first corner in scan order takes the tie.
    let mut b = board("____X____");
    let best = search_best(&mut b, Player::O).unwrap();
    assert_eq!(best.score(), 0);
    assert_eq!(best.mv(), at(0, 0));
}

#[test]
fn test_move_rejects_out_of_range() {
    assert_eq!(
        Move::try_new(3, 0),
        Err(MoveError::OutOfBounds { row: 3, column: 0 })
    );
    assert!(Move::try_new(-1, 2).is_err());
    assert_eq!(Move::from_index(9), None);
    assert_eq!(Move::from_index(5), Some(at(1, 2)));
    assert_eq!(at(2, 1).to_index(), 7);
}

#[test]
fn test_move_serializes_as_pair() {
    let json = serde_json::to_string(&at(2, 0)).unwrap();
    assert_eq!(json, "[2,0]");
    let mv: Move = serde_json::from_str("[1,1]").unwrap();
    assert_eq!(mv, at(1, 1));
    assert!(serde_json::from_str::<Move>("[3,1]").is_err());
}
