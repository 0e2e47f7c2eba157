//! Perft tests for move generation validation.
//!
//! Reference counts for the standard 8x8 opening. No passes or finished games
//! occur this early, so every leaf is a real placement sequence.

use othello_core::{perft, Board, Side};

#[test]
fn perft_standard_shallow() {
    let board = Board::standard();
    assert_eq!(perft(&board, Side::Black, 0), 1);
    assert_eq!(perft(&board, Side::Black, 1), 4);
    assert_eq!(perft(&board, Side::Black, 2), 12);
    assert_eq!(perft(&board, Side::Black, 3), 56);
}

#[test]
fn perft_standard_depth_4_and_5() {
    let board = Board::standard();
    assert_eq!(perft(&board, Side::Black, 4), 244);
    assert_eq!(perft(&board, Side::Black, 5), 1396);
}

#[test]
fn perft_finished_game_is_a_leaf() {
    let board = Board::from_rows(&["BBBB", "BBBB", "BBBB", "BBB."]).unwrap();
    assert_eq!(perft(&board, Side::White, 3), 1);
}

#[test]
fn perft_counts_forced_pass() {
    // White cannot move, Black can: the pass is a ply, then Black's moves.
    let board = Board::from_rows(&["BW..", "....", "....", "...."]).unwrap();
    let black_moves = othello_core::legal_moves(&board, Side::Black).len() as u64;
    assert_eq!(black_moves, 1);
    assert_eq!(perft(&board, Side::White, 1), 1);
    assert_eq!(perft(&board, Side::White, 2), black_moves);
}
