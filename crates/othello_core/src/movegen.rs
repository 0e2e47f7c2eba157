//! Legal move enumeration in row-major scan order.
//!
//! The scan order (rows outer, columns inner) is the tie-break every search in
//! the workspace relies on, so all functions here preserve it.

use crate::board::Board;
use crate::types::{Move, Side};

/// Appends every legal move for `side` to `moves`, rows outer, columns inner.
pub fn legal_moves_into(board: &Board, side: Side, moves: &mut Vec<Move>) {
    let n = board.size() as u8;
    for y in 0..n {
        for x in 0..n {
            let mv = Move::new(x, y);
            if board.is_legal(side, mv) {
                moves.push(mv);
            }
        }
    }
}

pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::with_capacity(32);
    legal_moves_into(board, side, &mut moves);
    moves
}

/// Stops at the first legal cell in scan order.
pub fn has_any_legal_move(board: &Board, side: Side) -> bool {
    let n = board.size() as u8;
    (0..n).any(|y| (0..n).any(|x| board.is_legal(side, Move::new(x, y))))
}

/// Neither side can move.
pub fn is_game_over(board: &Board) -> bool {
    !has_any_legal_move(board, Side::Black) && !has_any_legal_move(board, Side::White)
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
