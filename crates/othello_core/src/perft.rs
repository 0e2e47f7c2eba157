use crate::{has_any_legal_move, legal_moves, Board, Side};

/// Counts leaves of the game tree `depth` plies deep.
///
/// A forced pass counts as a ply; a finished game is a leaf wherever it occurs.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        if !has_any_legal_move(board, side.opponent()) {
            return 1;
        }
        return perft(board, side.opponent(), depth - 1);
    }
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mv| perft(&board.play(side, mv), side.opponent(), depth - 1))
        .sum()
}
