pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod time_control;
pub mod types;

pub use board::*;
pub use error::OthelloError;
pub use movegen::*;
pub use perft::perft;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Agent trait: every player the driver can seat
// =============================================================================

/// A player the external game driver can ask for moves.
///
/// This allows swapping between search engines and baseline players without
/// the driver knowing which one it holds.
pub trait Agent: Send {
    /// Display label for the player.
    fn face(&self) -> &str;

    /// Chooses a move for `side` on `board`, or `None` to pass.
    ///
    /// Implementations must not keep the board after returning, and any
    /// returned move must satisfy `board.is_legal(side, mv)`.
    fn place(&mut self, board: &Board, side: Side) -> Option<Move>;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
