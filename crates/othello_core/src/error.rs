use thiserror::Error;

use crate::types::{Move, Side, MAX_SIZE, MIN_SIZE};

/// Failures raised by the board model.
///
/// Passing is not an error; it is `None` wherever a move is expected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OthelloError {
    #[error("illegal move {mv} for {side}")]
    IllegalMove { side: Side, mv: Move },

    #[error("move {mv} is outside a {size}x{size} board")]
    OutOfBounds { mv: Move, size: usize },

    #[error("board size {0} must be even and between {MIN_SIZE} and {MAX_SIZE}")]
    InvalidSize(usize),

    #[error("expected {expected} cells, got {actual}")]
    CellCount { expected: usize, actual: usize },

    #[error("parse error: {0}")]
    Parse(String),
}
