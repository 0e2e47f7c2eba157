//! Static evaluation of Othello positions.
//!
//! Both policies are pure functions of `(board, side)`; higher is better for
//! `side`.

use othello_core::{legal_moves, Board, Cell, Side};
use serde::{Deserialize, Serialize};

/// Reference weight table for the 8x8 board: corners are prized, the cells
/// touching them are penalised.
pub const POSITIONAL_TABLE: [[i32; 8]; 8] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, 1, 1, 1, 1, -2, 10],
    [5, -2, 1, 0, 0, 1, -2, 5],
    [5, -2, 1, 0, 0, 1, -2, 5],
    [10, -2, 1, 1, 1, 1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

pub const CORNER_BONUS: i32 = 100;
pub const EDGE_BONUS: i32 = 10;
pub const INTERIOR_PENALTY: i32 = -1;
pub const OPPONENT_DISC_PENALTY: i32 = -1;
pub const DEFAULT_MOBILITY_BONUS: i32 = 2;

fn default_mobility_bonus() -> i32 {
    DEFAULT_MOBILITY_BONUS
}

/// Evaluation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum Evaluator {
    /// Weighted disc difference from [`positional_weight`]. Side-symmetric.
    Positional,
    /// Corner/edge/interior disc terms plus a mobility difference. Not
    /// side-symmetric: `score(b, s)` is generally not `-score(b, s.opponent())`.
    FeatureComposite {
        #[serde(default = "default_mobility_bonus")]
        mobility_bonus: i32,
    },
}

impl Evaluator {
    pub fn feature_composite() -> Self {
        Evaluator::FeatureComposite {
            mobility_bonus: DEFAULT_MOBILITY_BONUS,
        }
    }

    pub fn score(&self, board: &Board, side: Side) -> i32 {
        match *self {
            Evaluator::Positional => positional_score(board, side),
            Evaluator::FeatureComposite { mobility_bonus } => {
                feature_score(board, side, mobility_bonus)
            }
        }
    }
}

/// Weight of `(x, y)` on a board of edge `size`.
///
/// Each axis is folded onto its distance from the nearer edge (capped at 3)
/// and looked up in [`POSITIONAL_TABLE`]. On 8x8 this is the table itself.
pub fn positional_weight(size: usize, x: usize, y: usize) -> i32 {
    let fold = |i: usize| i.min(size - 1 - i).min(3);
    POSITIONAL_TABLE[fold(y)][fold(x)]
}

/// Sum of weights under `side`'s discs minus the sum under the opponent's.
pub fn positional_score(board: &Board, side: Side) -> i32 {
    let n = board.size();
    let own = side.cell();
    let mut score = 0;
    for y in 0..n {
        for x in 0..n {
            match board.cell(x, y) {
                Cell::Empty => {}
                c if c == own => score += positional_weight(n, x, y),
                _ => score -= positional_weight(n, x, y),
            }
        }
    }
    score
}

/// Per-disc terms for `side` plus `mobility_bonus * (own moves - opponent moves)`.
pub fn feature_score(board: &Board, side: Side, mobility_bonus: i32) -> i32 {
    let n = board.size();
    let last = n - 1;
    let own = side.cell();
    let opponent = side.opponent().cell();
    let mut score = 0;

    for y in 0..n {
        for x in 0..n {
            let cell = board.cell(x, y);
            if cell == own {
                let on_x_edge = x == 0 || x == last;
                let on_y_edge = y == 0 || y == last;
                score += if on_x_edge && on_y_edge {
                    CORNER_BONUS
                } else if on_x_edge || on_y_edge {
                    EDGE_BONUS
                } else {
                    INTERIOR_PENALTY
                };
            } else if cell == opponent {
                score += OPPONENT_DISC_PENALTY;
            }
        }
    }

    let own_moves = legal_moves(board, side).len() as i32;
    let opponent_moves = legal_moves(board, side.opponent()).len() as i32;
    score + mobility_bonus * (own_moves - opponent_moves)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
