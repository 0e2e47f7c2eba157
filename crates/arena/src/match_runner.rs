//! Game driver: seats two agents and plays one game to the end.

use othello_core::{has_any_legal_move, Agent, Board, Move, Side};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ArenaError;

/// One turn of the game; `mv` is None for a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ply {
    pub side: Side,
    pub mv: Option<Move>,
}

/// Complete record of a finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub board_size: usize,
    pub black: String,
    pub white: String,
    pub plies: Vec<Ply>,
    pub final_board: Vec<String>,
    pub black_discs: usize,
    pub white_discs: usize,
    /// None = draw
    pub winner: Option<Side>,
}

impl GameRecord {
    pub fn passes(&self) -> usize {
        self.plies.iter().filter(|p| p.mv.is_none()).count()
    }

    pub fn summary(&self) -> String {
        let result = match self.winner {
            Some(side) => format!("{side} wins"),
            None => "draw".to_string(),
        };
        format!(
            "{} (black) {} - {} {} (white): {}",
            self.black, self.black_discs, self.white_discs, self.white, result
        )
    }
}

/// Plays from `board` with Black to move until neither side can move.
///
/// A side with no legal move passes; two passes in a row end the game. The
/// final board is scored by disc count. Every move an agent returns is
/// re-checked: an illegal move, or a pass while a legal move exists, ends the
/// game with an error.
pub fn play_game(
    black: &mut dyn Agent,
    white: &mut dyn Agent,
    board: Board,
) -> Result<GameRecord, ArenaError> {
    play_game_from(black, white, board, Side::Black)
}

pub fn play_game_from(
    black: &mut dyn Agent,
    white: &mut dyn Agent,
    mut board: Board,
    mut side: Side,
) -> Result<GameRecord, ArenaError> {
    black.new_game();
    white.new_game();

    let mut plies: Vec<Ply> = Vec::new();
    let mut consecutive_passes = 0;

    while consecutive_passes < 2 {
        let agent: &mut dyn Agent = match side {
            Side::Black => &mut *black,
            Side::White => &mut *white,
        };
        let can_move = has_any_legal_move(&board, side);

        let mv = match agent.place(&board, side) {
            Some(mv) => {
                board = board
                    .apply_move(side, mv)
                    .map_err(|source| ArenaError::IllegalMove {
                        side,
                        face: agent.face().to_string(),
                        source,
                    })?;
                consecutive_passes = 0;
                info!(
                    ply = plies.len() + 1,
                    side = %side,
                    mv = %mv,
                    black = board.count(Side::Black),
                    white = board.count(Side::White),
                    "move"
                );
                Some(mv)
            }
            None if can_move => {
                return Err(ArenaError::IllegalPass {
                    side,
                    face: agent.face().to_string(),
                });
            }
            None => {
                consecutive_passes += 1;
                info!(ply = plies.len() + 1, side = %side, "pass");
                None
            }
        };
        plies.push(Ply { side, mv });
        side = side.opponent();
    }

    let black_discs = board.count(Side::Black);
    let white_discs = board.count(Side::White);
    let winner = match black_discs.cmp(&white_discs) {
        std::cmp::Ordering::Greater => Some(Side::Black),
        std::cmp::Ordering::Less => Some(Side::White),
        std::cmp::Ordering::Equal => None,
    };

    let record = GameRecord {
        board_size: board.size(),
        black: black.face().to_string(),
        white: white.face().to_string(),
        plies,
        final_board: board.rows(),
        black_discs,
        white_discs,
        winner,
    };
    info!(result = %record.summary(), "game over");
    Ok(record)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
