//! Random Move Othello Player
//!
//! Picks uniformly among the legal moves. Any search engine should beat it
//! comfortably, which makes it a cheap sanity baseline for the driver.

use othello_core::{legal_moves, Agent, Board, Move, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};


#[derive(Debug, Clone)]
pub struct RandomAgent {
    /// None = thread RNG
    rng: Option<StdRng>,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self { rng: None }
    }

    /// Reproducible player: the same seed replays the same choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn face(&self) -> &str {
        "🎲"
    }

    fn place(&mut self, board: &Board, side: Side) -> Option<Move> {
        let moves = legal_moves(board, side);
        match self.rng.as_mut() {
            Some(rng) => moves.choose(rng).copied(),
            None => moves.choose(&mut thread_rng()).copied(),
        }
    }
}
