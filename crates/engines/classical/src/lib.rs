//! Classical Othello Engine
//!
//! Minimax search over copied boards with two evaluation policies. One
//! [`SearchConfig`] selects the variant: plain fixed-depth minimax scored by
//! the positional table, or alpha-beta with adaptive depth scored by the
//! feature-composite evaluator.

mod config;
mod eval;
mod search;

use othello_core::{Agent, Board, Move, Side, TimeControl};

pub use config::{ConfigError, Perspective, SearchConfig};
pub use eval::{
    feature_score, positional_score, positional_weight, Evaluator, DEFAULT_MOBILITY_BONUS,
    POSITIONAL_TABLE,
};
pub use search::{
    adaptive_depth, pick_best_move, SearchOutcome, SearchResult, Searcher,
    ADAPTIVE_DISC_THRESHOLD, NEG_INF, POS_INF,
};

/// Summary of one call to [`MinimaxAgent::search`].
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// The move to play (None = pass)
    pub best_move: Option<Move>,
    /// Root score of `best_move`, 0 when passing
    pub score: i32,
    /// Configured root depth
    pub depth: u8,
    pub nodes: u64,
    /// Whether the deadline stopped the search early
    pub stopped: bool,
}

/// Search-backed player.
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    config: SearchConfig,
    face: String,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxAgent {
    pub fn new(config: SearchConfig) -> Self {
        let face = if config.pruning { "🐼" } else { "🤖" };
        Self::with_face(config, face)
    }

    pub fn with_face(config: SearchConfig, face: &str) -> Self {
        Self {
            config,
            face: face.to_string(),
            nodes: 0,
        }
    }

    /// Fixed depth-3 minimax on the positional table.
    pub fn plain_minimax() -> Self {
        Self::new(SearchConfig::plain_minimax())
    }

    /// Alpha-beta with adaptive depth on the feature-composite evaluator.
    pub fn alpha_beta() -> Self {
        Self::new(SearchConfig::alpha_beta())
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn search(&mut self, board: &Board, side: Side) -> SearchReport {
        let mut tc = TimeControl::from_millis(self.config.move_time_ms);
        tc.start();
        self.search_with(board, side, &tc)
    }

    /// Like [`MinimaxAgent::search`] but with a caller-owned time control,
    /// which lets another thread stop the search.
    pub fn search_with(&mut self, board: &Board, side: Side, tc: &TimeControl) -> SearchReport {
        let outcome = pick_best_move(board, side, &self.config, tc);
        self.nodes = outcome.nodes;

        SearchReport {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth: self.config.depth,
            nodes: outcome.nodes,
            stopped: outcome.stopped,
        }
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::alpha_beta()
    }
}

impl Agent for MinimaxAgent {
    fn face(&self) -> &str {
        &self.face
    }

    fn place(&mut self, board: &Board, side: Side) -> Option<Move> {
        self.search(board, side).best_move
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
