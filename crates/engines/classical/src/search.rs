//! Minimax search with optional alpha-beta pruning and adaptive depth.
//!
//! Boards are copied on every branch (`Board::play` returns a new value), so
//! siblings never see each other's flips and no undo logic is needed.

use othello_core::{has_any_legal_move, legal_moves, Board, Move, Side, TimeControl};
use tracing::{debug, trace, warn};

use crate::config::SearchConfig;

pub const NEG_INF: i32 = i32::MIN;
pub const POS_INF: i32 = i32::MAX;

/// Above this many discs the adaptive depth switches to the endgame value.
pub const ADAPTIVE_DISC_THRESHOLD: usize = 40;
pub const ADAPTIVE_OPENING_DEPTH: u8 = 3;
pub const ADAPTIVE_ENDGAME_DEPTH: u8 = 4;

/// Value of a search node and the move that produced it.
///
/// `best_move` is `None` at leaves and at nodes whose side has no legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Move>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Result from pick_best_move indicating whether search completed or was stopped.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best root move and its score, None when the side must pass.
    pub best_move: Option<(Move, i32)>,
    /// Score of every fully searched root move, in scan order.
    pub root_scores: Vec<(Move, i32)>,
    pub nodes: u64,
    /// True if the deadline cut the search short.
    pub stopped: bool,
}

/// Depth chosen from the game stage: deeper once more than
/// [`ADAPTIVE_DISC_THRESHOLD`] discs are on the board.
pub fn adaptive_depth(board: &Board) -> u8 {
    if board.disc_count() > ADAPTIVE_DISC_THRESHOLD {
        ADAPTIVE_ENDGAME_DEPTH
    } else {
        ADAPTIVE_OPENING_DEPTH
    }
}

/// Searches every legal root move for `side` and returns the best one.
///
/// Each root move is played and the reply is searched as a minimizing node at
/// `config.depth - 1` with a full window. The strictly highest score wins, so
/// among equal scores the first move in scan order is kept. When the deadline
/// fires before any root move finishes, the first legal move is returned.
pub fn pick_best_move(
    board: &Board,
    side: Side,
    config: &SearchConfig,
    tc: &TimeControl,
) -> SearchOutcome {
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            root_scores: Vec::new(),
            nodes: 0,
            stopped: false,
        };
    }

    let child_depth = config.depth.saturating_sub(1);
    let mut searcher = Searcher::new(config, side, tc);
    let mut best: Option<(Move, i32)> = None;
    let mut root_scores = Vec::with_capacity(moves.len());

    for &mv in &moves {
        if searcher.out_of_time() {
            break;
        }

        let child = board.play(side, mv);
        let reply = searcher.minimax(
            &child,
            side.opponent(),
            child_depth,
            NEG_INF,
            POS_INF,
            false,
            config.adaptive_depth,
        );
        if searcher.stopped {
            break;
        }

        trace!(mv = %mv, score = reply.score, "root move searched");
        root_scores.push((mv, reply.score));
        if best.map_or(true, |(_, s)| reply.score > s) {
            best = Some((mv, reply.score));
        }
    }

    if searcher.stopped {
        warn!(
            completed = root_scores.len(),
            total = moves.len(),
            "search stopped by deadline"
        );
    }
    let best_move = best.or(Some((moves[0], NEG_INF)));
    if let Some((mv, score)) = best_move {
        debug!(
            side = %side,
            best = %mv,
            score,
            nodes = searcher.nodes,
            elapsed_ms = tc.elapsed().as_millis() as u64,
            "search finished"
        );
    }

    SearchOutcome {
        best_move,
        root_scores,
        nodes: searcher.nodes,
        stopped: searcher.stopped,
    }
}

/// Recursive minimax state for one root search.
pub struct Searcher<'a> {
    config: &'a SearchConfig,
    root: Side,
    tc: &'a TimeControl,
    nodes: u64,
    stopped: bool,
}

impl<'a> Searcher<'a> {
    pub fn new(config: &'a SearchConfig, root: Side, tc: &'a TimeControl) -> Self {
        Self {
            config,
            root,
            tc,
            nodes: 0,
            stopped: false,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn stopped(&self) -> bool {
        self.stopped
    }

    fn out_of_time(&mut self) -> bool {
        if !self.stopped
            && (self.tc.is_stopped()
                || (self.tc.should_check_time(self.nodes) && self.tc.check_time()))
        {
            self.stopped = true;
        }
        self.stopped
    }

    fn leaf_score(&self, board: &Board, side: Side) -> i32 {
        let perspective = self.config.perspective.resolve(self.root, side);
        self.config.evaluator.score(board, perspective)
    }

    /// Minimax node for `side` to move.
    ///
    /// Terminal when `depth` is 0 or `side` has no legal move. With `adaptive`
    /// set, the depth of this node is replaced by [`adaptive_depth`] after the
    /// terminal test; children always get `adaptive = false` and one ply less
    /// than whatever depth this node ended up with.
    ///
    /// Children are explored in scan order and a child only replaces the
    /// stored move when strictly better, so ties keep the first move seen.
    /// With pruning enabled the loop stops once `beta <= alpha`.
    #[allow(clippy::too_many_arguments)]
    pub fn minimax(
        &mut self,
        board: &Board,
        side: Side,
        mut depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        adaptive: bool,
    ) -> SearchResult {
        self.nodes += 1;

        if depth == 0 || !has_any_legal_move(board, side) {
            return SearchResult::leaf(self.leaf_score(board, side));
        }
        if self.out_of_time() {
            return SearchResult::leaf(self.leaf_score(board, side));
        }
        if adaptive {
            depth = adaptive_depth(board);
        }

        let mut best = SearchResult::leaf(if maximizing { NEG_INF } else { POS_INF });

        for mv in legal_moves(board, side) {
            let child = board.play(side, mv);
            let eval = self
                .minimax(&child, side.opponent(), depth - 1, alpha, beta, !maximizing, false)
                .score;
            if self.stopped {
                break;
            }

            if maximizing {
                if eval > best.score {
                    best = SearchResult {
                        score: eval,
                        best_move: Some(mv),
                    };
                }
                alpha = alpha.max(eval);
            } else {
                if eval < best.score {
                    best = SearchResult {
                        score: eval,
                        best_move: Some(mv),
                    };
                }
                beta = beta.min(eval);
            }

            if self.config.pruning && beta <= alpha {
                break; // cutoff
            }
        }

        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
