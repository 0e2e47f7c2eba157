//! Arena configuration: which agents sit at which colour.

use std::path::Path;

use classical_engine::{Evaluator, MinimaxAgent, Perspective, SearchConfig};
use othello_core::{Agent, Board, STANDARD_SIZE};
use random_engine::RandomAgent;
use serde::Deserialize;

use crate::ArenaError;

fn default_board_size() -> usize {
    STANDARD_SIZE
}

fn default_black() -> AgentSpec {
    AgentSpec::AlphaBeta(SearchOverrides::default())
}

fn default_white() -> AgentSpec {
    AgentSpec::Minimax(SearchOverrides::default())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArenaConfig {
    #[serde(default = "default_board_size")]
    pub board_size: usize,
    #[serde(default = "default_black")]
    pub black: AgentSpec,
    #[serde(default = "default_white")]
    pub white: AgentSpec,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            black: default_black(),
            white: default_white(),
        }
    }
}

impl ArenaConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ArenaError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArenaError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Standard opening on a `board_size` board.
    pub fn starting_board(&self) -> Result<Board, ArenaError> {
        Ok(Board::new(self.board_size)?)
    }
}

/// One seat at the board.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "engine", rename_all = "kebab-case")]
pub enum AgentSpec {
    /// Plain fixed-depth minimax preset, optionally adjusted.
    Minimax(SearchOverrides),
    /// Alpha-beta preset with adaptive depth, optionally adjusted.
    AlphaBeta(SearchOverrides),
    Random(RandomSeat),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomSeat {
    /// None = thread RNG
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Fields that replace the preset's values when present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchOverrides {
    pub depth: Option<u8>,
    pub perspective: Option<Perspective>,
    pub pruning: Option<bool>,
    pub adaptive_depth: Option<bool>,
    pub move_time_ms: Option<u64>,
    pub evaluator: Option<Evaluator>,
    pub face: Option<String>,
}

impl SearchOverrides {
    fn apply(&self, mut config: SearchConfig) -> SearchConfig {
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(perspective) = self.perspective {
            config.perspective = perspective;
        }
        if let Some(pruning) = self.pruning {
            config.pruning = pruning;
        }
        if let Some(adaptive) = self.adaptive_depth {
            config.adaptive_depth = adaptive;
        }
        if self.move_time_ms.is_some() {
            config.move_time_ms = self.move_time_ms;
        }
        if let Some(evaluator) = self.evaluator {
            config.evaluator = evaluator;
        }
        config
    }
}

impl AgentSpec {
    /// Parses a command-line spec: `minimax`, `alpha-beta`, `random` or
    /// `random:SEED`.
    pub fn parse(spec: &str) -> Result<Self, ArenaError> {
        let parts: Vec<&str> = spec.split(':').collect();
        match (parts[0].to_lowercase().as_str(), parts.get(1)) {
            ("minimax" | "mm", None) => Ok(AgentSpec::Minimax(SearchOverrides::default())),
            ("alpha-beta" | "alphabeta" | "ab", None) => {
                Ok(AgentSpec::AlphaBeta(SearchOverrides::default()))
            }
            ("random" | "rand", None) => Ok(AgentSpec::Random(RandomSeat { seed: None })),
            ("random" | "rand", Some(seed)) => {
                let seed = seed
                    .parse()
                    .map_err(|_| ArenaError::UnknownEngine(spec.to_string()))?;
                Ok(AgentSpec::Random(RandomSeat { seed: Some(seed) }))
            }
            _ => Err(ArenaError::UnknownEngine(spec.to_string())),
        }
    }

    /// Effective search configuration, None for the random player.
    pub fn search_config(&self) -> Option<SearchConfig> {
        match self {
            AgentSpec::Minimax(o) => Some(o.apply(SearchConfig::plain_minimax())),
            AgentSpec::AlphaBeta(o) => Some(o.apply(SearchConfig::alpha_beta())),
            AgentSpec::Random(_) => None,
        }
    }

    pub fn build(&self) -> Result<Box<dyn Agent>, ArenaError> {
        let (config, face) = match self {
            AgentSpec::Minimax(o) => (o.apply(SearchConfig::plain_minimax()), &o.face),
            AgentSpec::AlphaBeta(o) => (o.apply(SearchConfig::alpha_beta()), &o.face),
            AgentSpec::Random(RandomSeat { seed: Some(seed) }) => {
                return Ok(Box::new(RandomAgent::seeded(*seed)))
            }
            AgentSpec::Random(RandomSeat { seed: None }) => {
                return Ok(Box::new(RandomAgent::new()))
            }
        };
        config.validate()?;
        let agent = match face {
            Some(face) => MinimaxAgent::with_face(config, face),
            None => MinimaxAgent::new(config),
        };
        Ok(Box::new(agent))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
