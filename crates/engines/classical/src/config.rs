//! Search configuration and its TOML loading.

use std::path::Path;

use othello_core::Side;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eval::Evaluator;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Whose point of view leaf scores are computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Perspective {
    /// Always Black, whoever is searching.
    Black,
    /// Always White.
    White,
    /// The side to move at the root of the search.
    Root,
    /// The side to move at the leaf itself.
    Mover,
}

impl Perspective {
    pub fn resolve(self, root: Side, mover: Side) -> Side {
        match self {
            Perspective::Black => Side::Black,
            Perspective::White => Side::White,
            Perspective::Root => root,
            Perspective::Mover => mover,
        }
    }
}

/// Knobs of the minimax search.
///
/// `depth` counts the root ply: every root move is searched `depth - 1` plies
/// deeper from the opponent's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    pub depth: u8,
    pub perspective: Perspective,
    /// Alpha-beta cutoffs. Changes node counts, never scores.
    #[serde(default)]
    pub pruning: bool,
    /// Re-derive the depth from the disc count at the first node below each
    /// root move. Children of that node are searched with it cleared.
    #[serde(default)]
    pub adaptive_depth: bool,
    /// Deadline per move in milliseconds.
    #[serde(default)]
    pub move_time_ms: Option<u64>,
    // must stay last: TOML tables follow plain keys
    /// Leaf evaluation policy.
    pub evaluator: Evaluator,
}

impl SearchConfig {
    /// Plain minimax, three plies, positional table scored for Black.
    pub fn plain_minimax() -> Self {
        Self {
            depth: 3,
            evaluator: Evaluator::Positional,
            perspective: Perspective::Black,
            pruning: false,
            adaptive_depth: false,
            move_time_ms: None,
        }
    }

    /// Alpha-beta with adaptive depth; root moves are searched four plies
    /// deeper and leaves are scored for the side to move there.
    pub fn alpha_beta() -> Self {
        Self {
            depth: 5,
            evaluator: Evaluator::feature_composite(),
            perspective: Perspective::Mover,
            pruning: true,
            adaptive_depth: true,
            move_time_ms: None,
        }
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_move_time(mut self, millis: Option<u64>) -> Self {
        self.move_time_ms = millis;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Invalid("depth must be at least 1".into()));
        }
        if self.move_time_ms == Some(0) {
            return Err(ConfigError::Invalid("move_time_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::alpha_beta()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
