//! Headless Othello arena
//!
//! This crate provides the external driver around the engines:
//! - Seating agents from a TOML config or command-line specs
//! - Playing a game to the end with pass handling and move validation
//! - Scoring the final board by disc count
//!
//! # Usage
//!
//! ```bash
//! # Alpha-beta as Black against plain minimax as White
//! cargo run -p arena -- play --black alpha-beta --white minimax
//!
//! # Seats from a config file, record printed as JSON
//! cargo run -p arena -- play --config crates/arena/configs/example.toml --json
//! ```

mod config;
mod match_runner;

use othello_core::{OthelloError, Side};
use thiserror::Error;

pub use config::*;
pub use match_runner::*;

#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("{side} ({face}) played an illegal move")]
    IllegalMove {
        side: Side,
        face: String,
        #[source]
        source: OthelloError,
    },

    #[error("{side} ({face}) passed while holding a legal move")]
    IllegalPass { side: Side, face: String },

    #[error("unknown engine spec {0:?} (expected minimax, alpha-beta, random or random:SEED)")]
    UnknownEngine(String),

    #[error(transparent)]
    Board(#[from] OthelloError),

    #[error(transparent)]
    Config(#[from] classical_engine::ConfigError),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}
