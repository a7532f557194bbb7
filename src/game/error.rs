//! Error types for the game core.

use std::path::PathBuf;

use thiserror::Error;

/// Gameplay contract violations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("level {level} does not exist (levels run from 1 to {level_count})")]
    InvalidLevel { level: usize, level_count: usize },
}

/// Errors raised while loading or validating a [`GameConfig`](super::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("symbol catalog is empty")]
    NoSymbols,

    #[error("symbol {0:?} appears more than once in the catalog")]
    DuplicateSymbol(String),

    #[error("level sequence is empty")]
    NoLevels,

    #[error("level {level} has no pairs")]
    EmptyLevel { level: usize },

    #[error("level {level} needs {pairs} symbols but the catalog only has {available}")]
    NotEnoughSymbols {
        level: usize,
        pairs: usize,
        available: usize,
    },

    #[error("tick period must be at least one millisecond")]
    ZeroTick,
}
