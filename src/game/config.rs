use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

pub const DEFAULT_SYMBOLS: [&str; 18] = [
    "anchor",
    "moon",
    "sun",
    "cpu",
    "cloud-lightning",
    "music",
    "heart",
    "star",
    "umbrella",
    "activity",
    "bell",
    "box",
    "camera",
    "coffee",
    "compass",
    "droplet",
    "gift",
    "globe",
];

/// Pairs per level, easiest first.
pub const DEFAULT_LEVELS: [usize; 7] = [4, 6, 8, 10, 12, 15, 18];

pub const MISMATCH_DELAY_MS: u64 = 1000;
pub const COMPLETION_DELAY_MS: u64 = 500;
pub const TICK_MS: u64 = 1000;

/// Tunables for a game. Fields missing from a JSON file keep their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub symbols: Vec<String>,
    pub levels: Vec<usize>,
    pub mismatch_delay_ms: u64,
    pub completion_delay_ms: u64,
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            levels: DEFAULT_LEVELS.to_vec(),
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            completion_delay_ms: COMPLETION_DELAY_MS,
            tick_ms: TICK_MS,
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::NoSymbols);
        }
        let mut seen = HashSet::with_capacity(self.symbols.len());
        for symbol in &self.symbols {
            if !seen.insert(symbol.as_str()) {
                return Err(ConfigError::DuplicateSymbol(symbol.clone()));
            }
        }

        if self.levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        for (idx, &pairs) in self.levels.iter().enumerate() {
            let level = idx + 1;
            if pairs == 0 {
                return Err(ConfigError::EmptyLevel { level });
            }
            if pairs > self.symbols.len() {
                return Err(ConfigError::NotEnoughSymbols {
                    level,
                    pairs,
                    available: self.symbols.len(),
                });
            }
        }

        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Pair count of a 1-based level.
    pub fn pair_count(&self, level: usize) -> Option<usize> {
        level.checked_sub(1).and_then(|idx| self.levels.get(idx)).copied()
    }

    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
