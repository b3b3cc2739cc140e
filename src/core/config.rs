//! Game configuration.
//!
//! `GameConfig` carries the few knobs a table can set before play:
//! - `mismatch_delay_ms`: How long a mismatched pair stays face up
//! - `seed`: Fixed shuffle seed for reproducible boards (random when absent)
//! - `difficulty`: Initial difficulty selection
//! - `player_count`: Initial table size (clamped to 2-4)
//!
//! Configs are plain JSON; every field is optional.
//!
//! ```
//! use memory_match::core::GameConfig;
//! use memory_match::cards::Difficulty;
//!
//! let config = GameConfig::from_json(r#"{ "difficulty": "hard", "seed": 7 }"#).unwrap();
//! assert_eq!(config.difficulty, Difficulty::Hard);
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.mismatch_delay_ms, 1000);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::Difficulty;

/// Fewest seats at the table.
pub const MIN_PLAYERS: usize = 2;

/// Most seats at the table.
pub const MAX_PLAYERS: usize = 4;

/// Default time a mismatched pair stays revealed.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1000;

/// Clamp a requested table size into `MIN_PLAYERS..=MAX_PLAYERS`.
#[must_use]
pub fn clamp_player_count(requested: i64) -> usize {
    requested.clamp(MIN_PLAYERS as i64, MAX_PLAYERS as i64) as usize
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Milliseconds a mismatched pair stays face up before the turn passes.
    pub mismatch_delay_ms: u64,

    /// Shuffle seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Difficulty selected when the controller is created.
    pub difficulty: Difficulty,

    /// Table size selected when the controller is created.
    pub player_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            seed: None,
            difficulty: Difficulty::default(),
            player_count: MIN_PLAYERS,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the mismatch delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the initial difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the initial table size (clamped).
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = clamp_player_count(count as i64);
        self
    }

    /// The mismatch delay as a `Duration`.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    /// Parse a JSON config. Out-of-range player counts are clamped.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        let player_count = config.player_count;
        Ok(config.with_player_count(player_count))
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.mismatch_delay(), Duration::from_secs(1));
        assert_eq!(config.seed, None);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.player_count, 2);
    }

    #[test]
    fn test_clamp_player_count() {
        assert_eq!(clamp_player_count(5), 4);
        assert_eq!(clamp_player_count(1), 2);
        assert_eq!(clamp_player_count(-3), 2);
        assert_eq!(clamp_player_count(3), 3);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_json_clamps_player_count() {
        let config = GameConfig::from_json(r#"{ "player_count": 9 }"#).unwrap();
        assert_eq!(config.player_count, 4);
    }

    #[test]
    fn test_bad_json() {
        let err = GameConfig::from_json(r#"{ "difficulty": "extreme" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load("/nonexistent/memoria.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_seed(9)
            .with_mismatch_delay(Duration::from_millis(250))
            .with_difficulty(Difficulty::Easy)
            .with_player_count(1);

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.mismatch_delay_ms, 250);
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.player_count, 2);
    }

    #[test]
    fn test_huge_delay_saturates() {
        let config = GameConfig::default().with_mismatch_delay(Duration::MAX);
        assert_eq!(config.mismatch_delay_ms, u64::MAX);
        assert_eq!(config.mismatch_delay(), Duration::from_millis(u64::MAX));
    }
}
