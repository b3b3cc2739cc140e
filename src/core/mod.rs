//! Core types: players, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{
    clamp_player_count, GameConfig, DEFAULT_MISMATCH_DELAY_MS, MAX_PLAYERS, MIN_PLAYERS,
};
pub use error::{ConfigError, ParseDifficultyError, SetupError};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
