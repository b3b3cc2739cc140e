//! # memory-match
//!
//! A memory-matching card game for 2-4 local players taking turns.
//!
//! ## Flow
//!
//! 1. **Setup**: choose 2-4 players and name every seat.
//! 2. **Playing**: players flip two cards per turn. A pair scores and the
//!    same player goes again; a mismatch stays face up briefly, then the
//!    turn passes to the next seat.
//! 3. **Finished**: once every pair is found, players are ranked by pairs
//!    found. A crown goes to the top player only on a strict lead.
//!
//! ## Design
//!
//! - **Single-threaded, event-driven**: every transition is one call on
//!   `&mut MemoryGame`.
//! - **Logical clock**: the mismatch delay is a scheduled task advanced by
//!   `MemoryGame::advance`, tied to a round id so it never touches a
//!   newer round.
//! - **Deterministic shuffles**: a seeded ChaCha RNG, forked per round.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `cards`: Symbols, difficulty levels, dealt cards
//! - `rules`: Board generation, turn engine, standings
//! - `schedule`: Delayed mismatch clear
//! - `setup`: Player count and names
//! - `game`: Phase-aware controller

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod schedule;
pub mod setup;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameRng, Player, PlayerId, PlayerMap, SetupError};

pub use crate::cards::{Card, CardIndex, CardView, Difficulty, DifficultyLevel, GridShape, Symbol};

pub use crate::rules::{
    new_round, Attempt, ClickOutcome, CompletedRound, GameResult, GameRound, Ranked, Rejection,
    RoundId, Selection, Standings,
};

pub use crate::schedule::{ScheduledClear, Scheduler};

pub use crate::setup::SetupController;

pub use crate::game::{MemoryGame, Phase, RoundSnapshot, TableSnapshot};
