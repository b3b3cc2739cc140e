//! The table controller and its snapshots.
//!
//! `MemoryGame` owns setup, the live round, and the mismatch scheduler.
//! Phases are a tagged enum so a finished table always holds a complete
//! round and its standings.

mod controller;
mod snapshot;

pub use controller::{MemoryGame, Phase};
pub use snapshot::{RoundSnapshot, TableSnapshot};
