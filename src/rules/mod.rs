//! Game rules: board generation, the turn engine, and final standings.
//!
//! - `board`: deals a shuffled deck of pairs for a difficulty
//! - `round`: one round's state and the click-driven turn engine
//! - `results`: ranking and winner detection for a completed round

pub mod board;
pub mod results;
pub mod round;

pub use board::new_round;
pub use results::{CompletedRound, GameResult, Ranked, Standings};
pub use round::{Attempt, ClickOutcome, GameRound, Rejection, RoundId, Selection};
