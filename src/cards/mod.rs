//! Card system: symbols, difficulty levels, and dealt cards.
//!
//! ## Key Types
//!
//! - `Symbol`: The animal on a card face
//! - `Difficulty` / `DifficultyLevel`: Named symbol set plus grid shape
//! - `CardIndex`: Stable deck position for a round
//! - `Card`: A dealt card (position and symbol)
//! - `CardView`: What the table can see of a position

pub mod card;
pub mod difficulty;
pub mod symbol;

pub use card::{Card, CardIndex, CardView};
pub use difficulty::{Difficulty, DifficultyLevel, GridShape};
pub use symbol::Symbol;
