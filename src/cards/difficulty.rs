//! Difficulty levels: symbol sets and grid shapes.
//!
//! Each level fixes how many pairs are dealt and how the board is laid out.
//! The deck always holds exactly two cards per symbol.
//!
//! | Level  | Label     | Pairs | Columns (narrow / wide) |
//! |--------|-----------|-------|-------------------------|
//! | Easy   | Fácil     | 6     | 2 / 3                   |
//! | Medium | Medio     | 8     | 3 / 4                   |
//! | Hard   | Difícil   | 10    | 4 / 5                   |

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::core::error::ParseDifficultyError;

/// Column counts for laying out the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    /// Columns on a narrow display.
    pub narrow_columns: usize,
    /// Columns on a wide display.
    pub wide_columns: usize,
}

/// A fixed named configuration of symbols and grid shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DifficultyLevel {
    /// Display label in the bundled locale.
    pub label: &'static str,
    /// Board layout.
    pub grid: GridShape,
    /// Unique symbols, each dealt twice.
    pub symbols: &'static [Symbol],
}

impl DifficultyLevel {
    /// Number of cards dealt at this level.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.symbols.len() * 2
    }
}

static EASY: DifficultyLevel = DifficultyLevel {
    label: "Fácil",
    grid: GridShape {
        narrow_columns: 2,
        wide_columns: 3,
    },
    symbols: &[
        Symbol::Dog,
        Symbol::Cat,
        Symbol::Mouse,
        Symbol::Hamster,
        Symbol::Rabbit,
        Symbol::Bear,
    ],
};

static MEDIUM: DifficultyLevel = DifficultyLevel {
    label: "Medio",
    grid: GridShape {
        narrow_columns: 3,
        wide_columns: 4,
    },
    symbols: &[
        Symbol::Dog,
        Symbol::Cat,
        Symbol::Mouse,
        Symbol::Hamster,
        Symbol::Rabbit,
        Symbol::Fox,
        Symbol::Bear,
        Symbol::Panda,
    ],
};

static HARD: DifficultyLevel = DifficultyLevel {
    label: "Difícil",
    grid: GridShape {
        narrow_columns: 4,
        wide_columns: 5,
    },
    symbols: &[
        Symbol::Dog,
        Symbol::Cat,
        Symbol::Mouse,
        Symbol::Hamster,
        Symbol::Rabbit,
        Symbol::Fox,
        Symbol::Bear,
        Symbol::Panda,
        Symbol::Koala,
        Symbol::Tiger,
    ],
};

/// The three built-in difficulty selections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All selections in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The configuration behind this selection.
    #[must_use]
    pub fn level(self) -> &'static DifficultyLevel {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }

    /// Display label in the bundled locale.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.level().label
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Accepts the English keys and the Spanish labels, with or without accents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "fácil" | "facil" => Ok(Difficulty::Easy),
            "medium" | "medio" => Ok(Difficulty::Medium),
            "hard" | "difícil" | "dificil" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}
