//! Error types.
//!
//! Nothing in a game fails destructively. These cover input validation
//! (setup fields, difficulty names) and loading configuration files.

use std::path::PathBuf;

use thiserror::Error;

/// A setup request that was refused. State is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// A seat's name is empty after trimming.
    #[error("seat {} has no name", .seat + 1)]
    EmptyName { seat: usize },

    /// The seat does not exist at the current table size.
    #[error("seat {} is not at the table ({player_count} players)", .seat + 1)]
    SeatOutOfRange { seat: usize, player_count: usize },

    /// Player count text is not a number.
    #[error("invalid player count: {0:?}")]
    InvalidPlayerCount(String),

    /// Setup fields are only editable before the game starts.
    #[error("setup is closed while a game is in progress")]
    WrongPhase,
}

/// Unrecognized difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty: {0:?} (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

/// Failure to load a `GameConfig`.
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_numbers_are_one_based_in_messages() {
        let err = SetupError::EmptyName { seat: 0 };
        assert_eq!(err.to_string(), "seat 1 has no name");

        let err = SetupError::SeatOutOfRange {
            seat: 3,
            player_count: 2,
        };
        assert_eq!(err.to_string(), "seat 4 is not at the table (2 players)");
    }
}
