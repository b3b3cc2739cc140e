//! Table setup: player count and seat names.
//!
//! The count is always kept inside `MIN_PLAYERS..=MAX_PLAYERS`; asking for
//! more or fewer clamps rather than failing. The game can start once every
//! seat has a name that is not blank after trimming.
//!
//! ```
//! use memory_match::setup::SetupController;
//!
//! let mut setup = SetupController::new(2);
//! assert_eq!(setup.set_player_count(5), 4);
//!
//! setup.set_name(0, "Ana").unwrap();
//! setup.set_name(1, "Luis").unwrap();
//! setup.set_name(2, "   ").unwrap();
//! assert!(!setup.can_start());
//!
//! setup.set_name(2, "Sofía").unwrap();
//! setup.set_name(3, "Mateo").unwrap();
//! assert!(setup.can_start());
//! ```

use crate::core::{clamp_player_count, SetupError};

/// Player count and raw seat names collected before play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupController {
    names: Vec<String>,
}

impl Default for SetupController {
    fn default() -> Self {
        Self::new(crate::core::MIN_PLAYERS)
    }
}

impl SetupController {
    /// Empty seats for `player_count` players (clamped).
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        let count = clamp_player_count(player_count as i64);
        Self {
            names: vec![String::new(); count],
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.names.len()
    }

    /// Raw seat text, as typed.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Resize the table, clamping into the allowed range.
    ///
    /// Names of seats that remain are kept; new seats start empty.
    /// Returns the clamped count.
    pub fn set_player_count(&mut self, requested: i64) -> usize {
        let count = clamp_player_count(requested);
        self.names.resize(count, String::new());
        count
    }

    /// Resize from numeric-input text, e.g. `" 3 "`.
    pub fn set_player_count_text(&mut self, text: &str) -> Result<usize, SetupError> {
        let requested = text
            .trim()
            .parse::<i64>()
            .map_err(|_| SetupError::InvalidPlayerCount(text.to_string()))?;
        Ok(self.set_player_count(requested))
    }

    /// Set a seat's raw name text.
    pub fn set_name(&mut self, seat: usize, text: &str) -> Result<(), SetupError> {
        let player_count = self.player_count();
        let slot = self
            .names
            .get_mut(seat)
            .ok_or(SetupError::SeatOutOfRange { seat, player_count })?;
        *slot = text.to_string();
        Ok(())
    }

    /// First blank seat, if any.
    pub fn validate(&self) -> Result<(), SetupError> {
        match self.names.iter().position(|name| name.trim().is_empty()) {
            Some(seat) => Err(SetupError::EmptyName { seat }),
            None => Ok(()),
        }
    }

    /// Every seat has a non-blank name.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.validate().is_ok()
    }

    /// Trimmed names in seat order.
    #[must_use]
    pub fn seated_names(&self) -> Vec<String> {
        self.names.iter().map(|name| name.trim().to_string()).collect()
    }
}
