//! Read-only views of the table for front ends.

use serde::Serialize;

use crate::cards::{CardView, Difficulty};
use crate::core::{Player, PlayerId};
use crate::rules::{GameRound, RoundId, Standings};

/// Everything a front end needs to draw the table.
#[derive(Clone, Debug, Serialize)]
pub struct TableSnapshot {
    pub phase: &'static str,
    pub difficulty: Difficulty,
    pub player_count: usize,
    /// Raw seat text from setup.
    pub names: Vec<String>,
    pub can_start: bool,
    pub round: Option<RoundSnapshot>,
    pub standings: Option<Standings>,
}

/// The visible state of a round.
#[derive(Clone, Debug, Serialize)]
pub struct RoundSnapshot {
    pub id: RoundId,
    /// Board columns on a wide display.
    pub columns: usize,
    pub cards: Vec<CardView>,
    pub players: Vec<Player>,
    pub active_player: PlayerId,
    pub moves: u32,
    /// A mismatched pair is showing.
    pub resolving: bool,
}

impl RoundSnapshot {
    #[must_use]
    pub fn of(round: &GameRound) -> Self {
        Self {
            id: round.id(),
            columns: round.difficulty().level().grid.wide_columns,
            cards: round.card_views(),
            players: round.players().iter().map(|(_, p)| p.clone()).collect(),
            active_player: round.active_player(),
            moves: round.moves(),
            resolving: round.is_resolving(),
        }
    }
}
