//! Final standings of a completed round.

use serde::{Deserialize, Serialize};

use super::round::GameRound;
use crate::core::{Player, PlayerId, PlayerMap};

/// Result of a completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Top score strictly beats every other score.
    Winner(PlayerId),
    /// No strict leader; the players sharing the top score, in seat order.
    Tie(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won outright.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// A row of the ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranked {
    pub player: PlayerId,
    pub name: String,
    pub matches: u32,
}

/// Ranked table plus outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    ranking: Vec<Ranked>,
    result: GameResult,
}

impl Standings {
    /// Rank players by match count, highest first.
    ///
    /// Equal counts keep seat order. A sole winner is only declared when
    /// the top count is strictly greater than the runner-up's.
    ///
    /// ```
    /// use memory_match::core::{Player, PlayerId, PlayerMap};
    /// use memory_match::rules::{GameResult, Standings};
    ///
    /// let mut players = PlayerMap::new(3, |p| Player::new(&format!("P{}", p.index())));
    /// players[PlayerId::new(1)].matches = 4;
    /// players[PlayerId::new(2)].matches = 2;
    ///
    /// let standings = Standings::from_players(&players);
    /// assert_eq!(standings.result(), &GameResult::Winner(PlayerId::new(1)));
    /// assert_eq!(standings.ranking()[2].name, "P0");
    /// ```
    #[must_use]
    pub fn from_players(players: &PlayerMap<Player>) -> Self {
        let mut ranking: Vec<_> = players
            .iter()
            .map(|(player, p)| Ranked {
                player,
                name: p.name.clone(),
                matches: p.matches,
            })
            .collect();
        // Stable: ties stay in seat order
        ranking.sort_by(|a, b| b.matches.cmp(&a.matches));

        let result = match ranking.as_slice() {
            [top, second, ..] if top.matches > second.matches => GameResult::Winner(top.player),
            [top, ..] => GameResult::Tie(
                ranking
                    .iter()
                    .take_while(|r| r.matches == top.matches)
                    .map(|r| r.player)
                    .collect(),
            ),
            [] => GameResult::Tie(Vec::new()),
        };

        Self { ranking, result }
    }

    /// Standings of a round's current scores.
    #[must_use]
    pub fn for_round(round: &GameRound) -> Self {
        Self::from_players(round.players())
    }

    #[must_use]
    pub fn ranking(&self) -> &[Ranked] {
        &self.ranking
    }

    #[must_use]
    pub fn result(&self) -> &GameResult {
        &self.result
    }

    /// The outright winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.result {
            GameResult::Winner(player) => Some(player),
            GameResult::Tie(_) => None,
        }
    }
}

/// A round whose every pair has been found, with its final standings.
///
/// Only constructible from a complete round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompletedRound {
    round: GameRound,
    standings: Standings,
}

impl CompletedRound {
    /// Seal a round. Hands the round back unchanged if pairs remain.
    pub fn new(round: GameRound) -> Result<Self, GameRound> {
        if !round.is_complete() {
            return Err(round);
        }
        let standings = Standings::for_round(&round);
        Ok(Self { round, standings })
    }

    #[must_use]
    pub fn round(&self) -> &GameRound {
        &self.round
    }

    #[must_use]
    pub fn standings(&self) -> &Standings {
        &self.standings
    }
}
