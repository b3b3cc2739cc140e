//! The phase-aware game controller.

use std::time::Duration;

use tracing::{debug, info};

use super::snapshot::{RoundSnapshot, TableSnapshot};
use crate::cards::{CardIndex, Difficulty};
use crate::core::{GameConfig, GameRng, PlayerId, SetupError};
use crate::rules::{
    new_round, ClickOutcome, CompletedRound, GameRound, Rejection, RoundId, Standings,
};
use crate::schedule::{ScheduledClear, Scheduler};
use crate::setup::SetupController;

/// Where the table is in the game.
#[derive(Clone, Debug)]
pub enum Phase {
    /// Collecting player count and names.
    Setup,
    /// A round is being played.
    Playing(GameRound),
    /// Every pair has been found.
    Finished(CompletedRound),
}

impl Phase {
    /// Lowercase phase name, for logs and snapshots.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Playing(_) => "playing",
            Phase::Finished(_) => "finished",
        }
    }
}

/// One table of the memory game: setup, rounds, and the delayed turn clear.
///
/// All transitions happen one event at a time through `&mut self`.
///
/// ```
/// use memory_match::{CardIndex, GameConfig, MemoryGame};
///
/// let mut game = MemoryGame::new(GameConfig::default().with_seed(1));
/// game.set_name(0, "Ana").unwrap();
/// game.set_name(1, "Luis").unwrap();
/// game.start().unwrap();
///
/// game.click(CardIndex::new(0));
/// assert_eq!(game.round().unwrap().flipped().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct MemoryGame {
    config: GameConfig,
    setup: SetupController,
    difficulty: Difficulty,
    phase: Phase,
    rng: GameRng,
    last_round: RoundId,
    scheduler: Scheduler,
}

impl Default for MemoryGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl MemoryGame {
    /// Create a table in the setup phase.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), difficulty = %config.difficulty, "table created");
        Self {
            setup: SetupController::new(config.player_count),
            difficulty: config.difficulty,
            phase: Phase::Setup,
            rng,
            last_round: RoundId::default(),
            scheduler: Scheduler::new(),
            config,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn setup(&self) -> &SetupController {
        &self.setup
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The live round, whether still in play or finished.
    #[must_use]
    pub fn round(&self) -> Option<&GameRound> {
        match &self.phase {
            Phase::Setup => None,
            Phase::Playing(round) => Some(round),
            Phase::Finished(done) => Some(done.round()),
        }
    }

    /// Final standings, once the round is finished.
    #[must_use]
    pub fn standings(&self) -> Option<&Standings> {
        match &self.phase {
            Phase::Finished(done) => Some(done.standings()),
            _ => None,
        }
    }

    /// The pending mismatch clear, if any.
    #[must_use]
    pub fn pending_clear(&self) -> Option<ScheduledClear> {
        self.scheduler.pending()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    // === Setup ===

    fn setup_mut(&mut self) -> Result<&mut SetupController, SetupError> {
        match self.phase {
            Phase::Setup => Ok(&mut self.setup),
            _ => Err(SetupError::WrongPhase),
        }
    }

    /// Resize the table (clamped to 2-4). Returns the new count.
    pub fn set_player_count(&mut self, requested: i64) -> Result<usize, SetupError> {
        Ok(self.setup_mut()?.set_player_count(requested))
    }

    /// Resize the table from numeric-input text.
    pub fn set_player_count_text(&mut self, text: &str) -> Result<usize, SetupError> {
        self.setup_mut()?.set_player_count_text(text)
    }

    /// Set a seat's name.
    pub fn set_name(&mut self, seat: usize, text: &str) -> Result<(), SetupError> {
        self.setup_mut()?.set_name(seat, text)
    }

    /// The start action is available.
    #[must_use]
    pub fn can_start(&self) -> bool {
        matches!(self.phase, Phase::Setup) && self.setup.can_start()
    }

    /// Leave setup and deal the first round.
    pub fn start(&mut self) -> Result<RoundId, SetupError> {
        self.setup_mut()?.validate()?;
        let id = self.deal();
        info!(round = %id, players = self.setup.player_count(), "game started");
        Ok(id)
    }

    // === Play ===

    /// Replace whatever round is live with a fresh one.
    fn deal(&mut self) -> RoundId {
        self.scheduler.cancel();
        self.last_round = self.last_round.next();
        let names = self.setup.seated_names();
        let round = new_round(self.last_round, self.difficulty, &names, &mut self.rng);
        self.phase = Phase::Playing(round);
        self.last_round
    }

    /// Handle a click on a card.
    ///
    /// Clicks outside play, on face-up cards, or while a mismatched pair is
    /// still showing are ignored.
    pub fn click(&mut self, index: CardIndex) -> ClickOutcome {
        let round = match &mut self.phase {
            Phase::Playing(round) => round,
            Phase::Finished(_) => return ClickOutcome::Rejected(Rejection::RoundComplete),
            Phase::Setup => return ClickOutcome::Rejected(Rejection::NotPlaying),
        };

        let outcome = round.click(index);
        match outcome {
            ClickOutcome::Mismatched { .. } => {
                self.scheduler.schedule(round.id(), self.config.mismatch_delay());
            }
            ClickOutcome::Completed { .. } => self.finish(),
            _ => {}
        }
        outcome
    }

    fn finish(&mut self) {
        let phase = std::mem::replace(&mut self.phase, Phase::Setup);
        self.phase = match phase {
            Phase::Playing(round) => match CompletedRound::new(round) {
                Ok(done) => {
                    info!(
                        round = %done.round().id(),
                        moves = done.round().moves(),
                        winner = ?done.standings().winner(),
                        "round complete"
                    );
                    Phase::Finished(done)
                }
                Err(round) => Phase::Playing(round),
            },
            other => other,
        };
    }

    /// Move the logical clock forward, running the mismatch clear if due.
    ///
    /// Returns the player whose turn it now is when a clear ran.
    pub fn advance(&mut self, elapsed: Duration) -> Option<PlayerId> {
        let task = self.scheduler.advance(elapsed)?;
        match &mut self.phase {
            Phase::Playing(round) if round.id() == task.round => round.clear_mismatch(),
            _ => {
                debug!(round = %task.round, "discarded stale clear");
                None
            }
        }
    }

    /// Deal a new round at the current difficulty with the same players.
    ///
    /// No-op during setup.
    pub fn restart(&mut self) -> Option<RoundId> {
        if matches!(self.phase, Phase::Setup) {
            return None;
        }
        let id = self.deal();
        info!(round = %id, "restarted");
        Some(id)
    }

    /// Change difficulty.
    ///
    /// During setup this only records the choice. In play (or after the
    /// finish) a new round is dealt when the selection actually changes.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> Option<RoundId> {
        if self.difficulty == difficulty {
            return None;
        }
        self.difficulty = difficulty;
        if matches!(self.phase, Phase::Setup) {
            debug!(%difficulty, "difficulty selected");
            return None;
        }
        let id = self.deal();
        info!(round = %id, %difficulty, "difficulty changed");
        Some(id)
    }

    /// Serializable read-only view of the table.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            phase: self.phase.name(),
            difficulty: self.difficulty,
            player_count: self.setup.player_count(),
            names: self.setup.names().to_vec(),
            can_start: self.can_start(),
            round: self.round().map(RoundSnapshot::of),
            standings: self.standings().cloned(),
        }
    }
}
