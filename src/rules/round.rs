//! A single round: the deck, the table, and the turn engine.
//!
//! ## Turn states
//!
//! - `Selection::None`: nothing face up pending
//! - `Selection::One`: first card of a pair-attempt is up
//! - `Selection::Pair`: a mismatched pair is up, waiting for the delayed clear
//!
//! A matching pair never rests in `Selection::Pair`: both cards move straight
//! to the matched set on the second click.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::cards::{Card, CardIndex, CardView, Difficulty, Symbol};
use crate::core::{Player, PlayerId, PlayerMap};

/// Round generation. Every new round gets a fresh id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl RoundId {
    /// Create a new round ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The id of the round that replaces this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}

/// Cards face up pending resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    None,
    One(CardIndex),
    Pair(CardIndex, CardIndex),
}

/// Why a click left the round untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Two cards are already face up.
    PairPending,
    /// The card is already face up in this attempt.
    AlreadyFlipped,
    /// The card was matched earlier.
    AlreadyMatched,
    /// No card at that position.
    OutOfRange,
    /// Every pair has been found.
    RoundComplete,
    /// No round is being played.
    NotPlaying,
}

/// Result of a card click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// Ignored; no state changed.
    Rejected(Rejection),
    /// First card of a pair-attempt turned up.
    Flipped(CardIndex),
    /// Pair found; the same player goes again.
    Matched { player: PlayerId, symbol: Symbol },
    /// Pair found and it was the last one.
    Completed { player: PlayerId, symbol: Symbol },
    /// Symbols differ; both stay up until the delayed clear runs.
    Mismatched { first: CardIndex, second: CardIndex },
}

/// One completed pair-attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub player: PlayerId,
    pub first: CardIndex,
    pub second: CardIndex,
    pub matched: bool,
    /// Move counter value after this attempt (1-based).
    pub move_number: u32,
}

/// A round in progress (or just completed).
///
/// Created by [`new_round`](super::board::new_round); replaced wholesale on
/// restart or difficulty change.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameRound {
    id: RoundId,
    difficulty: Difficulty,
    deck: Vec<Card>,
    players: PlayerMap<Player>,
    active_player: PlayerId,
    selection: Selection,
    matched: FxHashSet<CardIndex>,
    moves: u32,
    history: Vector<Attempt>,
}

impl GameRound {
    /// Assemble a round from an already shuffled deck.
    pub(crate) fn new(
        id: RoundId,
        difficulty: Difficulty,
        deck: Vec<Card>,
        players: PlayerMap<Player>,
    ) -> Self {
        Self {
            id,
            difficulty,
            deck,
            players,
            active_player: PlayerId::new(0),
            selection: Selection::None,
            matched: FxHashSet::default(),
            moves: 0,
            history: Vector::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> RoundId {
        self.id
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Completed pair-attempts so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Every pair-attempt of the round, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Attempt> {
        &self.history
    }

    /// Indices currently face up pending resolution (at most two).
    #[must_use]
    pub fn flipped(&self) -> SmallVec<[CardIndex; 2]> {
        match self.selection {
            Selection::None => SmallVec::new(),
            Selection::One(a) => smallvec::smallvec![a],
            Selection::Pair(a, b) => smallvec::smallvec![a, b],
        }
    }

    /// Matched indices in deck order.
    #[must_use]
    pub fn matched(&self) -> Vec<CardIndex> {
        let mut matched: Vec<_> = self.matched.iter().copied().collect();
        matched.sort_unstable();
        matched
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    #[must_use]
    pub fn is_matched(&self, index: CardIndex) -> bool {
        self.matched.contains(&index)
    }

    #[must_use]
    pub fn is_flipped(&self, index: CardIndex) -> bool {
        match self.selection {
            Selection::None => false,
            Selection::One(a) => a == index,
            Selection::Pair(a, b) => a == index || b == index,
        }
    }

    /// Face up, either pending or matched.
    #[must_use]
    pub fn is_revealed(&self, index: CardIndex) -> bool {
        self.is_flipped(index) || self.is_matched(index)
    }

    /// Waiting on the delayed clear of a mismatched pair.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        matches!(self.selection, Selection::Pair(..))
    }

    /// Every card has been matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.deck.is_empty() && self.matched.len() == self.deck.len()
    }

    /// What the table sees at each deck position.
    #[must_use]
    pub fn card_views(&self) -> Vec<CardView> {
        self.deck
            .iter()
            .map(|card| CardView {
                index: card.index,
                symbol: self.is_revealed(card.index).then_some(card.symbol),
                matched: self.is_matched(card.index),
            })
            .collect()
    }

    // === Turn engine ===

    fn rejection(&self, index: CardIndex) -> Option<Rejection> {
        if self.is_complete() {
            return Some(Rejection::RoundComplete);
        }
        if index.index() >= self.deck.len() {
            return Some(Rejection::OutOfRange);
        }
        match self.selection {
            Selection::Pair(..) => return Some(Rejection::PairPending),
            Selection::One(first) if first == index => return Some(Rejection::AlreadyFlipped),
            _ => {}
        }
        if self.is_matched(index) {
            return Some(Rejection::AlreadyMatched);
        }
        None
    }

    /// Handle a click on a card.
    ///
    /// Rejected clicks are silent no-ops. On a mismatch the caller is
    /// responsible for calling [`clear_mismatch`](Self::clear_mismatch)
    /// once the delay has elapsed.
    pub fn click(&mut self, index: CardIndex) -> ClickOutcome {
        if let Some(rejection) = self.rejection(index) {
            trace!(round = %self.id, %index, ?rejection, "click rejected");
            return ClickOutcome::Rejected(rejection);
        }

        let first = match self.selection {
            Selection::None => {
                self.selection = Selection::One(index);
                debug!(round = %self.id, %index, "first card flipped");
                return ClickOutcome::Flipped(index);
            }
            Selection::One(first) => first,
            Selection::Pair(..) => return ClickOutcome::Rejected(Rejection::PairPending),
        };

        self.moves += 1;
        let player = self.active_player;
        let symbol = self.deck[first.index()].symbol;
        let matched = symbol == self.deck[index.index()].symbol;

        self.history.push_back(Attempt {
            player,
            first,
            second: index,
            matched,
            move_number: self.moves,
        });

        if !matched {
            self.selection = Selection::Pair(first, index);
            debug!(round = %self.id, %first, second = %index, %player, "mismatch");
            return ClickOutcome::Mismatched { first, second: index };
        }

        self.players[player].matches += 1;
        self.matched.insert(first);
        self.matched.insert(index);
        self.selection = Selection::None;
        debug!(round = %self.id, %player, %symbol, "pair matched");

        if self.is_complete() {
            ClickOutcome::Completed { player, symbol }
        } else {
            ClickOutcome::Matched { player, symbol }
        }
    }

    /// Turn a mismatched pair back down and pass the turn.
    ///
    /// Returns the new active player, or `None` when no mismatch was pending.
    pub fn clear_mismatch(&mut self) -> Option<PlayerId> {
        if !self.is_resolving() {
            return None;
        }
        self.selection = Selection::None;
        self.active_player = self.active_player.next(self.players.player_count());
        debug!(round = %self.id, next = %self.active_player, "turn passed");
        Some(self.active_player)
    }
}
