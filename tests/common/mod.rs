//! Helpers shared by the integration tests.

#![allow(dead_code)]

use memory_match::{CardIndex, Difficulty, GameConfig, GameRound, MemoryGame};

/// Start a seeded table with the given seat names.
pub fn started_game(seed: u64, difficulty: Difficulty, names: &[&str]) -> MemoryGame {
    let config = GameConfig::default()
        .with_seed(seed)
        .with_difficulty(difficulty)
        .with_player_count(names.len());
    let mut game = MemoryGame::new(config);
    for (seat, name) in names.iter().enumerate() {
        game.set_name(seat, name).unwrap();
    }
    game.start().unwrap();
    game
}

/// Unmatched pairs in order of first appearance in the deck.
pub fn open_pairs(round: &GameRound) -> Vec<(CardIndex, CardIndex)> {
    let deck = round.deck();
    let mut pairs = Vec::new();
    for (i, card) in deck.iter().enumerate() {
        if round.is_matched(card.index) {
            continue;
        }
        if let Some(partner) = deck[i + 1..].iter().find(|c| c.symbol == card.symbol) {
            pairs.push((card.index, partner.index));
        }
    }
    pairs
}

/// Two face-down unmatched cards with different symbols.
pub fn open_mismatch(round: &GameRound) -> Option<(CardIndex, CardIndex)> {
    let open: Vec<_> = round
        .deck()
        .iter()
        .filter(|c| !round.is_matched(c.index))
        .collect();
    let first = open.first()?;
    let second = open.iter().find(|c| c.symbol != first.symbol)?;
    Some((first.index, second.index))
}

/// Match the next open pair for whoever is active.
pub fn match_next_pair(game: &mut MemoryGame) {
    let (a, b) = open_pairs(game.round().unwrap())[0];
    game.click(a);
    game.click(b);
}

/// Miss once and let the delay run out.
pub fn miss_and_wait(game: &mut MemoryGame) {
    let (a, b) = open_mismatch(game.round().unwrap()).unwrap();
    game.click(a);
    game.click(b);
    let delay = game.config().mismatch_delay();
    game.advance(delay);
}
