//! Board generation: deal a shuffled deck of pairs for a difficulty.

use tracing::info;

use super::round::{GameRound, RoundId};
use crate::cards::{Card, CardIndex, Difficulty};
use crate::core::{GameRng, Player, PlayerMap};

/// Deal a fresh round.
///
/// Every symbol of `difficulty` is dealt exactly twice and the deck is
/// uniformly shuffled with its own branch of `rng`. Players are seated from
/// `names` in order with zero matches; seat 0 starts.
///
/// ```
/// use memory_match::cards::Difficulty;
/// use memory_match::core::GameRng;
/// use memory_match::rules::{new_round, RoundId};
///
/// let mut rng = GameRng::new(42);
/// let names = vec!["Ana".to_string(), "Luis".to_string()];
/// let round = new_round(RoundId::new(1), Difficulty::Easy, &names, &mut rng);
///
/// assert_eq!(round.deck().len(), 12);
/// assert_eq!(round.moves(), 0);
/// ```
///
/// # Panics
///
/// Panics if `names` is empty.
pub fn new_round(
    id: RoundId,
    difficulty: Difficulty,
    names: &[String],
    rng: &mut GameRng,
) -> GameRound {
    let level = difficulty.level();

    let mut symbols: Vec<_> = level
        .symbols
        .iter()
        .chain(level.symbols.iter())
        .copied()
        .collect();
    rng.fork().shuffle(&mut symbols);

    let deck = (0..)
        .zip(symbols)
        .map(|(i, symbol)| Card::new(CardIndex::new(i), symbol))
        .collect();

    let players = PlayerMap::from_vec(names.iter().map(|name| Player::new(name)).collect());

    info!(round = %id, %difficulty, players = players.player_count(), "dealt new round");
    GameRound::new(id, difficulty, deck, players)
}
