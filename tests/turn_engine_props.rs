//! Property tests for the turn engine.
//!
//! Properties tested:
//! - Every fresh deck holds each symbol of its level exactly twice
//! - The flipped set never exceeds two cards
//! - Rejected clicks leave the round untouched
//! - Moves advance once per pair-attempt, never per single click
//! - A mismatch passes the turn to the next seat once the delay elapses
//! - A match scores one for the active player, who keeps the turn
//! - The table is finished exactly when every card is matched

mod common;

use std::time::Duration;

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use memory_match::{
    new_round, CardIndex, ClickOutcome, Difficulty, GameRng, GameRound, MemoryGame, Phase, RoundId,
};

#[derive(Clone, Debug)]
enum Op {
    Click(u32),
    Advance(u64),
    Restart,
}

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        10 => (0u32..22).prop_map(Op::Click),
        3 => (0u64..1500).prop_map(Op::Advance),
        1 => Just(Op::Restart),
    ]
}

fn table() -> impl Strategy<Value = Vec<&'static str>> {
    (2usize..=4).prop_map(|n| ["Ana", "Luis", "Sofía", "Mateo"][..n].to_vec())
}

fn round_json(game: &MemoryGame) -> serde_json::Value {
    serde_json::to_value(game.round()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: each symbol is dealt exactly twice
    #[test]
    fn prop_deck_holds_pairs(seed in any::<u64>(), difficulty in difficulty()) {
        let names = vec!["Ana".to_string(), "Luis".to_string()];
        let round = new_round(RoundId::new(1), difficulty, &names, &mut GameRng::new(seed));

        prop_assert_eq!(round.deck().len() % 2, 0);
        prop_assert_eq!(round.deck().len(), difficulty.level().deck_size());

        let mut counts: FxHashMap<_, usize> = FxHashMap::default();
        for card in round.deck() {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        prop_assert_eq!(counts.len(), difficulty.level().symbols.len());
        prop_assert!(counts.values().all(|&c| c == 2));
    }

    /// Property: engine invariants hold across arbitrary event sequences
    #[test]
    fn prop_engine_invariants(
        seed in any::<u64>(),
        difficulty in difficulty(),
        names in table(),
        ops in prop::collection::vec(op(), 0..300),
    ) {
        let mut game = common::started_game(seed, difficulty, &names);
        let player_count = names.len();

        for op in ops {
            let before: GameRound = game.round().unwrap().clone();
            let before_json = round_json(&game);

            match op {
                Op::Click(i) => {
                    let outcome = game.click(CardIndex::new(i));
                    let after = game.round().unwrap();

                    match outcome {
                        ClickOutcome::Rejected(_) => {
                            prop_assert_eq!(round_json(&game), before_json);
                        }
                        ClickOutcome::Flipped(_) => {
                            prop_assert_eq!(after.moves(), before.moves());
                            prop_assert_eq!(after.flipped().len(), 1);
                        }
                        ClickOutcome::Matched { player, .. }
                        | ClickOutcome::Completed { player, .. } => {
                            let first = before.flipped()[0];
                            prop_assert_eq!(after.moves(), before.moves() + 1);
                            prop_assert_eq!(player, before.active_player());
                            prop_assert_eq!(after.active_player(), before.active_player());
                            prop_assert_eq!(
                                after.players()[player].matches,
                                before.players()[player].matches + 1
                            );
                            prop_assert!(after.flipped().is_empty());
                            prop_assert!(after.is_matched(first));
                            prop_assert!(after.is_matched(CardIndex::new(i)));
                            prop_assert_eq!(after.matched_count(), before.matched_count() + 2);
                        }
                        ClickOutcome::Mismatched { .. } => {
                            prop_assert_eq!(after.moves(), before.moves() + 1);
                            prop_assert_eq!(after.flipped().len(), 2);
                            prop_assert!(game.pending_clear().is_some());
                        }
                    }
                }
                Op::Advance(ms) => {
                    let was_resolving = before.is_resolving();
                    let remaining = game.pending_clear().map(|t| t.due.saturating_sub(game.now()));
                    let turned = game.advance(Duration::from_millis(ms));
                    let after = game.round().unwrap();

                    match remaining {
                        Some(left) if was_resolving && Duration::from_millis(ms) >= left => {
                            let expected = before.active_player().next(player_count);
                            prop_assert_eq!(turned, Some(expected));
                            prop_assert_eq!(after.active_player(), expected);
                            prop_assert!(after.flipped().is_empty());
                        }
                        _ => {
                            prop_assert_eq!(turned, None);
                            prop_assert_eq!(round_json(&game), before_json);
                        }
                    }
                }
                Op::Restart => {
                    game.restart();
                    prop_assert!(game.pending_clear().is_none());
                    prop_assert_eq!(game.round().unwrap().moves(), 0);
                }
            }

            let round = game.round().unwrap();
            prop_assert!(round.flipped().len() <= 2);
            prop_assert_eq!(round.matched_count() % 2, 0);
            prop_assert_eq!(round.moves() as usize, round.history().len());
            prop_assert_eq!(
                matches!(game.phase(), Phase::Finished(_)),
                round.matched_count() == round.deck().len()
            );
            prop_assert_eq!(round.is_resolving(), game.pending_clear().is_some());
        }
    }
}
