//! Property tests over random seeds, levels and click sequences.

mod common;

use std::collections::HashMap;
use std::time::Duration;

use common::*;
use concentration::{CardId, Face, GameConfig};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Step {
    Click(usize),
    Wait(u64),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (0usize..40).prop_map(Step::Click),
        1 => (0u64..1500).prop_map(Step::Wait),
    ]
}

proptest! {
    #[test]
    fn deck_has_two_of_each_selected_symbol(seed in any::<u64>(), level in 1usize..=7) {
        let config = GameConfig::default();
        let mut session = session_with(config.clone(), seed);
        session.start_level(level).expect("level in range");

        let pair_count = config.levels[level - 1];
        prop_assert_eq!(session.cards().len(), pair_count * 2);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for card in session.cards() {
            *counts.entry(card.symbol.as_str()).or_default() += 1;
        }
        prop_assert_eq!(counts.len(), pair_count);
        for symbol in config.symbols.iter().take(pair_count) {
            prop_assert_eq!(counts.get(symbol.as_str()).copied(), Some(2));
        }
    }

    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        steps in prop::collection::vec(step(), 0..200),
    ) {
        let mut session = default_session(seed);
        let mut last_moves = 0;
        let mut last_matched = 0;

        for step in steps {
            match step {
                Step::Click(idx) => {
                    let before = session.card(CardId(idx)).map(|card| card.face);
                    let locked = session.selection().input_locked;
                    let accepted = session.activate_card(CardId(idx));
                    if locked || before != Some(Face::Hidden) {
                        prop_assert!(!accepted);
                    }
                }
                Step::Wait(ms) => session.advance(Duration::from_millis(ms)),
            }

            let revealed = session
                .cards()
                .iter()
                .filter(|card| card.face == Face::Revealed)
                .count();
            prop_assert!(revealed <= 2, "{} cards revealed", revealed);
            if revealed == 2 {
                prop_assert!(session.selection().input_locked);
            }

            let stats = session.stats();
            prop_assert!(stats.moves >= last_moves);
            prop_assert!(stats.moves - last_moves <= 1);
            prop_assert!(stats.matched_pairs >= last_matched);
            prop_assert!(stats.matched_pairs <= session.pair_count());
            let matched_cards = session
                .cards()
                .iter()
                .filter(|card| card.face == Face::Matched)
                .count();
            prop_assert_eq!(matched_cards, stats.matched_pairs * 2);
            last_moves = stats.moves;
            last_matched = stats.matched_pairs;
        }
    }
}
