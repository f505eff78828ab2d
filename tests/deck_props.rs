//! Property tests for shuffling and for arbitrary play sequences

use std::time::Duration;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use heartmatch::game::{
    CardState, Deck, FrameClock, Game, GamePhase, SelectOutcome, Symbol, MAX_REVEALED,
};
use heartmatch::{BoardView, GameConfig};

#[derive(Debug, Clone)]
enum Step {
    Select(usize),
    Wait(u64),
    Reset,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => (0usize..14).prop_map(Step::Select),
        3 => (0u64..1500).prop_map(Step::Wait),
        1 => Just(Step::Reset),
    ]
}

proptest! {
    #[test]
    fn shuffle_is_permutation_of_pairs(seed in any::<u64>()) {
        let deck = Deck::shuffled(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(deck.symbols().len(), 12);
        for symbol in Symbol::ALL {
            let count = deck.symbols().iter().filter(|s| **s == symbol).count();
            prop_assert_eq!(count, 2);
        }
        prop_assert!(Deck::from_symbols(deck.symbols()).is_ok());
    }

    #[test]
    fn play_preserves_invariants(seed in any::<u64>(), steps in prop::collection::vec(step(), 0..80)) {
        let config = GameConfig { seed: Some(seed), ..GameConfig::default() };
        let mut game = Game::new(BoardView::new(), FrameClock::new(), &config);
        let mut matched_before: Vec<usize> = Vec::new();
        let mut moves_before = 0;

        for step in steps {
            match step {
                Step::Select(position) => {
                    let pending = game.revealed().len();
                    let outcome = game.select_card(position);
                    if pending == MAX_REVEALED {
                        prop_assert_eq!(outcome, SelectOutcome::Rejected);
                    }
                    let completed_pair = matches!(
                        outcome,
                        SelectOutcome::Matched | SelectOutcome::Mismatched | SelectOutcome::Won
                    );
                    let expected = if completed_pair { moves_before + 1 } else { moves_before };
                    prop_assert_eq!(game.moves(), expected);
                }
                Step::Wait(ms) => game.update(Duration::from_millis(ms)),
                Step::Reset => {
                    game.reset_game();
                    matched_before.clear();
                    moves_before = 0;
                    prop_assert_eq!(game.moves(), 0);
                    prop_assert_eq!(game.elapsed_seconds(), 0);
                    prop_assert!(game.revealed().is_empty());
                    prop_assert!(game.matched().is_empty());
                    continue;
                }
            }

            prop_assert!(game.revealed().len() <= MAX_REVEALED);
            // Matched cards never leave the matched state
            for &position in &matched_before {
                prop_assert_eq!(game.cards()[position].state, CardState::Matched);
            }
            prop_assert!(game.matched().len() % 2 == 0);
            if game.phase() == GamePhase::Playing {
                prop_assert!(game.surface().win_banner().is_none());
            }

            matched_before = game.matched().to_vec();
            moves_before = game.moves();
        }
    }
}
