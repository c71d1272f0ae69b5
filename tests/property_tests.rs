//! Property tests for the engine invariants.
//!
//! Arbitrary seeds and action scripts must never drive a match out of
//! its envelope: health and energy stay in bounds, card plays conserve
//! cards and energy exactly, and terminal states are absorbing.

use proptest::prelude::*;

use duelforge::battle::{BattleEngine, BattleMatch};
use duelforge::cards::{starter_cards, Deck};
use duelforge::core::{EngineError, Side};

fn starter_deck() -> Deck {
    let mut cards = Vec::new();
    for _ in 0..4 {
        cards.extend(starter_cards());
    }
    Deck::generated("Starter Deck", cards)
}

fn check_envelope(mat: &BattleMatch) {
    for side in Side::both() {
        let participant = mat.participant(side);
        assert!(participant.health >= 0, "health must never go negative");
        assert!(participant.health <= 100, "health must never exceed the ceiling");
        assert!(participant.energy >= 0, "energy must never go negative");
        assert!(participant.energy <= 10, "energy must never exceed the cap");
    }
}

/// Interpret one script step: low values try a hand card, the rest end
/// the turn. Failed plays are part of the test - they must leave the
/// caller's value untouched (which value semantics give us) and return
/// a typed error.
fn apply_step(engine: &BattleEngine, mat: &BattleMatch, step: usize) -> BattleMatch {
    let side = mat.turn;
    let hand = &mat.participant(side).hand;

    if step < hand.len() {
        let card = hand[step].clone();
        let energy_before = mat.participant(side).energy;
        let hand_before = hand.len();

        match engine.play_card(mat, side, card.id) {
            Ok(next) => {
                // Exactly the cost was deducted, exactly one card left the hand
                assert_eq!(next.participant(side).energy, energy_before - card.cost);
                assert_eq!(next.participant(side).hand.len(), hand_before - 1);
                next
            }
            Err(EngineError::InsufficientEnergy { have, need }) => {
                assert_eq!(have, energy_before);
                assert!(need > have);
                mat.clone()
            }
            Err(other) => panic!("unexpected play failure: {other}"),
        }
    } else {
        engine.end_turn(mat).expect("end_turn on a live match")
    }
}

proptest! {
    #[test]
    fn invariants_hold_under_any_script(
        seed in any::<u64>(),
        script in prop::collection::vec(0usize..8, 0..60),
    ) {
        let engine = BattleEngine::new();
        let deck = starter_deck();
        let mut mat = engine.start_match(&deck, &deck, seed).unwrap();
        check_envelope(&mat);

        for step in script {
            if mat.status.is_terminal() {
                break;
            }
            mat = apply_step(&engine, &mat, step);
            check_envelope(&mat);
        }
    }

    #[test]
    fn terminal_states_are_absorbing(
        seed in any::<u64>(),
        script in prop::collection::vec(0usize..8, 0..40),
    ) {
        let engine = BattleEngine::new();
        let deck = starter_deck();
        let mut mat = engine.start_match(&deck, &deck, seed).unwrap();

        for step in &script {
            if mat.status.is_terminal() {
                break;
            }
            mat = apply_step(&engine, &mat, *step);
        }

        let ended = engine.surrender(&mat, mat.turn).unwrap_or_else(|_| mat.clone());
        let status = ended.status;
        prop_assert!(status.is_terminal());

        // No action moves a terminal match anywhere
        prop_assert_eq!(engine.end_turn(&ended).unwrap_err(), EngineError::MatchAlreadyEnded);
        prop_assert_eq!(engine.force_end_turn(&ended).unwrap_err(), EngineError::MatchAlreadyEnded);
        prop_assert_eq!(
            engine.surrender(&ended, Side::Player).unwrap_err(),
            EngineError::MatchAlreadyEnded
        );
        if let Some(card) = ended.participant(Side::Player).hand.iter().next() {
            prop_assert_eq!(
                engine.play_card(&ended, Side::Player, card.id).unwrap_err(),
                EngineError::MatchAlreadyEnded
            );
        }
        prop_assert_eq!(ended.status, status);
    }

    #[test]
    fn scripts_replay_identically(
        seed in any::<u64>(),
        script in prop::collection::vec(0usize..8, 0..40),
    ) {
        let engine = BattleEngine::new();
        let deck = starter_deck();

        let run = |script: &[usize]| {
            let mut mat = engine.start_match(&deck, &deck, seed).unwrap();
            for step in script {
                if mat.status.is_terminal() {
                    break;
                }
                mat = apply_step(&engine, &mat, *step);
            }
            mat
        };

        prop_assert_eq!(run(&script), run(&script));
    }

    #[test]
    fn start_match_is_deterministic(seed in any::<u64>()) {
        let engine = BattleEngine::new();
        let deck = starter_deck();

        let a = engine.start_match(&deck, &deck, seed).unwrap();
        let b = engine.start_match(&deck, &deck, seed).unwrap();
        prop_assert_eq!(a, b);
    }
}
