//! Full battle scenarios.
//!
//! Each test drives the engine through a concrete match situation:
//! the Fire Dragon opener, energy starvation, knockouts mid-resolution,
//! surrender, and forward-compatible ability content.

use duelforge::battle::{BattleEngine, BattleEvent, BattleStatus, WinReason};
use duelforge::cards::{starter_cards, Card, CardId, CardKind, Deck, Rarity};
use duelforge::core::{BattleConfig, EngineError, Side};

fn fire_dragon() -> Card {
    starter_cards()
        .into_iter()
        .find(|c| c.name == "Fire Dragon")
        .unwrap()
}

fn healing_potion() -> Card {
    starter_cards()
        .into_iter()
        .find(|c| c.name == "Healing Potion")
        .unwrap()
}

fn brave_warrior() -> Card {
    starter_cards()
        .into_iter()
        .find(|c| c.name == "Brave Warrior")
        .unwrap()
}

/// 19 dragons and a potion: the dragon is always in the opening hand.
fn dragon_deck() -> Deck {
    let mut cards = vec![healing_potion()];
    cards.extend(std::iter::repeat(fire_dragon()).take(19));
    Deck::generated("Dragon Deck", cards)
}

fn copies(card: Card, count: usize) -> Deck {
    Deck::generated(format!("{} x{}", card.name, count), vec![card; count])
}

/// Cycle turns until it is the player's turn with at least `energy`.
fn ramp_to(engine: &BattleEngine, mut mat: duelforge::battle::BattleMatch, energy: i64) -> duelforge::battle::BattleMatch {
    while mat.participant(Side::Player).energy < energy || mat.turn != Side::Player {
        mat = engine.end_turn(&mat).unwrap();
    }
    mat
}

#[test]
fn fire_dragon_opener() {
    let engine = BattleEngine::new();
    let mat = engine.start_match(&dragon_deck(), &dragon_deck(), 42).unwrap();
    let mat = ramp_to(&engine, mat, 6);

    let dragon = mat
        .participant(Side::Player)
        .hand
        .iter()
        .find(|c| c.name == "Fire Dragon")
        .map(|c| c.id)
        .expect("dragon deck always opens with a dragon in hand");

    let energy_before = mat.participant(Side::Player).energy;
    let mat = engine.play_card(&mat, Side::Player, dragon).unwrap();

    // Rush damage: 100 - 8 = 92
    assert_eq!(mat.participant(Side::Opponent).health, 92);

    // The dragon stands on the player's board at full health
    let board = &mat.participant(Side::Player).board;
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].card.name, "Fire Dragon");
    assert_eq!(board[0].current_health, 8);

    // Exactly the cost was paid
    assert_eq!(mat.participant(Side::Player).energy, energy_before - 6);

    // And the log tells the story in plain words
    let lines = mat.log_lines();
    assert!(lines.contains(&"Player plays Fire Dragon for 6 energy".to_string()));
    assert!(lines.contains(&"Fire Dragon hits Opponent for 8 (Opponent at 92)".to_string()));
}

#[test]
fn healing_is_capped_at_full_health() {
    let engine = BattleEngine::new();
    let player_deck = copies(healing_potion(), 20);
    let opponent_deck = copies(brave_warrior(), 20);

    let mat = engine.start_match(&player_deck, &opponent_deck, 7).unwrap();

    // Opponent summons two warriors (3 attack each): player at 94
    let mat = engine.end_turn(&mat).unwrap();
    let hit = |mat: &duelforge::battle::BattleMatch| {
        mat.participant(Side::Opponent).hand[0].id
    };
    let mat = engine.play_card(&mat, Side::Opponent, hit(&mat)).unwrap();
    let mat = engine.play_card(&mat, Side::Opponent, hit(&mat)).unwrap();
    assert_eq!(mat.participant(Side::Player).health, 94);

    // Player heals 5, to 99
    let mat = engine.end_turn(&mat).unwrap();
    let potion = mat.participant(Side::Player).hand[0].id;
    let mat = engine.play_card(&mat, Side::Player, potion).unwrap();
    assert_eq!(mat.participant(Side::Player).health, 99);

    // A second potion caps at 100, not 104
    let potion = mat.participant(Side::Player).hand[0].id;
    let mat = engine.play_card(&mat, Side::Player, potion).unwrap();
    assert_eq!(mat.participant(Side::Player).health, 100);

    // Spells are discarded, not boarded
    assert!(mat.participant(Side::Player).board.is_empty());
}

#[test]
fn insufficient_energy_leaves_state_unchanged() {
    let config = BattleConfig {
        starting_energy: 2,
        ..BattleConfig::default()
    };
    let engine = BattleEngine::with_config(config);

    let cost_three = Card::new(CardId::new(50), "Costly", CardKind::Creature, Rarity::Common)
        .with_cost(3)
        .with_stats(2, 2);
    let deck = copies(cost_three, 20);

    let mat = engine.start_match(&deck, &deck, 1).unwrap();
    let card = mat.participant(Side::Player).hand[0].id;

    let err = engine.play_card(&mat, Side::Player, card).unwrap_err();
    assert_eq!(err, EngineError::InsufficientEnergy { have: 2, need: 3 });

    // The match value the caller holds is exactly as it was
    assert_eq!(mat.participant(Side::Player).energy, 2);
    assert_eq!(mat.participant(Side::Player).hand.len(), 5);
    assert!(mat.log.is_empty());
}

#[test]
fn knockout_ends_match_immediately() {
    let engine = BattleEngine::new();
    let titan = Card::new(CardId::new(60), "Colossus", CardKind::Creature, Rarity::Legendary)
        .with_cost(1)
        .with_stats(120, 10);
    let deck = copies(titan, 20);

    let mat = engine.start_match(&deck, &deck, 1).unwrap();
    let card = mat.participant(Side::Player).hand[0].id;
    let mat = engine.play_card(&mat, Side::Player, card).unwrap();

    assert_eq!(mat.participant(Side::Opponent).health, 0);
    assert_eq!(
        mat.status,
        BattleStatus::Ended { winner: Side::Player, reason: WinReason::Knockout }
    );

    // Every further action fails and the value is frozen
    let next_card = mat.participant(Side::Player).hand[0].id;
    assert_eq!(
        engine.play_card(&mat, Side::Player, next_card).unwrap_err(),
        EngineError::MatchAlreadyEnded
    );
    assert_eq!(engine.end_turn(&mat).unwrap_err(), EngineError::MatchAlreadyEnded);
    assert_eq!(
        engine.force_end_turn(&mat).unwrap_err(),
        EngineError::MatchAlreadyEnded
    );
    assert_eq!(
        engine.surrender(&mat, Side::Player).unwrap_err(),
        EngineError::MatchAlreadyEnded
    );
}

#[test]
fn resolution_stops_at_lethal() {
    let engine = BattleEngine::new();
    let finisher = Card::new(CardId::new(61), "Executioner", CardKind::Creature, Rarity::Epic)
        .with_cost(1)
        .with_stats(120, 5)
        .with_ability("Heal:5");
    let deck = copies(finisher, 20);

    let mat = engine.start_match(&deck, &deck, 1).unwrap();
    let card = mat.participant(Side::Player).hand[0].id;
    let mat = engine.play_card(&mat, Side::Player, card).unwrap();

    assert!(mat.status.is_terminal());

    // The kill stopped resolution: the Heal:5 rider never fired
    assert!(!mat
        .log
        .iter()
        .any(|event| matches!(event, BattleEvent::Healed { .. })));
    assert!(matches!(mat.log.iter().last(), Some(BattleEvent::MatchEnded { .. })));
}

#[test]
fn burn_spell_damage_stacks_with_nothing() {
    let engine = BattleEngine::new();
    let firebolt = Card::new(CardId::new(62), "Firebolt", CardKind::Spell, Rarity::Rare)
        .with_cost(2)
        .with_ability("Burn:3");
    let deck = copies(firebolt, 20);

    let mat = engine.start_match(&deck, &deck, 1).unwrap();
    let card = mat.participant(Side::Player).hand[0].id;
    let mat = engine.play_card(&mat, Side::Player, card).unwrap();

    assert_eq!(mat.participant(Side::Opponent).health, 97);
    assert!(mat.participant(Side::Player).board.is_empty());
}

#[test]
fn surrender_overrides_health() {
    let engine = BattleEngine::new();
    let deck = copies(brave_warrior(), 20);

    let mat = engine.start_match(&deck, &deck, 1).unwrap();
    assert_eq!(mat.participant(Side::Player).health, 100);
    assert_eq!(mat.participant(Side::Opponent).health, 100);

    let mat = engine.surrender(&mat, Side::Player).unwrap();
    assert_eq!(
        mat.status,
        BattleStatus::Ended { winner: Side::Opponent, reason: WinReason::Surrender }
    );
    assert_eq!(
        mat.log_lines().last().map(String::as_str),
        Some("Player surrenders, Opponent wins the match")
    );
}

#[test]
fn unknown_abilities_are_logged_no_ops() {
    let engine = BattleEngine::new();
    let experimental = Card::new(CardId::new(63), "Prototype", CardKind::Spell, Rarity::Epic)
        .with_cost(1)
        .with_ability("Lifesteal:2")
        .with_ability("Heal:5");
    let deck = copies(experimental, 20);

    let mat = engine.start_match(&deck, &deck, 1).unwrap();
    let card = mat.participant(Side::Player).hand[0].id;
    let mat = engine.play_card(&mat, Side::Player, card).unwrap();

    // The unknown tag landed in the log...
    assert!(mat.log.iter().any(|event| matches!(
        event,
        BattleEvent::AbilityIgnored { tag, .. } if tag == "Lifesteal:2"
    )));

    // ...and the known tag still resolved
    assert!(mat.log.iter().any(|event| matches!(event, BattleEvent::Healed { .. })));
}

#[test]
fn artifacts_join_the_effect_bag() {
    let engine = BattleEngine::new();
    let crown = Card::new(CardId::new(64), "Golden Crown", CardKind::Artifact, Rarity::Rare)
        .with_cost(2)
        .with_ability("Shield");
    let deck = copies(crown, 20);

    let mat = engine.start_match(&deck, &deck, 1).unwrap();
    let card = mat.participant(Side::Player).hand[0].id;
    let mat = engine.play_card(&mat, Side::Player, card).unwrap();

    let player = mat.participant(Side::Player);
    assert_eq!(player.artifacts.len(), 1);
    assert_eq!(player.artifacts[0].name, "Golden Crown");
    assert!(player.board.is_empty());

    let lines = mat.log_lines();
    assert!(lines.contains(&"Player equips Golden Crown".to_string()));
    assert!(lines.contains(&"Golden Crown grants Shield".to_string()));
}

#[test]
fn playing_duplicates_removes_exactly_one() {
    let engine = BattleEngine::new();
    let deck = copies(brave_warrior(), 20);

    let mat = engine.start_match(&deck, &deck, 1).unwrap();
    let id = mat.participant(Side::Player).hand[0].id;
    let before = mat.participant(Side::Player).hand.len();

    let mat = engine.play_card(&mat, Side::Player, id).unwrap();
    assert_eq!(mat.participant(Side::Player).hand.len(), before - 1);

    // The remaining copies are still playable by the same template ID
    let again = engine.play_card(&mat, Side::Player, id);
    assert!(again.is_err()); // energy 3 - 2 = 1 < 2
    assert_eq!(
        again.unwrap_err(),
        EngineError::InsufficientEnergy { have: 1, need: 2 }
    );
}

#[test]
fn turn_count_tracks_full_rounds() {
    let engine = BattleEngine::new();
    let deck = copies(brave_warrior(), 20);

    let mut mat = engine.start_match(&deck, &deck, 1).unwrap();
    assert_eq!(mat.turn_count, 1);

    mat = engine.end_turn(&mat).unwrap(); // player -> opponent
    assert_eq!(mat.turn_count, 1);

    mat = engine.end_turn(&mat).unwrap(); // opponent -> player: new round
    assert_eq!(mat.turn_count, 2);

    mat = engine.end_turn(&mat).unwrap();
    mat = engine.end_turn(&mat).unwrap();
    assert_eq!(mat.turn_count, 3);
}
