//! # duelforge
//!
//! A deterministic, replayable card-battle simulation engine.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every action takes a `BattleMatch` value and
//!    returns a new one or a typed error. No global state, no internal
//!    timers, no retries.
//!
//! 2. **Deterministic**: Matches are seeded. Same decks + same seed
//!    ⇒ identical shuffles, hands, and replay.
//!
//! 3. **Values All The Way**: Match state uses persistent data
//!    structures, so each action's snapshot clone is O(1)-ish and
//!    independent matches can run concurrently without sharing.
//!
//! 4. **Forward-Compatible Content**: Unknown ability tags are logged
//!    no-ops, never fatal. New card strings can ship before engine
//!    support lands.
//!
//! ## Modules
//!
//! - `core`: Sides, deterministic RNG, errors, rule configuration
//! - `cards`: Card templates, ability tags, decks, the catalog
//! - `battle`: Match state, participants, the battle log, the engine
//! - `profile`: Player profiles, reward policy, the storage seam
//!
//! ## Example
//!
//! ```
//! use duelforge::battle::BattleEngine;
//! use duelforge::cards::Catalog;
//! use duelforge::core::{BattleRng, Side};
//!
//! let mut rng = BattleRng::new(7);
//! let catalog = Catalog::standard(&mut rng);
//! let player_deck = catalog.random_deck(&mut rng, "Player Deck", 20);
//! let opponent_deck = catalog.random_deck(&mut rng, "Opponent Deck", 20);
//!
//! let engine = BattleEngine::new();
//! let mut mat = engine.start_match(&player_deck, &opponent_deck, 42)?;
//!
//! // Play the first affordable card, then pass the turn.
//! let affordable = mat
//!     .participant(Side::Player)
//!     .hand
//!     .iter()
//!     .find(|c| c.cost <= mat.participant(Side::Player).energy)
//!     .map(|c| c.id);
//! if let Some(card) = affordable {
//!     mat = engine.play_card(&mat, Side::Player, card)?;
//! }
//! mat = engine.end_turn(&mat)?;
//!
//! for line in mat.log_lines() {
//!     println!("{line}");
//! }
//! # Ok::<(), duelforge::core::EngineError>(())
//! ```

pub mod battle;
pub mod cards;
pub mod core;
pub mod profile;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, BattleRng, BattleRngState, DeckError, EngineError, Side, SideMap,
};

pub use crate::cards::{
    starter_cards, Ability, AbilityEffect, Card, CardId, CardKind, Catalog, Deck, Keyword, Rarity,
};

pub use crate::battle::{
    BattleEngine, BattleEvent, BattleMatch, BattleParticipant, BattleStatus, BoardCreature,
    WinReason,
};

pub use crate::profile::{
    apply_match_result, experience_for_next_level, generate_opponents, level_for_experience,
    MatchReward, Player, PlayerStats, ProfileStore, RewardPolicy,
};
