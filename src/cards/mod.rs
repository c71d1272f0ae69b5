//! Card content: templates, ability tags, decks, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card templates
//! - `Card`: Immutable template data (cost, stats, rarity, abilities)
//! - `Ability`: Parsed ability tag (`"Taunt"`, `"Heal:5"`)
//! - `Deck`: Named ordered card list, size-checked when player-built
//! - `Catalog`: Template registry plus seeded procedural generation
//!
//! Templates are never mutated at runtime; battle-time state lives on
//! the board entities in the battle module.

pub mod ability;
pub mod catalog;
pub mod deck;
pub mod definition;

pub use ability::{Ability, AbilityEffect, Keyword};
pub use catalog::{starter_cards, Catalog, OPPONENT_NAMES};
pub use deck::Deck;
pub use definition::{Card, CardId, CardKind, Rarity};
