//! Decks - named ordered card lists.
//!
//! A deck belongs to exactly one profile. Starting a match copies its
//! cards into a draw pile; the deck itself is never mutated by play.
//!
//! Player-built decks are bounded to the configured size window.
//! Generated opponent decks skip the bound.

use serde::{Deserialize, Serialize};

use super::definition::Card;
use crate::core::{BattleConfig, DeckError, EngineError};

/// A named ordered sequence of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub cards: Vec<Card>,
}

impl Deck {
    /// Build a player deck, enforcing the configured size window.
    ///
    /// ## Errors
    ///
    /// `EngineError::InvalidDeck` when the card count falls outside
    /// `[min_deck_size, max_deck_size]`.
    pub fn player_built(
        name: impl Into<String>,
        cards: Vec<Card>,
        config: &BattleConfig,
    ) -> Result<Self, EngineError> {
        let name = name.into();
        let size = cards.len();
        if size < config.min_deck_size || size > config.max_deck_size {
            return Err(EngineError::InvalidDeck {
                name,
                source: DeckError::SizeOutOfBounds {
                    size,
                    min: config.min_deck_size,
                    max: config.max_deck_size,
                },
            });
        }
        Ok(Self { name, cards })
    }

    /// Build a generated deck with no size constraint (opponent decks).
    #[must_use]
    pub fn generated(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
