//! Card definitions - static card data.
//!
//! A `Card` holds the immutable properties of a card template. For
//! example, "Fire Dragon" costs 6 energy and attacks for 8 - these are
//! part of the template and never change at runtime.
//!
//! Battle-time state (a summoned creature's current health) is stored
//! separately on `BoardCreature`, never on the template.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ability::Ability;

/// Unique identifier for a card template.
///
/// Identifies the "type" of card (e.g., "Fire Dragon"), not a specific
/// copy in a hand or deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// How rare a card is in the collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// All rarities, most common first.
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];
}

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Stays on the board after being played.
    Creature,
    /// Applies its abilities, then is discarded.
    Spell,
    /// Equips a persistent passive on the owning side.
    Artifact,
}

/// Static card template.
///
/// ## Example
///
/// ```
/// use duelforge::cards::{Card, CardId, CardKind, Rarity};
///
/// let dragon = Card::new(CardId::new(5), "Fire Dragon", CardKind::Creature, Rarity::Legendary)
///     .with_cost(6)
///     .with_stats(8, 8)
///     .with_ability("Flying")
///     .with_ability("Burn");
///
/// assert_eq!(dragon.attack, 8);
/// assert_eq!(dragon.abilities.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this template.
    pub id: CardId,

    /// Card name (for display and the battle log).
    pub name: String,

    /// Flavor text shown on the card face.
    pub description: String,

    /// Energy required to play the card.
    pub cost: i64,

    /// Damage dealt when summoned (creatures only; 0 otherwise).
    pub attack: i64,

    /// Health the creature enters play with (0 for non-creature cards).
    pub health: i64,

    pub rarity: Rarity,

    pub kind: CardKind,

    /// Ordered ability tags. SmallVec keeps the common 0-4 tag case
    /// off the heap.
    pub abilities: SmallVec<[Ability; 4]>,
}

impl Card {
    /// Create a new card template with zeroed stats.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, kind: CardKind, rarity: Rarity) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            cost: 0,
            attack: 0,
            health: 0,
            rarity,
            kind,
            abilities: SmallVec::new(),
        }
    }

    /// Set the energy cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = cost;
        self
    }

    /// Set attack and health (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, attack: i64, health: i64) -> Self {
        self.attack = attack;
        self.health = health;
        self
    }

    /// Set the flavor text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a parsed ability tag (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, tag: &str) -> Self {
        self.abilities.push(Ability::parse(tag));
        self
    }

    /// Whether the card carries an ability with the given name.
    #[must_use]
    pub fn has_ability(&self, name: &str) -> bool {
        self.abilities.iter().any(|a| a.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_card_builder() {
        let card = Card::new(CardId::new(1), "Brave Warrior", CardKind::Creature, Rarity::Common)
            .with_cost(2)
            .with_stats(3, 4)
            .with_description("A stalwart defender with balanced stats")
            .with_ability("Taunt");

        assert_eq!(card.name, "Brave Warrior");
        assert_eq!(card.cost, 2);
        assert_eq!(card.attack, 3);
        assert_eq!(card.health, 4);
        assert!(card.has_ability("Taunt"));
        assert!(!card.has_ability("Flying"));
    }

    #[test]
    fn test_non_creature_defaults() {
        let card = Card::new(CardId::new(2), "Healing Potion", CardKind::Spell, Rarity::Common)
            .with_cost(1)
            .with_ability("Heal:5");

        assert_eq!(card.attack, 0);
        assert_eq!(card.health, 0);
    }

    #[test]
    fn test_rarity_serde_names() {
        let json = serde_json::to_string(&Rarity::Legendary).unwrap();
        assert_eq!(json, "\"legendary\"");

        let kind: CardKind = serde_json::from_str("\"artifact\"").unwrap();
        assert_eq!(kind, CardKind::Artifact);
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId::new(5), "Fire Dragon", CardKind::Creature, Rarity::Legendary)
            .with_cost(6)
            .with_stats(8, 8)
            .with_ability("Flying")
            .with_ability("Burn");

        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, back);
    }
}
