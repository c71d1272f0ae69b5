//! Card catalog: the starter set plus seeded procedural content.
//!
//! The catalog is the content layer around the simulator - the cards a
//! fresh profile owns and the decks generated for AI opponents. All
//! generation draws from an explicit `BattleRng`, so a given seed always
//! produces the same collection.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId, CardKind, Rarity};
use super::deck::Deck;
use crate::core::BattleRng;

/// Drop weights per rarity, most common first (60/25/12/3).
const RARITY_WEIGHTS: [u32; 4] = [60, 25, 12, 3];

const NAME_PREFIXES: [&str; 7] = [
    "Ancient", "Mystic", "Dark", "Golden", "Shadow", "Crystal", "Storm",
];
const CREATURE_NAMES: [&str; 7] = [
    "Warrior", "Mage", "Dragon", "Knight", "Archer", "Beast", "Spirit",
];
const SPELL_NAMES: [&str; 7] = ["Bolt", "Shield", "Heal", "Curse", "Blast", "Ward", "Strike"];
const ARTIFACT_NAMES: [&str; 7] = ["Sword", "Shield", "Orb", "Ring", "Amulet", "Crown", "Staff"];

const CREATURE_DESCRIPTIONS: [&str; 4] = [
    "A mighty warrior ready for battle",
    "Swift and deadly in combat",
    "Protects allies with unwavering loyalty",
    "Strikes fear into enemies",
];
const SPELL_DESCRIPTIONS: [&str; 4] = [
    "Unleash magical energy",
    "Bend reality to your will",
    "Channel ancient powers",
    "Cast devastating magic",
];
const ARTIFACT_DESCRIPTIONS: [&str; 4] = [
    "A legendary item of power",
    "Enchanted with mystical properties",
    "Forged by ancient masters",
    "Holds incredible magical energy",
];

/// Ability tags rolled onto generated cards.
const GENERATED_ABILITIES: [&str; 7] = [
    "Taunt", "Quick", "Flying", "Burn", "Heal", "Shield", "Poison",
];

/// Names for the AI opponent roster.
pub const OPPONENT_NAMES: [&str; 5] = [
    "AI Warrior",
    "Shadow Master",
    "Crystal Mage",
    "Fire Knight",
    "Ice Queen",
];

/// The five hand-authored starter cards every new profile owns.
#[must_use]
pub fn starter_cards() -> Vec<Card> {
    vec![
        Card::new(CardId::new(1), "Brave Warrior", CardKind::Creature, Rarity::Common)
            .with_cost(2)
            .with_stats(3, 4)
            .with_description("A stalwart defender with balanced stats")
            .with_ability("Taunt"),
        Card::new(CardId::new(2), "Frost Mage", CardKind::Creature, Rarity::Common)
            .with_cost(3)
            .with_stats(4, 2)
            .with_description("Deals magical damage and freezes enemies")
            .with_ability("Freeze"),
        Card::new(CardId::new(3), "Swift Archer", CardKind::Creature, Rarity::Common)
            .with_cost(1)
            .with_stats(2, 1)
            .with_description("Quick attacks with ranged damage")
            .with_ability("Quick"),
        Card::new(CardId::new(4), "Healing Potion", CardKind::Spell, Rarity::Common)
            .with_cost(1)
            .with_description("Restore health to yourself")
            .with_ability("Heal:5"),
        Card::new(CardId::new(5), "Fire Dragon", CardKind::Creature, Rarity::Legendary)
            .with_cost(6)
            .with_stats(8, 8)
            .with_description("Mighty dragon with devastating attacks")
            .with_ability("Flying")
            .with_ability("Burn"),
    ]
}

/// Registry of card templates with seeded procedural generation.
///
/// ## Example
///
/// ```
/// use duelforge::cards::Catalog;
/// use duelforge::core::BattleRng;
///
/// let mut rng = BattleRng::new(42);
/// let catalog = Catalog::standard(&mut rng);
///
/// // Five starter cards plus fifteen generated ones.
/// assert_eq!(catalog.len(), 20);
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    cards: FxHashMap<CardId, Card>,
    next_id: u32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: FxHashMap::default(),
            next_id: 1,
        }
    }

    /// The shipped collection: starter cards plus fifteen generated
    /// fillers for variety.
    #[must_use]
    pub fn standard(rng: &mut BattleRng) -> Self {
        let mut catalog = Self::new();
        for card in starter_cards() {
            catalog.register(card);
        }
        catalog.generate_cards(rng, 15);
        catalog
    }

    /// Register a card template.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        assert!(
            !self.cards.contains_key(&card.id),
            "card {} already registered",
            card.id
        );
        self.next_id = self.next_id.max(card.id.raw() + 1);
        self.cards.insert(card.id, card);
    }

    /// Generate `count` random cards into the catalog and return their IDs.
    ///
    /// Stats are bounded by cost: a generated creature's attack and
    /// health each land in `1..=cost`. Spells carry no stats. Every
    /// generated card gets one ability tag from the standard vocabulary.
    pub fn generate_cards(&mut self, rng: &mut BattleRng, count: usize) -> Vec<CardId> {
        let mut ids = Vec::with_capacity(count);
        for _ in 0..count {
            let card = self.generate_card(rng);
            ids.push(card.id);
            self.cards.insert(card.id, card);
        }
        ids
    }

    fn generate_card(&mut self, rng: &mut BattleRng) -> Card {
        let id = CardId::new(self.next_id);
        self.next_id += 1;

        let kind = *rng
            .choose(&[CardKind::Creature, CardKind::Spell, CardKind::Artifact])
            .unwrap_or(&CardKind::Creature);
        let rarity = roll_rarity(rng);
        let cost = rng.gen_range(1..9);

        let (attack, health) = if kind == CardKind::Spell {
            (0, 0)
        } else {
            (rng.gen_range(1..cost + 1), rng.gen_range(1..cost + 1))
        };

        let ability = rng.choose(&GENERATED_ABILITIES).unwrap_or(&"Taunt");

        Card::new(id, generate_name(rng, kind), kind, rarity)
            .with_cost(cost)
            .with_stats(attack, health)
            .with_description(generate_description(rng, kind))
            .with_ability(ability)
    }

    /// Build a deck of `size` cards drawn randomly from the catalog.
    ///
    /// Used for generated opponent decks, so the size window for
    /// player-built decks does not apply.
    #[must_use]
    pub fn random_deck(&self, rng: &mut BattleRng, name: impl Into<String>, size: usize) -> Deck {
        let mut pool: Vec<&Card> = self.cards.values().collect();
        // Hash-map order is unstable; fix it before shuffling so the
        // same seed always deals the same deck.
        pool.sort_by_key(|card| card.id);
        rng.shuffle(&mut pool);

        let cards = pool.into_iter().take(size).cloned().collect();
        Deck::generated(name, cards)
    }

    /// Get a card template by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Whether a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card templates.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}

fn roll_rarity(rng: &mut BattleRng) -> Rarity {
    match rng.choose_weighted(&RARITY_WEIGHTS) {
        Some(index) => Rarity::ALL[index],
        None => Rarity::Common,
    }
}

fn generate_name(rng: &mut BattleRng, kind: CardKind) -> String {
    let prefix = rng.choose(&NAME_PREFIXES).unwrap_or(&"Ancient");
    let suffix = match kind {
        CardKind::Creature => rng.choose(&CREATURE_NAMES).unwrap_or(&"Warrior"),
        CardKind::Spell => rng.choose(&SPELL_NAMES).unwrap_or(&"Bolt"),
        CardKind::Artifact => rng.choose(&ARTIFACT_NAMES).unwrap_or(&"Sword"),
    };
    format!("{} {}", prefix, suffix)
}

fn generate_description(rng: &mut BattleRng, kind: CardKind) -> String {
    let pool = match kind {
        CardKind::Creature => &CREATURE_DESCRIPTIONS,
        CardKind::Spell => &SPELL_DESCRIPTIONS,
        CardKind::Artifact => &ARTIFACT_DESCRIPTIONS,
    };
    rng.choose(pool).unwrap_or(&pool[0]).to_string()
}
