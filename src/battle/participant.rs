//! Per-side state during a match.
//!
//! `BattleParticipant` is one side's view of a running match: health,
//! energy, hand, draw pile, board, and equipped artifacts. Collections
//! are `im` persistent vectors, so cloning a participant for the next
//! match snapshot shares structure instead of copying cards.
//!
//! `BoardCreature` is the battle-time copy of a creature card: the
//! template stays immutable, the copy carries current health.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{AbilityEffect, Card, CardId, Keyword};
use crate::core::BattleConfig;

/// A creature in play, with transient state apart from its template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCreature {
    /// The immutable template this creature was summoned from.
    pub card: Card,

    /// Health remaining; the template's `health` is the ceiling.
    pub current_health: i64,
}

impl BoardCreature {
    /// Summon a creature from its template at full health.
    #[must_use]
    pub fn summon(card: Card) -> Self {
        let current_health = card.health;
        Self {
            card,
            current_health,
        }
    }

    /// Keywords the creature carries (from its flag abilities).
    pub fn keywords(&self) -> impl Iterator<Item = Keyword> + '_ {
        self.card.abilities.iter().filter_map(|a| match a.effect() {
            AbilityEffect::Passive(keyword) => Some(keyword),
            _ => None,
        })
    }
}

/// One side's mutable state during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleParticipant {
    /// Remaining health; floored at 0, never negative.
    pub health: i64,

    /// Energy available this turn; never above the configured cap.
    pub energy: i64,

    /// Cards available to play.
    pub hand: Vector<Card>,

    /// Remaining shuffled deck; the top of the pile is the end.
    pub draw_pile: Vector<Card>,

    /// Creatures in play.
    pub board: Vector<BoardCreature>,

    /// Standing effect bag: artifacts equipped this match.
    pub artifacts: Vector<Card>,
}

impl BattleParticipant {
    /// Create a participant over an already-shuffled draw pile, with
    /// starting health and energy from the config. The hand starts
    /// empty; the engine deals the opening hand.
    #[must_use]
    pub fn new(config: &BattleConfig, shuffled_pile: Vec<Card>) -> Self {
        Self {
            health: config.starting_health,
            energy: config.starting_energy,
            hand: Vector::new(),
            draw_pile: shuffled_pile.into_iter().collect(),
            board: Vector::new(),
            artifacts: Vector::new(),
        }
    }

    /// Move the top card of the draw pile into the hand.
    ///
    /// Returns false when the pile is empty; the hand simply does not
    /// grow.
    pub fn draw_to_hand(&mut self) -> bool {
        match self.draw_pile.pop_back() {
            Some(card) => {
                self.hand.push_back(card);
                true
            }
            None => false,
        }
    }

    /// Position of the first hand card with the given ID.
    #[must_use]
    pub fn hand_position(&self, card: CardId) -> Option<usize> {
        self.hand.iter().position(|c| c.id == card)
    }

    /// Apply damage, flooring health at 0. Returns remaining health.
    pub fn take_damage(&mut self, amount: i64) -> i64 {
        self.health = (self.health - amount).max(0);
        self.health
    }

    /// Restore health up to the ceiling. Returns resulting health.
    pub fn heal(&mut self, amount: i64, ceiling: i64) -> i64 {
        self.health = (self.health + amount).min(ceiling);
        self.health
    }

    /// Grant energy up to the cap. Returns resulting energy.
    pub fn gain_energy(&mut self, amount: i64, cap: i64) -> i64 {
        self.energy = (self.energy + amount).min(cap);
        self.energy
    }

    /// Whether this side has been reduced to 0 health.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}
