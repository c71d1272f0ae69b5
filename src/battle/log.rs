//! The append-only battle log.
//!
//! Every engine action appends typed events describing what happened
//! and its numeric effect. The presentation layer renders them through
//! `Display`; tests assert on the typed payloads.

use serde::{Deserialize, Serialize};

use super::state::WinReason;
use crate::cards::{CardId, Keyword};
use crate::core::Side;

/// One entry in a match's battle log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// A card was played and its cost paid.
    CardPlayed {
        side: Side,
        card: CardId,
        name: String,
        cost: i64,
    },
    /// A creature entered the board.
    CreatureSummoned {
        side: Side,
        name: String,
        attack: i64,
        health: i64,
    },
    /// A side's health was reduced.
    DamageDealt {
        side: Side,
        target: Side,
        source: String,
        amount: i64,
        remaining: i64,
    },
    /// A side's health was restored.
    Healed {
        side: Side,
        source: String,
        amount: i64,
        health: i64,
    },
    /// An artifact joined the standing effect bag.
    ArtifactEquipped { side: Side, name: String },
    /// A board entity carries a recognized keyword.
    KeywordGained {
        side: Side,
        source: String,
        keyword: Keyword,
    },
    /// An ability tag resolved to nothing in this context. Unknown tags
    /// always land here; they are logged, never dropped.
    AbilityIgnored {
        side: Side,
        source: String,
        tag: String,
    },
    /// A card moved from the draw pile to the hand.
    CardDrawn { side: Side, remaining: usize },
    /// The turn passed to the other side.
    TurnEnded {
        next: Side,
        turn_count: u32,
        energy: i64,
    },
    /// The match reached a terminal state.
    MatchEnded { winner: Side, reason: WinReason },
}

impl std::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleEvent::CardPlayed { side, name, cost, .. } => {
                write!(f, "{} plays {} for {} energy", side, name, cost)
            }
            BattleEvent::CreatureSummoned { side, name, attack, health } => {
                write!(f, "{} summons {} ({}/{})", side, name, attack, health)
            }
            BattleEvent::DamageDealt { target, source, amount, remaining, .. } => {
                write!(f, "{} hits {} for {} ({} at {})", source, target, amount, target, remaining)
            }
            BattleEvent::Healed { side, source, amount, health } => {
                write!(f, "{} heals {} for {} ({} at {})", source, side, amount, side, health)
            }
            BattleEvent::ArtifactEquipped { side, name } => {
                write!(f, "{} equips {}", side, name)
            }
            BattleEvent::KeywordGained { source, keyword, .. } => {
                write!(f, "{} grants {}", source, keyword)
            }
            BattleEvent::AbilityIgnored { source, tag, .. } => {
                write!(f, "ability {} from {} has no effect", tag, source)
            }
            BattleEvent::CardDrawn { side, remaining } => {
                write!(f, "{} draws a card ({} left in pile)", side, remaining)
            }
            BattleEvent::TurnEnded { next, turn_count, energy } => {
                write!(f, "Turn ended: {} is up with {} energy (round {})", next, energy, turn_count)
            }
            BattleEvent::MatchEnded { winner, reason } => match reason {
                WinReason::Knockout => write!(f, "{} wins the match", winner),
                WinReason::Surrender => {
                    write!(f, "{} surrenders, {} wins the match", winner.opposite(), winner)
                }
            },
        }
    }
}
