//! Player profiles and the match-result seam.
//!
//! The engine never loads or saves anything; profiles are an owned
//! resource of the caller. This module provides the types that cross
//! the seam: the player identity that supplies decks, the reward
//! policy applied to terminal matches, and the `ProfileStore` trait a
//! host implements over its storage.
//!
//! Reward numbers are a starting policy owned by the caller, not the
//! engine - the engine only reports terminal status and reason.

use serde::{Deserialize, Serialize};

use crate::battle::{BattleEvent, BattleMatch, BattleStatus, WinReason};
use crate::cards::{Card, Catalog, Deck, OPPONENT_NAMES};
use crate::core::{BattleRng, Side};

/// Experience required per level.
const EXPERIENCE_PER_LEVEL: i64 = 1000;

/// Lifetime statistics tracked per player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub games_played: u32,
    pub games_won: u32,
    pub total_damage_dealt: i64,
    pub favorite_card: Option<String>,
}

/// A player identity with its collection and progression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub experience: i64,
    pub coins: i64,
    pub gems: i64,
    pub cards: Vec<Card>,
    pub decks: Vec<Deck>,
    pub stats: PlayerStats,
}

impl Player {
    /// A fresh profile with the shipped starting currency and no cards.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level: 1,
            experience: 0,
            coins: 500,
            gems: 50,
            cards: Vec::new(),
            decks: Vec::new(),
            stats: PlayerStats::default(),
        }
    }

    /// The deck this player brings to a match, if any.
    #[must_use]
    pub fn active_deck(&self) -> Option<&Deck> {
        self.decks.first()
    }
}

/// Level reached at a given experience total.
#[must_use]
pub fn level_for_experience(experience: i64) -> u32 {
    (experience / EXPERIENCE_PER_LEVEL) as u32 + 1
}

/// Experience required to reach the next level.
#[must_use]
pub fn experience_for_next_level(level: u32) -> i64 {
    i64::from(level) * EXPERIENCE_PER_LEVEL
}

/// Experience and coins granted for one match outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReward {
    pub experience: i64,
    pub coins: i64,
}

/// The caller-owned reward schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardPolicy {
    pub win: MatchReward,
    pub loss: MatchReward,
    /// Consolation for conceding; smaller than a fought loss.
    pub surrender: MatchReward,
}

impl Default for RewardPolicy {
    fn default() -> Self {
        Self {
            win: MatchReward { experience: 100, coins: 50 },
            loss: MatchReward { experience: 50, coins: 10 },
            surrender: MatchReward { experience: 25, coins: 10 },
        }
    }
}

impl RewardPolicy {
    /// The reward owed to `perspective` for a finished match.
    ///
    /// Returns `None` while the match is still in progress.
    #[must_use]
    pub fn reward_for(&self, status: &BattleStatus, perspective: Side) -> Option<MatchReward> {
        match status {
            BattleStatus::InProgress => None,
            BattleStatus::Ended { winner, reason } => Some(if *winner == perspective {
                self.win
            } else if *reason == WinReason::Surrender {
                self.surrender
            } else {
                self.loss
            }),
        }
    }
}

/// Fold a finished match into a player's profile.
///
/// Applies the reward, recomputes the level, and updates lifetime
/// stats (damage dealt is read back from the battle log). Returns the
/// reward applied, or `None` if the match is still in progress, in
/// which case the player is untouched.
pub fn apply_match_result(
    player: &mut Player,
    mat: &BattleMatch,
    perspective: Side,
    policy: &RewardPolicy,
) -> Option<MatchReward> {
    let reward = policy.reward_for(&mat.status, perspective)?;
    let won = mat.status.winner() == Some(perspective);

    player.experience += reward.experience;
    player.coins += reward.coins;
    player.level = level_for_experience(player.experience);

    player.stats.games_played += 1;
    if won {
        player.stats.games_won += 1;
    }
    player.stats.total_damage_dealt += mat
        .log
        .iter()
        .filter_map(|event| match event {
            BattleEvent::DamageDealt { side, amount, .. } if *side == perspective => Some(*amount),
            _ => None,
        })
        .sum::<i64>();

    Some(reward)
}

/// Storage seam for profiles.
///
/// Implemented by the host over whatever persistence it has; the
/// engine itself never calls this.
pub trait ProfileStore {
    type Error;

    fn load_player(&self) -> Result<Player, Self::Error>;
    fn save_player(&mut self, player: &Player) -> Result<(), Self::Error>;
}

/// Generate the AI opponent roster with seeded collections and decks.
#[must_use]
pub fn generate_opponents(rng: &mut BattleRng) -> Vec<Player> {
    OPPONENT_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let mut catalog = Catalog::new();
            catalog.generate_cards(rng, 20);
            let deck = catalog.random_deck(rng, "Main Deck", 20);

            let mut opponent = Player::new(format!("opponent-{}", index), *name);
            opponent.level = rng.gen_range(1..11) as u32;
            opponent.coins = 0;
            opponent.gems = 0;
            opponent.cards = catalog.iter().cloned().collect();
            opponent.decks = vec![deck];
            opponent.stats = PlayerStats {
                games_played: rng.gen_range(0..100) as u32,
                games_won: rng.gen_range(0..50) as u32,
                total_damage_dealt: rng.gen_range(0..10_000),
                favorite_card: None,
            };
            opponent
        })
        .collect()
}
