//! Match rule constants.
//!
//! `BattleConfig` carries the numbers the simulator runs on. The
//! defaults are the shipped game's rules; tests override individual
//! fields to probe edge cases (tiny decks, low caps) without touching
//! the engine.

use serde::{Deserialize, Serialize};

/// Rule constants for a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Health each side starts with (also the healing ceiling).
    pub starting_health: i64,

    /// Energy each side starts with.
    pub starting_energy: i64,

    /// Energy can never exceed this.
    pub energy_cap: i64,

    /// Energy granted to the side whose turn begins.
    pub energy_per_turn: i64,

    /// Cards dealt to each hand at match start.
    pub opening_hand_size: usize,

    /// Cards drawn at the start of each turn (if the pile allows).
    pub draw_per_turn: usize,

    /// Smallest deck a player may build.
    pub min_deck_size: usize,

    /// Largest deck a player may build.
    pub max_deck_size: usize,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            starting_health: 100,
            starting_energy: 3,
            energy_cap: 10,
            energy_per_turn: 1,
            opening_hand_size: 5,
            draw_per_turn: 1,
            min_deck_size: 20,
            max_deck_size: 30,
        }
    }
}
