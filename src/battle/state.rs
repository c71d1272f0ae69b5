//! Match state: the `BattleMatch` aggregate.
//!
//! A `BattleMatch` is a plain value. Engine actions take the current
//! value and return a new one; nothing is shared between matches, so
//! any number of independent matches can run concurrently. Once the
//! status is terminal the value never changes again - every action on
//! it fails with `MatchAlreadyEnded`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::log::BattleEvent;
use super::participant::BattleParticipant;
use crate::core::{BattleRng, Side, SideMap};

/// How a terminal match was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    /// The losing side was reduced to 0 health.
    Knockout,
    /// The losing side conceded. Kept distinct so the caller's reward
    /// policy can pay the consolation rate.
    Surrender,
}

/// Where a match stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleStatus {
    InProgress,
    Ended { winner: Side, reason: WinReason },
}

impl BattleStatus {
    /// Whether the match has ended. Terminal statuses are absorbing.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, BattleStatus::Ended { .. })
    }

    /// The winning side, if the match has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            BattleStatus::InProgress => None,
            BattleStatus::Ended { winner, .. } => Some(*winner),
        }
    }
}

/// A full match: both sides, whose turn, the log, and the status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleMatch {
    /// Per-side state.
    pub participants: SideMap<BattleParticipant>,

    /// Whose turn it is.
    pub turn: Side,

    /// Full rounds played. Starts at 1, increments when play returns
    /// to the player.
    pub turn_count: u32,

    /// Append-only event log.
    pub log: Vector<BattleEvent>,

    pub status: BattleStatus,

    /// Match-owned RNG; carried in snapshots so a restored match
    /// replays identically.
    pub rng: BattleRng,
}

impl BattleMatch {
    /// One side's state.
    #[must_use]
    pub fn participant(&self, side: Side) -> &BattleParticipant {
        &self.participants[side]
    }

    /// Append an event to the log.
    pub(crate) fn push_event(&mut self, event: BattleEvent) {
        self.log.push_back(event);
    }

    /// The log rendered to human-readable lines, oldest first.
    #[must_use]
    pub fn log_lines(&self) -> Vec<String> {
        self.log.iter().map(|event| event.to_string()).collect()
    }

    /// Encode this snapshot compactly (replay persistence).
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a snapshot produced by [`BattleMatch::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
