//! Core engine types: sides, RNG, errors, rule configuration.
//!
//! These are the building blocks the battle module is assembled from.
//! Nothing here knows about cards or combat.

pub mod config;
pub mod error;
pub mod rng;
pub mod side;

pub use config::BattleConfig;
pub use error::{DeckError, EngineError};
pub use rng::{BattleRng, BattleRngState};
pub use side::{Side, SideMap};
