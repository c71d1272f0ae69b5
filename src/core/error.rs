//! Error taxonomy for engine actions.
//!
//! Every engine action is a single atomic attempt: it either returns a
//! new match value or one of these typed failures. The engine never
//! retries; retry policy belongs to the caller.
//!
//! - `InvalidDeck` is setup-time and fatal to starting a match.
//! - `IllegalAction`, `CardNotInHand`, and `InsufficientEnergy` are
//!   user-input validation: the caller rejects the UI action and
//!   re-prompts.
//! - `MatchAlreadyEnded` signals a caller/UI synchronization bug; it is
//!   never expected in a correct integration.

use thiserror::Error;

use super::side::Side;
use crate::cards::CardId;

/// Why a deck was rejected at match setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck has no cards")]
    Empty,
    #[error("deck has {size} cards, allowed {min}..={max}")]
    SizeOutOfBounds { size: usize, min: usize, max: usize },
}

/// Typed failures returned by engine actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A deck failed setup-time validation.
    #[error("invalid deck {name:?}: {source}")]
    InvalidDeck {
        name: String,
        #[source]
        source: DeckError,
    },
    /// The acting side tried to act out of turn.
    #[error("it is not {side}'s turn")]
    IllegalAction { side: Side },
    /// The named card is not in the acting side's hand.
    #[error("card {card} is not in {side}'s hand")]
    CardNotInHand { side: Side, card: CardId },
    /// The acting side cannot pay the card's cost.
    #[error("not enough energy: have {have}, need {need}")]
    InsufficientEnergy { have: i64, need: i64 },
    /// An action was attempted against a match that already ended.
    #[error("match has already ended")]
    MatchAlreadyEnded,
}
