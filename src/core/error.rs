//! Engine errors.
//!
//! All errors are contract violations by the caller (or a corrupted
//! arrangement handed to the engine). None of them is fatal: every state
//! can be rebuilt with `FreecellGame::reset`.

use std::fmt;

use super::entity::CardId;
use crate::rules::Destination;

/// Errors reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FreecellError {
    /// The id does not resolve to a card of the deck.
    UnknownCard(CardId),
    /// The card is buried in a column, already on a foundation, or not a card at all.
    CardNotAccessible(CardId),
    /// The destination is not legal (or not structurally usable) for the card.
    InvalidDestination {
        card: CardId,
        destination: Destination,
    },
    /// A deck arrangement is not exactly the 52 distinct cards.
    InvalidDeck(String),
    /// The board lost or duplicated a card.
    CorruptBoard(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FreecellError>;

impl fmt::Display for FreecellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreecellError::UnknownCard(id) => write!(f, "unknown card id {}", id),
            FreecellError::CardNotAccessible(id) => {
                write!(f, "card {} is not on top of a column or in a free cell", id)
            }
            FreecellError::InvalidDestination { card, destination } => {
                write!(f, "card {} cannot move to {}", card, destination)
            }
            FreecellError::InvalidDeck(reason) => write!(f, "invalid deck: {}", reason),
            FreecellError::CorruptBoard(reason) => write!(f, "corrupt board: {}", reason),
        }
    }
}

impl std::error::Error for FreecellError {}
