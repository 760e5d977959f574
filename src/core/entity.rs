//! Card identification.
//!
//! Every card in the 52-card deck has a unique `CardId` in `1..=52`.
//! Ids are stable for a game session and across sessions: they are fixed
//! by the deck's creation order, not by the shuffle.
//!
//! ```
//! use freecell_engine::core::CardId;
//!
//! let ace_of_clubs = CardId::new(1);
//! assert!(ace_of_clubs.is_valid());
//! assert!(!CardId::new(53).is_valid());
//! assert_eq!(ace_of_clubs.to_string(), "1");
//! ```

use serde::{Deserialize, Serialize};

/// Number of cards in a Freecell deck.
pub const DECK_SIZE: usize = 52;

/// Unique identifier for a card.
///
/// UI layers hold these as opaque handles; they never index into the
/// board directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Check if this id names a card of the deck (`1..=52`).
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 1 && self.0 as usize <= DECK_SIZE
    }

    /// Iterate over every valid card id in creation order.
    pub fn all() -> impl Iterator<Item = CardId> {
        (1..=DECK_SIZE as u8).map(CardId)
    }
}

impl From<u8> for CardId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
