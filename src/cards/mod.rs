//! Card system: card values and the deck.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card value (id, suit, rank, derived colour)
//! - `Suit` / `Color`: Suit and its colour
//! - `Deck`: The 52 cards in dealing order, with id lookup

pub mod card;
pub mod deck;

pub use card::{Card, Color, Suit, ACE, KING};
pub use deck::Deck;
