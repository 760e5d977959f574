//! Card values: suit, colour, rank and display text.
//!
//! A `Card` is an immutable value. Its id is fixed by the deck's creation
//! order: for `i` in `0..52` the card has id `i + 1`, suit
//! `Suit::ALL[i % 4]` and rank `RANK_ORDER[i / 4]` (Ace, King, Queen, ... Two).
//! The id can therefore be computed from suit and rank and vice versa.

use serde::{Deserialize, Serialize};

use crate::core::entity::{CardId, DECK_SIZE};
use crate::core::error::FreecellError;

/// Lowest rank (Ace).
pub const ACE: u8 = 1;

/// Highest rank (King).
pub const KING: u8 = 13;

/// Rank order used when creating the deck.
const RANK_ORDER: [u8; 13] = [1, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Clubs,
    Spades,
    Hearts,
    Diamonds,
}

impl Suit {
    /// All suits in deck creation order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];

    /// Position of the suit in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Spades => 1,
            Suit::Hearts => 2,
            Suit::Diamonds => 3,
        }
    }

    /// Suit colour. Clubs and spades are black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    /// Suit symbol for display.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
        }
    }
}

/// Card colour, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
}

/// A playing card.
///
/// ```
/// use freecell_engine::cards::{Card, Color, Suit};
///
/// let ten = Card::new(Suit::Hearts, 10).unwrap();
/// assert_eq!(ten.color(), Color::Red);
/// assert_eq!(ten.label(), "10♥");
/// assert_eq!(Card::from_id(ten.id()), Some(ten));
/// ```
///
/// Deserializing checks that id, suit and rank name the same card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardFields")]
pub struct Card {
    id: CardId,
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Create the card of the given suit and rank (`1..=13`).
    ///
    /// Returns `None` if the rank is out of range.
    #[must_use]
    pub fn new(suit: Suit, rank: u8) -> Option<Self> {
        let slot = RANK_ORDER.iter().position(|&r| r == rank)?;
        let id = CardId::new((slot * 4 + suit.index() + 1) as u8);
        Some(Self { id, suit, rank })
    }

    /// Resolve an id to its card.
    ///
    /// Returns `None` for ids outside `1..=52`.
    #[must_use]
    pub fn from_id(id: CardId) -> Option<Self> {
        if !id.is_valid() {
            return None;
        }
        let i = (id.raw() - 1) as usize;
        Some(Self {
            id,
            suit: Suit::ALL[i % 4],
            rank: RANK_ORDER[i / 4],
        })
    }

    /// All 52 cards in creation order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE).map(|i| Self {
            id: CardId::new(i as u8 + 1),
            suit: Suit::ALL[i % 4],
            rank: RANK_ORDER[i / 4],
        })
    }

    /// Build a card without checking that the fields agree.
    #[cfg(test)]
    pub(crate) fn unchecked(id: CardId, suit: Suit, rank: u8) -> Self {
        Self { id, suit, rank }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Rank from 1 (Ace) to 13 (King).
    #[must_use]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    #[must_use]
    pub fn is_king(&self) -> bool {
        self.rank == KING
    }

    /// Rank title: "A", "K", "Q", "J", "10" .. "2".
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }

    /// Suit symbol.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        self.suit.glyph()
    }

    /// Title followed by glyph, e.g. "Q♠".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.title(), self.glyph())
    }
}

/// Wire shape of a `Card`, checked on the way in.
#[derive(Deserialize)]
struct CardFields {
    id: CardId,
    suit: Suit,
    rank: u8,
}

impl TryFrom<CardFields> for Card {
    type Error = FreecellError;

    fn try_from(fields: CardFields) -> Result<Self, Self::Error> {
        match Card::from_id(fields.id) {
            Some(card) if card.suit == fields.suit && card.rank == fields.rank => Ok(card),
            Some(_) => Err(FreecellError::InvalidDeck(format!(
                "card {} is not the {} of {:?}",
                fields.id, fields.rank, fields.suit
            ))),
            None => Err(FreecellError::UnknownCard(fields.id)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.title(), self.glyph())
    }
}
