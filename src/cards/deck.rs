//! The 52-card deck.
//!
//! `Deck` owns the ordered sequence the board is dealt from. It is created
//! in a fixed order, shuffled in place, and used afterwards to resolve ids
//! coming back from the UI layer.

use rustc_hash::FxHashSet;

use super::card::Card;
use crate::core::entity::{CardId, DECK_SIZE};
use crate::core::error::{FreecellError, Result};
use crate::core::rng::GameRng;

/// Ordered sequence of all 52 cards.
///
/// ## Example
///
/// ```
/// use freecell_engine::cards::Deck;
/// use freecell_engine::core::{CardId, GameRng};
///
/// let mut deck = Deck::new();
/// deck.shuffle(&mut GameRng::new(1));
///
/// let ace = deck.find_by_id(CardId::new(1)).unwrap();
/// assert!(ace.is_ace());
/// assert!(deck.find_by_id(CardId::new(60)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Create a deck in creation order (ids 1..=52).
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Card::all().collect(),
        }
    }

    /// Build a deck from an explicit arrangement.
    ///
    /// Fails with `InvalidDeck` unless the arrangement holds exactly the
    /// 52 distinct cards, each with the suit and rank its id names.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        if cards.len() != DECK_SIZE {
            return Err(FreecellError::InvalidDeck(format!(
                "expected {} cards, got {}",
                DECK_SIZE,
                cards.len()
            )));
        }

        let mut seen = FxHashSet::default();
        for card in &cards {
            if Card::from_id(card.id()) != Some(*card) {
                return Err(FreecellError::InvalidDeck(format!(
                    "card {} does not match its suit and rank",
                    card.id()
                )));
            }
            if !seen.insert(card.id()) {
                return Err(FreecellError::InvalidDeck(format!(
                    "card {} appears more than once",
                    card.id()
                )));
            }
        }

        Ok(Self { cards })
    }

    /// Build a deck from an arrangement of ids.
    pub fn from_ids(ids: &[CardId]) -> Result<Self> {
        let cards = ids
            .iter()
            .map(|&id| Card::from_id(id).ok_or(FreecellError::UnknownCard(id)))
            .collect::<Result<Vec<_>>>()?;
        Self::from_cards(cards)
    }

    /// Reorder the deck into a uniformly random permutation.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Resolve an id to its card.
    pub fn find_by_id(&self, id: CardId) -> Result<Card> {
        self.cards
            .iter()
            .find(|card| card.id() == id)
            .copied()
            .ok_or(FreecellError::UnknownCard(id))
    }

    /// Cards in current order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Ids in current order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(Card::id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn sorted_ids(deck: &Deck) -> Vec<CardId> {
        let mut ids = deck.ids();
        ids.sort();
        ids
    }

    #[test]
    fn test_new_deck_is_complete_and_ordered() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.ids(), CardId::all().collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_keeps_the_same_cards() {
        let mut deck = Deck::new();
        deck.shuffle(&mut GameRng::new(42));

        assert_ne!(deck, Deck::new());
        assert_eq!(sorted_ids(&deck), CardId::all().collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle(&mut GameRng::new(5));
        b.shuffle(&mut GameRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_find_by_id() {
        let mut deck = Deck::new();
        deck.shuffle(&mut GameRng::new(9));

        for id in CardId::all() {
            assert_eq!(deck.find_by_id(id).unwrap().id(), id);
        }
        assert_eq!(
            deck.find_by_id(CardId::new(0)),
            Err(FreecellError::UnknownCard(CardId::new(0)))
        );
    }

    #[test]
    fn test_from_cards_rejects_short_deck() {
        let cards: Vec<_> = Card::all().take(51).collect();
        assert!(matches!(
            Deck::from_cards(cards),
            Err(FreecellError::InvalidDeck(_))
        ));
    }

    #[test]
    fn test_from_cards_rejects_duplicates() {
        let mut cards: Vec<_> = Card::all().collect();
        cards[10] = cards[0];
        assert!(matches!(
            Deck::from_cards(cards),
            Err(FreecellError::InvalidDeck(_))
        ));
    }

    #[test]
    fn test_from_cards_rejects_inconsistent_card() {
        // Ace of clubs' id on a king of hearts: ids stay unique, but the
        // board would hold two kings of hearts.
        let mut cards: Vec<_> = Card::all().collect();
        cards[0] = Card::unchecked(CardId::new(1), Suit::Hearts, 13);

        assert!(matches!(
            Deck::from_cards(cards),
            Err(FreecellError::InvalidDeck(_))
        ));
    }

    #[test]
    fn test_from_ids() {
        let mut ids: Vec<_> = CardId::all().collect();
        ids.reverse();
        let deck = Deck::from_ids(&ids).unwrap();
        assert_eq!(deck.cards()[0].id(), CardId::new(52));

        ids[0] = CardId::new(77);
        assert_eq!(
            Deck::from_ids(&ids),
            Err(FreecellError::UnknownCard(CardId::new(77)))
        );
    }
}
