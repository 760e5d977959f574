//! Read-only render views.
//!
//! A `GameSnapshot` is everything a rendering layer needs to redraw the
//! table, detached from the engine. It serializes to JSON for hosts that
//! live across an FFI or WASM boundary.

use serde::{Deserialize, Serialize};

use super::engine::GameStatus;
use crate::cards::{Card, Color, Suit};
use crate::core::entity::CardId;
use crate::zones::Board;

/// Display data for one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub suit: Suit,
    pub rank: u8,
    pub color: Color,
    /// "A", "K", "Q", "J", "10" .. "2".
    pub title: String,
    /// Suit symbol.
    pub glyph: String,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id(),
            suit: card.suit(),
            rank: card.rank(),
            color: card.color(),
            title: card.title().to_string(),
            glyph: card.glyph().to_string(),
        }
    }
}

/// The whole table at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    /// One entry per free cell.
    pub free_cells: Vec<Option<CardView>>,
    /// One pile per foundation, Ace first.
    pub foundations: Vec<Vec<CardView>>,
    /// One column per tableau column, bottom card first.
    pub tableau: Vec<Vec<CardView>>,
    /// Cards the player may pick up.
    pub movable: Vec<CardId>,
}

impl GameSnapshot {
    pub(crate) fn capture(board: &Board, status: GameStatus, movable: &[CardId]) -> Self {
        Self {
            status,
            free_cells: board
                .free_cells()
                .iter()
                .map(|slot| slot.as_ref().map(CardView::from))
                .collect(),
            foundations: board
                .foundations()
                .iter()
                .map(|pile| pile.iter().map(CardView::from).collect())
                .collect(),
            tableau: board
                .tableau()
                .iter()
                .map(|col| col.iter().map(CardView::from).collect())
                .collect(),
            movable: movable.to_vec(),
        }
    }

    /// Number of cards shown anywhere on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.free_cells.iter().flatten().count()
            + self.foundations.iter().map(Vec::len).sum::<usize>()
            + self.tableau.iter().map(Vec::len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;
    use crate::rules::accessible_card_ids;

    #[test]
    fn test_card_view_fields() {
        let card = Card::new(Suit::Diamonds, 12).unwrap();
        let view = CardView::from(&card);

        assert_eq!(view.id, card.id());
        assert_eq!(view.rank, 12);
        assert_eq!(view.color, Color::Red);
        assert_eq!(view.title, "Q");
        assert_eq!(view.glyph, "♦");
    }

    #[test]
    fn test_capture_dealt_board() {
        let mut board = Board::new();
        board.deal(&Deck::new());
        let movable = accessible_card_ids(&board);

        let snapshot = GameSnapshot::capture(&board, GameStatus::Dealt, &movable);
        assert_eq!(snapshot.free_cells.len(), 4);
        assert_eq!(snapshot.foundations.len(), 4);
        assert_eq!(snapshot.tableau.len(), 8);
        assert_eq!(snapshot.tableau[0].len(), 7);
        assert_eq!(snapshot.card_count(), 52);
        assert_eq!(snapshot.movable.len(), 8);
    }

    #[test]
    fn test_snapshot_json() {
        let mut board = Board::new();
        board.deal(&Deck::new());
        let snapshot = GameSnapshot::capture(&board, GameStatus::Dealt, &[]);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"status\":\"dealt\""));
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
