//! Board state: free cells, foundations and tableau.
//!
//! The `Board` tracks where every card is and performs the raw moves. It
//! knows which cards are *accessible* (column tops and free cells) but not
//! which moves are legal; legality lives in `rules::validator`.
//!
//! Every card is in exactly one place at any time:
//! - a free cell (at most one card each)
//! - a foundation pile (Ace upwards, top card last)
//! - a tableau column (bottom first, top card last)

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::core::entity::{CardId, DECK_SIZE};
use crate::core::error::{FreecellError, Result};
use crate::rules::Destination;

/// Number of free cells.
pub const FREE_CELL_COUNT: usize = 4;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau columns.
pub const COLUMN_COUNT: usize = 8;

/// A place on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Free cell by index (0..4).
    FreeCell(usize),
    /// Foundation pile by index (0..4).
    Foundation(usize),
    /// Tableau column by index (0..8).
    Column(usize),
}

/// The Freecell layout.
///
/// ## Usage
///
/// ```
/// use freecell_engine::cards::Deck;
/// use freecell_engine::zones::{Board, Location};
///
/// let mut board = Board::new();
/// board.deal(&Deck::new());
///
/// assert_eq!(board.column(0).len(), 7);
/// assert_eq!(board.column(7).len(), 6);
/// assert!(board.card_at(Location::FreeCell(0)).is_none());
/// assert!(board.check_integrity().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    free_cells: [Option<Card>; FREE_CELL_COUNT],
    foundations: [Vec<Card>; FOUNDATION_COUNT],
    tableau: [Vec<Card>; COLUMN_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every card from the board.
    pub fn clear(&mut self) {
        self.free_cells = [None; FREE_CELL_COUNT];
        for pile in &mut self.foundations {
            pile.clear();
        }
        for column in &mut self.tableau {
            column.clear();
        }
    }

    /// Deal the deck round-robin onto the tableau.
    ///
    /// Card `i` goes to column `i % 8`, so columns 0..4 get 7 cards and
    /// columns 4..8 get 6. Free cells and foundations are cleared first.
    pub fn deal(&mut self, deck: &Deck) {
        self.clear();
        for (i, card) in deck.iter().enumerate() {
            self.tableau[i % COLUMN_COUNT].push(*card);
        }
    }

    // === Queries ===

    /// Top (last) card of a column, if any.
    #[must_use]
    pub fn top_of_column(&self, index: usize) -> Option<Card> {
        self.tableau.get(index)?.last().copied()
    }

    /// The accessible card at a location.
    ///
    /// Columns resolve to their top card, foundations to their top card.
    #[must_use]
    pub fn card_at(&self, location: Location) -> Option<Card> {
        match location {
            Location::FreeCell(i) => self.free_cells.get(i).copied().flatten(),
            Location::Foundation(i) => self.foundations.get(i)?.last().copied(),
            Location::Column(i) => self.top_of_column(i),
        }
    }

    /// Find a card anywhere on the board, buried or not.
    #[must_use]
    pub fn locate(&self, id: CardId) -> Option<Location> {
        if let Some(i) = self.tableau.iter().position(|col| col.iter().any(|c| c.id() == id)) {
            return Some(Location::Column(i));
        }
        if let Some(i) = self.free_cells.iter().position(|c| c.map(|c| c.id()) == Some(id)) {
            return Some(Location::FreeCell(i));
        }
        self.foundations
            .iter()
            .position(|pile| pile.iter().any(|c| c.id() == id))
            .map(Location::Foundation)
    }

    /// Where an accessible card sits: a column top or a free cell.
    ///
    /// Columns are searched before free cells.
    #[must_use]
    pub fn accessible_location(&self, id: CardId) -> Option<Location> {
        if let Some(i) = self.column_with_top(id) {
            return Some(Location::Column(i));
        }
        self.free_cells
            .iter()
            .position(|c| c.map(|c| c.id()) == Some(id))
            .map(Location::FreeCell)
    }

    /// Index of the column whose top card is `id`.
    #[must_use]
    pub fn column_with_top(&self, id: CardId) -> Option<usize> {
        (0..COLUMN_COUNT).find(|&i| self.top_of_column(i).map(|c| c.id()) == Some(id))
    }

    #[must_use]
    pub fn free_cells(&self) -> &[Option<Card>; FREE_CELL_COUNT] {
        &self.free_cells
    }

    #[must_use]
    pub fn foundations(&self) -> &[Vec<Card>; FOUNDATION_COUNT] {
        &self.foundations
    }

    #[must_use]
    pub fn tableau(&self) -> &[Vec<Card>; COLUMN_COUNT] {
        &self.tableau
    }

    /// Cards of a column, bottom first. Empty for out-of-range indices.
    #[must_use]
    pub fn column(&self, index: usize) -> &[Card] {
        self.tableau.get(index).map_or(&[], |col| col.as_slice())
    }

    /// Top card of a foundation pile.
    #[must_use]
    pub fn foundation_top(&self, index: usize) -> Option<Card> {
        self.foundations.get(index)?.last().copied()
    }

    /// True when every foundation is topped by a King.
    #[must_use]
    pub fn foundations_complete(&self) -> bool {
        self.foundations
            .iter()
            .all(|pile| pile.last().is_some_and(Card::is_king))
    }

    /// Total number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.free_cells.iter().flatten().count()
            + self.foundations.iter().map(Vec::len).sum::<usize>()
            + self.tableau.iter().map(Vec::len).sum::<usize>()
    }

    /// Verify that all 52 cards are present exactly once.
    pub fn check_integrity(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        let all = self
            .free_cells
            .iter()
            .flatten()
            .chain(self.foundations.iter().flatten())
            .chain(self.tableau.iter().flatten());

        for card in all {
            if !seen.insert(card.id()) {
                return Err(FreecellError::CorruptBoard(format!(
                    "card {} appears more than once",
                    card.id()
                )));
            }
        }

        if let Some(missing) = CardId::all().find(|id| !seen.contains(id)) {
            return Err(FreecellError::CorruptBoard(format!("card {} is missing", missing)));
        }

        debug_assert_eq!(seen.len(), DECK_SIZE);
        Ok(())
    }

    // === Mutation ===

    /// Remove an accessible card (column top or free cell).
    ///
    /// Buried cards can never be removed directly.
    pub fn remove_accessible_card(&mut self, id: CardId) -> Result<Card> {
        match self.accessible_location(id) {
            Some(Location::Column(i)) => self.tableau[i]
                .pop()
                .ok_or(FreecellError::CardNotAccessible(id)),
            Some(Location::FreeCell(i)) => self.free_cells[i]
                .take()
                .ok_or(FreecellError::CardNotAccessible(id)),
            _ => Err(FreecellError::CardNotAccessible(id)),
        }
    }

    /// Check that `destination` can physically receive `card` without
    /// overwriting or losing anything. No rank, suit or colour rules.
    pub fn ensure_placeable(&self, card: CardId, destination: Destination) -> Result<()> {
        let usable = match destination {
            Destination::FreeCell(i) => matches!(self.free_cells.get(i), Some(None)),
            Destination::Foundation(i) => i < FOUNDATION_COUNT,
            Destination::ColumnTop(target) => {
                target != card && self.column_with_top(target).is_some()
            }
            Destination::EmptyColumn(i) => self.tableau.get(i).is_some_and(Vec::is_empty),
        };

        if usable {
            Ok(())
        } else {
            Err(FreecellError::InvalidDestination { card, destination })
        }
    }

    /// Put a card on top of the column whose top card is `target`.
    pub fn place_on_column(&mut self, card: Card, target: CardId) -> Result<()> {
        let column = self
            .column_with_top(target)
            .ok_or(FreecellError::InvalidDestination {
                card: card.id(),
                destination: Destination::ColumnTop(target),
            })?;
        self.tableau[column].push(card);
        Ok(())
    }

    /// Put a card onto an empty column.
    pub fn place_on_empty_column(&mut self, card: Card, index: usize) -> Result<()> {
        self.ensure_placeable(card.id(), Destination::EmptyColumn(index))?;
        self.tableau[index].push(card);
        Ok(())
    }

    /// Put a card into an empty free cell.
    pub fn place_in_free_cell(&mut self, card: Card, index: usize) -> Result<()> {
        self.ensure_placeable(card.id(), Destination::FreeCell(index))?;
        self.free_cells[index] = Some(card);
        Ok(())
    }

    /// Put a card on a foundation pile.
    pub fn place_in_foundation(&mut self, card: Card, index: usize) -> Result<()> {
        self.ensure_placeable(card.id(), Destination::Foundation(index))?;
        self.foundations[index].push(card);
        Ok(())
    }

    /// Put a card at a destination.
    pub fn place(&mut self, card: Card, destination: Destination) -> Result<()> {
        match destination {
            Destination::FreeCell(i) => self.place_in_free_cell(card, i),
            Destination::Foundation(i) => self.place_in_foundation(card, i),
            Destination::ColumnTop(target) => self.place_on_column(card, target),
            Destination::EmptyColumn(i) => self.place_on_empty_column(card, i),
        }
    }

    /// Build a board from explicit contents. Used to set up positions in tests.
    #[cfg(test)]
    pub(crate) fn from_parts(
        free_cells: [Option<Card>; FREE_CELL_COUNT],
        foundations: [Vec<Card>; FOUNDATION_COUNT],
        tableau: [Vec<Card>; COLUMN_COUNT],
    ) -> Self {
        Self {
            free_cells,
            foundations,
            tableau,
        }
    }
}
