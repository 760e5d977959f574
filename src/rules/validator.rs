//! Move validation.
//!
//! Pure functions over a `Board`: which cards may be picked up, and where
//! a picked-up card may go. Only single-card moves exist; there are no
//! sequence moves and no automatic cascades.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, ACE};
use crate::core::entity::CardId;
use crate::zones::{Board, COLUMN_COUNT, FOUNDATION_COUNT, FREE_CELL_COUNT};

/// Where a card can be dropped.
///
/// Produced by `valid_destinations` and handed back opaquely to
/// `FreecellGame::move_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum Destination {
    /// Empty free cell by index.
    FreeCell(usize),
    /// Foundation pile by index.
    Foundation(usize),
    /// On top of the column currently topped by this card.
    ColumnTop(CardId),
    /// Empty column by index.
    EmptyColumn(usize),
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::FreeCell(i) => write!(f, "free cell {}", i),
            Destination::Foundation(i) => write!(f, "foundation {}", i),
            Destination::ColumnTop(id) => write!(f, "card {}", id),
            Destination::EmptyColumn(i) => write!(f, "empty column {}", i),
        }
    }
}

/// Accessible card ids: at most 4 free cells plus 8 column tops.
pub type CardIds = SmallVec<[CardId; FREE_CELL_COUNT + COLUMN_COUNT]>;

/// Legal destinations for one card.
pub type Destinations = SmallVec<[Destination; 16]>;

/// Ids of every card that may be picked up.
///
/// Free cells come first, then column tops left to right. Buried cards
/// and foundation cards are never included.
#[must_use]
pub fn accessible_card_ids(board: &Board) -> CardIds {
    let free = board.free_cells().iter().flatten().map(Card::id);
    let tops = (0..COLUMN_COUNT).filter_map(|i| board.top_of_column(i)).map(|c| c.id());
    free.chain(tops).collect()
}

/// Can `card` go onto the foundation pile at `index`?
#[must_use]
pub fn can_place_on_foundation(board: &Board, card: &Card, index: usize) -> bool {
    if index >= FOUNDATION_COUNT {
        return false;
    }
    match board.foundation_top(index) {
        None => card.rank() == ACE,
        Some(top) => top.suit() == card.suit() && top.rank() + 1 == card.rank(),
    }
}

/// Can `card` go onto `target`? Descending rank, alternating colour.
#[must_use]
pub fn can_stack_on(target: &Card, card: &Card) -> bool {
    target.id() != card.id() && target.rank() == card.rank() + 1 && target.color() != card.color()
}

/// Every legal destination for `card`, in this order:
///
/// 1. each empty free cell
/// 2. each foundation the card continues (or any empty one, for an Ace)
/// 3. each other column top one rank higher and of the opposite colour
/// 4. each empty column
#[must_use]
pub fn valid_destinations(board: &Board, card: &Card) -> Destinations {
    let mut out = Destinations::new();

    for (i, slot) in board.free_cells().iter().enumerate() {
        if slot.is_none() {
            out.push(Destination::FreeCell(i));
        }
    }

    for i in 0..FOUNDATION_COUNT {
        if can_place_on_foundation(board, card, i) {
            out.push(Destination::Foundation(i));
        }
    }

    for i in 0..COLUMN_COUNT {
        if let Some(top) = board.top_of_column(i) {
            if can_stack_on(&top, card) {
                out.push(Destination::ColumnTop(top.id()));
            }
        }
    }

    for i in 0..COLUMN_COUNT {
        if board.column(i).is_empty() {
            out.push(Destination::EmptyColumn(i));
        }
    }

    out
}

/// Is `destination` one of the legal destinations for `card`?
#[must_use]
pub fn is_valid_destination(board: &Board, card: &Card, destination: Destination) -> bool {
    valid_destinations(board, card).contains(&destination)
}

/// Preferred one-click destination: the first legal foundation, else the
/// first empty free cell.
#[must_use]
pub fn auto_destination(board: &Board, card: &Card) -> Option<Destination> {
    let destinations = valid_destinations(board, card);
    destinations
        .iter()
        .find(|d| matches!(d, Destination::Foundation(_)))
        .or_else(|| destinations.iter().find(|d| matches!(d, Destination::FreeCell(_))))
        .copied()
}
