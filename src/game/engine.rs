//! The Freecell engine.
//!
//! `FreecellGame` owns the deck, the board and the dealing RNG. A UI layer
//! drives it through a small query/command interface:
//!
//! 1. `movable_card_ids` to know what can be picked up
//! 2. `destinations_for` to know where a card can go
//! 3. `move_card` with one of those destinations
//! 4. `snapshot` (or the board accessors) to redraw, `is_won` to finish
//!
//! ```
//! use freecell_engine::{FreecellConfig, FreecellGame};
//!
//! let mut game = FreecellGame::new(FreecellConfig::default().with_seed(11));
//!
//! let card = game.movable_card_ids()[0];
//! let dest = game.destinations_for(card).unwrap()[0];
//! game.move_card(card, dest).unwrap();
//!
//! assert!(game.board().check_integrity().is_ok());
//! assert!(!game.is_won());
//! ```

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::snapshot::GameSnapshot;
use crate::cards::{Card, Deck};
use crate::core::config::{FreecellConfig, MoveValidation};
use crate::core::entity::CardId;
use crate::core::error::{FreecellError, Result};
use crate::core::rng::GameRng;
use crate::rules::{self, CardIds, Destination, Destinations};
use crate::zones::{Board, COLUMN_COUNT, FOUNDATION_COUNT, FREE_CELL_COUNT};

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Cards are dealt and play is in progress.
    Dealt,
    /// Every foundation holds its King. Terminal until `reset`.
    Won,
}

/// A single-player Freecell game.
#[derive(Clone, Debug)]
pub struct FreecellGame {
    config: FreecellConfig,
    rng: GameRng,
    deal_seed: Option<u64>,
    deck: Deck,
    board: Board,
    status: GameStatus,
}

impl FreecellGame {
    /// Create a game and deal a freshly shuffled deck.
    #[must_use]
    pub fn new(config: FreecellConfig) -> Self {
        let mut game = Self::empty(config);
        game.init();
        game
    }

    /// Create a game dealt from a fixed arrangement, without shuffling.
    ///
    /// `seed` is `None` for this deal. A later `reset` shuffles as usual.
    #[must_use]
    pub fn with_deck(config: FreecellConfig, deck: Deck) -> Self {
        let mut game = Self::empty(config);
        game.deal_from(deck);
        game
    }

    fn empty(config: FreecellConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self {
            config,
            rng,
            deal_seed: None,
            deck: Deck::new(),
            board: Board::new(),
            status: GameStatus::Dealt,
        }
    }

    /// Shuffle a new deck and deal it onto the board.
    pub fn init(&mut self) {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        self.deal_seed = Some(self.rng.seed());
        self.deal_from(deck);
    }

    /// Clear the board, then shuffle and deal again.
    pub fn reset(&mut self) {
        self.board.clear();
        self.init();
    }

    fn deal_from(&mut self, deck: Deck) {
        self.board.deal(&deck);
        self.deck = deck;
        self.status = GameStatus::Dealt;
        debug!(
            "dealt (seed {:?}) with column tops {:?}",
            self.deal_seed,
            self.movable_card_ids().as_slice()
        );
    }

    // === Queries ===

    /// Ids of the cards that can be picked up right now.
    #[must_use]
    pub fn movable_card_ids(&self) -> CardIds {
        rules::accessible_card_ids(&self.board)
    }

    /// Resolve an id to its card.
    pub fn card(&self, id: CardId) -> Result<Card> {
        self.deck.find_by_id(id)
    }

    /// Every legal destination for the card with this id.
    pub fn destinations_for(&self, id: CardId) -> Result<Destinations> {
        let card = self.card(id)?;
        Ok(rules::valid_destinations(&self.board, &card))
    }

    /// Where a one-click move would send the card: a foundation if one
    /// accepts it, otherwise an empty free cell.
    pub fn auto_destination(&self, id: CardId) -> Result<Option<Destination>> {
        let card = self.accessible_card(id)?;
        Ok(rules::auto_destination(&self.board, &card))
    }

    /// True iff all four foundations are topped by a King.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.foundations_complete()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Seed of the RNG the current deal was shuffled from, or `None` for a
    /// fixed arrangement dealt with `with_deck`.
    ///
    /// Deals after a `reset` continue the same RNG stream, so
    /// `FreecellGame::new` with this seed reproduces the first of them.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.deal_seed
    }

    #[must_use]
    pub fn config(&self) -> &FreecellConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn free_cells(&self) -> &[Option<Card>; FREE_CELL_COUNT] {
        self.board.free_cells()
    }

    #[must_use]
    pub fn foundations(&self) -> &[Vec<Card>; FOUNDATION_COUNT] {
        self.board.foundations()
    }

    #[must_use]
    pub fn tableau(&self) -> &[Vec<Card>; COLUMN_COUNT] {
        self.board.tableau()
    }

    /// Detached render view of the whole table.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.board, self.status, &self.movable_card_ids())
    }

    fn accessible_card(&self, id: CardId) -> Result<Card> {
        self.board
            .accessible_location(id)
            .and_then(|location| self.board.card_at(location))
            .ok_or(FreecellError::CardNotAccessible(id))
    }

    // === Commands ===

    /// Move one card. The only operation that changes the board.
    ///
    /// Fails with `CardNotAccessible` if the card is not a column top or in
    /// a free cell, and with `InvalidDestination` if the destination is
    /// illegal (`Strict`) or unusable (`Trusting`). The board is untouched
    /// on failure.
    pub fn move_card(&mut self, id: CardId, destination: Destination) -> Result<()> {
        let card = self.accessible_card(id).map_err(|err| {
            warn!("rejected move of card {}: not accessible", id);
            err
        })?;

        if self.config.validation == MoveValidation::Strict
            && !rules::is_valid_destination(&self.board, &card, destination)
        {
            warn!("rejected move of {} to {}: illegal", card, destination);
            return Err(FreecellError::InvalidDestination {
                card: id,
                destination,
            });
        }
        self.board.ensure_placeable(id, destination)?;

        let card = self.board.remove_accessible_card(id)?;
        self.board.place(card, destination)?;
        debug!("moved {} to {}", card, destination);

        if self.is_won() {
            self.status = GameStatus::Won;
            info!("game won (seed {:?})", self.deal_seed);
        }
        Ok(())
    }

    /// Perform the one-click move for a card, if it has one.
    ///
    /// Returns the destination taken, or `None` if neither a foundation
    /// nor a free cell accepts the card.
    pub fn auto_move(&mut self, id: CardId) -> Result<Option<Destination>> {
        let Some(destination) = self.auto_destination(id)? else {
            return Ok(None);
        };
        self.move_card(id, destination)?;
        Ok(Some(destination))
    }
}
