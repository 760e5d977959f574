//! # freecell-engine
//!
//! The rules engine of a single-player Freecell game.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: Rendering, input and animation live in the host.
//!    The host asks what can move, asks where it can go, and issues moves.
//!
//! 2. **Single-card moves**: A move takes one accessible card (a column top
//!    or a free-cell card) to a free cell, a foundation, a column top or an
//!    empty column. There are no sequence moves or automatic cascades.
//!
//! 3. **Typed destinations**: Destinations are `Destination` values produced
//!    by the validator and handed back unchanged; nothing is parsed.
//!
//! 4. **Explicit errors**: Contract violations come back as `FreecellError`
//!    instead of being ignored.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, configuration, errors
//! - `cards`: Card values and the deck
//! - `zones`: The board (free cells, foundations, tableau)
//! - `rules`: Pure move validation
//! - `game`: The `FreecellGame` engine and render snapshots

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CardId, DECK_SIZE,
    GameRng,
    FreecellConfig, MoveValidation,
    FreecellError, Result,
};

pub use crate::cards::{Card, Color, Deck, Suit};

pub use crate::zones::{Board, Location, COLUMN_COUNT, FOUNDATION_COUNT, FREE_CELL_COUNT};

pub use crate::rules::{CardIds, Destination, Destinations};

pub use crate::game::{CardView, FreecellGame, GameSnapshot, GameStatus};
