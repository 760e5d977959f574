//! Core engine types: card ids, RNG, configuration, errors.
//!
//! Everything here is independent of the board layout and the rules.

pub mod entity;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{CardId, DECK_SIZE};
pub use rng::GameRng;
pub use config::{FreecellConfig, MoveValidation};
pub use error::{FreecellError, Result};
