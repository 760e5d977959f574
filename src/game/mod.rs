//! The game engine and its render views.
//!
//! - `FreecellGame`: Owns deck, board and RNG; the only thing that moves cards
//! - `GameStatus`: `Dealt` during play, `Won` once every King is home
//! - `GameSnapshot` / `CardView`: Serializable table state for renderers

mod engine;
mod snapshot;

pub use engine::{FreecellGame, GameStatus};
pub use snapshot::{CardView, GameSnapshot};
