//! Card locations.
//!
//! ## Key Types
//!
//! - `Board`: Free cells, foundations and tableau columns
//! - `Location`: A free cell, foundation or column by index

pub mod board;

pub use board::{Board, Location, COLUMN_COUNT, FOUNDATION_COUNT, FREE_CELL_COUNT};
