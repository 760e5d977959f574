//! Freecell placement rules.
//!
//! The validator is a set of pure functions over a `Board`:
//! - Which cards can be picked up
//! - Where a picked-up card may legally go
//! - Which destination a one-click move should take
//!
//! Nothing here mutates the board; `game::FreecellGame` applies moves.

pub mod validator;

pub use validator::{
    accessible_card_ids, auto_destination, can_place_on_foundation, can_stack_on,
    is_valid_destination, valid_destinations, CardIds, Destination, Destinations,
};
