//! Engine configuration.
//!
//! The host application builds a `FreecellConfig` once and hands it to
//! `FreecellGame::new`:
//! - `seed`: fixed seed for reproducible deals, or `None` for entropy
//! - `validation`: how much `move_card` trusts its caller

use serde::{Deserialize, Serialize};

/// How `move_card` treats the destination it is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveValidation {
    /// Re-run the legality rules and reject illegal destinations.
    #[default]
    Strict,
    /// Trust the caller on rank, suit and colour. Only structural checks
    /// remain (slot exists, free cell empty, target column top present),
    /// so a bad destination can never lose a card.
    Trusting,
}

/// Engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreecellConfig {
    /// Seed for the dealing RNG. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Destination checking performed by `move_card`.
    pub validation: MoveValidation,
}

impl FreecellConfig {
    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with the given validation mode.
    pub fn with_validation(mut self, validation: MoveValidation) -> Self {
        self.validation = validation;
        self
    }
}
