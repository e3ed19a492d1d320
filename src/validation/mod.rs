//! Set and board validation.
//!
//! `Validator` carries the configurable parts of the rules (all-joker run
//! policy, first-meld minimum). The free functions use the default table
//! rules and are what most callers want.
//!
//! ```
//! use rummikub_engine::core::{Color, GameSet, Tile, TileId};
//! use rummikub_engine::validation::validate_set;
//!
//! let run = GameSet::run(0, [
//!     Tile::new(TileId(0), Color::Red, 1),
//!     Tile::new(TileId(1), Color::Red, 2),
//!     Tile::new(TileId(2), Color::Red, 3),
//! ]);
//! assert!(validate_set(&run));
//! ```

mod audit;
mod board;
mod set;

pub use audit::audit_tiles;
pub use board::meld_points;
pub use set::{MAX_GROUP_SIZE, MIN_SET_SIZE};

use crate::core::{GameSet, JokerOnlyRuns, RulesConfig};

/// Set/board validator for one rules configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Validator {
    pub joker_only_runs: JokerOnlyRuns,
    pub min_first_meld_score: u32,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(&RulesConfig::default())
    }
}

impl Validator {
    #[must_use]
    pub fn new(config: &RulesConfig) -> Self {
        Self {
            joker_only_runs: config.joker_only_runs,
            min_first_meld_score: config.min_first_meld_score,
        }
    }

    /// Check whether a single set is a legal run or group.
    #[must_use]
    pub fn validate_set(&self, set: &GameSet) -> bool {
        set::is_valid(set, self.joker_only_runs)
    }

    /// Check that every set is legal and no tile id appears twice.
    #[must_use]
    pub fn validate_board<'a>(&self, sets: impl IntoIterator<Item = &'a GameSet>) -> bool {
        board::is_valid(sets, |set| self.validate_set(set))
    }

    /// Board check plus the first-meld point minimum.
    ///
    /// `min_score` overrides the configured minimum when given.
    #[must_use]
    pub fn validate_first_meld(&self, sets: &[GameSet], min_score: Option<u32>) -> bool {
        let required = min_score.unwrap_or(self.min_first_meld_score);
        self.validate_board(sets) && meld_points(sets) >= required
    }
}

/// `Validator::validate_set` with default rules.
#[must_use]
pub fn validate_set(set: &GameSet) -> bool {
    Validator::default().validate_set(set)
}

/// `Validator::validate_board` with default rules.
#[must_use]
pub fn validate_board(sets: &[GameSet]) -> bool {
    Validator::default().validate_board(sets)
}

/// `Validator::validate_first_meld` with default rules and an explicit minimum.
#[must_use]
pub fn validate_first_meld(sets: &[GameSet], min_score: u32) -> bool {
    Validator::default().validate_first_meld(sets, Some(min_score))
}
