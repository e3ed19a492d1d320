//! Rules configuration.
//!
//! The engine never hardcodes table rules that house variants change
//! (first-meld minimum, hand size, joker penalty, seat limits). Callers build
//! a `RulesConfig` once, usually from `Default`, and pass it to the engine.
//!
//! ```
//! use rummikub_engine::core::{JokerOnlyRuns, RulesConfig};
//!
//! let config = RulesConfig::default()
//!     .with_min_first_meld_score(25)
//!     .with_joker_only_runs(JokerOnlyRuns::Allow);
//!
//! assert_eq!(config.min_first_meld_score, 25);
//! assert_eq!(config.tiles_per_player, 14);
//! ```

use serde::{Deserialize, Serialize};

/// Default first-meld minimum.
pub const DEFAULT_MIN_FIRST_MELD_SCORE: u32 = 30;

/// Default tiles dealt to each seat.
pub const DEFAULT_TILES_PER_PLAYER: usize = 14;

/// Default end-of-game penalty for a joker left in hand.
pub const DEFAULT_JOKER_PENALTY: i64 = 30;

/// How the set validator treats a run made only of jokers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JokerOnlyRuns {
    /// A run needs at least one numbered tile.
    #[default]
    Reject,
    /// Three or more jokers alone form a valid run.
    Allow,
}

/// Table rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Points a player's first meld must reach.
    pub min_first_meld_score: u32,

    /// Tiles dealt to each seat at game start.
    pub tiles_per_player: usize,

    /// Penalty for each joker left in a losing hand.
    pub joker_penalty: i64,

    /// Fewest seats a game can start with.
    pub min_players: usize,

    /// Most seats a game can start with.
    pub max_players: usize,

    /// All-joker run policy.
    pub joker_only_runs: JokerOnlyRuns,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_first_meld_score: DEFAULT_MIN_FIRST_MELD_SCORE,
            tiles_per_player: DEFAULT_TILES_PER_PLAYER,
            joker_penalty: DEFAULT_JOKER_PENALTY,
            min_players: 2,
            max_players: 4,
            joker_only_runs: JokerOnlyRuns::Reject,
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub fn with_min_first_meld_score(mut self, score: u32) -> Self {
        self.min_first_meld_score = score;
        self
    }

    #[must_use]
    pub fn with_tiles_per_player(mut self, count: usize) -> Self {
        self.tiles_per_player = count;
        self
    }

    #[must_use]
    pub fn with_joker_penalty(mut self, penalty: i64) -> Self {
        self.joker_penalty = penalty;
        self
    }

    /// Set the allowed seat range.
    ///
    /// # Panics
    ///
    /// Panics if `min` is zero or greater than `max`.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        assert!(min >= 1, "Must allow at least 1 player");
        assert!(min <= max, "Minimum players must not exceed maximum");
        self.min_players = min;
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_joker_only_runs(mut self, policy: JokerOnlyRuns) -> Self {
        self.joker_only_runs = policy;
        self
    }

    /// Check if a seat count is within the configured range.
    #[must_use]
    pub fn allows_player_count(&self, count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&count)
    }
}
