//! Seats at the table.
//!
//! ## PlayerId
//!
//! Seat identifier supporting 1-255 seats. Seat order is turn order.
//!
//! ## Player
//!
//! One seat's private hand plus public bookkeeping (score, initial meld).
//! The hand is an `im::Vector` so cloning a player is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileId};

/// Seat identifier. Seat indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seat IDs for a game with `player_count` seats.
    ///
    /// ```
    /// use rummikub_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// External identity of the person in a seat (owned by the session layer).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One seat in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub user_id: UserId,
    pub hand: Vector<Tile>,
    /// Running score; finished games add their deltas here.
    pub score: i64,
    pub has_made_initial_meld: bool,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, user_id: UserId) -> Self {
        Self {
            id,
            user_id,
            hand: Vector::new(),
            score: 0,
            has_made_initial_meld: false,
        }
    }

    /// Builder-style hand replacement, mostly for fixtures.
    #[must_use]
    pub fn with_hand(mut self, hand: impl IntoIterator<Item = Tile>) -> Self {
        self.hand = hand.into_iter().collect();
        self
    }

    /// Look up a tile in hand by id.
    #[must_use]
    pub fn tile_in_hand(&self, id: TileId) -> Option<&Tile> {
        self.hand.iter().find(|t| t.id == id)
    }

    /// Check if a tile is in hand.
    #[must_use]
    pub fn holds(&self, id: TileId) -> bool {
        self.tile_in_hand(id).is_some()
    }

    /// Remove a tile from hand.
    ///
    /// Returns the removed tile, or `None` if it was not held.
    pub fn take_tile(&mut self, id: TileId) -> Option<Tile> {
        let pos = self.hand.iter().position(|t| t.id == id)?;
        Some(self.hand.remove(pos))
    }

    /// Number of tiles in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }
}
