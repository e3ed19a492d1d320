//! Game values.
//!
//! ## Game
//!
//! One match: seats in turn order, the draw pool, the board, and lifecycle
//! status. All collections are `im` persistent vectors, so `clone()` is O(1)
//! and a cloned game can be modified without touching the original. The
//! engine only ever reads a `&Game` and returns a fresh `Game`.
//!
//! ## Snapshots
//!
//! `to_bytes` / `from_bytes` encode a game with `bincode` for a session layer
//! that wants to store or ship it. The engine itself holds no state between
//! calls.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId, UserId};
use super::set::GameSet;
use super::tile::{Tile, TileId};
use crate::error::EngineError;

/// Game identifier, assigned by the session layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Lifecycle status. Only `Playing` accepts moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Waiting,
    Playing,
    Finished,
    Paused,
}

/// One match in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub players: Vector<Player>,
    pub current_player_index: usize,
    /// Draw pile; the top is the end of the vector.
    pub pool: Vector<Tile>,
    pub board: Vector<GameSet>,
    pub status: GameStatus,
    pub winner_id: Option<UserId>,
}

impl Game {
    /// Create a `Waiting` game with one empty seat per user.
    ///
    /// # Panics
    ///
    /// Panics if more than 255 users are given.
    #[must_use]
    pub fn new(id: GameId, users: impl IntoIterator<Item = UserId>) -> Self {
        let users: Vec<UserId> = users.into_iter().collect();
        assert!(users.len() <= 255, "At most 255 players supported");

        let players: Vector<Player> = users
            .into_iter()
            .enumerate()
            .map(|(i, user)| Player::new(PlayerId::new(i as u8), user))
            .collect();

        Self {
            id,
            players,
            current_player_index: 0,
            pool: Vector::new(),
            board: Vector::new(),
            status: GameStatus::Waiting,
            winner_id: None,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get a seat, or `PlayerOutOfRange`.
    pub fn player(&self, index: usize) -> Result<&Player, EngineError> {
        self.players.get(index).ok_or(EngineError::PlayerOutOfRange {
            index,
            player_count: self.players.len(),
        })
    }

    /// Get the seat whose turn it is.
    pub fn current_player(&self) -> Result<&Player, EngineError> {
        self.player(self.current_player_index)
    }

    /// Check if the game accepts moves.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Iterate over every tile on the board.
    pub fn board_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.board.iter().flat_map(|set| set.tiles.iter())
    }

    /// Look up a board tile by id.
    #[must_use]
    pub fn board_tile(&self, id: TileId) -> Option<&Tile> {
        self.board_tiles().find(|t| t.id == id)
    }

    /// Every tile in the game: pool, hands, and board.
    pub fn all_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.pool
            .iter()
            .chain(self.players.iter().flat_map(|p| p.hand.iter()))
            .chain(self.board_tiles())
    }

    /// Encode this game as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
