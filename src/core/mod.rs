//! Core value types: tiles, sets, players, games, moves, RNG, configuration.
//!
//! Everything here is a plain value. The rules live in `validation`,
//! `rules`, and `scoring`; those modules take these values by reference and
//! return new ones.

pub mod tile;
pub mod set;
pub mod player;
pub mod game;
pub mod moves;
pub mod rng;
pub mod config;

pub use tile::{Color, Tile, TileId, MAX_VALUE, MIN_VALUE};
pub use set::{GameSet, SetId, SetKind};
pub use player::{Player, PlayerId, UserId};
pub use game::{Game, GameId, GameStatus};
pub use moves::{Move, MoveKind};
pub use rng::{GameRng, GameRngState};
pub use config::{JokerOnlyRuns, RulesConfig};
