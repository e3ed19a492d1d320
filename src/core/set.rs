//! Melds on the board.
//!
//! A `GameSet` is an ordered list of tiles declared as either a run or a
//! group. Construction never validates; see `validation::validate_set`.

use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileId};

/// Set identifier, assigned by whoever proposes the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetId(pub u32);

impl std::fmt::Display for SetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Set({})", self.0)
    }
}

/// Declared shape of a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetKind {
    /// One color, consecutive values.
    Run,
    /// One value, distinct colors.
    Group,
}

/// A meld on the board or in a pending play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSet {
    pub id: SetId,
    pub kind: SetKind,
    pub tiles: Vec<Tile>,
}

impl GameSet {
    #[must_use]
    pub fn new(id: SetId, kind: SetKind, tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            id,
            kind,
            tiles: tiles.into_iter().collect(),
        }
    }

    /// Shorthand for a run.
    #[must_use]
    pub fn run(id: u32, tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self::new(SetId(id), SetKind::Run, tiles)
    }

    /// Shorthand for a group.
    #[must_use]
    pub fn group(id: u32, tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self::new(SetId(id), SetKind::Group, tiles)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tile_ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.iter().map(|t| t.id)
    }

    /// Sum of non-joker face values.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.tiles.iter().map(Tile::meld_points).sum()
    }
}
