//! Tile value types.
//!
//! A `Tile` is one physical game piece. Numbered tiles carry a color and a
//! face value in `1..=13`; jokers carry placeholder values that the
//! validators ignore.
//!
//! ## Usage
//!
//! ```
//! use rummikub_engine::core::{Color, Tile, TileId};
//!
//! let red_five = Tile::new(TileId(0), Color::Red, 5);
//! let joker = Tile::joker(TileId(1));
//!
//! assert_eq!(red_five.face_value(), Some(5));
//! assert!(joker.is_joker);
//! assert_eq!(joker.face_value(), None);
//! ```

use serde::{Deserialize, Serialize};

/// Lowest face value on a numbered tile.
pub const MIN_VALUE: u8 = 1;

/// Highest face value on a numbered tile.
pub const MAX_VALUE: u8 = 13;

/// Unique identifier of a tile within one deck instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Tile color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Blue,
    Black,
    Orange,
}

impl Color {
    /// All four colors in deck order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Black, Color::Orange];
}

/// One physical game piece.
///
/// Two tiles with the same color and value are still different tiles if
/// their ids differ. Validators compare by id for uniqueness and by
/// color/value for matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub color: Color,
    pub value: u8,
    pub is_joker: bool,
}

impl Tile {
    /// Create a numbered tile.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside `1..=13`.
    #[must_use]
    pub fn new(id: TileId, color: Color, value: u8) -> Self {
        assert!(
            (MIN_VALUE..=MAX_VALUE).contains(&value),
            "Tile value must be 1-13"
        );
        Self {
            id,
            color,
            value,
            is_joker: false,
        }
    }

    /// Create a joker. Color and value are placeholders.
    #[must_use]
    pub const fn joker(id: TileId) -> Self {
        Self {
            id,
            color: Color::Red,
            value: 0,
            is_joker: true,
        }
    }

    /// Face value for matching, `None` for jokers.
    #[must_use]
    pub fn face_value(&self) -> Option<u8> {
        (!self.is_joker).then_some(self.value)
    }

    /// Color for matching, `None` for jokers.
    #[must_use]
    pub fn match_color(&self) -> Option<Color> {
        (!self.is_joker).then_some(self.color)
    }

    /// Check if `other` names this same physical tile.
    ///
    /// Numbered tiles must agree on every field. Jokers only need the same
    /// id, since their color and value are placeholders.
    #[must_use]
    pub fn same_physical(&self, other: &Tile) -> bool {
        if self.is_joker {
            other.is_joker && self.id == other.id
        } else {
            self == other
        }
    }

    /// Points this tile contributes to a first meld (jokers count 0).
    #[must_use]
    pub fn meld_points(&self) -> u32 {
        self.face_value().map_or(0, u32::from)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_joker {
            write!(f, "joker#{}", self.id.0)
        } else {
            write!(f, "{:?}-{}#{}", self.color, self.value, self.id.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_tile() {
        let tile = Tile::new(TileId(3), Color::Blue, 7);

        assert!(!tile.is_joker);
        assert_eq!(tile.face_value(), Some(7));
        assert_eq!(tile.match_color(), Some(Color::Blue));
        assert_eq!(tile.meld_points(), 7);
    }

    #[test]
    fn test_joker_ignores_placeholders() {
        let joker = Tile::joker(TileId(104));

        assert_eq!(joker.face_value(), None);
        assert_eq!(joker.match_color(), None);
        assert_eq!(joker.meld_points(), 0);
    }

    #[test]
    fn test_same_face_different_ids_are_distinct() {
        let a = Tile::new(TileId(0), Color::Red, 5);
        let b = Tile::new(TileId(1), Color::Red, 5);
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_physical() {
        let red = Tile::new(TileId(2), Color::Red, 4);
        let joker = Tile::joker(TileId(104));
        let relabeled = Tile {
            color: Color::Black,
            value: 13,
            ..joker
        };

        assert!(joker.same_physical(&relabeled));
        assert!(!joker.same_physical(&Tile::joker(TileId(105))));
        assert!(!red.same_physical(&Tile { value: 5, ..red }));
        assert!(!red.same_physical(&Tile { is_joker: true, ..red }));
        assert!(!joker.same_physical(&Tile { is_joker: false, ..relabeled }));
    }

    #[test]
    #[should_panic(expected = "Tile value must be 1-13")]
    fn test_value_out_of_range() {
        let _ = Tile::new(TileId(0), Color::Red, 14);
    }

    #[test]
    fn test_tile_serialization() {
        let tile = Tile::new(TileId(9), Color::Orange, 13);
        let json = serde_json::to_string(&tile).unwrap();
        assert!(json.contains("\"orange\""));

        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile, back);
    }
}
