//! Deck builder.

use tracing::debug;

use crate::core::{Color, GameRng, Tile, TileId, MAX_VALUE, MIN_VALUE};

/// Copies of each color/value combination.
pub const COPIES_PER_TILE: usize = 2;

/// Jokers in a deck.
pub const JOKER_COUNT: usize = 2;

/// Total tiles in a deck: 4 colors x 13 values x 2 copies + 2 jokers.
pub const DECK_SIZE: usize =
    Color::ALL.len() * (MAX_VALUE - MIN_VALUE + 1) as usize * COPIES_PER_TILE + JOKER_COUNT;

/// Build the full deck in a fixed order, ids `0..DECK_SIZE`.
///
/// Numbered tiles come first (color, then value, then copy), jokers last.
#[must_use]
pub fn ordered_deck() -> Vec<Tile> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    let mut next_id = 0u32;
    let mut alloc = || {
        let id = TileId(next_id);
        next_id += 1;
        id
    };

    for color in Color::ALL {
        for value in MIN_VALUE..=MAX_VALUE {
            for _ in 0..COPIES_PER_TILE {
                deck.push(Tile::new(alloc(), color, value));
            }
        }
    }
    for _ in 0..JOKER_COUNT {
        deck.push(Tile::joker(alloc()));
    }

    deck
}

/// Build and shuffle a full deck.
///
/// ```
/// use rummikub_engine::core::GameRng;
/// use rummikub_engine::deck::{create_deck, DECK_SIZE};
///
/// let deck = create_deck(&mut GameRng::new(42));
/// assert_eq!(deck.len(), DECK_SIZE);
/// ```
#[must_use]
pub fn create_deck(rng: &mut GameRng) -> Vec<Tile> {
    let mut deck = ordered_deck();
    rng.shuffle(&mut deck);
    debug!(seed = rng.seed(), tiles = deck.len(), "Built shuffled deck");
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::{FxHashMap, FxHashSet};

    #[test]
    fn test_deck_size_constant() {
        assert_eq!(DECK_SIZE, 106);
    }

    #[test]
    fn test_composition() {
        let deck = create_deck(&mut GameRng::new(1));
        assert_eq!(deck.len(), 106);

        let mut counts: FxHashMap<(Color, u8), usize> = FxHashMap::default();
        let mut jokers = 0;
        for tile in &deck {
            if tile.is_joker {
                jokers += 1;
            } else {
                *counts.entry((tile.color, tile.value)).or_default() += 1;
            }
        }

        assert_eq!(jokers, 2);
        assert_eq!(counts.len(), 52);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_ids_unique() {
        let deck = create_deck(&mut GameRng::new(2));
        let ids: FxHashSet<TileId> = deck.iter().map(|t| t.id).collect();

        assert_eq!(ids.len(), 106);
        assert!(ids.iter().all(|id| id.raw() < 106));
    }

    #[test]
    fn test_shuffle_deterministic_per_seed() {
        let a = create_deck(&mut GameRng::new(9));
        let b = create_deck(&mut GameRng::new(9));
        let c = create_deck(&mut GameRng::new(10));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, ordered_deck());
    }
}
