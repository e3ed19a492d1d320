//! Deck construction and dealing.
//!
//! - `builder`: the fixed 106-tile deck, shuffled with an injected `GameRng`
//! - `dealer`: round-robin distribution from the pool into hands

mod builder;
mod dealer;

pub use builder::{create_deck, ordered_deck, COPIES_PER_TILE, DECK_SIZE, JOKER_COUNT};
pub use dealer::deal;
