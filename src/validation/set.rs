//! Single-set rules.
//!
//! - Run: 3+ tiles, one color, strictly increasing distinct values; jokers
//!   fill the gaps (`span - numbered <= jokers`) and the whole run fits in
//!   `1..=13`.
//! - Group: 3-4 tiles, one value, pairwise distinct colors, at least one
//!   numbered tile.

use smallvec::SmallVec;

use crate::core::{Color, GameSet, JokerOnlyRuns, SetKind, Tile, MAX_VALUE, MIN_VALUE};

/// Smallest legal set.
pub const MIN_SET_SIZE: usize = 3;

/// Largest legal group (one tile per color).
pub const MAX_GROUP_SIZE: usize = Color::ALL.len();

const MAX_RUN_SIZE: usize = (MAX_VALUE - MIN_VALUE + 1) as usize;

type TileRefs<'a> = SmallVec<[&'a Tile; 13]>;

pub(super) fn is_valid(set: &GameSet, joker_only_runs: JokerOnlyRuns) -> bool {
    if set.tiles.len() < MIN_SET_SIZE {
        return false;
    }

    let (jokers, numbered): (TileRefs<'_>, TileRefs<'_>) =
        set.tiles.iter().partition(|t| t.is_joker);

    match set.kind {
        SetKind::Run => is_valid_run(&numbered, jokers.len(), joker_only_runs),
        SetKind::Group => is_valid_group(&numbered, jokers.len()),
    }
}

fn is_valid_run(numbered: &[&Tile], jokers: usize, joker_only_runs: JokerOnlyRuns) -> bool {
    if numbered.is_empty() {
        return joker_only_runs == JokerOnlyRuns::Allow && jokers >= MIN_SET_SIZE;
    }
    if numbered.len() + jokers > MAX_RUN_SIZE {
        return false;
    }

    let color = numbered[0].color;
    if numbered.iter().any(|t| t.color != color) {
        return false;
    }

    let mut values: SmallVec<[u8; 13]> = numbered.iter().map(|t| t.value).collect();
    values.sort_unstable();
    if values.windows(2).any(|w| w[0] == w[1]) {
        return false;
    }

    let span = usize::from(values[values.len() - 1] - values[0]) + 1;
    let gaps = span - values.len();
    gaps <= jokers
}

fn is_valid_group(numbered: &[&Tile], jokers: usize) -> bool {
    if numbered.is_empty() || numbered.len() + jokers > MAX_GROUP_SIZE {
        return false;
    }

    let value = numbered[0].value;
    if numbered.iter().any(|t| t.value != value) {
        return false;
    }

    let mut colors: SmallVec<[Color; 4]> = numbered.iter().map(|t| t.color).collect();
    colors.sort_unstable();
    colors.windows(2).all(|w| w[0] != w[1])
}
