//! Whole-board rules: every set legal, no tile id used twice.

use rustc_hash::FxHashSet;

use crate::core::GameSet;

pub(super) fn is_valid<'a>(
    sets: impl IntoIterator<Item = &'a GameSet>,
    validate_set: impl Fn(&GameSet) -> bool,
) -> bool {
    let mut seen = FxHashSet::default();
    for set in sets {
        if !validate_set(set) {
            return false;
        }
        if !set.tile_ids().all(|id| seen.insert(id)) {
            return false;
        }
    }
    true
}

/// Sum of non-joker face values across sets (jokers count 0).
#[must_use]
pub fn meld_points(sets: &[GameSet]) -> u32 {
    sets.iter().map(GameSet::points).sum()
}
