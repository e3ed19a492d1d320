//! End-of-game scoring.
//!
//! Zero-sum: each loser pays the penalty of the tiles left in their hand
//! (face value, jokers a fixed penalty) and the winner collects the total.

mod calculator;

pub use calculator::{
    check_win, compute_scores, compute_scores_with_penalty, finish_game, hand_penalty, tile_penalty,
    ScoreDeltas,
};
