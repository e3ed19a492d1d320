//! Score calculator.

use rustc_hash::FxHashMap;
use tracing::info;

use crate::core::config::DEFAULT_JOKER_PENALTY;
use crate::core::{Game, GameStatus, Player, RulesConfig, Tile, UserId};
use crate::error::EngineError;

/// Score change per user for one finished game. Always sums to zero.
pub type ScoreDeltas = FxHashMap<UserId, i64>;

/// A player has won when their hand is empty.
#[must_use]
pub fn check_win(player: &Player) -> bool {
    player.hand.is_empty()
}

/// Penalty for one tile left in hand.
#[must_use]
pub fn tile_penalty(tile: &Tile, joker_penalty: i64) -> i64 {
    if tile.is_joker {
        joker_penalty
    } else {
        i64::from(tile.value)
    }
}

/// Penalty for a whole hand.
#[must_use]
pub fn hand_penalty(player: &Player, joker_penalty: i64) -> i64 {
    player.hand.iter().map(|t| tile_penalty(t, joker_penalty)).sum()
}

/// Per-seat deltas, indexed like `game.players`.
fn seat_deltas(
    game: &Game,
    winner_index: usize,
    joker_penalty: i64,
) -> Result<Vec<i64>, EngineError> {
    game.player(winner_index)?;

    let mut deltas: Vec<i64> = game
        .players
        .iter()
        .enumerate()
        .map(|(i, p)| if i == winner_index { 0 } else { -hand_penalty(p, joker_penalty) })
        .collect();
    let collected: i64 = deltas.iter().sum();
    deltas[winner_index] = -collected;

    Ok(deltas)
}

fn to_user_map(game: &Game, deltas: &[i64]) -> ScoreDeltas {
    let mut map = ScoreDeltas::default();
    for (player, delta) in game.players.iter().zip(deltas) {
        *map.entry(player.user_id.clone()).or_insert(0) += delta;
    }
    map
}

/// Compute deltas with the standard joker penalty.
pub fn compute_scores(game: &Game, winner_index: usize) -> Result<ScoreDeltas, EngineError> {
    compute_scores_with_penalty(game, winner_index, DEFAULT_JOKER_PENALTY)
}

/// Compute deltas with an explicit joker penalty.
pub fn compute_scores_with_penalty(
    game: &Game,
    winner_index: usize,
    joker_penalty: i64,
) -> Result<ScoreDeltas, EngineError> {
    let deltas = seat_deltas(game, winner_index, joker_penalty)?;
    Ok(to_user_map(game, &deltas))
}

/// End a game: apply deltas to running scores, record the winner, and mark
/// the game `Finished`.
pub fn finish_game(
    game: &Game,
    winner_index: usize,
    config: &RulesConfig,
) -> Result<(Game, ScoreDeltas), EngineError> {
    if game.status != GameStatus::Playing {
        return Err(EngineError::InvalidTransition {
            from: game.status,
            to: GameStatus::Finished,
        });
    }

    let deltas = seat_deltas(game, winner_index, config.joker_penalty)?;

    let mut next = game.clone();
    for (player, delta) in next.players.iter_mut().zip(&deltas) {
        player.score += delta;
    }
    let winner = next.players[winner_index].user_id.clone();
    next.winner_id = Some(winner.clone());
    next.status = GameStatus::Finished;

    info!(
        game_id = %game.id,
        winner = %winner,
        collected = deltas[winner_index],
        "Game finished"
    );

    let scores = to_user_map(game, &deltas);
    Ok((next, scores))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, GameId, TileId};

    fn t(id: u32, value: u8) -> Tile {
        Tile::new(TileId(id), Color::Orange, value)
    }

    fn game_with_hands(hands: Vec<Vec<Tile>>) -> Game {
        let users = (0..hands.len()).map(|i| UserId::new(format!("user-{i}")));
        let mut game = Game::new(GameId(7), users);
        for (player, hand) in game.players.iter_mut().zip(hands) {
            player.hand = hand.into_iter().collect();
        }
        game.status = GameStatus::Playing;
        game
    }

    #[test]
    fn test_check_win() {
        let game = game_with_hands(vec![vec![], vec![t(0, 1)]]);

        assert!(check_win(&game.players[0]));
        assert!(!check_win(&game.players[1]));
    }

    #[test]
    fn test_joker_penalty() {
        assert_eq!(tile_penalty(&Tile::joker(TileId(0)), 30), 30);
        assert_eq!(tile_penalty(&t(1, 12), 30), 12);
    }

    #[test]
    fn test_three_player_scores() {
        let game = game_with_hands(vec![
            vec![t(0, 5), Tile::joker(TileId(1))],
            vec![],
            vec![t(2, 13), t(3, 1)],
        ]);

        let scores = compute_scores(&game, 1).unwrap();

        assert_eq!(scores[&UserId::new("user-0")], -35);
        assert_eq!(scores[&UserId::new("user-1")], 49);
        assert_eq!(scores[&UserId::new("user-2")], -14);
        assert_eq!(scores.values().sum::<i64>(), 0);
    }

    #[test]
    fn test_custom_penalty() {
        let game = game_with_hands(vec![vec![], vec![Tile::joker(TileId(0))]]);

        let scores = compute_scores_with_penalty(&game, 0, 50).unwrap();
        assert_eq!(scores[&UserId::new("user-1")], -50);
    }

    #[test]
    fn test_bad_winner_index() {
        let game = game_with_hands(vec![vec![], vec![]]);

        assert_eq!(
            compute_scores(&game, 5).unwrap_err(),
            EngineError::PlayerOutOfRange { index: 5, player_count: 2 }
        );
    }

    #[test]
    fn test_finish_game() {
        let mut game = game_with_hands(vec![vec![t(0, 8)], vec![]]);
        game.players[0].score = 100;

        let (finished, scores) = finish_game(&game, 1, &RulesConfig::default()).unwrap();

        assert_eq!(finished.status, GameStatus::Finished);
        assert_eq!(finished.winner_id, Some(UserId::new("user-1")));
        assert_eq!(finished.players[0].score, 92);
        assert_eq!(finished.players[1].score, 8);
        assert_eq!(scores[&UserId::new("user-1")], 8);

        // Input untouched.
        assert_eq!(game.status, GameStatus::Playing);
        assert_eq!(game.players[0].score, 100);
    }

    #[test]
    fn test_finish_twice_rejected() {
        let game = game_with_hands(vec![vec![], vec![t(0, 2)]]);
        let (finished, _) = finish_game(&game, 0, &RulesConfig::default()).unwrap();

        assert_eq!(
            finish_game(&finished, 0, &RulesConfig::default()).unwrap_err(),
            EngineError::InvalidTransition {
                from: GameStatus::Finished,
                to: GameStatus::Finished,
            }
        );
    }
}
