//! Tile conservation audit.

use rustc_hash::FxHashSet;
use tracing::warn;

use crate::core::Game;
use crate::deck::DECK_SIZE;
use crate::error::EngineError;

/// Check that pool, hands, and board together hold every deck tile exactly once.
///
/// Only meaningful once a game has been dealt; a `Waiting` game holds no
/// tiles and fails the size check.
pub fn audit_tiles(game: &Game) -> Result<(), EngineError> {
    let mut seen = FxHashSet::default();
    let mut total = 0usize;

    for tile in game.all_tiles() {
        total += 1;
        if !seen.insert(tile.id) {
            let detail = format!("{} appears more than once", tile.id);
            warn!(game_id = %game.id, %detail, "Tile audit failed");
            return Err(EngineError::TileConservation(detail));
        }
    }

    if total != DECK_SIZE {
        let detail = format!("expected {DECK_SIZE} tiles, found {total}");
        warn!(game_id = %game.id, %detail, "Tile audit failed");
        return Err(EngineError::TileConservation(detail));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameId, GameSet, UserId};
    use crate::deck::ordered_deck;

    fn dealt_game() -> Game {
        let mut game = Game::new(GameId(1), [UserId::new("a"), UserId::new("b")]);
        game.pool = ordered_deck().into_iter().collect();
        game
    }

    #[test]
    fn test_full_pool_passes() {
        assert_eq!(audit_tiles(&dealt_game()), Ok(()));
    }

    #[test]
    fn test_missing_tile_fails() {
        let mut game = dealt_game();
        game.pool.pop_back();

        assert!(matches!(audit_tiles(&game), Err(EngineError::TileConservation(_))));
    }

    #[test]
    fn test_duplicate_tile_fails() {
        let mut game = dealt_game();
        let tile = game.pool.pop_back().unwrap();
        game.players[0].hand.push_back(tile);
        game.board.push_back(GameSet::run(0, [tile]));

        let err = audit_tiles(&game).unwrap_err();
        assert!(err.to_string().contains("appears more than once"));
    }
}
