//! Game lifecycle: Waiting -> Playing <-> Paused, Playing -> Finished.
//!
//! `Finished` is reached only through `scoring::finish_game`.

use im::Vector;
use tracing::info;

use crate::core::{Game, GameId, GameRng, GameStatus, RulesConfig, UserId};
use crate::deck::{create_deck, deal};
use crate::error::EngineError;

/// Deal a `Waiting` game and move it to `Playing`, seat 0 to act.
pub fn start_game(
    game: &Game,
    rng: &mut GameRng,
    config: &RulesConfig,
) -> Result<Game, EngineError> {
    if game.status != GameStatus::Waiting {
        return Err(EngineError::InvalidTransition {
            from: game.status,
            to: GameStatus::Playing,
        });
    }
    if !config.allows_player_count(game.player_count()) {
        return Err(EngineError::PlayerCount(game.player_count()));
    }

    let deck: Vector<_> = create_deck(rng).into_iter().collect();
    let (pool, players) = deal(&deck, &game.players, config.tiles_per_player);

    let mut next = game.clone();
    next.pool = pool;
    next.players = players;
    next.board = Vector::new();
    next.current_player_index = 0;
    next.status = GameStatus::Playing;

    info!(
        game_id = %game.id,
        players = next.player_count(),
        pool = next.pool.len(),
        "Game started"
    );

    Ok(next)
}

fn transition(game: &Game, from: GameStatus, to: GameStatus) -> Result<Game, EngineError> {
    if game.status != from {
        return Err(EngineError::InvalidTransition { from: game.status, to });
    }
    let mut next = game.clone();
    next.status = to;
    info!(game_id = %game.id, ?from, ?to, "Game status changed");
    Ok(next)
}

/// Suspend a `Playing` game. Paused games reject every move.
pub fn pause(game: &Game) -> Result<Game, EngineError> {
    transition(game, GameStatus::Playing, GameStatus::Paused)
}

/// Resume a `Paused` game.
pub fn resume(game: &Game) -> Result<Game, EngineError> {
    transition(game, GameStatus::Paused, GameStatus::Playing)
}

/// Builder for a started game.
///
/// ```
/// use rummikub_engine::rules::GameBuilder;
/// use rummikub_engine::core::GameStatus;
///
/// let game = GameBuilder::new(1)
///     .seat("alice")
///     .seat("bob")
///     .build(42)
///     .unwrap();
///
/// assert_eq!(game.status, GameStatus::Playing);
/// assert_eq!(game.players[0].hand.len(), 14);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    id: GameId,
    users: Vec<UserId>,
    config: RulesConfig,
}

impl GameBuilder {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id: GameId(id),
            users: Vec::new(),
            config: RulesConfig::default(),
        }
    }

    /// Add a seat for a user. Seats are filled in call order.
    #[must_use]
    pub fn seat(mut self, user: impl Into<String>) -> Self {
        self.users.push(UserId::new(user));
        self
    }

    #[must_use]
    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Build and start the game with a seeded shuffle.
    ///
    /// The shuffle draws from the seed's `"deck"` stream.
    pub fn build(self, seed: u64) -> Result<Game, EngineError> {
        self.build_with_rng(&mut GameRng::new(seed).for_context("deck"))
    }

    /// Build and start the game with a caller-supplied RNG.
    pub fn build_with_rng(self, rng: &mut GameRng) -> Result<Game, EngineError> {
        let game = Game::new(self.id, self.users);
        start_game(&game, rng, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DECK_SIZE;
    use crate::validation::audit_tiles;

    fn waiting(seats: usize) -> Game {
        Game::new(GameId(3), (0..seats).map(|i| UserId::new(format!("u{i}"))))
    }

    #[test]
    fn test_start_deals_hands() {
        let game = start_game(&waiting(4), &mut GameRng::new(42), &RulesConfig::default()).unwrap();

        assert_eq!(game.status, GameStatus::Playing);
        assert!(game.players.iter().all(|p| p.hand.len() == 14));
        assert_eq!(game.pool.len(), DECK_SIZE - 4 * 14);
        assert_eq!(audit_tiles(&game), Ok(()));
    }

    #[test]
    fn test_start_is_deterministic() {
        let a = start_game(&waiting(2), &mut GameRng::new(5), &RulesConfig::default()).unwrap();
        let b = start_game(&waiting(2), &mut GameRng::new(5), &RulesConfig::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_start_rejects_player_count() {
        let result = start_game(&waiting(1), &mut GameRng::new(1), &RulesConfig::default());
        assert_eq!(result, Err(EngineError::PlayerCount(1)));

        let result = start_game(&waiting(5), &mut GameRng::new(1), &RulesConfig::default());
        assert_eq!(result, Err(EngineError::PlayerCount(5)));
    }

    #[test]
    fn test_start_twice_rejected() {
        let config = RulesConfig::default();
        let started = start_game(&waiting(2), &mut GameRng::new(1), &config).unwrap();
        let again = start_game(&started, &mut GameRng::new(1), &config);

        assert_eq!(
            again,
            Err(EngineError::InvalidTransition {
                from: GameStatus::Playing,
                to: GameStatus::Playing,
            })
        );
    }

    #[test]
    fn test_pause_resume() {
        let started = GameBuilder::new(1).seat("a").seat("b").build(1).unwrap();

        let paused = pause(&started).unwrap();
        assert_eq!(paused.status, GameStatus::Paused);
        assert!(pause(&paused).is_err());

        let resumed = resume(&paused).unwrap();
        assert_eq!(resumed.status, GameStatus::Playing);
        assert!(resume(&resumed).is_err());
    }

    #[test]
    fn test_builder_config() {
        let game = GameBuilder::new(2)
            .seat("a")
            .seat("b")
            .config(RulesConfig::default().with_tiles_per_player(7))
            .build(9)
            .unwrap();

        assert_eq!(game.players[0].hand.len(), 7);
        assert_eq!(game.pool.len(), DECK_SIZE - 14);
    }
}
