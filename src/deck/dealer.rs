//! Dealer.

use im::Vector;

use crate::core::{Player, Tile};

/// Deal `tiles_per_player` rounds from the end of `pool`, one tile per seat
/// per round in seat order.
///
/// Stops without error as soon as the pool runs out. Inputs are untouched;
/// the returned pool and players together hold exactly the input tiles.
#[must_use]
pub fn deal(
    pool: &Vector<Tile>,
    players: &Vector<Player>,
    tiles_per_player: usize,
) -> (Vector<Tile>, Vector<Player>) {
    let mut pool = pool.clone();
    let mut players = players.clone();

    'rounds: for _ in 0..tiles_per_player {
        for player in players.iter_mut() {
            match pool.pop_back() {
                Some(tile) => player.hand.push_back(tile),
                None => break 'rounds,
            }
        }
    }

    (pool, players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, PlayerId, TileId, UserId};

    fn pool_of(n: u32) -> Vector<Tile> {
        (0..n).map(|i| Tile::new(TileId(i), Color::Blue, (i % 13 + 1) as u8)).collect()
    }

    fn seats(n: u8) -> Vector<Player> {
        (0..n)
            .map(|i| Player::new(PlayerId::new(i), UserId::new(format!("user-{i}"))))
            .collect()
    }

    #[test]
    fn test_round_robin_order() {
        let (pool, players) = deal(&pool_of(10), &seats(2), 2);

        // Pops from the end: seat 0 gets 9 then 7, seat 1 gets 8 then 6.
        let hand0: Vec<_> = players[0].hand.iter().map(|t| t.id).collect();
        let hand1: Vec<_> = players[1].hand.iter().map(|t| t.id).collect();
        assert_eq!(hand0, vec![TileId(9), TileId(7)]);
        assert_eq!(hand1, vec![TileId(8), TileId(6)]);
        assert_eq!(pool.len(), 6);
    }

    #[test]
    fn test_inputs_untouched() {
        let pool = pool_of(10);
        let players = seats(3);

        let _ = deal(&pool, &players, 3);

        assert_eq!(pool.len(), 10);
        assert!(players.iter().all(|p| p.hand.is_empty()));
    }

    #[test]
    fn test_stops_when_pool_exhausted() {
        let (pool, players) = deal(&pool_of(5), &seats(2), 14);

        assert!(pool.is_empty());
        assert_eq!(players[0].hand.len(), 3);
        assert_eq!(players[1].hand.len(), 2);
    }

    #[test]
    fn test_zero_rounds() {
        let (pool, players) = deal(&pool_of(4), &seats(2), 0);

        assert_eq!(pool.len(), 4);
        assert!(players.iter().all(|p| p.hand.is_empty()));
    }
}
