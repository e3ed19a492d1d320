//! Error types.
//!
//! - `RuleViolation`: an illegal move. An ordinary, recoverable outcome that
//!   callers report back to the player.
//! - `EngineError`: a caller bug or a broken game value (unknown seat, tile
//!   missing while applying, bad lifecycle transition, snapshot codec).

use thiserror::Error;

use crate::core::{GameStatus, MoveKind, TileId};

/// A game rule the submitted move breaks.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("Game is not in progress ({0:?})")]
    GameNotInProgress(GameStatus),

    #[error("Not your turn")]
    NotYourTurn,

    #[error("No sets provided")]
    NoSets,

    #[error("All meld tiles must come from your hand")]
    TileNotInHand(TileId),

    #[error("Tile {0} does not match the tile in play")]
    TileMismatch(TileId),

    #[error("Board would be invalid after meld")]
    InvalidBoard,

    #[error("First meld must total at least {required} points")]
    FirstMeldTooLow { required: u32, actual: u32 },

    #[error("Must make initial meld before manipulating the board")]
    InitialMeldRequired,

    #[error("Tile {0} is not on the board or in your hand")]
    UnknownTile(TileId),

    #[error("Tile {0} must stay on the board")]
    BoardTileRemoved(TileId),

    #[error("Proposed board is invalid")]
    InvalidProposedBoard,

    #[error("Pool is empty")]
    PoolEmpty,
}

/// Structural failure outside the game rules.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Rule(#[from] RuleViolation),

    #[error("player index {index} out of range for {player_count} players")]
    PlayerOutOfRange { index: usize, player_count: usize },

    #[error("tile {tile} not in hand of player {index} while applying {kind}")]
    MissingTile {
        index: usize,
        tile: TileId,
        kind: MoveKind,
    },

    #[error("cannot draw from an empty pool")]
    EmptyPool,

    #[error("cannot start a game with {0} players")]
    PlayerCount(usize),

    #[error("invalid status transition {from:?} -> {to:?}")]
    InvalidTransition { from: GameStatus, to: GameStatus },

    #[error("tile conservation broken: {0}")]
    TileConservation(String),

    #[error("snapshot codec: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_messages() {
        assert_eq!(RuleViolation::NotYourTurn.to_string(), "Not your turn");
        assert_eq!(
            RuleViolation::FirstMeldTooLow { required: 30, actual: 6 }.to_string(),
            "First meld must total at least 30 points"
        );
        assert_eq!(
            RuleViolation::TileNotInHand(TileId(4)).to_string(),
            "All meld tiles must come from your hand"
        );
    }

    #[test]
    fn test_rule_converts_into_engine_error() {
        let err: EngineError = RuleViolation::PoolEmpty.into();
        assert_eq!(err, EngineError::Rule(RuleViolation::PoolEmpty));
        assert_eq!(err.to_string(), "Pool is empty");
    }
}
