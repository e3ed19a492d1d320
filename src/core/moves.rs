//! Player moves.
//!
//! A `Move` carries exactly the data its kind needs. On the wire it is the
//! transport payload `{ "type": "meld" | "manipulate" | "draw" | "end_turn", "sets"?: [...] }`.
//!
//! ```
//! use rummikub_engine::core::{Move, MoveKind};
//!
//! let mv: Move = serde_json::from_str(r#"{"type": "draw"}"#).unwrap();
//! assert_eq!(mv, Move::Draw);
//! assert_eq!(mv.kind(), MoveKind::Draw);
//! ```

use serde::{Deserialize, Serialize};

use super::set::GameSet;

/// A move submitted by the acting player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Move {
    /// Play new sets from hand onto the board.
    Meld { sets: Vec<GameSet> },
    /// Replace the whole board with a rearrangement of board and hand tiles.
    Manipulate { sets: Vec<GameSet> },
    /// Take one tile from the pool.
    Draw,
    /// Pass the turn to the next seat.
    EndTurn,
}

impl Move {
    #[must_use]
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Meld { .. } => MoveKind::Meld,
            Move::Manipulate { .. } => MoveKind::Manipulate,
            Move::Draw => MoveKind::Draw,
            Move::EndTurn => MoveKind::EndTurn,
        }
    }

    /// Sets carried by the move, empty for `Draw` and `EndTurn`.
    #[must_use]
    pub fn sets(&self) -> &[GameSet] {
        match self {
            Move::Meld { sets } | Move::Manipulate { sets } => sets,
            Move::Draw | Move::EndTurn => &[],
        }
    }
}

/// Data-free discriminant of a `Move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    Meld,
    Manipulate,
    Draw,
    EndTurn,
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MoveKind::Meld => "meld",
            MoveKind::Manipulate => "manipulate",
            MoveKind::Draw => "draw",
            MoveKind::EndTurn => "end_turn",
        };
        f.write_str(name)
    }
}
