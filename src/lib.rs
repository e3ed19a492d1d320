//! # rummikub-engine
//!
//! Authoritative rules engine for a Rummikub-style tile game: builds the
//! deck, deals hands, validates and applies moves, and scores finished games.
//!
//! ## Design Principles
//!
//! 1. **Values In, Values Out**: Every operation takes a `&Game` (or its parts)
//!    and returns a new value. The engine keeps no state between calls.
//!
//! 2. **Rule Violations Are Values**: An illegal move is a `RuleViolation`
//!    with a readable reason, never a panic.
//!
//! 3. **Injectable Randomness**: Shuffling takes a seedable `GameRng`, so any
//!    deal can be replayed exactly.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: `Game` uses `im` vectors, so cloning is
//!   O(1) and old and new games share structure without aliasing.
//!
//! - **Single Writer Per Game**: The engine is synchronous and pure. The
//!   session layer that owns a `Game` must run each validate+apply pair for
//!   that game one at a time (an actor per game, or a lock held across both
//!   calls), or two moves can validate against the same stale board.
//!
//! ## Modules
//!
//! - `core`: Tiles, sets, players, games, moves, RNG, configuration
//! - `deck`: Deck builder and dealer
//! - `validation`: Set, board, and first-meld rules; tile conservation audit
//! - `rules`: Move validation/application and game lifecycle
//! - `scoring`: Win check and zero-sum score deltas
//! - `error`: `RuleViolation` and `EngineError`
//!
//! ## Example
//!
//! ```
//! use rummikub_engine::{GameBuilder, Move, RulesEngine};
//!
//! let engine = RulesEngine::default();
//! let game = GameBuilder::new(1).seat("alice").seat("bob").build(42).unwrap();
//!
//! let outcome = engine.play(&game, 0, &Move::Draw).unwrap();
//! assert_eq!(outcome.game.players[0].hand.len(), 15);
//!
//! let outcome = engine.play(&outcome.game, 0, &Move::EndTurn).unwrap();
//! assert_eq!(outcome.game.current_player_index, 1);
//! ```

pub mod core;
pub mod deck;
pub mod error;
pub mod rules;
pub mod scoring;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    Color, Tile, TileId,
    GameSet, SetId, SetKind,
    Player, PlayerId, UserId,
    Game, GameId, GameStatus,
    Move, MoveKind,
    GameRng, GameRngState,
    JokerOnlyRuns, RulesConfig,
};

pub use crate::deck::{create_deck, deal, DECK_SIZE};

pub use crate::error::{EngineError, RuleViolation};

pub use crate::rules::{
    apply_move, validate_move, start_game, pause, resume,
    GameBuilder, PlayOutcome, RulesEngine,
};

pub use crate::scoring::{check_win, compute_scores, finish_game, ScoreDeltas};

pub use crate::validation::{
    audit_tiles, validate_board, validate_first_meld, validate_set, Validator,
};
