//! Move rules and game lifecycle.
//!
//! - `RulesEngine`: validates and applies moves for one `RulesConfig`
//! - lifecycle functions: start, pause, resume
//!
//! The engine is synchronous and keeps no state between calls. The session
//! layer owns the current `Game` and must run each validate+apply pair for
//! a game one at a time.

pub mod engine;
pub mod lifecycle;

pub use engine::{apply_move, validate_move, PlayOutcome, RulesEngine};
pub use lifecycle::{pause, resume, start_game, GameBuilder};
