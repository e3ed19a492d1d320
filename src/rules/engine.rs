//! Move validation and application.
//!
//! `RulesEngine` is the single entry point a session layer needs:
//! - `validate_move`: check a move against the current game
//! - `apply_move`: produce the next game from an already-validated move
//! - `play`: both, plus finishing the game when the mover empties their hand
//!
//! ## Implementation Notes
//!
//! - Every method takes `&Game` and returns a new `Game`; the input is never
//!   modified. Games are `im`-backed, so the clone is O(1).
//! - `apply_move` does not re-check game rules. It only refuses (with
//!   `EngineError`) when the game value cannot support the move at all.
//! - Callers must serialize validate+apply per game; two moves validated
//!   against the same game would otherwise both apply.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::core::{Game, GameRng, GameSet, Move, MoveKind, Player, RulesConfig, Tile, TileId};
use crate::error::{EngineError, RuleViolation};
use crate::scoring::{check_win, finish_game, ScoreDeltas};
use crate::validation::{meld_points, Validator};

/// Result of a successful `play`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The game after the move.
    pub game: Game,
    /// Score deltas when the move ended the game.
    pub scores: Option<ScoreDeltas>,
}

impl PlayOutcome {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.scores.is_some()
    }
}

/// Rules engine for one table configuration.
#[derive(Clone, Debug, Default)]
pub struct RulesEngine {
    config: RulesConfig,
    validator: Validator,
}

impl RulesEngine {
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        let validator = Validator::new(&config);
        Self { config, validator }
    }

    /// Get the rules configuration.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Get the set/board validator.
    #[must_use]
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Deal a waiting game with this engine's configuration.
    pub fn start_game(&self, game: &Game, rng: &mut GameRng) -> Result<Game, EngineError> {
        super::lifecycle::start_game(game, rng, &self.config)
    }

    // === Validation ===

    /// Check a move against the game.
    ///
    /// `min_first_meld_score` overrides the configured first-meld minimum.
    pub fn validate_move(
        &self,
        game: &Game,
        player_index: usize,
        mv: &Move,
        min_first_meld_score: Option<u32>,
    ) -> Result<(), RuleViolation> {
        if !game.is_playing() {
            return Err(RuleViolation::GameNotInProgress(game.status));
        }
        if player_index != game.current_player_index {
            return Err(RuleViolation::NotYourTurn);
        }
        let player = game.players.get(player_index).ok_or(RuleViolation::NotYourTurn)?;

        match mv {
            Move::Meld { sets } => {
                let required = min_first_meld_score.unwrap_or(self.config.min_first_meld_score);
                self.check_meld(game, player, sets, required)
            }
            Move::Manipulate { sets } => self.check_manipulate(game, player, sets),
            Move::Draw => {
                if game.pool.is_empty() {
                    Err(RuleViolation::PoolEmpty)
                } else {
                    Ok(())
                }
            }
            Move::EndTurn => Ok(()),
        }
    }

    fn check_meld(
        &self,
        game: &Game,
        player: &Player,
        sets: &[GameSet],
        required: u32,
    ) -> Result<(), RuleViolation> {
        if sets.is_empty() {
            return Err(RuleViolation::NoSets);
        }

        for tile in sets.iter().flat_map(|s| s.tiles.iter()) {
            match player.tile_in_hand(tile.id) {
                None => return Err(RuleViolation::TileNotInHand(tile.id)),
                Some(held) if !held.same_physical(tile) => {
                    return Err(RuleViolation::TileMismatch(tile.id));
                }
                Some(_) => {}
            }
        }

        if !self.validator.validate_board(game.board.iter().chain(sets)) {
            return Err(RuleViolation::InvalidBoard);
        }

        if !player.has_made_initial_meld {
            let actual = meld_points(sets);
            if actual < required {
                return Err(RuleViolation::FirstMeldTooLow { required, actual });
            }
        }

        Ok(())
    }

    fn check_manipulate(
        &self,
        game: &Game,
        player: &Player,
        sets: &[GameSet],
    ) -> Result<(), RuleViolation> {
        if !player.has_made_initial_meld {
            return Err(RuleViolation::InitialMeldRequired);
        }
        if sets.is_empty() {
            return Err(RuleViolation::NoSets);
        }

        let on_board: FxHashMap<TileId, &Tile> = game.board_tiles().map(|t| (t.id, t)).collect();
        let mut proposed = FxHashSet::default();

        for tile in sets.iter().flat_map(|s| s.tiles.iter()) {
            let canonical = on_board
                .get(&tile.id)
                .copied()
                .or_else(|| player.tile_in_hand(tile.id))
                .ok_or(RuleViolation::UnknownTile(tile.id))?;
            if !canonical.same_physical(tile) {
                return Err(RuleViolation::TileMismatch(tile.id));
            }
            proposed.insert(tile.id);
        }

        if let Some(id) = game.board_tiles().map(|t| t.id).find(|id| !proposed.contains(id)) {
            return Err(RuleViolation::BoardTileRemoved(id));
        }

        if !self.validator.validate_board(sets) {
            return Err(RuleViolation::InvalidProposedBoard);
        }

        Ok(())
    }

    // === Application ===

    /// Apply a move that has already passed `validate_move`.
    ///
    /// Game rules are not re-checked. Structural impossibilities (unknown
    /// seat, tile missing from hand, empty pool) return `EngineError`.
    pub fn apply_move(
        &self,
        game: &Game,
        player_index: usize,
        mv: &Move,
    ) -> Result<Game, EngineError> {
        game.player(player_index)?;

        let mut next = game.clone();
        match mv {
            Move::Meld { sets } => {
                let player = &mut next.players[player_index];
                let ids = sets.iter().flat_map(|s| s.tile_ids());
                take_from_hand(player, player_index, ids, MoveKind::Meld)?;
                player.has_made_initial_meld = true;
                next.board.extend(sets.iter().cloned());
            }
            Move::Manipulate { sets } => {
                let from_hand: Vec<TileId> = sets
                    .iter()
                    .flat_map(|s| s.tile_ids())
                    .filter(|id| game.board_tile(*id).is_none())
                    .collect();
                let player = &mut next.players[player_index];
                take_from_hand(player, player_index, from_hand, MoveKind::Manipulate)?;
                next.board = sets.iter().cloned().collect();
            }
            Move::Draw => {
                let tile = next.pool.pop_back().ok_or(EngineError::EmptyPool)?;
                next.players[player_index].hand.push_back(tile);
            }
            Move::EndTurn => {
                next.current_player_index = (game.current_player_index + 1) % game.player_count();
            }
        }

        debug!(
            game_id = %game.id,
            player = player_index,
            move_kind = %mv.kind(),
            hand = next.players[player_index].hand_size(),
            pool = next.pool.len(),
            "Applied move"
        );

        Ok(next)
    }

    /// Validate, apply, and finish the game if the mover emptied their hand.
    pub fn play(
        &self,
        game: &Game,
        player_index: usize,
        mv: &Move,
    ) -> Result<PlayOutcome, EngineError> {
        if let Err(violation) = self.validate_move(game, player_index, mv, None) {
            debug!(
                game_id = %game.id,
                player = player_index,
                move_kind = %mv.kind(),
                reason = %violation,
                "Rejected move"
            );
            return Err(violation.into());
        }

        let next = self.apply_move(game, player_index, mv)?;

        let emptied = matches!(mv.kind(), MoveKind::Meld | MoveKind::Manipulate)
            && check_win(&next.players[player_index]);
        if emptied {
            let (finished, scores) = finish_game(&next, player_index, &self.config)?;
            return Ok(PlayOutcome {
                game: finished,
                scores: Some(scores),
            });
        }

        Ok(PlayOutcome { game: next, scores: None })
    }

    /// Move kinds whose turn-level preconditions hold right now.
    ///
    /// Meld and manipulate still need concrete sets to be legal; this only
    /// reports whether attempting them can succeed at all.
    #[must_use]
    pub fn legal_move_kinds(&self, game: &Game, player_index: usize) -> Vec<MoveKind> {
        if !game.is_playing() || player_index != game.current_player_index {
            return vec![];
        }
        let Some(player) = game.players.get(player_index) else {
            return vec![];
        };

        let mut kinds = Vec::new();
        if !player.hand.is_empty() {
            kinds.push(MoveKind::Meld);
        }
        if player.has_made_initial_meld && !game.board.is_empty() {
            kinds.push(MoveKind::Manipulate);
        }
        if !game.pool.is_empty() {
            kinds.push(MoveKind::Draw);
        }
        kinds.push(MoveKind::EndTurn);
        kinds
    }
}

fn take_from_hand(
    player: &mut Player,
    index: usize,
    ids: impl IntoIterator<Item = TileId>,
    kind: MoveKind,
) -> Result<(), EngineError> {
    for id in ids {
        player
            .take_tile(id)
            .ok_or(EngineError::MissingTile { index, tile: id, kind })?;
    }
    Ok(())
}

/// `RulesEngine::validate_move` with default rules.
pub fn validate_move(
    game: &Game,
    player_index: usize,
    mv: &Move,
    min_first_meld_score: Option<u32>,
) -> Result<(), RuleViolation> {
    RulesEngine::default().validate_move(game, player_index, mv, min_first_meld_score)
}

/// `RulesEngine::apply_move` with default rules.
pub fn apply_move(game: &Game, player_index: usize, mv: &Move) -> Result<Game, EngineError> {
    RulesEngine::default().apply_move(game, player_index, mv)
}
