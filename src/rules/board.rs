//! Board capability trait.
//!
//! Board shapes implement `PegBoard` to define their rules:
//! - Which jumps are legal
//! - How a jump changes the board
//! - How many pegs remain
//!
//! Game-state classification is shared by every shape and lives in the
//! provided methods.

use crate::core::{GameState, Move, PegResult, Position};

/// A peg-solitaire board.
///
/// ## Implementation Notes
///
/// - `possible_moves`: must be deterministic in order
/// - `make_move`: must leave the board untouched when it returns an error
/// - `game_state`: refreshes the cached state; `cached_state` only reads it
pub trait PegBoard {
    /// Check whether jumping from `from` to `to` is legal right now.
    fn is_valid_move(&self, from: Position, to: Position) -> bool;

    /// Whether `pos` holds a peg. Cells off the board are empty.
    fn is_peg(&self, pos: Position) -> bool;

    /// All currently legal jumps.
    ///
    /// Returns empty when no jump exists.
    fn possible_moves(&self) -> Vec<Move>;

    /// Apply a jump.
    ///
    /// Returns `PegGameError::InvalidMove` without mutating anything if
    /// the jump is not legal.
    fn make_move(&mut self, mv: Move) -> PegResult<()>;

    /// Number of occupied cells.
    fn peg_count(&self) -> usize;

    /// The state recorded by the last evaluation.
    ///
    /// `NotStarted` until the board has been evaluated once.
    fn cached_state(&self) -> GameState;

    /// Recompute, record and return the current state.
    ///
    /// Touches only the cache. Calling it twice in a row returns the same
    /// value.
    fn game_state(&mut self) -> GameState;

    // === Provided Methods ===

    /// Whether at least one jump is legal.
    fn has_moves(&self) -> bool {
        !self.possible_moves().is_empty()
    }

    /// Classify the board without touching the cache.
    fn compute_state(&self) -> GameState {
        GameState::classify(self.peg_count(), self.has_moves())
    }

    /// Whether the game on this board is over.
    fn is_terminal(&self) -> bool {
        self.compute_state().is_terminal()
    }
}
