//! Game state classification.
//!
//! `GameState` is derived from the board, never stored on its own:
//!
//! - `Won`: exactly one peg remains
//! - `Stalemate`: any other peg count with no legal jump (including zero pegs)
//! - `InProgress`: more than one peg and at least one legal jump
//!
//! `NotStarted` is only the value a board reports before its state has been
//! evaluated for the first time.

use serde::{Deserialize, Serialize};

/// Where a game stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Stalemate,
}

impl GameState {
    /// Classify a board from its peg count and whether any jump exists.
    #[must_use]
    pub const fn classify(peg_count: usize, has_moves: bool) -> Self {
        if peg_count == 1 {
            GameState::Won
        } else if !has_moves {
            GameState::Stalemate
        } else {
            GameState::InProgress
        }
    }

    /// `Won` and `Stalemate` end the game.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameState::Won | GameState::Stalemate)
    }

    /// Status line shown to the player.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            GameState::NotStarted => "Game Not Started",
            GameState::InProgress => "Game In Progress",
            GameState::Won => "You Won!",
            GameState::Stalemate => "Stalemate",
        }
    }
}
