//! Random playouts.
//!
//! A playout picks uniformly among the legal jumps until none is left.
//! Every jump removes a peg, so a playout on a board with P pegs makes at
//! most P - 1 jumps.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameState, Move, PegResult};
use crate::rules::PegBoard;

/// A finished random game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playout {
    /// Jumps in the order they were played.
    pub moves: Vec<Move>,
    /// Terminal state reached.
    pub final_state: GameState,
    /// Pegs left on the board.
    pub pegs_left: usize,
}

/// Play random jumps on `board` until the game is over.
///
/// Mutates `board` in place; clone first to keep the start position.
pub fn random_playout<B: PegBoard>(board: &mut B, rng: &mut GameRng) -> PegResult<Playout> {
    let mut moves = Vec::new();

    loop {
        let legal = board.possible_moves();
        let Some(&mv) = rng.choose(&legal) else {
            break;
        };
        board.make_move(mv)?;
        moves.push(mv);
    }

    Ok(Playout {
        moves,
        final_state: board.game_state(),
        pegs_left: board.peg_count(),
    })
}

/// Tally of a batch of playouts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutSummary {
    pub games: u32,
    pub wins: u32,
    pub stalemates: u32,
    /// Fewest pegs left by any playout.
    pub best_pegs_left: Option<usize>,
}

impl PlayoutSummary {
    pub fn record(&mut self, playout: &Playout) {
        self.games += 1;
        match playout.final_state {
            GameState::Won => self.wins += 1,
            GameState::Stalemate => self.stalemates += 1,
            GameState::NotStarted | GameState::InProgress => {}
        }
        self.best_pegs_left = Some(
            self.best_pegs_left
                .map_or(playout.pegs_left, |best| best.min(playout.pegs_left)),
        );
    }

    /// Fraction of playouts that ended with a single peg.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games)
        }
    }
}
