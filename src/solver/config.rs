//! Solver configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Solver configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum positions to visit before giving up (0 = unlimited).
    pub max_nodes: u64,

    /// Cell the last peg must finish on, if any.
    /// The classic central-hole puzzle sets this to the centre.
    pub target: Option<Position>,

    /// Random seed for playouts.
    /// Same seed produces the same playouts.
    pub seed: u64,

    /// Number of random playouts `Solver::sample` runs.
    pub playouts: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_nodes: 1_000_000,
            target: None,
            seed: 42,
            playouts: 100,
        }
    }
}

impl SolverConfig {
    /// Set the node budget (0 = unlimited).
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Require the last peg to finish on `target`.
    pub fn with_target(mut self, target: Position) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the playout seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how many playouts `Solver::sample` runs.
    pub fn with_playouts(mut self, playouts: u32) -> Self {
        self.playouts = playouts;
        self
    }
}
