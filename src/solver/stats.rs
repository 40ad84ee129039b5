//! Solver statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during a solve.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Positions visited.
    pub nodes: u64,

    /// Visits cut short because the position was already known dead.
    pub transposition_hits: u64,

    /// Dead positions recorded.
    pub dead_positions: usize,

    /// Deepest line explored, in jumps.
    pub max_depth: usize,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SolveStats {
    /// Positions visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of visits answered by the transposition set.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.transposition_hits as f64 / self.nodes as f64
        }
    }
}
