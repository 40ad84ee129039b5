//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::solver::SolverConfig;

/// Settings a `Session` is created with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Settings for hints and playouts.
    pub solver: SolverConfig,

    /// Whether `Session::hint` runs the solver at all.
    pub hints_enabled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            hints_enabled: true,
        }
    }
}

impl SessionConfig {
    /// Use `solver` for hints and playouts.
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Turn hints on or off.
    pub fn with_hints(mut self, enabled: bool) -> Self {
        self.hints_enabled = enabled;
        self
    }
}
