//! Solving and sampling peg-solitaire positions.
//!
//! ## Components
//!
//! - `Solver`: depth-first search with a transposition set of dead positions
//! - `random_playout`: uniformly random games for quick estimates
//! - `SolverConfig`: node budget, target cell, playout seed
//!
//! ## Usage
//!
//! ```
//! use peg_solitaire::rules::SquareBoard;
//! use peg_solitaire::solver::{SolveOutcome, Solver};
//!
//! let board: SquareBoard = "3\noo.\n...\n...\n".parse().unwrap();
//! let report = Solver::default().solve(&board);
//! assert!(matches!(report.outcome, SolveOutcome::Solved(ref line) if line.len() == 1));
//! ```

pub mod config;
pub mod playout;
pub mod search;
pub mod stats;

pub use config::SolverConfig;
pub use playout::{random_playout, Playout, PlayoutSummary};
pub use search::{SolveOutcome, SolveReport, Solver};
pub use stats::SolveStats;
