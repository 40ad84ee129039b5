//! # peg-solitaire
//!
//! A rules engine for peg solitaire on a square grid.
//!
//! ## Design Principles
//!
//! 1. **Board Owns Its Grid**: the engine holds the only mutable copy of the
//!    occupancy grid. Hosts read it through `board()` and never write to it.
//!
//! 2. **Derived State**: `GameState` is a function of the grid. Boards cache
//!    the last evaluation for display, and only `game_state()` and accepted
//!    moves refresh it.
//!
//! 3. **Shape Behind a Trait**: rules are expressed through `PegBoard`, so
//!    other board shapes can be added without touching callers.
//!
//! ## Rules
//!
//! A jump moves a peg two cells along a row or column, over an adjacent peg,
//! into an empty cell; the jumped peg is removed. One peg left is a win; more
//! than one with no jump left is a stalemate.
//!
//! ## Modules
//!
//! - `core`: Positions, moves, directions, game state, errors, RNG
//! - `rules`: `PegBoard` trait and the `SquareBoard` implementation
//! - `format`: Plain-text board files
//! - `solver`: Exhaustive solver, hints, random playouts
//! - `session`: Host-side game flow (pause, game over, save/reload)

pub mod core;
pub mod format;
pub mod rules;
pub mod session;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{Direction, GameRng, GameState, Move, PegGameError, PegResult, Position};

pub use crate::rules::{PegBoard, SquareBoard};

pub use crate::format::{
    load_board, parse_board, render_board, save_board, BoardFileError, MalformedBoardFile,
};

pub use crate::solver::{
    random_playout, Playout, PlayoutSummary, SolveOutcome, SolveReport, SolveStats, Solver,
    SolverConfig,
};

pub use crate::session::{Session, SessionConfig, SessionError};
