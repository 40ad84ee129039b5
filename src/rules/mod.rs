//! Board rules.
//!
//! `PegBoard` is the capability every board shape provides:
//! - Legal jumps for the current position
//! - How a jump modifies the board
//! - Peg count and game-state classification
//!
//! `SquareBoard` is the N×N implementation.

pub mod board;
pub mod square;

pub use board::PegBoard;
pub use square::SquareBoard;
