//! Core value types: positions, moves, game state, errors, RNG.
//!
//! Everything here is independent of board shape. Boards live in `rules`.

pub mod error;
pub mod position;
pub mod rng;
pub mod state;

pub use error::{PegGameError, PegResult};
pub use position::{Direction, Move, Position};
pub use rng::GameRng;
pub use state::GameState;
