//! Rules-engine errors.

use super::position::Move;

/// Errors raised by a board.
///
/// Always recoverable: the board is unchanged when one is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PegGameError {
    /// The move failed the legality check.
    #[error("Invalid move: {0}")]
    InvalidMove(Move),
}

/// Result type for board operations.
pub type PegResult<T> = Result<T, PegGameError>;
