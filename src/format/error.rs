//! Board file errors.
//!
//! Kept apart from `PegGameError` so a bad file is never mistaken for a bad
//! move.

/// Reasons a board file's content cannot be read as a board.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedBoardFile {
    #[error("Board file is empty")]
    MissingSize,

    #[error("Invalid board size line: {line:?}")]
    InvalidSize { line: String },

    #[error("Board size must be at least 1")]
    ZeroSize,

    #[error("Missing row {row} of a {size}x{size} board")]
    MissingRow { row: usize, size: usize },

    #[error("Row {row} has {len} cells but the board is {size} wide")]
    RowTooLong { row: usize, len: usize, size: usize },
}

/// Errors from loading or saving a board file.
#[derive(thiserror::Error, Debug)]
pub enum BoardFileError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Malformed(#[from] MalformedBoardFile),
}

/// Result type for board file operations.
pub type BoardFileResult<T> = Result<T, BoardFileError>;
