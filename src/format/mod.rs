//! Board persistence in the plain-text board format.

pub mod error;
pub mod text;

pub use error::{BoardFileError, BoardFileResult, MalformedBoardFile};
pub use text::{load_board, parse_board, render_board, save_board};
