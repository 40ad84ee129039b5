//! Plain-text board files.
//!
//! ```text
//! 3
//! oo.
//! .o.
//! ...
//! ```
//!
//! The first line is the side length `N`. Each of the next `N` lines is a
//! row: `o` is a peg, any other character is a hole. Rows shorter than `N`
//! leave their trailing cells empty. Saving writes exactly `N` cells per row
//! using `o` and `.`.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info, instrument};

use crate::rules::{PegBoard, SquareBoard};

use super::error::{BoardFileError, BoardFileResult, MalformedBoardFile};

/// Parse board-file content.
pub fn parse_board(text: &str) -> BoardFileResult<SquareBoard> {
    let mut lines = text.lines();

    let size_line = lines.next().ok_or(MalformedBoardFile::MissingSize)?;
    let size: usize = size_line
        .trim()
        .parse()
        .map_err(|_| MalformedBoardFile::InvalidSize {
            line: size_line.to_string(),
        })?;
    if size == 0 {
        return Err(MalformedBoardFile::ZeroSize.into());
    }

    let mut grid = vec![vec![false; size]; size];
    for (row, cells) in grid.iter_mut().enumerate() {
        let line = lines.next().ok_or(MalformedBoardFile::MissingRow { row, size })?;

        let len = line.chars().count();
        if len > size {
            return Err(MalformedBoardFile::RowTooLong { row, len, size }.into());
        }

        for (cell, ch) in cells.iter_mut().zip(line.chars()) {
            *cell = ch == 'o';
        }
    }

    Ok(SquareBoard::new(grid))
}

/// Render a board in board-file form.
#[must_use]
pub fn render_board(board: &SquareBoard) -> String {
    board.to_text()
}

/// Read and parse a board file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_board(path: impl AsRef<Path>) -> BoardFileResult<SquareBoard> {
    let text = fs::read_to_string(path.as_ref())?;
    let board = parse_board(&text)?;
    info!(side = board.side(), pegs = board.peg_count(), "Loaded board");
    Ok(board)
}

/// Write a board file, replacing any existing file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn save_board(path: impl AsRef<Path>, board: &SquareBoard) -> BoardFileResult<()> {
    fs::write(path.as_ref(), render_board(board))?;
    debug!(side = board.side(), "Saved board");
    Ok(())
}

impl FromStr for SquareBoard {
    type Err = BoardFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}
