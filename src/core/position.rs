//! Board coordinates and jumps.
//!
//! A `Position` names a cell by zero-indexed row and column. A `Move` is a
//! jump from one cell to another; the jumped peg sits at the midpoint.
//!
//! ## Usage
//!
//! ```
//! use peg_solitaire::core::{Move, Position};
//!
//! let jump = Move::new(Position::new(0, 0), Position::new(0, 2));
//! assert_eq!(jump.jumped(), Position::new(0, 1));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the board, identified by row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position from row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed offset.
    ///
    /// Returns `None` if either coordinate would become negative. Upper
    /// bounds are the board's concern, not the coordinate's.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Component-wise integer midpoint between two cells.
    ///
    /// Never overflows, even for coordinates near `usize::MAX`.
    #[must_use]
    pub const fn midpoint(self, other: Self) -> Self {
        Self {
            row: half_sum(self.row, other.row),
            col: half_sum(self.col, other.col),
        }
    }
}

/// `(a + b) / 2` without the intermediate sum.
const fn half_sum(a: usize, b: usize) -> usize {
    a / 2 + b / 2 + (a & b & 1)
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// A proposed jump from `from` to `to`.
///
/// Constructing a `Move` does not check legality; the board does that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    /// Create a jump from `from` to `to`.
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// The cell whose peg this jump removes.
    #[must_use]
    pub const fn jumped(&self) -> Position {
        self.from.midpoint(self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// The eight probe directions used when enumerating jumps from a cell.
///
/// The order of [`Direction::ALL`] fixes the order of generated moves.
/// Diagonal probes are enumerated but a square board never accepts them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All directions in probe order.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// `(d_row, d_col)` of a full jump (two cells) in this direction.
    #[must_use]
    pub const fn jump_offset(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 2),
            Direction::Left => (0, -2),
            Direction::Down => (2, 0),
            Direction::Up => (-2, 0),
            Direction::UpLeft => (-2, -2),
            Direction::UpRight => (-2, 2),
            Direction::DownLeft => (2, -2),
            Direction::DownRight => (2, 2),
        }
    }

    /// Whether this is one of the four diagonal probes.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::UpLeft | Direction::UpRight | Direction::DownLeft | Direction::DownRight
        )
    }

    /// Destination of a jump from `from` in this direction, if non-negative.
    #[must_use]
    pub fn target(self, from: Position) -> Option<Position> {
        let (d_row, d_col) = self.jump_offset();
        from.offset(d_row, d_col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_equality() {
        assert_eq!(Position::new(1, 2), Position::new(1, 2));
        assert_ne!(Position::new(1, 2), Position::new(2, 1));
        assert_eq!(Position::from((3, 4)), Position::new(3, 4));
    }

    #[test]
    fn test_offset_rejects_negative() {
        let origin = Position::new(0, 1);
        assert_eq!(origin.offset(0, 2), Some(Position::new(0, 3)));
        assert_eq!(origin.offset(0, -1), Some(Position::new(0, 0)));
        assert_eq!(origin.offset(0, -2), None);
        assert_eq!(origin.offset(-2, 0), None);
    }

    #[test]
    fn test_midpoint_uses_integer_division() {
        assert_eq!(Position::new(0, 0).midpoint(Position::new(0, 2)), Position::new(0, 1));
        assert_eq!(Position::new(3, 1).midpoint(Position::new(1, 1)), Position::new(2, 1));
        // Odd distances truncate toward zero.
        assert_eq!(Position::new(0, 0).midpoint(Position::new(0, 1)), Position::new(0, 0));
    }

    #[test]
    fn test_midpoint_near_max() {
        let far = Position::new(usize::MAX, usize::MAX);
        assert_eq!(far.midpoint(far), far);
        assert_eq!(
            Position::new(usize::MAX, 0).midpoint(Position::new(usize::MAX - 2, 2)),
            Position::new(usize::MAX - 1, 1)
        );
        assert_eq!(
            Position::new(usize::MAX, 0).midpoint(Position::new(0, 0)),
            Position::new(usize::MAX / 2, 0)
        );
    }

    #[test]
    fn test_move_jumped_and_display() {
        let mv = Move::new(Position::new(2, 0), Position::new(0, 0));
        assert_eq!(mv.jumped(), Position::new(1, 0));
        assert_eq!(mv.to_string(), "(2, 0) -> (0, 0)");
    }

    #[test]
    fn test_direction_order() {
        let names: Vec<_> = Direction::ALL.iter().map(|d| format!("{d:?}")).collect();
        assert_eq!(
            names,
            ["Right", "Left", "Down", "Up", "UpLeft", "UpRight", "DownLeft", "DownRight"]
        );
        assert_eq!(Direction::ALL.iter().filter(|d| d.is_diagonal()).count(), 4);
    }

    #[test]
    fn test_direction_target() {
        let p = Position::new(2, 2);
        assert_eq!(Direction::Up.target(p), Some(Position::new(0, 2)));
        assert_eq!(Direction::DownRight.target(p), Some(Position::new(4, 4)));
        assert_eq!(Direction::Left.target(Position::new(0, 1)), None);
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::new(Position::new(0, 0), Position::new(0, 2));
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
