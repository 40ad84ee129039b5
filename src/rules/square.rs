//! Square-grid board.

use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;
use tracing::{debug, instrument, warn};

use crate::core::{Direction, GameState, Move, PegGameError, PegResult, Position};

use super::board::PegBoard;

/// An N×N grid of pegs (`true`) and holes (`false`).
///
/// The board owns its grid. Callers get read-only views (`board`) or take
/// the grid back (`into_grid`); nothing else can change a cell except an
/// accepted jump.
///
/// Construction does not validate the grid. Bounds are checked per row, so
/// ragged or empty grids are handled without panicking.
#[derive(Clone, Debug)]
pub struct SquareBoard {
    grid: Vec<Vec<bool>>,
    state: GameState,
}

impl SquareBoard {
    /// Take ownership of an occupancy grid.
    #[must_use]
    pub fn new(grid: Vec<Vec<bool>>) -> Self {
        Self {
            grid,
            state: GameState::NotStarted,
        }
    }

    /// An N×N board with no pegs.
    #[must_use]
    pub fn empty(side: usize) -> Self {
        Self::new(vec![vec![false; side]; side])
    }

    /// Number of rows (the declared side length).
    #[must_use]
    pub fn side(&self) -> usize {
        self.grid.len()
    }

    /// Read-only view of the grid, rows top to bottom.
    #[must_use]
    pub fn board(&self) -> &[Vec<bool>] {
        &self.grid
    }

    /// Give the grid back, consuming the board.
    #[must_use]
    pub fn into_grid(self) -> Vec<Vec<bool>> {
        self.grid
    }

    /// Whether `pos` is on the board.
    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        self.grid.get(pos.row).is_some_and(|row| pos.col < row.len())
    }

    /// Occupied cells in row-major order.
    pub fn pegs(&self) -> impl Iterator<Item = Position> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &peg)| peg)
                .map(move |(col, _)| Position::new(row, col))
        })
    }

    /// Legal jumps starting at `from`, in `Direction::ALL` order.
    ///
    /// Diagonal directions are probed too; `is_valid_move` rejects them.
    #[must_use]
    pub fn moves_from(&self, from: Position) -> SmallVec<[Move; 4]> {
        let mut moves = SmallVec::new();
        if !self.is_peg(from) {
            return moves;
        }

        for direction in Direction::ALL {
            if let Some(to) = direction.target(from) {
                if self.is_valid_move(from, to) {
                    moves.push(Move::new(from, to));
                }
            }
        }

        moves
    }

    /// Space-separated rows of `o` (peg) and `.` (hole), one per line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.grid {
            let tokens: Vec<&str> = row.iter().map(|&peg| if peg { "o" } else { "." }).collect();
            out.push_str(&tokens.join(" "));
            out.push('\n');
        }
        out
    }

    /// The persisted text form: side length, then one row per line.
    ///
    /// Every row is written with exactly `side()` cells.
    #[must_use]
    pub fn to_text(&self) -> String {
        let side = self.side();
        let mut out = format!("{side}\n");
        for row in &self.grid {
            out.extend((0..side).map(|col| {
                if row.get(col).copied().unwrap_or(false) {
                    'o'
                } else {
                    '.'
                }
            }));
            out.push('\n');
        }
        out
    }

    fn set(&mut self, pos: Position, peg: bool) {
        self.grid[pos.row][pos.col] = peg;
    }
}

impl PegBoard for SquareBoard {
    fn is_valid_move(&self, from: Position, to: Position) -> bool {
        if !(self.in_bounds(from) && self.in_bounds(to)) {
            return false;
        }
        let mid = from.midpoint(to);
        if !self.in_bounds(mid) {
            return false;
        }

        // Exactly two cells along one axis.
        let horizontal = from.row == to.row && from.col.abs_diff(to.col) == 2;
        let vertical = from.col == to.col && from.row.abs_diff(to.row) == 2;

        (horizontal || vertical) && self.is_peg(from) && !self.is_peg(to) && self.is_peg(mid)
    }

    fn is_peg(&self, pos: Position) -> bool {
        self.grid
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .unwrap_or(false)
    }

    fn possible_moves(&self) -> Vec<Move> {
        self.pegs().flat_map(|from| self.moves_from(from)).collect()
    }

    #[instrument(skip_all, fields(mv = %mv))]
    fn make_move(&mut self, mv: Move) -> PegResult<()> {
        if !self.is_valid_move(mv.from, mv.to) {
            warn!("Rejected invalid move");
            return Err(PegGameError::InvalidMove(mv));
        }

        self.set(mv.from, false);
        self.set(mv.jumped(), false);
        self.set(mv.to, true);

        let state = self.game_state();
        debug!(?state, pegs = self.peg_count(), "Applied move");
        Ok(())
    }

    fn peg_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&peg| peg).count()
    }

    fn cached_state(&self) -> GameState {
        self.state
    }

    fn game_state(&mut self) -> GameState {
        self.state = self.compute_state();
        self.state
    }

    fn has_moves(&self) -> bool {
        self.pegs().any(|from| !self.moves_from(from).is_empty())
    }
}

// Equality and hashing look at the grid only; the cached state is derived.
impl PartialEq for SquareBoard {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for SquareBoard {}

impl Hash for SquareBoard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}

impl fmt::Display for SquareBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    fn scenario_a() -> SquareBoard {
        SquareBoard::new(vec![vec![T, T, F], vec![F, T, F], vec![F, F, F]])
    }

    fn mv(from: (usize, usize), to: (usize, usize)) -> Move {
        Move::new(from.into(), to.into())
    }

    #[test]
    fn test_new_board_not_started() {
        let board = scenario_a();
        assert_eq!(board.cached_state(), GameState::NotStarted);
        assert_eq!(board.side(), 3);
        assert_eq!(board.peg_count(), 3);
    }

    #[test]
    fn test_valid_horizontal_and_vertical() {
        let board = scenario_a();
        assert!(board.is_valid_move((0, 0).into(), (0, 2).into()));
        assert!(board.is_valid_move((0, 1).into(), (2, 1).into()));

        let column = SquareBoard::new(vec![vec![T, F, F], vec![T, F, F], vec![F, F, F]]);
        assert!(column.is_valid_move((0, 0).into(), (2, 0).into()));
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let board = scenario_a();
        assert!(!board.is_valid_move((0, 1).into(), (0, 3).into()));
        assert!(!board.is_valid_move((5, 5).into(), (5, 3).into()));
    }

    #[test]
    fn test_rejects_diagonal() {
        let board = SquareBoard::new(vec![vec![T, F, F], vec![F, T, F], vec![F, F, F]]);
        assert!(!board.is_valid_move((0, 0).into(), (2, 2).into()));
        assert!(board.possible_moves().is_empty());
    }

    #[test]
    fn test_rejects_wrong_occupancy() {
        let board = scenario_a();
        // No peg at source.
        assert!(!board.is_valid_move((2, 0).into(), (0, 0).into()));
        // Destination occupied.
        let full = SquareBoard::new(vec![vec![T, T, T], vec![F; 3], vec![F; 3]]);
        assert!(!full.is_valid_move((0, 0).into(), (0, 2).into()));
        // Nothing to jump over.
        let gap = SquareBoard::new(vec![vec![T, F, F], vec![F; 3], vec![F; 3]]);
        assert!(!gap.is_valid_move((0, 0).into(), (0, 2).into()));
    }

    #[test]
    fn test_rejects_wrong_distance() {
        let board = SquareBoard::new(vec![vec![T, T, F, F], vec![F; 4], vec![F; 4], vec![F; 4]]);
        assert!(!board.is_valid_move((0, 0).into(), (0, 1).into()));
        assert!(!board.is_valid_move((0, 0).into(), (0, 3).into()));
    }

    #[test]
    fn test_moves_from_order() {
        // Pegs all around the centre of a 5x5 board with holes two away.
        let mut grid = vec![vec![F; 5]; 5];
        for (r, c) in [(2, 2), (2, 3), (2, 1), (3, 2), (1, 2)] {
            grid[r][c] = T;
        }
        let board = SquareBoard::new(grid);

        let from = Position::new(2, 2);
        let moves: Vec<_> = board.moves_from(from).into_iter().map(|m| m.to).collect();
        assert_eq!(
            moves,
            vec![
                Position::new(2, 4),
                Position::new(2, 0),
                Position::new(4, 2),
                Position::new(0, 2),
            ]
        );
    }

    #[test]
    fn test_possible_moves_row_major() {
        let board = SquareBoard::new(vec![vec![T, T, F], vec![T, F, F], vec![F, F, F]]);
        assert_eq!(
            board.possible_moves(),
            vec![mv((0, 0), (0, 2)), mv((0, 0), (2, 0))]
        );

        let board = SquareBoard::new(vec![vec![F, T, T], vec![F, F, T], vec![F, F, F]]);
        assert_eq!(
            board.possible_moves(),
            vec![mv((0, 2), (0, 0)), mv((0, 2), (2, 2))]
        );
    }

    #[test]
    fn test_make_move_scenario_a() {
        let mut board = scenario_a();
        assert!(board.possible_moves().contains(&mv((0, 0), (0, 2))));

        board.make_move(mv((0, 0), (0, 2))).unwrap();

        assert_eq!(
            board.board(),
            &[vec![F, F, T], vec![F, T, F], vec![F, F, F]]
        );
        assert_eq!(board.peg_count(), 2);
        // The two survivors are diagonal neighbours: no jump is left.
        assert_eq!(board.cached_state(), GameState::Stalemate);
    }

    #[test]
    fn test_make_move_invalid_leaves_board() {
        let mut board = scenario_a();
        let before = board.clone();

        let err = board.make_move(mv((1, 1), (1, 3))).unwrap_err();

        assert_eq!(err, PegGameError::InvalidMove(mv((1, 1), (1, 3))));
        assert_eq!(board.board(), before.board());
        assert_eq!(board.cached_state(), GameState::NotStarted);
    }

    #[test]
    fn test_game_state_idempotent() {
        let mut board = scenario_a();
        let first = board.game_state();
        let second = board.game_state();
        assert_eq!(first, second);
        assert_eq!(first, GameState::InProgress);
    }

    #[test]
    fn test_single_peg_wins() {
        let mut grid = vec![vec![F; 4]; 4];
        grid[3][1] = T;
        let mut board = SquareBoard::new(grid);
        assert!(board.possible_moves().is_empty());
        assert_eq!(board.game_state(), GameState::Won);
    }

    #[test]
    fn test_empty_board_stalemate() {
        let mut board = SquareBoard::empty(4);
        assert!(board.possible_moves().is_empty());
        assert_eq!(board.game_state(), GameState::Stalemate);
    }

    #[test]
    fn test_ragged_grid_does_not_panic() {
        let mut board = SquareBoard::new(vec![vec![T, T], vec![T], vec![]]);
        assert!(!board.is_valid_move((0, 0).into(), (0, 2).into()));
        assert!(!board.is_valid_move((0, 0).into(), (2, 0).into()));
        assert_eq!(board.game_state(), GameState::Stalemate);

        let mut nothing = SquareBoard::new(Vec::new());
        assert_eq!(nothing.game_state(), GameState::Stalemate);
    }

    #[test]
    fn test_render() {
        let board = scenario_a();
        assert_eq!(board.render(), "o o .\n. o .\n. . .\n");
        assert_eq!(board.to_string(), board.render());
    }

    #[test]
    fn test_to_text() {
        let board = scenario_a();
        assert_eq!(board.to_text(), "3\noo.\n.o.\n...\n");
    }

    #[test]
    fn test_equality_ignores_cache() {
        let mut a = scenario_a();
        let b = scenario_a();
        a.game_state();
        assert_eq!(a, b);
    }
}
