//! Session controller.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::core::{GameState, Move, PegGameError};
use crate::format::{load_board, save_board, BoardFileError};
use crate::rules::{PegBoard, SquareBoard};
use crate::solver::{PlayoutSummary, Solver};

use super::config::SessionConfig;

/// Errors surfaced to the host by a session.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("Game is paused")]
    Paused,

    #[error("Game is over: {}", .0.label())]
    GameOver(GameState),

    #[error(transparent)]
    Rules(#[from] PegGameError),

    #[error(transparent)]
    File(#[from] BoardFileError),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// One game on one board.
///
/// Replacing the board (`reload`) drops the old engine and starts fresh.
#[derive(Clone, Debug)]
pub struct Session {
    board: SquareBoard,
    solver: Solver,
    hints_enabled: bool,
    paused: bool,
    moves_played: usize,
}

impl Session {
    #[must_use]
    pub fn new(board: SquareBoard, config: SessionConfig) -> Self {
        Self {
            board,
            solver: Solver::new(config.solver),
            hints_enabled: config.hints_enabled,
            paused: false,
            moves_played: 0,
        }
    }

    /// Start a session from a board file.
    pub fn load(path: impl AsRef<Path>, config: SessionConfig) -> SessionResult<Self> {
        let board = load_board(path)?;
        Ok(Self::new(board, config))
    }

    #[must_use]
    pub fn board(&self) -> &SquareBoard {
        &self.board
    }

    #[must_use]
    pub fn into_board(self) -> SquareBoard {
        self.board
    }

    /// Last evaluated state of the board.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.board.cached_state()
    }

    /// Re-evaluate the board's state.
    pub fn refresh(&mut self) -> GameState {
        self.board.game_state()
    }

    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flip between paused and running. Returns whether now paused.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        info!(paused = self.paused, "Toggled pause");
        self.paused
    }

    /// Status line for the host to display.
    #[must_use]
    pub fn status(&self) -> &'static str {
        if self.paused {
            "Game Paused"
        } else {
            self.state().label()
        }
    }

    /// Play a jump.
    ///
    /// Rejected while paused and once the game is over. An illegal jump
    /// leaves the board as it was.
    #[instrument(skip_all, fields(mv = %mv))]
    pub fn submit(&mut self, mv: Move) -> SessionResult<GameState> {
        if self.paused {
            warn!("Move submitted while paused");
            return Err(SessionError::Paused);
        }

        let current = self.board.game_state();
        if current.is_terminal() {
            warn!(state = ?current, "Move submitted after game over");
            return Err(SessionError::GameOver(current));
        }

        self.board.make_move(mv)?;
        self.moves_played += 1;

        let state = self.board.cached_state();
        if state.is_terminal() {
            info!(?state, moves = self.moves_played, "Game over");
        }
        Ok(state)
    }

    /// A jump that still leads to a win, if hints are on and one exists.
    #[must_use]
    pub fn hint(&self) -> Option<Move> {
        if !self.hints_enabled || self.paused {
            return None;
        }
        self.solver.hint(&self.board)
    }

    /// Random playouts from the current position.
    #[must_use]
    pub fn sample(&self) -> PlayoutSummary {
        self.solver.sample(&self.board)
    }

    /// Write the current board to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> SessionResult<()> {
        save_board(path, &self.board)?;
        Ok(())
    }

    /// Replace the board with one read from a file.
    ///
    /// On error the current board is kept.
    pub fn reload(&mut self, path: impl AsRef<Path>) -> SessionResult<()> {
        self.board = load_board(path)?;
        self.paused = false;
        self.moves_played = 0;
        info!(pegs = self.board.peg_count(), "Reloaded board");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    fn session(text: &str) -> Session {
        Session::new(text.parse().unwrap(), SessionConfig::default())
    }

    fn jump(from: (usize, usize), to: (usize, usize)) -> Move {
        Move::new(Position::from(from), Position::from(to))
    }

    #[test]
    fn test_submit_updates_state() {
        let mut game = session("3\noo.\n...\n...\n");
        assert_eq!(game.status(), "Game Not Started");

        let state = game.submit(jump((0, 0), (0, 2))).unwrap();

        assert_eq!(state, GameState::Won);
        assert_eq!(game.status(), "You Won!");
        assert_eq!(game.moves_played(), 1);
    }

    #[test]
    fn test_submit_rejected_after_game_over() {
        let mut game = session("3\noo.\n...\n...\n");
        game.submit(jump((0, 0), (0, 2))).unwrap();

        let err = game.submit(jump((0, 2), (0, 0))).unwrap_err();
        assert!(matches!(err, SessionError::GameOver(GameState::Won)));
    }

    #[test]
    fn test_submit_rejected_while_paused() {
        let mut game = session("3\noo.\n...\n...\n");
        assert!(game.toggle_pause());
        assert_eq!(game.status(), "Game Paused");

        let err = game.submit(jump((0, 0), (0, 2))).unwrap_err();
        assert!(matches!(err, SessionError::Paused));
        assert_eq!(game.board().peg_count(), 2);

        assert!(!game.toggle_pause());
        assert!(game.submit(jump((0, 0), (0, 2))).is_ok());
    }

    #[test]
    fn test_invalid_move_is_recoverable() {
        let mut game = session("4\noo..\n....\n....\n....\n");
        let err = game.submit(jump((0, 1), (0, 3))).unwrap_err();

        assert!(matches!(err, SessionError::Rules(PegGameError::InvalidMove(_))));
        assert_eq!(game.moves_played(), 0);
        assert_eq!(game.state(), GameState::InProgress);
        assert!(game.submit(jump((0, 0), (0, 2))).is_ok());
    }

    #[test]
    fn test_hint() {
        let game = session("4\n.oo.\n....\n....\n....\n");
        assert!(game.hint().is_some());

        let quiet = Session::new(game.board().clone(), SessionConfig::default().with_hints(false));
        assert_eq!(quiet.hint(), None);
    }

    #[test]
    fn test_game_over_message() {
        let err = SessionError::GameOver(GameState::Stalemate);
        assert_eq!(err.to_string(), "Game is over: Stalemate");
    }
}
