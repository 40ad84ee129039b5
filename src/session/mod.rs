//! Game sessions: the bookkeeping a host application does around a board.
//!
//! A `Session` owns one `SquareBoard` and adds what the board itself does
//! not enforce:
//! - No moves once the game is won or stalemated
//! - Pause / resume
//! - Status text, hints, saving and reloading
//!
//! Rendering and input handling stay with the host.

mod config;
mod controller;

pub use config::SessionConfig;
pub use controller::{Session, SessionError, SessionResult};
