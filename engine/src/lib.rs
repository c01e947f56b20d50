//! Game core for the issue-comment minesweeper bot.
//!
//! The engine is a pure, synchronous state machine: the driver deserializes
//! a [`GameState`], applies exactly one [`Command`], and serializes the
//! result. Persistence, comment parsing and board rendering live in the
//! `minesweeper-bot` binary.

mod board;
mod coords;
mod game;

pub use board::{Board, COLS, Cell, MINES, ROWS};
pub use coords::{Coord, ParseCoordError};
pub use game::{Command, GameState};
