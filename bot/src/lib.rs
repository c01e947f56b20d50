//! Driver around `minesweeper-engine`: parses issue comments into commands,
//! keeps the game state in `game-state.json`, and renders the board into
//! the repository README.

pub mod command;
pub mod persist;
pub mod render;
