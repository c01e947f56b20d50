use minesweeper_engine::{Command, ParseCoordError};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("coordinate rejected: {0}")]
    InvalidCoordinate(#[from] ParseCoordError),
    #[error("comment matches no known command")]
    Unrecognized,
}

/// Maps one issue comment to a command. Matching is case-insensitive and
/// ignores surrounding whitespace; anything that is not `new game`,
/// `click <COORD>` or `flag <COORD>` is rejected, and the caller leaves the
/// game untouched.
pub fn parse_comment(comment: &str) -> Result<Command, ParseCommandError> {
    let text = comment.trim().to_lowercase();

    if text == "new game" {
        Ok(Command::NewGame)
    } else if let Some(label) = text.strip_prefix("click ") {
        Ok(Command::Click(label.parse()?))
    } else if let Some(label) = text.strip_prefix("flag ") {
        Ok(Command::Flag(label.parse()?))
    } else {
        Err(ParseCommandError::Unrecognized)
    }
}
