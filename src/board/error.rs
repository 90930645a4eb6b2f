//! Error types for game and position operations.

use std::fmt;

/// Error type for rules-engine operations on a [`Game`](super::Game).
///
/// During a search these signal a broken collaborator contract: the searcher
/// only ever pushes moves it was handed as legal and only pops what it pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// FEN string could not be parsed
    InvalidFen { fen: String, reason: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
    /// Move text is not long algebraic notation (e.g. "e2e4", "e7e8q")
    InvalidMoveNotation { notation: String },
    /// Undo requested with no moves on the stack
    EmptyHistory,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidFen { fen, reason } => {
                write!(f, "Invalid FEN '{fen}': {reason}")
            }
            GameError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
            GameError::InvalidMoveNotation { notation } => {
                write!(f, "Invalid move notation '{notation}'")
            }
            GameError::EmptyHistory => write!(f, "No move to undo"),
        }
    }
}

impl std::error::Error for GameError {}
