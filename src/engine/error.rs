//! Engine error types.

use std::fmt;

use crate::board::GameError;

/// Errors returned by [`EngineController`](super::EngineController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A search is already running
    Busy,
    /// The game rejected a move or an undo
    Game(GameError),
    /// The search thread panicked before producing a result
    WorkerPanicked,
    /// The search thread could not be started
    Spawn { reason: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Busy => write!(f, "A search is already in progress"),
            EngineError::Game(err) => write!(f, "{err}"),
            EngineError::WorkerPanicked => write!(f, "Search thread panicked"),
            EngineError::Spawn { reason } => {
                write!(f, "Failed to start search thread: {reason}")
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Game(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GameError> for EngineError {
    fn from(err: GameError) -> Self {
        EngineError::Game(err)
    }
}
