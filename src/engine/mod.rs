//! Engine controller: one game, one search at a time.
//!
//! The controller owns the game shared with the front end, serializes
//! searches behind a busy flag, and runs them on a worker thread so the
//! caller stays responsive while the engine thinks.

mod controller;
mod error;
mod options;
mod status;

pub use controller::{EngineController, SearchJob};
pub use error::EngineError;
pub use options::{EngineOptions, MAX_DEPTH, MIN_DEPTH};
pub use status::GameStatus;
