//! A fixed-depth minimax chess engine.
//!
//! [`board`] holds the game model, the evaluator and the search;
//! [`engine`] runs searches on a worker thread for one shared game;
//! [`uci`] speaks the UCI protocol on top of it.

pub mod board;
pub mod engine;
pub mod uci;

pub use board::{best_move, evaluate, search, Game, GameError, GamePosition, SearchResult};
pub use engine::{EngineController, EngineError, EngineOptions, GameStatus};
