//! Position evaluation and game-tree search.
//!
//! The rules of chess come from the `chess` crate, wrapped by [`Game`] to
//! provide undoable moves and the draw rules. The search and the evaluator
//! only talk to the position through [`GamePosition`].
//!
//! # Example
//! ```
//! use chessbot::board::{best_move, evaluate, Game};
//!
//! let mut game = Game::new();
//! assert_eq!(evaluate(&game), 0);
//!
//! let mv = best_move(&mut game, 2).expect("legal moves are always accepted");
//! assert!(mv.is_some());
//! assert_eq!(game.ply(), 0);
//! ```

mod error;
mod eval;
mod game;
mod position;
mod pst;
pub mod search;

#[cfg(test)]
mod tests;

pub use error::GameError;
pub use eval::{evaluate, piece_value, square_bonus};
pub use game::{Game, Outcome, Termination, FIVEFOLD_REPETITIONS, SEVENTY_FIVE_MOVE_PLIES};
pub use position::GamePosition;
pub use pst::{PIECE_VALUES, PLACEMENT};
pub use search::{
    best_move, search, SearchResult, SearchStats, DEFAULT_DEPTH, SCORE_INFINITY,
};
