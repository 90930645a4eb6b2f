//! Human-readable game status.

use std::fmt;

use chess::Color;

use crate::board::{Game, Outcome, Termination};

/// Where the game stands after the last move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// The game is over
    Over(Outcome),
    /// The side to move is in check
    Check(Color),
    /// Play goes on with this side to move
    ToMove(Color),
}

impl GameStatus {
    #[must_use]
    pub fn of(game: &Game) -> Self {
        if let Some(outcome) = game.outcome() {
            GameStatus::Over(outcome)
        } else if game.is_check() {
            GameStatus::Check(game.side_to_move())
        } else {
            GameStatus::ToMove(game.side_to_move())
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Over(outcome) => f.write_str(match outcome.termination {
                Termination::Checkmate => "Checkmate!",
                Termination::Stalemate => "Stalemate!",
                Termination::InsufficientMaterial => "Insufficient material!",
                Termination::SeventyFiveMoves => "75-move rule!",
                Termination::FivefoldRepetition => "Fivefold repetition!",
            }),
            GameStatus::Check(_) => f.write_str("Check!"),
            GameStatus::ToMove(Color::White) => f.write_str("White's turn"),
            GameStatus::ToMove(Color::Black) => f.write_str("Black's turn"),
        }
    }
}
