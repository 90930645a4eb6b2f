//! The interface the search core consumes from a rules engine.

use std::fmt;

use chess::{ChessMove, Color, Piece, Square};

use super::{Game, GameError};

/// A position that can be searched.
///
/// Implementors own the rules: move legality, check detection and draw
/// bookkeeping. The search only enumerates, applies and undoes moves, asks
/// whether the game is over, and reads the pieces for evaluation.
///
/// `push`/`pop` must nest strictly: every `pop` undoes the most recent
/// `push` that has not been undone yet.
pub trait GamePosition {
    type Move: Copy + Eq + fmt::Debug + fmt::Display;

    fn side_to_move(&self) -> Color;

    /// Legal moves, in an order that is stable for a given position.
    fn legal_moves(&self) -> Vec<Self::Move>;

    fn push(&mut self, mv: Self::Move) -> Result<(), GameError>;

    fn pop(&mut self) -> Result<Self::Move, GameError>;

    fn is_game_over(&self) -> bool;

    fn piece_on(&self, square: Square) -> Option<(Color, Piece)>;
}

impl GamePosition for Game {
    type Move = ChessMove;

    #[inline]
    fn side_to_move(&self) -> Color {
        Game::side_to_move(self)
    }

    #[inline]
    fn legal_moves(&self) -> Vec<ChessMove> {
        Game::legal_moves(self)
    }

    #[inline]
    fn push(&mut self, mv: ChessMove) -> Result<(), GameError> {
        Game::push(self, mv)
    }

    #[inline]
    fn pop(&mut self) -> Result<ChessMove, GameError> {
        Game::pop(self)
    }

    #[inline]
    fn is_game_over(&self) -> bool {
        Game::is_game_over(self)
    }

    #[inline]
    fn piece_on(&self, square: Square) -> Option<(Color, Piece)> {
        Game::piece_on(self, square)
    }
}
