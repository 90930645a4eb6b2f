//! Static evaluation: material plus piece placement.

use chess::{Color, Piece, Square, ALL_COLORS, ALL_PIECES, ALL_SQUARES, NUM_PIECES};
use once_cell::sync::Lazy;

use super::pst::{PIECE_VALUES, PLACEMENT};
use super::GamePosition;

/// Value plus placement bonus, indexed by `[color][piece][square]`.
static SQUARE_SCORES: Lazy<[[[i32; 64]; NUM_PIECES]; 2]> = Lazy::new(|| {
    let mut scores = [[[0; 64]; NUM_PIECES]; 2];
    for color in ALL_COLORS {
        for piece in ALL_PIECES {
            for square in ALL_SQUARES {
                scores[color.to_index()][piece.to_index()][square.to_index()] =
                    piece_value(piece) + square_bonus(piece, color, square);
            }
        }
    }
    scores
});

/// Base material value of a piece kind.
#[inline]
#[must_use]
pub fn piece_value(piece: Piece) -> i32 {
    PIECE_VALUES[piece.to_index()]
}

/// Placement bonus for `piece` of `color` standing on `square`.
///
/// The tables are laid out from White's side with rank 8 on top, so White
/// reads row `7 - rank` and Black reads row `rank`. Files are not mirrored.
#[inline]
#[must_use]
pub fn square_bonus(piece: Piece, color: Color, square: Square) -> i32 {
    let rank = square.get_rank().to_index();
    let row = match color {
        Color::White => 7 - rank,
        Color::Black => rank,
    };
    PLACEMENT[piece.to_index()][row][square.get_file().to_index()]
}

/// Score the position in centipawns from White's point of view.
///
/// Positive favors White, negative favors Black, regardless of who is to
/// move. Pure: the position is only read.
pub fn evaluate<P: GamePosition + ?Sized>(position: &P) -> i32 {
    let scores = &*SQUARE_SCORES;
    let mut score = 0;
    for square in ALL_SQUARES {
        if let Some((color, piece)) = position.piece_on(square) {
            let value = scores[color.to_index()][piece.to_index()][square.to_index()];
            match color {
                Color::White => score += value,
                Color::Black => score -= value,
            }
        }
    }
    score
}
