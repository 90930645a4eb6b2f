//! Game state on top of the `chess` crate.
//!
//! `chess::Board` is an immutable value with legal move generation and
//! checkmate/stalemate detection. `Game` adds what a search needs from a
//! rules engine on top of that: a LIFO move stack with undo, the halfmove
//! clock and fullmove counter, repetition history, and the remaining draw
//! rules (insufficient material, 75-move rule, fivefold repetition).

use std::fmt;
use std::str::FromStr;

use chess::{BitBoard, Board, BoardStatus, ChessMove, Color, MoveGen, Piece, Square};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::GameError;

/// Halfmove clock value at which the game is drawn by the 75-move rule.
pub const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Number of occurrences of one position that draws the game.
pub const FIVEFOLD_REPETITIONS: usize = 5;

/// a1, c1, ..., b2, d2, ...: every square where rank and file have equal parity.
const DARK_SQUARES: BitBoard = BitBoard(0xAA55_AA55_AA55_AA55);

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Termination::Checkmate => "checkmate",
            Termination::Stalemate => "stalemate",
            Termination::InsufficientMaterial => "insufficient material",
            Termination::SeventyFiveMoves => "75-move rule",
            Termination::FivefoldRepetition => "fivefold repetition",
        };
        f.write_str(text)
    }
}

/// A finished game: how it ended and who won (`None` for draws).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub termination: Termination,
    pub winner: Option<Color>,
}

#[derive(Clone, Debug, PartialEq)]
struct StackEntry {
    board: Board,
    mv: ChessMove,
    halfmove_clock: u32,
    fullmove_number: u32,
}

/// A chess game with reversible moves.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    board: Board,
    halfmove_clock: u32,
    fullmove_number: u32,
    stack: Vec<StackEntry>,
    /// Hash of every position along the stack, current position last.
    hashes: Vec<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::default(), 0, 1)
    }

    fn from_board(board: Board, halfmove_clock: u32, fullmove_number: u32) -> Self {
        Game {
            board,
            halfmove_clock,
            fullmove_number,
            stack: Vec::new(),
            hashes: vec![board.get_hash()],
        }
    }

    /// Parse a position from FEN. The halfmove clock and fullmove number are
    /// optional and default to `0` and `1`.
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let invalid = |reason: String| GameError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };

        let board = Board::from_str(fen).map_err(|e| invalid(e.to_string()))?;

        let mut counters = fen.split_whitespace().skip(4);
        let halfmove_clock = match counters.next() {
            Some(field) => field
                .parse::<u32>()
                .map_err(|_| invalid(format!("bad halfmove clock '{field}'")))?,
            None => 0,
        };
        let fullmove_number = match counters.next() {
            Some(field) => field
                .parse::<u32>()
                .map_err(|_| invalid(format!("bad fullmove number '{field}'")))?,
            None => 1,
        };

        Ok(Self::from_board(board, halfmove_clock, fullmove_number.max(1)))
    }

    /// FEN of the current position, including both move counters.
    #[must_use]
    pub fn to_fen(&self) -> String {
        // chess::Board prints placement, side, castling and en passant, but
        // does not track the counters.
        let board_fen = self.board.to_string();
        let fields: Vec<&str> = board_fen.split_whitespace().take(4).collect();
        format!(
            "{} {} {}",
            fields.join(" "),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Number of moves that can be undone.
    #[inline]
    #[must_use]
    pub fn ply(&self) -> usize {
        self.stack.len()
    }

    /// Moves played since the game was created, oldest first.
    #[must_use]
    pub fn move_stack(&self) -> Vec<ChessMove> {
        self.stack.iter().map(|entry| entry.mv).collect()
    }

    #[must_use]
    pub fn last_move(&self) -> Option<ChessMove> {
        self.stack.last().map(|entry| entry.mv)
    }

    #[must_use]
    pub fn piece_on(&self, square: Square) -> Option<(Color, Piece)> {
        let piece = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some((color, piece))
    }

    /// Legal moves in `MoveGen` order, which is stable for a given position.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    /// Whether `mv` is legal here. Accepts arbitrary input, not only moves
    /// produced by [`legal_moves`](Self::legal_moves).
    #[must_use]
    pub fn is_legal(&self, mv: ChessMove) -> bool {
        self.board.legal(mv)
    }

    /// Find the legal move written in long algebraic notation ("e2e4", "e7e8q").
    pub fn parse_uci_move(&self, text: &str) -> Result<ChessMove, GameError> {
        let notation = text.trim().to_ascii_lowercase();
        if !notation.is_ascii() || !(4..=5).contains(&notation.len()) {
            return Err(GameError::InvalidMoveNotation { notation });
        }
        MoveGen::new_legal(&self.board)
            .find(|mv| mv.to_string() == notation)
            .ok_or(GameError::IllegalMove { notation })
    }

    /// Play a legal move.
    pub fn push(&mut self, mv: ChessMove) -> Result<(), GameError> {
        if !self.is_legal(mv) {
            return Err(GameError::IllegalMove {
                notation: mv.to_string(),
            });
        }

        let resets_clock = self.board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            || self.board.piece_on(mv.get_dest()).is_some();
        let mover = self.board.side_to_move();

        self.stack.push(StackEntry {
            board: self.board,
            mv,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });

        self.board = self.board.make_move_new(mv);
        self.halfmove_clock = if resets_clock {
            0
        } else {
            self.halfmove_clock + 1
        };
        if mover == Color::Black {
            self.fullmove_number += 1;
        }
        self.hashes.push(self.board.get_hash());
        Ok(())
    }

    /// Undo the most recent move and return it.
    pub fn pop(&mut self) -> Result<ChessMove, GameError> {
        let entry = self.stack.pop().ok_or(GameError::EmptyHistory)?;
        self.board = entry.board;
        self.halfmove_clock = entry.halfmove_clock;
        self.fullmove_number = entry.fullmove_number;
        self.hashes.pop();
        Ok(entry.mv)
    }

    #[must_use]
    pub fn is_check(&self) -> bool {
        self.board.checkers().popcnt() > 0
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.board.status() == BoardStatus::Checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.board.status() == BoardStatus::Stalemate
    }

    /// Neither side has enough material left to deliver mate.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        self.has_insufficient_material(Color::White) && self.has_insufficient_material(Color::Black)
    }

    /// `color` cannot checkmate by any sequence of legal moves.
    #[must_use]
    pub fn has_insufficient_material(&self, color: Color) -> bool {
        let board = &self.board;
        let ours = *board.color_combined(color);
        let theirs = *board.color_combined(!color);
        let pawns = *board.pieces(Piece::Pawn);
        let knights = *board.pieces(Piece::Knight);
        let bishops = *board.pieces(Piece::Bishop);
        let heavy = pawns | *board.pieces(Piece::Rook) | *board.pieces(Piece::Queen);

        if (ours & heavy).popcnt() > 0 {
            return false;
        }

        if (ours & knights).popcnt() > 0 {
            // A lone knight can only mate with help from enemy pieces that
            // block their own king's escape squares.
            let kings_and_queens = *board.pieces(Piece::King) | *board.pieces(Piece::Queen);
            return ours.popcnt() <= 2 && (theirs & !kings_and_queens).popcnt() == 0;
        }

        if (ours & bishops).popcnt() > 0 {
            let same_color_bishops =
                (bishops & DARK_SQUARES).popcnt() == 0 || (bishops & !DARK_SQUARES).popcnt() == 0;
            return same_color_bishops && pawns.popcnt() == 0 && knights.popcnt() == 0;
        }

        true
    }

    /// Halfmove clock reached 150 and the side to move still has a move.
    #[must_use]
    pub fn is_seventy_five_moves(&self) -> bool {
        self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES
            && self.board.status() == BoardStatus::Ongoing
    }

    /// How many times the current position occurs along the move stack.
    ///
    /// Positions are compared by `chess::Board::get_hash`, which includes the
    /// en passant file whenever an enemy pawn stands next to a pawn that just
    /// moved two squares, even if that capture is illegal (for example because
    /// the capturing pawn is pinned). Such a position therefore never repeats
    /// the same placement reached without a double push.
    #[must_use]
    pub fn repetitions(&self) -> usize {
        let current = self.board.get_hash();
        self.hashes.iter().filter(|&&hash| hash == current).count()
    }

    #[must_use]
    pub fn is_fivefold_repetition(&self) -> bool {
        self.repetitions() >= FIVEFOLD_REPETITIONS
    }

    /// How the game ended, or `None` while it is still in progress.
    ///
    /// Conditions are checked in the order checkmate, stalemate,
    /// insufficient material, 75-move rule, fivefold repetition.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        let termination = match self.board.status() {
            BoardStatus::Checkmate => Termination::Checkmate,
            BoardStatus::Stalemate => Termination::Stalemate,
            BoardStatus::Ongoing => {
                if self.is_insufficient_material() {
                    Termination::InsufficientMaterial
                } else if self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES {
                    Termination::SeventyFiveMoves
                } else if self.is_fivefold_repetition() {
                    Termination::FivefoldRepetition
                } else {
                    return None;
                }
            }
        };

        let winner = (termination == Termination::Checkmate).then(|| !self.board.side_to_move());
        Some(Outcome {
            termination,
            winner,
        })
    }

    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

impl FromStr for Game {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::from_fen(s)
    }
}
