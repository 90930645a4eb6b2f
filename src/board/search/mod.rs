//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The search walks the move tree depth first over a single mutable
//! position, pushing a move before each recursion and popping it right
//! after, so the position is back in its original state when the search
//! returns. Scores come from [`evaluate`] and are always from White's point
//! of view: White to move maximizes, Black to move minimizes.
//!
//! There is no move ordering, no hashing and no quiescence; the tree is
//! explored in the order the rules engine enumerates moves.

mod constants;

use std::time::Instant;

use chess::Color;
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{evaluate, GameError, GamePosition};
pub use constants::{DEFAULT_DEPTH, SCORE_INFINITY};

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    /// Positions visited below the root
    pub nodes: u64,
    /// Positions scored by the evaluator
    pub leaves: u64,
    /// Move loops cut short because `beta <= alpha`
    pub cutoffs: u64,
}

/// Result of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// The best move found (`None` if there are no legal moves)
    pub best_move: Option<M>,
    /// Minimax score of `best_move`, or the static evaluation when there is none
    pub score: i32,
    /// Depth searched, in plies
    pub depth: u32,
    /// Node, leaf and cutoff counters for this search
    pub stats: SearchStats,
}

/// Choose the best move for the side to move, searching `depth` plies.
///
/// Returns `Ok(None)` when there are no legal moves. Depth 0 behaves like
/// depth 1: every root move is still tried and scored statically.
///
/// An error means the position rejected one of its own legal moves or an
/// undo; the search stops rather than return a move computed from a
/// position in an unknown state.
pub fn best_move<P: GamePosition>(
    position: &mut P,
    depth: u32,
) -> Result<Option<P::Move>, GameError> {
    search(position, depth).map(|result| result.best_move)
}

/// Search the position and report the best move together with its score
/// and search statistics.
///
/// Ties go to the move enumerated first.
pub fn search<P: GamePosition>(
    position: &mut P,
    depth: u32,
) -> Result<SearchResult<P::Move>, GameError> {
    let start = Instant::now();
    let mut stats = SearchStats::default();
    let maximizing = position.side_to_move() == Color::White;
    let child_depth = depth.saturating_sub(1);

    // The root never cuts off: only the bound on the root side's behalf
    // moves, the other stays at infinity.
    let mut alpha = -SCORE_INFINITY;
    let mut beta = SCORE_INFINITY;
    let mut best: Option<(P::Move, i32)> = None;

    for mv in position.legal_moves() {
        position.push(mv)?;
        let score = minimax(position, child_depth, alpha, beta, &mut stats);
        position.pop()?;
        let score = score?;
        trace!("root move {mv} scored {score}");

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((mv, score));
        }

        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }
    }

    let (best_move, score) = match best {
        Some((mv, score)) => (Some(mv), score),
        None => (None, evaluate(position)),
    };

    debug!(
        "search depth {} best {} score {} nodes {} leaves {} cutoffs {} in {:?}",
        depth,
        best_move.map_or_else(|| "(none)".to_string(), |mv| mv.to_string()),
        score,
        stats.nodes,
        stats.leaves,
        stats.cutoffs,
        start.elapsed()
    );

    Ok(SearchResult {
        best_move,
        score,
        depth,
        stats,
    })
}

/// Minimax value of the position within the `(alpha, beta)` window.
///
/// The returned value is exact when it lies strictly inside the window;
/// otherwise it is a bound on the side of the window it fell out of.
fn minimax<P: GamePosition>(
    position: &mut P,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> Result<i32, GameError> {
    stats.nodes += 1;

    if depth == 0 || position.is_game_over() {
        stats.leaves += 1;
        return Ok(evaluate(position));
    }

    let moves = position.legal_moves();
    if moves.is_empty() {
        stats.leaves += 1;
        return Ok(evaluate(position));
    }

    if position.side_to_move() == Color::White {
        let mut best = -SCORE_INFINITY;
        for mv in moves {
            position.push(mv)?;
            let score = minimax(position, depth - 1, alpha, beta, stats);
            position.pop()?;
            let score = score?;

            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        Ok(best)
    } else {
        let mut best = SCORE_INFINITY;
        for mv in moves {
            position.push(mv)?;
            let score = minimax(position, depth - 1, alpha, beta, stats);
            position.pop()?;
            let score = score?;

            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        Ok(best)
    }
}
