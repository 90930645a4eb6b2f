//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `game.rs` - Move stack, counters and game-ending rules
//! - `eval.rs` - Material and placement scores
//! - `search.rs` - Minimax with alpha-beta pruning
//! - `proptest.rs` - Property-based tests


use chess::{ChessMove, Color};

use super::{evaluate, Game};

fn game(fen: &str) -> Game {
    Game::from_fen(fen).expect("valid FEN")
}

fn play(game: &mut Game, moves: &[&str]) {
    for text in moves {
        let mv = game.parse_uci_move(text).expect("legal move");
        game.push(mv).expect("legal move");
    }
}

/// Plain minimax without pruning, for checking the real search against.
fn reference_value(game: &mut Game, depth: u32) -> i32 {
    if depth == 0 || game.is_game_over() {
        return evaluate(game);
    }
    let moves = game.legal_moves();
    if moves.is_empty() {
        return evaluate(game);
    }

    let scores: Vec<i32> = moves
        .into_iter()
        .map(|mv| {
            game.push(mv).expect("legal move");
            let score = reference_value(game, depth - 1);
            game.pop().expect("move was pushed");
            score
        })
        .collect();

    if game.side_to_move() == Color::White {
        scores.into_iter().max().unwrap_or_default()
    } else {
        scores.into_iter().min().unwrap_or_default()
    }
}

/// First root move with the best unpruned minimax value, and that value.
fn reference_root(game: &mut Game, depth: u32) -> Option<(ChessMove, i32)> {
    let maximizing = game.side_to_move() == Color::White;
    let mut best: Option<(ChessMove, i32)> = None;

    for mv in game.legal_moves() {
        game.push(mv).expect("legal move");
        let score = reference_value(game, depth.saturating_sub(1));
        game.pop().expect("move was pushed");

        let better = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if better {
            best = Some((mv, score));
        }
    }
    best
}
