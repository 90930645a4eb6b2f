//! Search tests to verify the engine finds sensible moves through the
//! public API.

use chess::Color;
use chessbot::board::{evaluate, search, DEFAULT_DEPTH};
use chessbot::{best_move, EngineController, EngineOptions, Game};

/// Test that the engine captures an undefended queen
#[test]
fn captures_hanging_queen() {
    let mut game = Game::from_fen("4k3/8/8/3q4/8/8/8/3QK3 w - - 0 1").expect("valid FEN");
    let mv = best_move(&mut game, 2)
        .expect("search succeeds")
        .expect("position has moves");
    assert_eq!(mv.to_string(), "d1d5", "Should take the queen on d5");
}

/// Test that the engine does not leave its queen en prise
#[test]
fn saves_attacked_queen() {
    // The c5 pawn attacks the queen on d4
    let mut game = Game::from_fen("4k3/8/8/2p5/3Q4/8/8/4K3 w - - 0 1").expect("valid FEN");
    let result = search(&mut game, 2).expect("search succeeds");
    assert!(result.best_move.is_some());
    assert!(
        result.score > 500,
        "queen should survive, got score {}",
        result.score
    );
}

#[test]
fn start_position_search_leaves_game_untouched() {
    let mut game = Game::new();
    let result = search(&mut game, 3).expect("search succeeds");
    let mv = result.best_move.expect("start position has moves");
    assert!(game.is_legal(mv));
    assert_eq!(result.depth, 3);
    assert_eq!(game, Game::new());
}

#[test]
fn default_options_use_default_depth() {
    assert_eq!(EngineOptions::default().depth, DEFAULT_DEPTH);
}

#[test]
fn evaluate_is_zero_at_start() {
    assert_eq!(evaluate(&Game::new()), 0);
}

/// Engine plays both sides for a few moves; every move must be legal and
/// applied to the shared game.
#[test]
fn engine_self_play() {
    let controller = EngineController::new(EngineOptions { depth: 2 });

    for ply in 0..6 {
        let side = controller.game().side_to_move();
        assert_eq!(side, if ply % 2 == 0 { Color::White } else { Color::Black });

        let before = controller.game();
        let mv = controller
            .play_engine_move()
            .expect("search succeeds")
            .expect("game is not over");
        assert!(before.is_legal(mv), "illegal move {mv} at ply {ply}");
        assert_eq!(controller.game().ply(), ply + 1);
    }

    assert!(!controller.status().is_over());
    assert!(controller.undo_move().expect("idle").is_some());
    assert_eq!(controller.game().ply(), 5);
}
