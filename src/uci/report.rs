use chess::ChessMove;

use crate::engine::GameStatus;

pub fn print_ready() {
    println!("readyok");
}

pub fn print_bestmove(best_move: Option<ChessMove>) {
    if let Some(best_move) = best_move {
        println!("bestmove {best_move}");
    } else {
        println!("bestmove (none)");
    }
}

pub fn print_eval(score: i32) {
    println!("Evaluation: {score}");
}

pub fn print_position(fen: &str, status: GameStatus) {
    println!("Fen: {fen}");
    println!("Status: {status}");
}
