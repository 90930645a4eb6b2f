//! Benchmarks for the evaluator, the rules adapter and the search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chessbot::board::{best_move, evaluate, Game};

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn game(fen: &str) -> Game {
    Game::from_fen(fen).expect("valid FEN")
}

fn bench_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("game");

    let kiwipete = game(KIWIPETE);
    group.bench_function("legal_moves", |b| {
        b.iter(|| black_box(kiwipete.legal_moves()))
    });
    group.bench_function("is_game_over", |b| {
        b.iter(|| black_box(kiwipete.is_game_over()))
    });

    let mut position = kiwipete.clone();
    let moves = kiwipete.legal_moves();
    group.bench_function("push_pop_all", |b| {
        b.iter(|| {
            for &mv in &moves {
                position.push(mv).expect("legal move");
                position.pop().expect("move was pushed");
            }
        })
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in [2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut game = Game::new();
                best_move(&mut game, depth).expect("search succeeds")
            })
        });
    }

    for depth in [2, 3] {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut position = game(MIDDLEGAME);
                best_move(&mut position, depth).expect("search succeeds")
            })
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        (
            "startpos",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        ),
        ("middlegame", MIDDLEGAME),
        ("endgame", "8/5k2/8/8/8/8/5K2/4R3 w - - 0 1"),
    ];

    for (name, fen) in positions {
        let position = game(fen);
        group.bench_with_input(BenchmarkId::new("position", name), &position, |b, position| {
            b.iter(|| black_box(evaluate(position)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_game, bench_search, bench_eval);
criterion_main!(benches);
