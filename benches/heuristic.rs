use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_ttt::ai::HeuristicPolicy;
use rust_ttt::core::{Board, GameRng, Player};

fn bench_heuristic(c: &mut Criterion) {
    let positions = [
        ("empty", "___ ___ ___"),
        ("block", "XX_ _O_ ___"),
        ("corner", "___ _X_ ___"),
        ("side", "XOX _X_ OXO"),
    ];
    let mut rng = GameRng::new(42);

    for (name, text) in positions {
        let board = Board::parse(text).unwrap();
        c.bench_function(&format!("heuristic_{name}"), |b| {
            b.iter(|| HeuristicPolicy.choose_with_tier(black_box(&board), Player::Second, &mut rng))
        });
    }
}

criterion_group!(benches, bench_heuristic);
criterion_main!(benches);
