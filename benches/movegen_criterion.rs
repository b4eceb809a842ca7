use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arbiter_chess::game_state::game_state::GameState;
use arbiter_chess::moves::move_descriptions::MoveOutcome;
use arbiter_chess::utils::algebraic::algebraic_to_square;
use arbiter_chess::utils::playout_harness::collect_legal_moves;

const ITALIAN_OPENING: &[(&str, &str)] = &[
    ("e2", "e4"),
    ("e7", "e5"),
    ("g1", "f3"),
    ("b8", "c6"),
    ("f1", "c4"),
    ("g8", "f6"),
];

fn scripted_game(script: &[(&str, &str)]) -> GameState {
    let mut game = GameState::new_game();
    for (from, to) in script {
        let from = algebraic_to_square(from).expect("bench square should parse");
        let to = algebraic_to_square(to).expect("bench square should parse");
        assert_eq!(
            game.attempt_move(from, to),
            MoveOutcome::Completed,
            "bench script move should be legal"
        );
    }
    game
}

fn bench_legal_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_move_generation");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(30);

    let startpos = GameState::new_game();
    // Correctness guard before benchmarking.
    assert_eq!(collect_legal_moves(&startpos).len(), 20);
    group.bench_function("startpos_all_moves", |b| {
        b.iter(|| collect_legal_moves(black_box(&startpos)).len())
    });

    let midgame = scripted_game(ITALIAN_OPENING);
    assert!(!collect_legal_moves(&midgame).is_empty());
    group.bench_function("italian_all_moves", |b| {
        b.iter(|| collect_legal_moves(black_box(&midgame)).len())
    });

    group.bench_function("scripted_opening_replay", |b| {
        b.iter(|| {
            let game = scripted_game(black_box(ITALIAN_OPENING));
            black_box(game.move_history.len())
        })
    });

    group.finish();
}

criterion_group!(movegen_benches, bench_legal_move_generation);
criterion_main!(movegen_benches);
