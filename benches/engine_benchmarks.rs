//! Benchmarks for move generation and the legal-move filter.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use chess_rules::board::{Color, GameState, GameStateBuilder, RulesConfig};

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
const CASTLING: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

fn position(fen: &str) -> GameState {
    GameState::from_fen(fen).expect("benchmark FEN must parse")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    let startpos = GameState::default();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let castling = position(CASTLING);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("castling", depth), &depth, |b, &depth| {
            b.iter(|| castling.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, state) in [
        ("startpos", GameState::default()),
        ("middlegame", position(MIDDLEGAME)),
    ] {
        group.bench_function(format!("{name}/pseudo_legal"), |b| {
            b.iter(|| black_box(state.all_pseudo_legal_moves(Color::White)))
        });

        // Rebuild each iteration so the per-snapshot cache starts empty
        group.bench_function(format!("{name}/legal"), |b| {
            b.iter_batched(
                || GameStateBuilder::from_state(&state).build(),
                |fresh| black_box(fresh.legal_moves(Color::White).len()),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_parallel_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_filter");
    let state = position(MIDDLEGAME);

    for (name, parallel) in [("sequential", false), ("parallel", true)] {
        let config = RulesConfig {
            parallel_filter: parallel,
            ..RulesConfig::default()
        };
        group.bench_function(name, |b| {
            b.iter_batched(
                || GameStateBuilder::from_state(&state).config(config.clone()).build(),
                |fresh| black_box(fresh.legal_moves(Color::White).len()),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_parallel_filter);
criterion_main!(benches);
