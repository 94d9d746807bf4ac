use std::thread::available_parallelism;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use isolation_engine::eval::improved_score;
use isolation_engine::notation::Notation;
use isolation_engine::perft::perft;
use isolation_engine::search;
use isolation_engine::timeman::Mode;
use isolation_engine::*;

pub fn criterion_perft_benchmark(c: &mut Criterion) {
    // Setup
    let board = Board::default();
    let num_threads = available_parallelism()
        .map(|inner| inner.get())
        .unwrap_or(1);

    // Benchmarks

    c.bench_function("tournament_board: perft(2) threads: 1", |b| {
        b.iter(|| {
            let info = perft(black_box(board), black_box(2), black_box(1));
            assert_eq!(info.nodes, 3_906);
        })
    });
    c.bench_function("tournament_board: perft(3) threads: 1", |b| {
        b.iter(|| perft(black_box(board), black_box(3), black_box(1)))
    });
    c.bench_function(
        &format!("tournament_board: perft(3) threads: {num_threads}"),
        |b| b.iter(|| perft(black_box(board), black_box(3), black_box(num_threads))),
    );
}

pub fn criterion_midgame_search_benchmark(c: &mut Criterion) {
    // Setup: a 5x5 midgame with both players placed and a few cells gone.
    let board = Board::parse_notation("x.x../.1.../..x../...2./x.... 1").unwrap();
    let ply = 5;

    // Benchmarks

    c.bench_function("midgame_5x5_minimax", |b| {
        b.iter(|| {
            let result = search::minimax(black_box(board), black_box(ply), improved_score);
            assert!(!result.best_move.is_forfeit());
        })
    });

    c.bench_function("midgame_5x5_alpha_beta", |b| {
        b.iter(|| {
            let result = search::alpha_beta(black_box(board), black_box(ply), improved_score);
            assert!(!result.best_move.is_forfeit());
        })
    });

    c.bench_function("midgame_5x5_ids", |b| {
        b.iter(|| {
            let mode = Mode::depth(ply, None);
            let result = search::search(black_box(board), mode, improved_score, None);
            assert!(!result.best_move.is_forfeit());
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().without_plots().sample_size(30);
    targets = criterion_perft_benchmark, criterion_midgame_search_benchmark
}
criterion_main!(benches);
