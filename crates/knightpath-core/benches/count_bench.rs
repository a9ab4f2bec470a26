//! 計数のベンチマーク
//!
//! 枝刈り・順序付けの有無による探索時間の差を測る。

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use knightpath_core::connectivity::is_connected;
use knightpath_core::{Board, CandidateOrder, NeighborTable, PathCounter, SearchOptions};
use std::hint::black_box;

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count");
    group.sample_size(10);

    let configs = [
        ("default", SearchOptions::default()),
        ("index_order", SearchOptions::default().with_order(CandidateOrder::Index)),
        ("no_prune", SearchOptions::default().with_prune(false)),
        ("single_thread", SearchOptions::default().with_threads(1)),
    ];
    for (name, options) in configs {
        let counter = PathCounter::new(options);
        group.bench_with_input(BenchmarkId::new(name, "4x6"), &(4, 6), |b, &(k, n)| {
            b.iter(|| counter.count(black_box(k), black_box(n)))
        });
    }
    group.finish();
}

fn bench_connectivity(c: &mut Criterion) {
    let board = Board::new(8, 8).unwrap();
    let table = NeighborTable::new(board);
    let rem = board.all();
    c.bench_function("is_connected_8x8_full", |b| {
        b.iter(|| is_connected(black_box(rem), &table))
    });
}

criterion_group!(benches, bench_count, bench_connectivity);
criterion_main!(benches);
