use chess_rules::Position;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minimax_engine::pick_best_move;

fn bench_search(c: &mut Criterion) {
    c.bench_function("startpos depth 2", |b| {
        let mut pos = Position::startpos();
        b.iter(|| black_box(pick_best_move(&mut pos, 2)));
    });

    c.bench_function("kiwipete depth 2", |b| {
        let mut pos = Position::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();
        b.iter(|| black_box(pick_best_move(&mut pos, 2)));
    });

    c.bench_function("startpos depth 3", |b| {
        let mut pos = Position::startpos();
        b.iter(|| black_box(pick_best_move(&mut pos, 3)));
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
