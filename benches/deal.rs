use criterion::{black_box, criterion_group, criterion_main, Criterion};

use freecell_core::{move_capacity, run_onto_card, Board};

fn bench_deal(c: &mut Criterion) {
    c.bench_function("deal_game_1", |b| {
        b.iter(|| Board::deal(black_box(1)));
    });

    c.bench_function("deal_100_seeds", |b| {
        b.iter(|| {
            for seed in 1..=100 {
                black_box(Board::deal(seed));
            }
        });
    });
}

fn bench_supermove_probe(c: &mut Criterion) {
    let board = Board::deal(1);
    c.bench_function("supermove_probe_all_pairs", |b| {
        b.iter(|| {
            for src in 0..8 {
                for dst in 0..8 {
                    black_box(run_onto_card(&board, src, dst));
                }
            }
            black_box(move_capacity(&board, false))
        });
    });
}

criterion_group!(benches, bench_deal, bench_supermove_probe);
criterion_main!(benches);
