//! Criterion benchmarks for whole-board advances.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tessera_bench::{multi_state_profile, reference_profile, stress_profile, wide_bucket_profile};
use tessera_engine::{Board, BoardConfig};
use tessera_rule::RuleTable;

fn bench_profile(c: &mut Criterion, name: &str, config: BoardConfig) {
    let mut board = Board::new(config).unwrap();
    c.bench_function(name, |b| {
        b.iter(|| {
            board.advance();
            black_box(board.tick_id());
        });
    });
}

/// Benchmark: one generation of a 128x128 Life soup.
fn bench_advance_reference(c: &mut Criterion) {
    bench_profile(c, "advance_life_128", reference_profile(42));
}

/// Benchmark: one generation of a 512x512 Life soup.
fn bench_advance_stress(c: &mut Criterion) {
    bench_profile(c, "advance_life_512", stress_profile(42));
}

/// Benchmark: Brian's Brain, three states.
fn bench_advance_multi_state(c: &mut Criterion) {
    bench_profile(c, "advance_brians_brain_128", multi_state_profile(42));
}

/// Benchmark: radius-2 bucket with boundary skips.
fn bench_advance_wide_bucket(c: &mut Criterion) {
    bench_profile(c, "advance_radius2_128", wide_bucket_profile(42));
}

/// Benchmark: the reference profile driven by a table parsed from text.
fn bench_advance_parsed_rules(c: &mut Criterion) {
    let mut config = reference_profile(42);
    config.rule_table = RuleTable::parse_rows(&[
        ["def", "2 < n[1] < 4"],
        ["not (n[1] in {2, 3})", "def"],
    ])
    .unwrap();
    bench_profile(c, "advance_life_128_parsed", config);
}

/// Benchmark: hashing a 512x512 generation.
fn bench_state_hash(c: &mut Criterion) {
    let board = Board::new(stress_profile(7)).unwrap();
    c.bench_function("state_hash_512", |b| {
        b.iter(|| black_box(board.state_hash()));
    });
}

criterion_group!(
    benches,
    bench_advance_reference,
    bench_advance_stress,
    bench_advance_multi_state,
    bench_advance_wide_bucket,
    bench_advance_parsed_rules,
    bench_state_hash,
);
criterion_main!(benches);
