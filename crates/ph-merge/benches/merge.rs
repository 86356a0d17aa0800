use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ph_merge::{assemble_ranges, merge_ranges};
use ph_types::{KeySpace, PartitionStatus, RangeList};

const KEYS: usize = 50_000;

fn key_space() -> KeySpace {
    KeySpace::new((0..KEYS).map(|i| format!("partition-{i:06}"))).unwrap()
}

/// A dimension report that flips status every `run` keys, with a gap every
/// `gap` keys.
fn striped(space: &KeySpace, run: usize, gap: usize) -> RangeList {
    let statuses = (0..space.len()).map(|idx| {
        if idx % gap == 0 {
            None
        } else if (idx / run) % 2 == 0 {
            Some(PartitionStatus::Materialized)
        } else {
            Some(PartitionStatus::Missing)
        }
    });
    assemble_ranges(space, statuses).unwrap()
}

fn bench_merge(c: &mut Criterion) {
    let space = key_space();
    let mut group = c.benchmark_group("merge_ranges");

    for lists in [2usize, 4, 8] {
        let coarse: Vec<RangeList> = (0..lists)
            .map(|i| striped(&space, 5_000 + i * 731, 20_011))
            .collect();
        group.bench_with_input(BenchmarkId::new("coarse", lists), &coarse, |b, input| {
            b.iter(|| merge_ranges(black_box(&space), black_box(input)).unwrap())
        });

        let fine: Vec<RangeList> = (0..lists)
            .map(|i| striped(&space, 7 + i, 101))
            .collect();
        group.bench_with_input(BenchmarkId::new("fine", lists), &fine, |b, input| {
            b.iter(|| merge_ranges(black_box(&space), black_box(input)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
