use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use torus_tables::{build_distance_table, distances_from, tables, Cell};

fn distance_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_group");

    group.bench_function("build_distance_table", |b| {
        b.iter(build_distance_table);
    });

    for index in [0, 27, 63] {
        let source = Cell::new(index).unwrap();
        let id = BenchmarkId::new("distances_from", index);

        group.bench_with_input(id, &source, |b, &source| {
            b.iter(|| distances_from(black_box(source)));
        });
    }

    group.bench_function("frozen_lookup", |b| {
        b.iter(|| {
            let mut sum = 0;
            for from in Cell::iter_all() {
                for to in Cell::iter_all() {
                    sum += tables::distance(black_box(from), to);
                }
            }
            sum
        });
    });

    group.finish();
}

criterion_group!(benches, distance_bench);
criterion_main!(benches);
