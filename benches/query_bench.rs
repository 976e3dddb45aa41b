use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use metro_planner::algorithm::query_many;
use metro_planner::graph::generators::{generate_metro_grid, generate_random_graph, station_id};
use metro_planner::query;

fn bench_single_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_query");
    for &size in &[1_000usize, 10_000, 50_000] {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let graph = generate_random_graph(size, 3.0, 600, &mut rng);
        let (start, end) = (station_id(0), station_id(size - 1));

        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| query(graph, black_box(&start), black_box(&end)))
        });
    }
    group.finish();
}

fn bench_batched_queries(c: &mut Criterion) {
    let graph = generate_metro_grid(10, 100, 90, 180);
    let pairs: Vec<(String, String)> = (0..10)
        .map(|line| (format!("L{:02}-000", line), format!("L{:02}-099", 9 - line)))
        .collect();

    c.bench_function("metro_grid_batch_10", |b| {
        b.iter(|| query_many(&graph, black_box(&pairs)))
    });
}

criterion_group!(benches, bench_single_query, bench_batched_queries);
criterion_main!(benches);
