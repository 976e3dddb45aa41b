use rand::prelude::*;
use std::time::{Duration, Instant};

use metro_planner::algorithm::{query_many, ShortestPathAlgorithm};
use metro_planner::graph::generators::{generate_metro_grid, generate_random_graph};
use metro_planner::graph::Graph;
use metro_planner::{BellmanFord, Dijkstra, TransitGraph};

/// Times `pairs` sequential point-to-point queries on one graph
fn benchmark_queries(graph: &TransitGraph<u32>, pairs: &[(usize, usize)]) -> (Duration, usize, usize) {
    let dijkstra = Dijkstra::new();
    let mut found = 0;
    let mut settled = 0;

    let start = Instant::now();
    for &(s, t) in pairs {
        if let Ok(result) = dijkstra.shortest_path(graph, s, t) {
            found += 1;
            settled += result.stats.settled;
        }
    }
    (start.elapsed(), found, settled)
}

/// Compares Dijkstra distances against Bellman-Ford; returns mismatches
fn cross_check(graph: &TransitGraph<u32>, pairs: &[(usize, usize)]) -> usize {
    let dijkstra = Dijkstra::new();
    let reference = BellmanFord::new();
    pairs
        .iter()
        .filter(|&&(s, t)| {
            let fast = dijkstra.shortest_path(graph, s, t).map(|r| r.distance).ok();
            let slow = reference.shortest_path(graph, s, t).map(|r| r.distance).ok();
            fast != slow
        })
        .count()
}

fn main() {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(42);

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000];
    let edge_factor = 3.0;
    let queries = 200;

    println!("=====================================================");
    println!("Benchmark: point-to-point Dijkstra");
    println!("Edge factor: {} edges per station, {} queries per graph", edge_factor, queries);
    println!("=====================================================");

    let mut results = Vec::new();
    for &size in &graph_sizes {
        let graph = generate_random_graph(size, edge_factor, 600, &mut rng);
        let pairs: Vec<(usize, usize)> = (0..queries)
            .map(|_| (rng.gen_range(0..size), rng.gen_range(0..size)))
            .collect();

        let (elapsed, found, settled) = benchmark_queries(&graph, &pairs);
        println!(
            "{} stations, {} edges: {} routes found in {:?} (avg {} settled)",
            graph.vertex_count(),
            graph.edge_count(),
            found,
            elapsed,
            settled / found.max(1)
        );
        results.push((size, elapsed, found));
    }

    // Correctness spot-check on small graphs
    let mut mismatches = 0;
    for _ in 0..20 {
        let graph = generate_random_graph(60, 2.5, 300, &mut rng);
        let pairs: Vec<(usize, usize)> = (0..30).map(|_| (rng.gen_range(0..60), rng.gen_range(0..60))).collect();
        mismatches += cross_check(&graph, &pairs);
    }
    println!("\nBellman-Ford cross-check: {} mismatches", mismatches);

    // Parallel batch on a metro-like grid
    let grid = generate_metro_grid(20, 200, 90, 180);
    let grid_pairs: Vec<(String, String)> = (0..1_000)
        .map(|_| {
            let a = format!("L{:02}-{:03}", rng.gen_range(0..20), rng.gen_range(0..200));
            let b = format!("L{:02}-{:03}", rng.gen_range(0..20), rng.gen_range(0..200));
            (a, b)
        })
        .collect();
    let start = Instant::now();
    let answered = query_many(&grid, &grid_pairs).iter().filter(|r| r.is_ok()).count();
    println!(
        "Metro grid ({} stations): {} of {} batched queries answered in {:?}",
        grid.vertex_count(),
        answered,
        grid_pairs.len(),
        start.elapsed()
    );

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    let header = summary_row(["Stations", "Total (ms)", "Per query (us)", "Found"].map(String::from));
    println!("{}", header);
    println!("{}", "-".repeat(header.len()));
    for (size, elapsed, found) in &results {
        println!(
            "{}",
            summary_row([
                size.to_string(),
                elapsed.as_millis().to_string(),
                (elapsed.as_micros() / queries as u128).to_string(),
                found.to_string(),
            ])
        );
    }
}

const SUMMARY_WIDTHS: [usize; 4] = [10, 12, 14, 10];

/// One left-aligned line of the summary table
fn summary_row(cells: [String; 4]) -> String {
    cells
        .iter()
        .zip(SUMMARY_WIDTHS)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_columns_line_up() {
        let header = summary_row(["Stations", "Total (ms)", "Per query (us)", "Found"].map(String::from));
        let row = summary_row(["100000", "1234", "6170", "200"].map(String::from));
        assert_eq!(header.len(), row.len());

        let separators = |line: &str| line.match_indices(" | ").map(|(i, _)| i).collect::<Vec<_>>();
        assert_eq!(separators(&header), separators(&row));
    }
}
