use crate::graph::{GraphBuilder, TransitGraph};
use rand::prelude::*;

/// Station identifier used by the generators: `S0000`, `S0001`, ...
pub fn station_id(i: usize) -> String {
    format!("S{:04}", i)
}

/// Generates a random directed graph with about `edge_factor * n` edges.
/// Weights are uniform in `1..=max_weight` seconds; self-loops are skipped.
pub fn generate_random_graph<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: u32,
    rng: &mut R,
) -> TransitGraph<u32> {
    let mut builder = GraphBuilder::new();
    for i in 0..n {
        builder.add_node(&station_id(i));
    }
    if n < 2 {
        return builder.build();
    }

    let edges = (edge_factor * n as f64) as usize;
    for _ in 0..edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1..=max_weight.max(1));
            // u32 weights are never negative
            let _ = builder.add_edge(&station_id(u), &station_id(v), weight);
        }
    }

    builder.build()
}

/// Generates a metro-like grid: `lines` parallel lines of `stops` platforms,
/// ridden in both directions, with a transfer between neighbouring lines at
/// every stop index.
///
/// Platform ids are `L<line>-<stop>`. Ride edges cost `ride_secs`,
/// transfers cost `transfer_secs`.
pub fn generate_metro_grid(
    lines: usize,
    stops: usize,
    ride_secs: u32,
    transfer_secs: u32,
) -> TransitGraph<u32> {
    let platform = |line: usize, stop: usize| format!("L{:02}-{:03}", line, stop);
    let mut builder = GraphBuilder::new();

    for line in 0..lines {
        for stop in 0..stops {
            builder.add_node(&platform(line, stop));
            if stop + 1 < stops {
                let _ = builder.add_edge(&platform(line, stop), &platform(line, stop + 1), ride_secs);
                let _ = builder.add_edge(&platform(line, stop + 1), &platform(line, stop), ride_secs);
            }
            if line + 1 < lines {
                let _ = builder.add_edge(&platform(line, stop), &platform(line + 1, stop), transfer_secs);
                let _ = builder.add_edge(&platform(line + 1, stop), &platform(line, stop), transfer_secs);
            }
        }
    }

    builder.build()
}
