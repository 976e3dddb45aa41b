use metro_planner::algorithm::ShortestPathAlgorithm;
use metro_planner::graph::generators::generate_random_graph;
use metro_planner::graph::{Graph, GraphBuilder, TransitGraph};
use metro_planner::{BellmanFord, Dijkstra, Error};
use ordered_float::OrderedFloat;
use rand::prelude::*;

fn distances_agree(graph: &TransitGraph<u32>) {
    let dijkstra = Dijkstra::new();
    let reference = BellmanFord::new();
    let n = graph.vertex_count();

    for s in 0..n {
        for t in 0..n {
            let fast = dijkstra.shortest_path(graph, s, t);
            let slow = reference.shortest_path(graph, s, t);
            match (fast, slow) {
                (Ok(fast), Ok(slow)) => {
                    assert_eq!(fast.distance, slow.distance, "distance {} -> {}", s, t);
                    assert_eq!(fast.path.first(), Some(&s));
                    assert_eq!(fast.path.last(), Some(&t));
                }
                (Err(Error::NoPathExists { .. }), Err(Error::NoPathExists { .. })) => {}
                (fast, slow) => panic!("{} -> {}: dijkstra {:?}, reference {:?}", s, t, fast, slow),
            }
        }
    }
}

#[test]
fn test_matches_bellman_ford_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(2024);
    for round in 0..25 {
        let n = rng.gen_range(2..25);
        let edge_factor = rng.gen_range(0.5..4.0);
        let graph = generate_random_graph(n, edge_factor, 50, &mut rng);
        assert_eq!(graph.vertex_count(), n, "round {}", round);
        distances_agree(&graph);
    }
}

#[test]
fn test_matches_bellman_ford_with_zero_weights_and_parallel_edges() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..10 {
        let mut builder = GraphBuilder::new();
        let n = 12;
        for i in 0..n {
            builder.add_node(&format!("N{:02}", i));
        }
        for _ in 0..40 {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            // weights in 0..=3 produce many ties and zero-cost hops
            let w: u32 = rng.gen_range(0..=3);
            builder.add_edge(&format!("N{:02}", u), &format!("N{:02}", v), w).unwrap();
        }
        distances_agree(&builder.build());
    }
}

#[test]
fn test_float_weights_match_reference() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut builder = GraphBuilder::new();
    for _ in 0..60 {
        let u = rng.gen_range(0..15);
        let v = rng.gen_range(0..15);
        let w = OrderedFloat(rng.gen_range(0.0f64..30.0));
        builder.add_edge(&format!("F{}", u), &format!("F{}", v), w).unwrap();
    }
    let graph = builder.build();

    for s in 0..graph.vertex_count() {
        for t in 0..graph.vertex_count() {
            let fast = Dijkstra::new().shortest_path(&graph, s, t).map(|r| r.distance).ok();
            let slow = BellmanFord::new().shortest_path(&graph, s, t).map(|r| r.distance).ok();
            match (fast, slow) {
                (Some(a), Some(b)) => assert!((a.into_inner() - b.into_inner()).abs() < 1e-9),
                (None, None) => {}
                other => panic!("{} -> {}: {:?}", s, t, other),
            }
        }
    }
}
