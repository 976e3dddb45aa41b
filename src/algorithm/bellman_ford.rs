use crate::algorithm::reconstruct::reconstruct;
use crate::algorithm::traits::{vertex_label, SearchStats};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Bellman-Ford relaxation over every edge, up to `n - 1` rounds.
///
/// Slow but independent of queue ordering; used to cross-check [`Dijkstra`]
/// distances in tests and in the benchmark binary.
///
/// [`Dijkstra`]: crate::algorithm::dijkstra::Dijkstra
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

impl BellmanFord {
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn shortest_path(&self, graph: &G, start: usize, end: usize) -> Result<ShortestPathResult<W>> {
        for vertex in [start, end] {
            if !graph.has_vertex(vertex) {
                return Err(Error::NodeNotFound(format!("#{}", vertex)));
            }
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut stats = SearchStats::default();
        distances[start] = Some(W::zero());

        for _ in 1..n.max(2) {
            let mut changed = false;
            for u in 0..n {
                let Some(dist_u) = distances[u] else { continue };
                for (v, weight) in graph.outgoing_edges(u) {
                    stats.relaxed += 1;
                    let Some(candidate) = dist_u.checked_add(weight) else {
                        continue;
                    };
                    if distances[v].map_or(true, |current| candidate < current) {
                        distances[v] = Some(candidate);
                        predecessors[v] = Some(u);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        stats.settled = distances.iter().filter(|d| d.is_some()).count();

        let distance = distances[end].ok_or_else(|| Error::NoPathExists {
            start: vertex_label(graph, start),
            end: vertex_label(graph, end),
        })?;
        let path = reconstruct(&predecessors, start, end)?;

        Ok(ShortestPathResult {
            distance,
            path,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn test_matches_known_distances() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("A", "B", 10u32).unwrap();
        builder.add_edge("B", "C", 5).unwrap();
        builder.add_edge("A", "C", 20).unwrap();
        builder.add_node("D");
        let graph = builder.build();

        let route = BellmanFord::new().query(&graph, "A", "C").unwrap();
        assert_eq!(route.total_weight, 15);
        assert_eq!(route.path, vec!["A", "B", "C"]);

        assert!(matches!(
            BellmanFord::new().query(&graph, "A", "D"),
            Err(Error::NoPathExists { .. })
        ));
    }

    #[test]
    fn test_sums_past_the_weight_range_are_not_taken() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("A", "B", u32::MAX - 5).unwrap();
        builder.add_edge("B", "C", 10).unwrap();
        builder.add_edge("A", "C", u32::MAX - 1).unwrap();
        let graph = builder.build();

        let route = BellmanFord::new().query(&graph, "A", "C").unwrap();
        assert_eq!(route.total_weight, u32::MAX - 1);
        assert_eq!(route.path, vec!["A", "C"]);
    }
}
