use crate::algorithm::reconstruct::reconstruct;
use crate::algorithm::traits::{vertex_label, SearchStats};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::DistanceQueue;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Single-target Dijkstra with lazy deletion and early exit.
///
/// Stops as soon as the target is popped with its final label. Requires
/// non-negative weights, which [`GraphBuilder`](crate::graph::GraphBuilder)
/// enforces. Equal-distance entries pop in vertex (identifier) order, so
/// repeated queries on the same graph return the same path.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_path(&self, graph: &G, start: usize, end: usize) -> Result<ShortestPathResult<W>> {
        for vertex in [start, end] {
            if !graph.has_vertex(vertex) {
                return Err(Error::NodeNotFound(format!("#{}", vertex)));
            }
        }

        if start == end {
            return Ok(ShortestPathResult {
                distance: W::zero(),
                path: vec![start],
                stats: SearchStats::default(),
            });
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut stats = SearchStats::default();

        distances[start] = Some(W::zero());

        let mut queue = DistanceQueue::new();
        queue.push(start, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // A better label for u has already been processed
            if matches!(distances[u], Some(best) if dist_u > best) {
                stats.stale += 1;
                continue;
            }
            stats.settled += 1;

            if u == end {
                break;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                stats.relaxed += 1;
                let Some(candidate) = dist_u.checked_add(weight) else {
                    continue;
                };

                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    queue.push(v, candidate);
                }
            }
        }

        stats.queued = queue.pushes();

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
