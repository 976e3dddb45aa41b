use serde::Serialize;

use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Counters collected while answering one query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Vertices whose label was final when popped
    pub settled: usize,
    /// Edges examined
    pub relaxed: usize,
    /// Queue entries discarded because a better label had already been processed
    pub stale: usize,
    /// Entries pushed onto the queue, the start included
    pub queued: usize,
}

/// Result of a point-to-point search, in vertex indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Total weight of the shortest path
    pub distance: W,

    /// Vertices from start to end, both inclusive
    pub path: Vec<usize>,

    pub stats: SearchStats,
}

/// A shortest route expressed in station identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<W> {
    pub total_weight: W,
    pub path: Vec<String>,
}

/// Trait for point-to-point shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Computes the shortest path between two vertices.
    ///
    /// Fails with [`Error::NodeNotFound`] for an unknown vertex,
    /// [`Error::NoPathExists`] when `end` is unreachable and [`Error::Corrupt`]
    /// when the predecessor chain does not lead back to `start`.
    fn shortest_path(&self, graph: &G, start: usize, end: usize) -> Result<ShortestPathResult<W>>;

    /// Same as [`shortest_path`](Self::shortest_path), translating station
    /// identifiers at the boundary.
    fn query(&self, graph: &G, start: &str, end: &str) -> Result<Route<W>> {
        let start_vertex = graph
            .index_of(start)
            .ok_or_else(|| Error::NodeNotFound(start.to_string()))?;
        let end_vertex = graph
            .index_of(end)
            .ok_or_else(|| Error::NodeNotFound(end.to_string()))?;

        let result = self.shortest_path(graph, start_vertex, end_vertex)?;
        let path = result
            .path
            .iter()
            .map(|&vertex| {
                graph
                    .node_id(vertex)
                    .map(str::to_string)
                    .ok_or_else(|| Error::Corrupt(format!("vertex {} has no identifier", vertex)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Route {
            total_weight: result.distance,
            path,
        })
    }
}

/// External label of a vertex for error messages
pub(crate) fn vertex_label<W, G>(graph: &G, vertex: usize) -> String
where
    W: Weight,
    G: Graph<W>,
{
    graph
        .node_id(vertex)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", vertex))
}
