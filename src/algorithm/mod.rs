pub mod bellman_ford;
pub mod dijkstra;
pub mod reconstruct;
pub mod traits;

use rayon::prelude::*;

use crate::graph::{Graph, Weight};
use crate::Result;

pub use traits::{Route, SearchStats, ShortestPathAlgorithm, ShortestPathResult};

/// Shortest route between two stations using [`dijkstra::Dijkstra`].
pub fn query<W, G>(graph: &G, start: &str, end: &str) -> Result<Route<W>>
where
    W: Weight,
    G: Graph<W>,
{
    dijkstra::Dijkstra::new().query(graph, start, end)
}

/// Answers many queries against one shared graph in parallel.
///
/// Each query owns its scratch state; results come back in input order and a
/// failing query does not affect the others.
pub fn query_many<W, G, S>(graph: &G, pairs: &[(S, S)]) -> Vec<Result<Route<W>>>
where
    W: Weight,
    G: Graph<W> + Sync,
    S: AsRef<str> + Sync,
{
    pairs
        .par_iter()
        .map(|(start, end)| query(graph, start.as_ref(), end.as_ref()))
        .collect()
}
