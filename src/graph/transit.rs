use crate::graph::traits::{Graph, Weight};
use std::collections::HashMap;

/// An immutable transit graph with interned station identifiers.
///
/// Built once by [`GraphBuilder`](crate::graph::GraphBuilder) and shared
/// read-only afterwards. Vertex indices follow the lexicographic order of the
/// station identifiers, so index order doubles as a deterministic tie-break.
#[derive(Debug, Clone)]
pub struct TransitGraph<W>
where
    W: Weight,
{
    /// Station identifier for each vertex, sorted ascending
    ids: Vec<String>,

    /// Station identifier -> vertex index
    index: HashMap<String, usize>,

    /// Outgoing edges for each vertex: vertex -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    edge_count: usize,
}

impl<W> TransitGraph<W>
where
    W: Weight,
{
    /// Assembles a graph from sorted ids and index-addressed adjacency.
    pub(crate) fn from_parts(ids: Vec<String>, outgoing_edges: Vec<Vec<(usize, W)>>) -> Self {
        debug_assert_eq!(ids.len(), outgoing_edges.len());
        let index = ids
            .iter()
            .enumerate()
            .map(|(vertex, id)| (id.clone(), vertex))
            .collect();
        let edge_count = outgoing_edges.iter().map(Vec::len).sum();

        TransitGraph {
            ids,
            index,
            outgoing_edges,
            edge_count,
        }
    }

    /// Iterates over every station identifier in ascending order
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.ids.iter().map(String::as_str)
    }

    /// Number of stations with no outgoing edges
    pub fn terminal_count(&self) -> usize {
        self.outgoing_edges.iter().filter(|edges| edges.is_empty()).count()
    }
}

impl<W> Graph<W> for TransitGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    fn node_id(&self, vertex: usize) -> Option<&str> {
        self.ids.get(vertex).map(String::as_str)
    }
}
