use crate::graph::traits::Weight;
use crate::graph::TransitGraph;
use crate::{Error, Result};
use std::collections::BTreeMap;

/// Accumulates stations and edges, then freezes them into a [`TransitGraph`].
///
/// Edges are kept exactly as added: parallel edges between the same pair of
/// stations are preserved so the search can relax every one of them.
#[derive(Debug, Clone)]
pub struct GraphBuilder<W>
where
    W: Weight,
{
    adjacency: BTreeMap<String, Vec<(String, W)>>,
    edge_count: usize,
}

impl<W> Default for GraphBuilder<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> GraphBuilder<W>
where
    W: Weight,
{
    /// Creates an empty builder
    pub fn new() -> Self {
        GraphBuilder {
            adjacency: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Registers a station, which may end up with no edges at all
    pub fn add_node(&mut self, id: &str) {
        if !self.adjacency.contains_key(id) {
            self.adjacency.insert(id.to_string(), Vec::new());
        }
    }

    /// Adds a directed edge, creating either endpoint if needed.
    ///
    /// Fails with [`Error::NegativeWeight`] if `weight` is below zero.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: W) -> Result<()> {
        if weight < W::zero() {
            return Err(Error::NegativeWeight(format!(
                "{} -> {} has weight {:?}",
                from, to, weight
            )));
        }

        self.add_node(to);
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push((to.to_string(), weight));
        self.edge_count += 1;
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Interns station identifiers into dense indices and freezes the graph.
    pub fn build(self) -> TransitGraph<W> {
        let ids: Vec<String> = self.adjacency.keys().cloned().collect();
        let position = |id: &str| ids.binary_search_by(|known| known.as_str().cmp(id));

        let mut outgoing = Vec::with_capacity(ids.len());
        for edges in self.adjacency.values() {
            // Every target was registered by add_edge, so the lookup always succeeds.
            let interned: Vec<(usize, W)> = edges
                .iter()
                .filter_map(|(target, weight)| position(target).ok().map(|t| (t, *weight)))
                .collect();
            outgoing.push(interned);
        }

        TransitGraph::from_parts(ids, outgoing)
    }
}
