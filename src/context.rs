//! Shared, read-only planning context handed to every front end.

use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::algorithm::{query, Route};
use crate::graph::{Graph, TransitGraph, Weight};
use crate::gtfs::{build_graph, GtfsFeed, IngestConfig, Stop};
use crate::Result;

/// Station id -> display name. Ids without an entry label as themselves.
#[derive(Debug, Clone, Default)]
pub struct StationNames {
    names: HashMap<String, String>,
}

impl StationNames {
    pub fn new(names: HashMap<String, String>) -> Self {
        Self { names }
    }

    pub fn from_stops(stops: &[Stop]) -> Self {
        let names = stops
            .iter()
            .filter(|stop| !stop.stop_name.is_empty())
            .map(|stop| (stop.stop_id.clone(), stop.stop_name.clone()))
            .collect();
        Self { names }
    }

    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.names.get(id).map(String::as_str).unwrap_or(id)
    }

    /// Case-insensitive substring match on the id or its name
    pub fn matches(&self, id: &str, term: &str) -> bool {
        let term = term.to_lowercase();
        id.to_lowercase().contains(&term)
            || self
                .names
                .get(id)
                .map_or(false, |name| name.to_lowercase().contains(&term))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The loaded network: graph plus display names.
///
/// Built once at startup and cloned cheaply into each handler; nothing in it
/// is mutated afterwards, so concurrent queries need no locking.
#[derive(Debug)]
pub struct PlannerContext<W>
where
    W: Weight,
{
    pub graph: Arc<TransitGraph<W>>,
    pub names: Arc<StationNames>,
}

impl<W> Clone for PlannerContext<W>
where
    W: Weight,
{
    fn clone(&self) -> Self {
        Self {
            graph: Arc::clone(&self.graph),
            names: Arc::clone(&self.names),
        }
    }
}

impl<W> PlannerContext<W>
where
    W: Weight,
{
    pub fn new(graph: TransitGraph<W>, names: StationNames) -> Self {
        Self {
            graph: Arc::new(graph),
            names: Arc::new(names),
        }
    }

    /// Shortest route between two stations
    pub fn route(&self, start: &str, end: &str) -> Result<Route<W>> {
        query(self.graph.as_ref(), start, end)
    }

    /// Stations whose id or name contains `term` (all when blank), sorted by
    /// id, at most `limit` of them, as `(id, label)` pairs.
    pub fn search_stations(&self, term: &str, limit: usize) -> Vec<(String, String)> {
        let term = term.trim();
        self.graph
            .node_ids()
            .filter(|id| term.is_empty() || self.names.matches(id, term))
            .take(limit)
            .map(|id| (id.to_string(), self.names.label(id).to_string()))
            .collect()
    }

    /// Number of stations matching `term`, uncapped
    pub fn count_stations(&self, term: &str) -> usize {
        let term = term.trim();
        self.graph
            .node_ids()
            .filter(|id| term.is_empty() || self.names.matches(id, term))
            .count()
    }
}

impl PlannerContext<u32> {
    /// Loads a GTFS directory and builds the graph and name table from it
    pub fn from_gtfs(dir: impl AsRef<Path>, config: &IngestConfig) -> Result<Self> {
        let feed = GtfsFeed::load(dir)?;
        let (graph, stats) = build_graph(&feed, config)?;
        info!(
            "Graph ready: {} stations, {} edges ({} ride, {} transfer)",
            graph.vertex_count(),
            graph.edge_count(),
            stats.ride_edges,
            stats.transfer_edges + stats.station_transfer_edges
        );
        info!("{} stations have no outgoing edges", graph.terminal_count());

        let names = StationNames::from_stops(&feed.stops);
        if names.is_empty() {
            warn!("stops.txt has no station names, ids will be shown instead");
        } else {
            info!("Loaded {} station names", names.len());
        }
        Ok(Self::new(graph, names))
    }
}

/// Trims and upper-cases a station id typed by a user
pub fn normalize_station_id(input: &str) -> String {
    input.trim().to_uppercase()
}
