//! Metro Planner - shortest-time routing over transit networks
//!
//! The core is a point-to-point Dijkstra search with lazy deletion over an
//! immutable, interned adjacency graph. Around it sit thin adapters: GTFS
//! ingestion, station-name lookup, query history with export, and a JSON
//! HTTP API.
//!
//! ```no_run
//! use metro_planner::{query, GraphBuilder};
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_edge("A", "B", 10u32).unwrap();
//! builder.add_edge("B", "C", 5).unwrap();
//! builder.add_edge("A", "C", 20).unwrap();
//! let graph = builder.build();
//!
//! let route = query(&graph, "A", "C").unwrap();
//! assert_eq!(route.total_weight, 15);
//! assert_eq!(route.path, vec!["A", "B", "C"]);
//! ```

pub mod algorithm;
pub mod context;
pub mod data_structures;
pub mod graph;
pub mod gtfs;
pub mod history;
pub mod web;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, query, query_many, Route,
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use context::{PlannerContext, StationNames};
/// Re-export main types for convenient use
pub use graph::{GraphBuilder, TransitGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Station not found in graph: {0}")]
    NodeNotFound(String),

    #[error("No path exists from {start} to {end}")]
    NoPathExists { start: String, end: String },

    #[error("Corrupt predecessor chain: {0}")]
    Corrupt(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),

    #[error("Invalid GTFS time: {0:?}")]
    InvalidTime(String),

    #[error("No history entry numbered {0}")]
    InvalidHistoryIndex(usize),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
