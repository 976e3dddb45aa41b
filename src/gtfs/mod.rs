//! GTFS ingestion: reads the feed tables and turns them into a [`TransitGraph`].
//!
//! [`TransitGraph`]: crate::graph::TransitGraph

pub mod build;
pub mod loader;
pub mod records;
pub mod time;

pub use build::{build_graph, IngestConfig, IngestStats};
pub use loader::GtfsFeed;
pub use records::{Stop, StopTime, Transfer};
pub use time::parse_gtfs_time;
