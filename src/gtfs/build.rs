use log::{debug, info, warn};
use std::collections::BTreeMap;

use crate::graph::{GraphBuilder, TransitGraph};
use crate::gtfs::loader::GtfsFeed;
use crate::gtfs::records::StopTime;
use crate::gtfs::time::parse_gtfs_time;
use crate::Result;

/// Edge weights and filters used when turning a feed into a graph
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Weight of an explicit transfer without `min_transfer_time`
    pub default_transfer_secs: u32,
    /// Weight of the implicit transfer between platforms of one station
    pub station_transfer_secs: u32,
    /// `transfer_type` value meaning the transfer is not possible
    pub forbidden_transfer_type: u8,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            default_transfer_secs: 120,
            station_transfer_secs: 180,
            forbidden_transfer_type: 3,
        }
    }
}

/// Edge counts produced by [`build_graph`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub ride_edges: usize,
    /// Consecutive stop pairs whose computed duration was zero or negative
    pub dropped_ride_edges: usize,
    /// Consecutive stop pairs with an unparseable time
    pub malformed_times: usize,
    pub transfer_edges: usize,
    pub forbidden_transfers: usize,
    pub station_transfer_edges: usize,
}

/// Builds the routing graph from a feed.
///
/// - every stop is a node, even without edges;
/// - consecutive stops of a trip (by `stop_sequence`) get a ride edge weighted
///   `arrival(next) - departure(current)`; non-positive durations are dropped;
/// - each transfer record not marked impossible gets an edge weighted
///   `min_transfer_time`, or the configured default;
/// - every pair of platforms sharing a parent station gets a transfer edge in
///   both directions.
pub fn build_graph(feed: &GtfsFeed, config: &IngestConfig) -> Result<(TransitGraph<u32>, IngestStats)> {
    let mut builder = GraphBuilder::new();
    let mut stats = IngestStats::default();

    for stop in &feed.stops {
        builder.add_node(&stop.stop_id);
    }

    add_ride_edges(&mut builder, &feed.stop_times, &mut stats)?;
    info!("Ride edges built: {} kept", stats.ride_edges);
    if stats.dropped_ride_edges > 0 || stats.malformed_times > 0 {
        warn!(
            "Skipped {} non-positive and {} malformed ride segments",
            stats.dropped_ride_edges, stats.malformed_times
        );
    }

    for transfer in &feed.transfers {
        if transfer.transfer_type == Some(config.forbidden_transfer_type) {
            stats.forbidden_transfers += 1;
            continue;
        }
        let weight = transfer
            .min_transfer_time
            .unwrap_or(config.default_transfer_secs);
        builder.add_edge(&transfer.from_stop_id, &transfer.to_stop_id, weight)?;
        stats.transfer_edges += 1;
    }

    let mut stations: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for stop in &feed.stops {
        if let Some(parent) = stop.parent() {
            stations.entry(parent).or_default().push(&stop.stop_id);
        }
    }
    for platforms in stations.values() {
        for (i, from) in platforms.iter().enumerate() {
            for to in &platforms[i + 1..] {
                builder.add_edge(from, to, config.station_transfer_secs)?;
                builder.add_edge(to, from, config.station_transfer_secs)?;
                stats.station_transfer_edges += 2;
            }
        }
    }
    info!(
        "Transfer edges built: {} explicit, {} within stations",
        stats.transfer_edges, stats.station_transfer_edges
    );

    let graph = builder.build();
    Ok((graph, stats))
}

fn add_ride_edges(
    builder: &mut GraphBuilder<u32>,
    stop_times: &[StopTime],
    stats: &mut IngestStats,
) -> Result<()> {
    let mut trips: BTreeMap<&str, Vec<&StopTime>> = BTreeMap::new();
    for stop_time in stop_times {
        trips.entry(&stop_time.trip_id).or_default().push(stop_time);
    }

    for (trip_id, mut calls) in trips {
        calls.sort_by_key(|call| call.stop_sequence);

        for pair in calls.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let times = parse_gtfs_time(&from.departure_time)
                .and_then(|departure| parse_gtfs_time(&to.arrival_time).map(|arrival| (departure, arrival)));

            let (departure, arrival) = match times {
                Ok(times) => times,
                Err(err) => {
                    debug!("Trip {}: {} -> {}: {}", trip_id, from.stop_id, to.stop_id, err);
                    stats.malformed_times += 1;
                    continue;
                }
            };

            if arrival <= departure {
                debug!(
                    "Trip {}: dropping {} -> {} ({}s -> {}s)",
                    trip_id, from.stop_id, to.stop_id, departure, arrival
                );
                stats.dropped_ride_edges += 1;
                continue;
            }

            builder.add_edge(&from.stop_id, &to.stop_id, arrival - departure)?;
            stats.ride_edges += 1;
        }
    }

    Ok(())
}
