use metro_planner::graph::Graph;
use metro_planner::gtfs::{build_graph, GtfsFeed, IngestConfig};
use metro_planner::{Error, PlannerContext};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const STOPS: &str = "\
stop_id,stop_name,stop_lat,stop_lon,location_type,parent_station
127,Times Sq-42 St,40.75529,-73.987495,1,
127N,Times Sq-42 St,40.75529,-73.987495,,127
127S,Times Sq-42 St,40.75529,-73.987495,,127
128S,34 St-Penn Station,40.750373,-73.991057,,128
131S,18 St,40.74104,-73.997871,,131
R16N,Times Sq-42 St,40.754672,-73.986754,,R16
901N,Grand Central-42 St,40.752769,-73.979189,,901
";

const STOP_TIMES: &str = "\
trip_id,arrival_time,departure_time,stop_id,stop_sequence
1S_A,08:00:00,08:00:00,127S,1
1S_A,08:02:00,08:02:30,128S,2
1S_A,08:05:30,08:05:30,131S,3
1S_B,24:58:00,24:58:30,127S,1
1S_B,25:00:00,25:00:00,128S,2
";

const TRANSFERS: &str = "\
from_stop_id,to_stop_id,transfer_type,min_transfer_time
127N,R16N,2,300
R16N,127N,2,
901N,127N,3,
";

fn write_feed(dir: &Path, with_transfers: bool) {
    fs::write(dir.join("stops.txt"), STOPS).unwrap();
    fs::write(dir.join("stop_times.txt"), STOP_TIMES).unwrap();
    if with_transfers {
        fs::write(dir.join("transfers.txt"), TRANSFERS).unwrap();
    }
}

fn feed_dir(with_transfers: bool) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_feed(dir.path(), with_transfers);
    dir
}

#[test]
fn test_load_and_build() {
    let dir = feed_dir(true);
    let feed = GtfsFeed::load(dir.path()).unwrap();
    assert_eq!(feed.stops.len(), 7);
    assert_eq!(feed.stop_times.len(), 5);
    assert_eq!(feed.transfers.len(), 3);

    let (graph, stats) = build_graph(&feed, &IngestConfig::default()).unwrap();
    assert_eq!(graph.vertex_count(), 7);
    // trip A: 120 s and 180 s; trip B after midnight: 90 s, parallel to the first
    assert_eq!(stats.ride_edges, 3);
    assert_eq!(stats.transfer_edges, 2);
    assert_eq!(stats.forbidden_transfers, 1);
    // 127N <-> 127S inside station 127
    assert_eq!(stats.station_transfer_edges, 2);

    let from_127s: Vec<(&str, u32)> = graph.neighbors("127S").collect();
    assert!(from_127s.contains(&("128S", 120)));
    assert!(from_127s.contains(&("128S", 90)));
    assert!(from_127s.contains(&("127N", 180)));
    assert_eq!(graph.neighbors("R16N").collect::<Vec<_>>(), vec![("127N", 120)]);
    assert_eq!(graph.neighbors("901N").count(), 0);
}

#[test]
fn test_missing_transfers_file_is_optional() {
    let dir = feed_dir(false);
    let feed = GtfsFeed::load(dir.path()).unwrap();
    assert!(feed.transfers.is_empty());
    let (_, stats) = build_graph(&feed, &IngestConfig::default()).unwrap();
    assert_eq!(stats.transfer_edges, 0);
}

#[test]
fn test_missing_stops_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(GtfsFeed::load(dir.path()), Err(Error::Io(_))));
}

#[test]
fn test_planner_context_end_to_end() {
    let dir = feed_dir(true);
    let planner = PlannerContext::from_gtfs(dir.path(), &IngestConfig::default()).unwrap();

    // R16N -> 127N (120) -> 127S (180) -> 128S (90, late trip) -> 131S (180)
    let route = planner.route("R16N", "131S").unwrap();
    assert_eq!(route.total_weight, 120 + 180 + 90 + 180);
    assert_eq!(route.path, vec!["R16N", "127N", "127S", "128S", "131S"]);
    assert_eq!(planner.names.label("131S"), "18 St");

    // the only transfer out of 901N is forbidden
    assert!(matches!(
        planner.route("901N", "127N"),
        Err(Error::NoPathExists { .. })
    ));
    assert!(matches!(planner.route("999", "127N"), Err(Error::NodeNotFound(_))));
}

#[test]
fn test_custom_transfer_weights() {
    let dir = feed_dir(true);
    let config = IngestConfig {
        default_transfer_secs: 60,
        station_transfer_secs: 30,
        ..IngestConfig::default()
    };
    let planner = PlannerContext::from_gtfs(dir.path(), &config).unwrap();
    let route = planner.route("R16N", "127S").unwrap();
    assert_eq!(route.total_weight, 60 + 30);
}
