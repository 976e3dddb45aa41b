use csv::ReaderBuilder;
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::gtfs::records::{Stop, StopTime, Transfer};
use crate::Result;

/// The GTFS tables needed to build a routing graph
#[derive(Debug, Clone, Default)]
pub struct GtfsFeed {
    pub stops: Vec<Stop>,
    pub stop_times: Vec<StopTime>,
    pub transfers: Vec<Transfer>,
}

impl GtfsFeed {
    /// Reads `stops.txt`, `stop_times.txt` and, if present, `transfers.txt`
    /// from a feed directory.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        info!("Loading GTFS feed from {}", dir.display());

        let stops = read_table(File::open(dir.join("stops.txt"))?)?;
        let stop_times = read_table(File::open(dir.join("stop_times.txt"))?)?;

        let transfers_path = dir.join("transfers.txt");
        let transfers = if transfers_path.exists() {
            read_table(File::open(transfers_path)?)?
        } else {
            debug!("No transfers.txt in {}, continuing without explicit transfers", dir.display());
            Vec::new()
        };

        let feed = GtfsFeed {
            stops,
            stop_times,
            transfers,
        };
        info!(
            "Loaded {} stops, {} stop times, {} transfers",
            feed.stops.len(),
            feed.stop_times.len(),
            feed.transfers.len()
        );
        Ok(feed)
    }
}

/// Deserializes every row of a headered GTFS table.
///
/// Columns are matched by header name; extra columns are ignored and blank
/// cells become `None` for optional fields.
pub fn read_table<T, R>(reader: R) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}
