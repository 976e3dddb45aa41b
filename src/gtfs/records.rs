use serde::Deserialize;

/// A row of `stops.txt`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub stop_id: String,
    #[serde(default)]
    pub stop_name: String,
    /// Station this platform belongs to; empty for stations themselves
    #[serde(default)]
    pub parent_station: Option<String>,
}

/// A row of `stop_times.txt`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StopTime {
    pub trip_id: String,
    #[serde(default)]
    pub arrival_time: String,
    #[serde(default)]
    pub departure_time: String,
    pub stop_id: String,
    pub stop_sequence: u32,
}

/// A row of `transfers.txt`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub from_stop_id: String,
    pub to_stop_id: String,
    /// 0 = recommended, 1 = timed, 2 = minimum time, 3 = not possible
    #[serde(default)]
    pub transfer_type: Option<u8>,
    #[serde(default)]
    pub min_transfer_time: Option<u32>,
}

impl Stop {
    /// Parent station id, ignoring blank cells
    pub fn parent(&self) -> Option<&str> {
        self.parent_station
            .as_deref()
            .map(str::trim)
            .filter(|parent| !parent.is_empty())
    }
}
