//! Query history kept by interactive front ends, with plain-text export.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::algorithm::Route;
use crate::context::StationNames;
use crate::{Error, Result};

/// One answered route query
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Local>,
    pub start: String,
    pub end: String,
    pub duration_secs: u32,
    pub path: Vec<String>,
}

/// Append-only list of answered queries, numbered from 1
#[derive(Debug, Clone, Default)]
pub struct QueryHistory {
    entries: Vec<HistoryEntry>,
}

impl QueryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a route and returns its 1-based number
    pub fn record(&mut self, route: &Route<u32>) -> usize {
        self.entries.push(HistoryEntry {
            timestamp: Local::now(),
            start: route.path.first().cloned().unwrap_or_default(),
            end: route.path.last().cloned().unwrap_or_default(),
            duration_secs: route.total_weight,
            path: route.path.clone(),
        });
        self.entries.len()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The last `n` entries with their 1-based numbers
    pub fn recent(&self, n: usize) -> impl Iterator<Item = (usize, &HistoryEntry)> + '_ {
        let skip = self.entries.len().saturating_sub(n);
        self.entries
            .iter()
            .enumerate()
            .skip(skip)
            .map(|(i, entry)| (i + 1, entry))
    }

    /// Entry by 1-based number
    pub fn get(&self, number: usize) -> Result<&HistoryEntry> {
        number
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .ok_or(Error::InvalidHistoryIndex(number))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes entry `number` to `dir/route_<number>_<start>_<end>.txt`
    pub fn export(&self, number: usize, names: &StationNames, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let entry = self.get(number)?;
        let path = dir
            .as_ref()
            .join(format!("route_{}_{}_{}.txt", number, entry.start, entry.end));
        fs::write(&path, render_entry(entry, names))?;
        Ok(path)
    }
}

/// `"Xm Ys"` for a duration in seconds
pub fn format_duration(secs: u32) -> String {
    format!("{}m {}s", secs / 60, secs % 60)
}

/// `"  3. 127S       - Times Sq-42 St"`, or just the id when it has no name
pub fn format_stop(order: usize, id: &str, names: &StationNames) -> String {
    let label = names.label(id);
    if label != id {
        format!("{:3}. {:10} - {}", order, id, label)
    } else {
        format!("{:3}. {}", order, id)
    }
}

fn render_entry(entry: &HistoryEntry, names: &StationNames) -> String {
    let rule = "=".repeat(70);
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "Metro Route - {}", entry.timestamp.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "{}\n", rule);
    let _ = writeln!(out, "From: {} - {}", entry.start, names.label(&entry.start));
    let _ = writeln!(out, "To: {} - {}", entry.end, names.label(&entry.end));
    let _ = writeln!(
        out,
        "Total time: {} s ({})",
        entry.duration_secs,
        format_duration(entry.duration_secs)
    );
    let _ = writeln!(out, "Stations: {}\n", entry.path.len());
    let _ = writeln!(out, "Full route:");
    let _ = writeln!(out, "{}", "-".repeat(70));
    for (i, id) in entry.path.iter().enumerate() {
        let _ = writeln!(out, "{}", format_stop(i + 1, id, names));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn route(path: &[&str], secs: u32) -> Route<u32> {
        Route {
            total_weight: secs,
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_record_and_recent() {
        let mut history = QueryHistory::new();
        for i in 0..25u32 {
            history.record(&route(&["A", "B"], i));
        }
        let recent: Vec<usize> = history.recent(20).map(|(n, _)| n).collect();
        assert_eq!(recent.len(), 20);
        assert_eq!(recent[0], 6);
        assert_eq!(recent[19], 25);
        assert_eq!(history.get(25).unwrap().duration_secs, 24);
    }

    #[test]
    fn test_invalid_numbers() {
        let mut history = QueryHistory::new();
        history.record(&route(&["A"], 0));
        assert!(matches!(history.get(0), Err(Error::InvalidHistoryIndex(0))));
        assert!(matches!(history.get(2), Err(Error::InvalidHistoryIndex(2))));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0m 0s");
        assert_eq!(format_duration(754), "12m 34s");
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let names = StationNames::new(HashMap::from([(
            "127S".to_string(),
            "Times Sq-42 St".to_string(),
        )]));
        let mut history = QueryHistory::new();
        let number = history.record(&route(&["127S", "128S"], 95));

        let path = history.export(number, &names, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "route_1_127S_128S.txt");

        let text = fs::read_to_string(path).unwrap();
        assert!(text.contains("From: 127S - Times Sq-42 St"));
        assert!(text.contains("Total time: 95 s (1m 35s)"));
        assert!(text.contains("  1. 127S       - Times Sq-42 St"));
        assert!(text.contains("  2. 128S\n"));
    }
}
