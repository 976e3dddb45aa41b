use crate::{Error, Result};

/// Parses a GTFS `HH:MM:SS` time into seconds after midnight.
///
/// Hours may exceed 23 for trips running past midnight (`25:10:00`).
/// Minutes and seconds must be below 60.
pub fn parse_gtfs_time(value: &str) -> Result<u32> {
    let invalid = || Error::InvalidTime(value.to_string());
    let mut parts = value.trim().split(':');

    let mut field = |limit: Option<u32>| -> Result<u32> {
        let part = parts.next().ok_or_else(invalid)?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let number: u32 = part.parse().map_err(|_| invalid())?;
        match limit {
            Some(limit) if number >= limit => Err(invalid()),
            _ => Ok(number),
        }
    };

    let hours = field(None)?;
    let minutes = field(Some(60))?;
    let seconds = field(Some(60))?;
    if parts.next().is_some() {
        return Err(invalid());
    }

    hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes * 60 + seconds))
        .ok_or_else(invalid)
}
