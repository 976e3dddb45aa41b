use crate::{Error, Result};

/// Rebuilds the vertex sequence from `start` to `end` out of predecessor links.
///
/// Walks back from `end` until a vertex without predecessor, then reverses.
/// The walk must terminate at `start`; a chain that ends elsewhere, leaves the
/// table, or revisits a vertex is reported as [`Error::Corrupt`].
pub fn reconstruct(predecessors: &[Option<usize>], start: usize, end: usize) -> Result<Vec<usize>> {
    let mut path = Vec::new();
    let mut current = Some(end);

    while let Some(vertex) = current {
        // A simple path never holds more vertices than the table has entries.
        if path.len() >= predecessors.len() {
            return Err(Error::Corrupt(format!(
                "predecessor chain from vertex {} loops",
                end
            )));
        }
        path.push(vertex);
        current = *predecessors.get(vertex).ok_or_else(|| {
            Error::Corrupt(format!("vertex {} outside predecessor table", vertex))
        })?;
    }

    path.reverse();
    match path.first() {
        Some(&first) if first == start => Ok(path),
        Some(&first) => Err(Error::Corrupt(format!(
            "chain to vertex {} starts at {} instead of {}",
            end, first, start
        ))),
        None => Err(Error::Corrupt("empty predecessor chain".to_string())),
    }
}
