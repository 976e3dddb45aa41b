use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;
use std::fmt::Debug;

/// Edge weight (a duration). Distances accumulate in the same type.
///
/// Implemented for the unsigned and signed integers (`u32` seconds for
/// GTFS-derived graphs) and for `OrderedFloat` (fractional durations).
pub trait Weight: Copy + Ord + Zero + Debug + Send + Sync {
    /// Sum of two weights, or `None` if the sum is not representable.
    /// A relaxation whose sum does not fit is skipped.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i32, i64);

impl<F> Weight for OrderedFloat<F>
where
    F: Float + Debug + Send + Sync,
{
    fn checked_add(self, other: Self) -> Option<Self> {
        let sum = self.0 + other.0;
        sum.is_finite().then_some(OrderedFloat(sum))
    }
}

/// Trait representing a read-only weighted directed graph over interned stations.
///
/// Vertices are dense indices in `0..vertex_count()`; each one maps to exactly
/// one external station identifier.
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges included
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Looks up the vertex index of an external identifier
    fn index_of(&self, id: &str) -> Option<usize>;

    /// Returns the external identifier of a vertex
    fn node_id(&self, vertex: usize) -> Option<&str>;

    /// Returns true if the identifier names a station in the graph
    fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Outgoing `(station, weight)` pairs of a station, in insertion order.
    /// Unknown stations have no neighbors.
    fn neighbors<'a>(&'a self, id: &str) -> Box<dyn Iterator<Item = (&'a str, W)> + 'a>
    where
        W: 'a,
    {
        match self.index_of(id) {
            Some(vertex) => Box::new(
                self.outgoing_edges(vertex)
                    .filter_map(move |(target, weight)| self.node_id(target).map(|t| (t, weight))),
            ),
            None => Box::new(std::iter::empty()),
        }
    }
}
