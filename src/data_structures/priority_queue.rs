use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(distance, vertex)` entries for label-setting searches.
///
/// Entries are never updated in place: an improved label is pushed as a new
/// entry and the superseded one stays in the heap until the search pops and
/// discards it (lazy deletion). Ordering is by distance, then by vertex, so
/// pop order is fully determined by the entries pushed.
#[derive(Debug)]
pub struct DistanceQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
    pushes: usize,
}

impl<V, P> Default for DistanceQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> DistanceQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        DistanceQueue {
            heap: BinaryHeap::new(),
            pushes: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Entries currently held, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total entries ever pushed
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    pub fn push(&mut self, vertex: V, distance: P) {
        self.heap.push(Reverse((distance, vertex)));
        self.pushes += 1;
    }

    /// Removes the entry with the smallest distance (smallest vertex on ties)
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((distance, vertex))| (vertex, distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_ascending_distance() {
        let mut queue = DistanceQueue::new();
        queue.push(3usize, 30u32);
        queue.push(1, 10);
        queue.push(2, 20);
        assert_eq!(queue.pop(), Some((1, 10)));
        assert_eq!(queue.pop(), Some((2, 20)));
        assert_eq!(queue.pop(), Some((3, 30)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_ties_break_on_vertex() {
        let mut queue = DistanceQueue::new();
        queue.push(9usize, 5u32);
        queue.push(4, 5);
        queue.push(7, 5);
        assert_eq!(queue.pop(), Some((4, 5)));
        assert_eq!(queue.pop(), Some((7, 5)));
        assert_eq!(queue.pop(), Some((9, 5)));
    }

    #[test]
    fn test_superseded_entries_remain() {
        let mut queue = DistanceQueue::new();
        queue.push(1usize, 50u32);
        queue.push(1, 20);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pushes(), 2);
        assert_eq!(queue.pop(), Some((1, 20)));
        assert_eq!(queue.pop(), Some((1, 50)));
        assert!(queue.is_empty());
    }
}
