//! Graph algorithms
//!
//! Every algorithm is a trait with a blanket implementation over [`QueryableGraph`](crate::graph::QueryableGraph),
//! so it works the same on low-level graphs, on [`ShadowedSubgraph`](crate::graph::ShadowedSubgraph)s
//! and, through value-based wrappers, on [`Graph`](crate::graph::Graph).
mod traversal;
pub use self::traversal::*;
mod simple_path;
pub use self::simple_path::*;
mod shortest_path;
pub use self::shortest_path::*;
mod cycle;
pub use self::cycle::*;
mod toposort;
pub use self::toposort::*;
mod mst;
pub use self::mst::*;

use std::cmp::Ordering;

/// A path together with its total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<V> {
    pub vertices: Vec<V>,
    pub weight: f64,
}

impl<V> Path<V> {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn try_map<W, E, F>(self, f: F) -> Result<Path<W>, E>
    where
        F: FnMut(V) -> Result<W, E>,
    {
        Ok(Path {
            vertices: self.vertices.into_iter().map(f).collect::<Result<_, _>>()?,
            weight: self.weight,
        })
    }
}

/// Totally ordered weights for priority queues.
#[derive(Debug, Clone, Copy)]
struct OrderedWeight(f64);

impl PartialEq for OrderedWeight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderedWeight {}

impl PartialOrd for OrderedWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedWeight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[cfg(test)]
pub(crate) use self::tests::*;
