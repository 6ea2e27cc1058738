use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};

/// Vertices already reached by a traversal.
pub type VisitedSet = HashSet<VertexId, RandomState>;

/// Something to be told about vertices one at a time, in order.
///
/// Every `FnMut(&T)` closure is a visitor; [`Collector`] gathers clones of what it sees.
pub trait Visitor<T: ?Sized> {
    fn visit(&mut self, value: &T);
}

impl<T, F> Visitor<T> for F
where
    T: ?Sized,
    F: FnMut(&T),
{
    fn visit(&mut self, value: &T) {
        self(value)
    }
}

/// A visitor remembering everything it visits.
#[derive(Debug, Clone)]
pub struct Collector<T> {
    pub values: Vec<T>,
}

impl<T> Default for Collector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collector<T> {
    pub fn new() -> Self {
        Self { values: vec![] }
    }

    pub fn into_inner(self) -> Vec<T> {
        self.values
    }
}

impl<T: Clone> Visitor<T> for Collector<T> {
    fn visit(&mut self, value: &T) {
        self.values.push(value.clone());
    }
}

/// Depth-first and breadth-first traversals.
///
/// Both only reach the component of `start`.
/// To cover a whole graph, restart with the [`VisitedSet`] left by the previous run.
pub trait Traversal
where
    Self: QueryableGraph + Sized,
{
    fn dfs(&self, start: &VertexId) -> Dfs<'_, Self> {
        Dfs::new(self, *start)
    }

    fn bfs(&self, start: &VertexId) -> Bfs<'_, Self> {
        Bfs::new(self, *start)
    }
}

impl<G: QueryableGraph> Traversal for G {}

/// A stack-based depth-first iterator.
///
/// When a vertex is emitted, its unvisited successors are pushed in adjacency order,
/// so the last-added successor is explored first.
pub struct Dfs<'a, G> {
    graph: &'a G,
    stack: Vec<VertexId>,
    visited: VisitedSet,
}

impl<'a, G> Dfs<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G, start: VertexId) -> Self {
        Self::with_visited(graph, start, VisitedSet::default())
    }

    /// Resumes a traversal, treating everything in `visited` as already emitted.
    pub fn with_visited(graph: &'a G, start: VertexId, visited: VisitedSet) -> Self {
        let mut res = Self {
            graph,
            stack: vec![],
            visited,
        };
        if graph.contains_vertex(&start) {
            res.stack.push(start);
        }
        res.skip_visited();
        res
    }

    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn into_visited(self) -> VisitedSet {
        self.visited
    }

    fn skip_visited(&mut self) {
        while let Some(top) = self.stack.last() {
            if !self.visited.contains(top) {
                break;
            }
            self.stack.pop();
        }
    }
}

impl<'a, G> Iterator for Dfs<'a, G>
where
    G: QueryableGraph,
{
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;
        self.visited.insert(v);
        for e in self.graph.out_edges(&v) {
            if !self.visited.contains(&e.sink) {
                self.stack.push(e.sink);
            }
        }
        self.skip_visited();
        Some(v)
    }
}

/// A queue-based breadth-first iterator, emitting vertices level by level.
///
/// Vertices count as visited as soon as they are discovered.
pub struct Bfs<'a, G> {
    graph: &'a G,
    queue: VecDeque<VertexId>,
    visited: VisitedSet,
}

impl<'a, G> Bfs<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G, start: VertexId) -> Self {
        Self::with_visited(graph, start, VisitedSet::default())
    }

    pub fn with_visited(graph: &'a G, start: VertexId, mut visited: VisitedSet) -> Self {
        let mut queue = VecDeque::new();
        if graph.contains_vertex(&start) && visited.insert(start) {
            queue.push_back(start);
        }
        Self {
            graph,
            queue,
            visited,
        }
    }

    pub fn has_next(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn into_visited(self) -> VisitedSet {
        self.visited
    }
}

impl<'a, G> Iterator for Bfs<'a, G>
where
    G: QueryableGraph,
{
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.queue.pop_front()?;
        for e in self.graph.out_edges(&v) {
            if self.visited.insert(e.sink) {
                self.queue.push_back(e.sink);
            }
        }
        Some(v)
    }
}
