use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

/// Enumerates every path between two vertices that visits no vertex twice.
///
/// Paths come out in the order a recursive depth-first search completes them,
/// exploring successors in adjacency order.
/// They are not sorted by length: a direct edge listed after a longer detour comes out after it.
///
/// The number of simple paths can be exponential in the size of the graph.
/// The iterator is lazy, so callers can stop early.
pub trait SimplePaths
where
    Self: QueryableGraph + Sized,
{
    fn simple_paths(&self, source: &VertexId, sink: &VertexId) -> SimplePathIter<'_, Self> {
        SimplePathIter::new(self, *source, *sink)
    }
}

impl<G: QueryableGraph> SimplePaths for G {}

pub struct SimplePathIter<'a, G> {
    graph: &'a G,
    sink: VertexId,
    trivial: Option<VertexId>,
    path: Vec<VertexId>,
    on_path: HashSet<VertexId, RandomState>,
    successors: Vec<std::vec::IntoIter<VertexId>>,
}

impl<'a, G> SimplePathIter<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, source: VertexId, sink: VertexId) -> Self {
        let mut res = Self {
            graph,
            sink,
            trivial: None,
            path: vec![],
            on_path: HashSet::with_hasher(RandomState::new()),
            successors: vec![],
        };
        if !graph.contains_vertex(&source) || !graph.contains_vertex(&sink) {
            return res;
        }
        if source == sink {
            res.trivial = Some(source);
        } else {
            res.push_vertex(source);
        }
        res
    }

    fn push_vertex(&mut self, v: VertexId) {
        self.path.push(v);
        self.on_path.insert(v);
        let succ: Vec<_> = self.graph.out_edges(&v).map(|e| e.sink).collect();
        self.successors.push(succ.into_iter());
    }

    fn one_step_backward(&mut self) {
        self.successors.pop();
        if let Some(v) = self.path.pop() {
            self.on_path.remove(&v);
        }
    }
}

impl<'a, G> Iterator for SimplePathIter<'a, G>
where
    G: QueryableGraph,
{
    type Item = Vec<VertexId>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(v) = self.trivial.take() {
            return Some(vec![v]);
        }
        loop {
            let next = self.successors.last_mut()?.next();
            match next {
                Some(v) if v == self.sink => {
                    let mut res = self.path.clone();
                    res.push(v);
                    return Some(res);
                }
                Some(v) if self.on_path.contains(&v) => {}
                Some(v) => self.push_vertex(v),
                None => self.one_step_backward(),
            }
        }
    }
}
