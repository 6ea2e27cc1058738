use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;

/// Kahn's topological sort.
///
/// Among vertices without remaining predecessors, the one with the smallest id goes first,
/// so ties are broken by insertion order.
///
/// On a cyclic graph, the sort yields the vertices it can free and then stops:
/// vertices on or behind a cycle never come out.
pub trait TopologicalSort
where
    Self: QueryableGraph + Sized,
{
    fn toposort(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(ToposortIter::new(self))
    }
}

impl<G: QueryableGraph> TopologicalSort for G {}

struct ToposortIter<'a, G>
where
    G: QueryableGraph,
{
    graph: ShadowedSubgraph<'a, G>,
    degree_queue: KeyedPriorityQueue<VertexId, Reverse<(usize, VertexId)>, RandomState>,
    stalled: bool,
}

impl<'a, G> Iterator for ToposortIter<'a, G>
where
    G: QueryableGraph,
{
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stalled {
            return None;
        }
        let (vert, Reverse((in_degree, _))) = self.degree_queue.pop()?;
        if in_degree > 0 {
            tracing::debug!(
                left = self.degree_queue.len() + 1,
                "toposort stopped: remaining vertices are on or behind a cycle"
            );
            self.stalled = true;
            return None;
        }
        for e in self.graph.remove_vertex(&vert) {
            if e.source != vert {
                continue;
            }
            if let Some(Reverse((in_degree, _))) = self.degree_queue.get_priority(&e.sink).copied() {
                let _ = self
                    .degree_queue
                    .set_priority(&e.sink, Reverse((in_degree - 1, e.sink)));
            }
        }
        Some(vert)
    }
}

impl<'a, G> ToposortIter<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G) -> Self {
        let mut res = Self {
            graph: ShadowedSubgraph::new(graph),
            degree_queue: KeyedPriorityQueue::with_capacity_and_hasher(
                graph.vertex_size(),
                RandomState::new(),
            ),
            stalled: false,
        };
        for v in graph.iter_vertices() {
            let in_degree = graph.in_edges(&v).count();
            res.degree_queue.push(v, Reverse((in_degree, v)));
        }
        res
    }
}
