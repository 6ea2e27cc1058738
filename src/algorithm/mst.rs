use super::OrderedWeight;
use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

/// Prim's minimum spanning tree, grown from a start vertex.
///
/// Meant for undirected graphs.
/// The tree spans the component of `start` only.
/// Equal-weight crossing edges are taken in the order they were discovered.
pub trait MinimumSpanningTree
where
    Self: QueryableGraph + Sized,
{
    /// Returns the tree edges in the order they were selected,
    /// each oriented from the tree toward the vertex it brought in.
    fn minimum_spanning_tree(&self, start: &VertexId) -> Vec<Edge> {
        prim(self, *start)
    }
}

impl<G: QueryableGraph> MinimumSpanningTree for G {}

fn prim<G>(graph: &G, start: VertexId) -> Vec<Edge>
where
    G: QueryableGraph,
{
    let mut res = vec![];
    if !graph.contains_vertex(&start) {
        return res;
    }
    let mut in_tree: HashSet<VertexId, RandomState> = HashSet::default();
    let mut cheapest: HashMap<VertexId, Edge, RandomState> = HashMap::default();
    let mut queue: KeyedPriorityQueue<VertexId, Reverse<(OrderedWeight, usize)>, RandomState> =
        KeyedPriorityQueue::with_capacity_and_hasher(graph.vertex_size(), RandomState::new());
    let mut seq = 0;
    let mut current = start;
    loop {
        in_tree.insert(current);
        for e in graph.out_edges(&current) {
            if in_tree.contains(&e.sink) {
                continue;
            }
            let improves = cheapest
                .get(&e.sink)
                .map_or(true, |known| e.weight < known.weight);
            if improves {
                cheapest.insert(e.sink, e);
                seq += 1;
                queue.push(e.sink, Reverse((OrderedWeight(e.weight), seq)));
            }
        }
        match queue.pop() {
            Some((v, _)) => {
                if let Some(e) = cheapest.remove(&v) {
                    res.push(e);
                }
                current = v;
            }
            None => break,
        }
    }
    tracing::debug!(edges = res.len(), "spanning tree grown");
    res
}
