use super::{OrderedWeight, Path};
use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

/// Single-pair shortest paths by Dijkstra's algorithm.
///
/// Weights must be non-negative.
/// Among candidates at equal distance, the one whose distance was recorded first is settled first.
/// Callers should only rely on getting *some* shortest path.
pub trait ShortestPath
where
    Self: QueryableGraph + Sized,
{
    /// Returns `None` if `sink` cannot be reached from `source`.
    fn shortest_path(&self, source: &VertexId, sink: &VertexId) -> Option<Path<VertexId>> {
        dijkstra(self, *source, *sink)
    }
}

impl<G: QueryableGraph> ShortestPath for G {}

fn dijkstra<G>(graph: &G, source: VertexId, sink: VertexId) -> Option<Path<VertexId>>
where
    G: QueryableGraph,
{
    if !graph.contains_vertex(&source) || !graph.contains_vertex(&sink) {
        return None;
    }
    let mut distances: HashMap<VertexId, f64, RandomState> = HashMap::default();
    let mut predecessors: HashMap<VertexId, VertexId, RandomState> = HashMap::default();
    let mut settled: HashSet<VertexId, RandomState> = HashSet::default();
    let mut queue: KeyedPriorityQueue<VertexId, Reverse<(OrderedWeight, usize)>, RandomState> =
        KeyedPriorityQueue::with_capacity_and_hasher(graph.vertex_size(), RandomState::new());
    let mut seq = 0;
    distances.insert(source, 0.0);
    queue.push(source, Reverse((OrderedWeight(0.0), seq)));

    while let Some((v, Reverse((OrderedWeight(dist), _)))) = queue.pop() {
        settled.insert(v);
        if v == sink {
            let mut vertices = vec![sink];
            let mut cur = sink;
            while cur != source {
                cur = predecessors[&cur];
                vertices.push(cur);
            }
            vertices.reverse();
            tracing::debug!(settled = settled.len(), weight = dist, "shortest path found");
            return Some(Path {
                vertices,
                weight: dist,
            });
        }
        for e in graph.out_edges(&v) {
            if settled.contains(&e.sink) {
                continue;
            }
            let candidate = dist + e.weight;
            let improves = distances
                .get(&e.sink)
                .map_or(true, |known| candidate < *known);
            if improves {
                distances.insert(e.sink, candidate);
                predecessors.insert(e.sink, v);
                seq += 1;
                queue.push(e.sink, Reverse((OrderedWeight(candidate), seq)));
            }
        }
    }
    tracing::debug!(settled = settled.len(), "sink unreachable");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::SmallGraph;
    use crate::graph::directed::TreeBackedGraph;
    use petgraph::{algo::dijkstra as oracle_dijkstra, graph::NodeIndex};
    use quickcheck_macros::quickcheck;

    fn check_path<G: QueryableGraph>(g: &G, path: &Path<VertexId>) {
        let mut acc = 0.0;
        for w in path.vertices.windows(2) {
            let e = g.edge_connecting(&w[0], &w[1]).unwrap();
            assert!(acc + e.weight >= acc);
            acc += e.weight;
        }
        assert_eq!(acc, path.weight);
    }

    #[test]
    fn weighted_example() {
        // A B C D E F
        let mut g = TreeBackedGraph::new();
        for i in 0..6 {
            g.add_vertex(VertexId(i));
        }
        let edges = [
            (0, 1, 10.0),
            (0, 2, 15.0),
            (1, 3, 12.0),
            (1, 5, 15.0),
            (2, 4, 10.0),
            (3, 4, 2.0),
            (3, 5, 1.0),
            (5, 4, 5.0),
        ];
        for (a, b, w) in edges {
            g.add_edge(VertexId(a), VertexId(b), w);
        }
        let path = g.shortest_path(&VertexId(0), &VertexId(5)).unwrap();
        assert_eq!(
            path.vertices,
            vec![VertexId(0), VertexId(1), VertexId(3), VertexId(5)]
        );
        assert_eq!(path.weight, 23.0);
        check_path(&g, &path);
        assert_eq!(g.shortest_path(&VertexId(5), &VertexId(0)), None);
    }

    #[test]
    fn trivial_and_missing() {
        let mut g = TreeBackedGraph::new();
        g.add_vertex(VertexId(0));
        let path = g.shortest_path(&VertexId(0), &VertexId(0)).unwrap();
        assert_eq!(path.vertices, vec![VertexId(0)]);
        assert_eq!(path.weight, 0.0);
        assert_eq!(g.shortest_path(&VertexId(0), &VertexId(1)), None);
    }

    #[test]
    fn undirected_edges_go_both_ways() {
        let mut g = undirected::TreeBackedGraph::new();
        for i in 0..3 {
            g.add_vertex(VertexId(i));
        }
        g.add_edge(VertexId(1), VertexId(0), 1.0);
        g.add_edge(VertexId(2), VertexId(1), 1.0);
        g.add_edge(VertexId(0), VertexId(2), 5.0);
        let path = g.shortest_path(&VertexId(2), &VertexId(0)).unwrap();
        assert_eq!(path.vertices, vec![VertexId(2), VertexId(1), VertexId(0)]);
        assert_eq!(path.weight, 2.0);
    }

    #[quickcheck]
    fn agrees_with_petgraph(sg: SmallGraph) {
        let g: TreeBackedGraph = sg.build();
        let oracle = sg.petgraph_directed();
        for source in 0..sg.vertex_size {
            let expected = oracle_dijkstra(&oracle, NodeIndex::new(source), None, |e| {
                *e.weight()
            });
            for sink in 0..sg.vertex_size {
                let trial = g.shortest_path(&VertexId(source), &VertexId(sink));
                match (trial, expected.get(&NodeIndex::new(sink))) {
                    (Some(path), Some(weight)) => {
                        assert_eq!(path.weight, *weight);
                        assert_eq!(path.vertices.first(), Some(&VertexId(source)));
                        assert_eq!(path.vertices.last(), Some(&VertexId(sink)));
                        check_path(&g, &path);
                    }
                    (None, None) => {}
                    (trial, expected) => panic!("{:?} vs {:?}", trial, expected),
                }
            }
        }
    }

    #[quickcheck]
    fn agrees_with_petgraph_undirected(sg: SmallGraph) {
        let g: undirected::TreeBackedGraph = sg.build();
        let oracle = sg.petgraph_undirected();
        for source in 0..sg.vertex_size {
            let expected = oracle_dijkstra(&oracle, NodeIndex::new(source), None, |e| {
                *e.weight()
            });
            for sink in 0..sg.vertex_size {
                let trial = g
                    .shortest_path(&VertexId(source), &VertexId(sink))
                    .map(|p| p.weight);
                assert_eq!(trial, expected.get(&NodeIndex::new(sink)).copied());
            }
        }
    }
}
