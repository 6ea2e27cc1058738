use crate::graph::*;
use ahash::RandomState;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A tree-backed undirected graph.
///
/// For any graph operations, this is probably not the fastest implementation.
/// But it is balanced.
/// For all point queries, it is O(log n); for all iterations, it is amortized O(log n) per step.
/// Besides, iterations are always in the order of vertex/edge insertion order.
///
/// There is at most one edge between two vertices.
/// An edge keeps the orientation it was first added with,
/// while `out_edges` and `in_edges` orient it around the queried vertex.
#[derive(Clone)]
pub struct TreeBackedGraph {
    eid_factory: EdgeIdFactory,
    vertices: BTreeSet<VertexId>,
    edges: BTreeMap<EdgeId, Edge>,
    connecting: HashMap<(VertexId, VertexId), EdgeId, RandomState>,
    adjacent_edges: BTreeSet<(VertexId, EdgeId)>,
}

fn unordered(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl DirectedOrNot for TreeBackedGraph {
    const DIRECTED_OR_NOT: bool = false;
}

impl std::fmt::Debug for TreeBackedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TreeBackedGraph {{")?;
        for v in self.vertices.iter() {
            writeln!(f, "{:?}:", v)?;
            for e in self.out_edges(v) {
                writeln!(f, "  -- {:?} by {:?} weighing {}", e.sink, e.id, e.weight)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl GrowableGraph for TreeBackedGraph {
    fn new() -> Self {
        Self {
            eid_factory: EdgeIdFactory::new(),
            vertices: BTreeSet::new(),
            edges: BTreeMap::new(),
            connecting: HashMap::with_hasher(RandomState::new()),
            adjacent_edges: BTreeSet::new(),
        }
    }

    fn add_vertex(&mut self, vertex: VertexId) -> bool {
        self.vertices.insert(vertex)
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId, weight: f64) -> EdgeId {
        debug_assert!(self.vertices.contains(&source));
        debug_assert!(self.vertices.contains(&sink));
        let key = unordered(source, sink);
        if let Some(eid) = self.connecting.get(&key) {
            let edge = self.edges.get_mut(eid).unwrap();
            tracing::trace!(?source, ?sink, old = edge.weight, new = weight, "overwriting edge weight");
            edge.weight = weight;
            return *eid;
        }
        let eid = self.eid_factory.one_more();
        self.edges.insert(
            eid,
            Edge {
                id: eid,
                source,
                sink,
                weight,
            },
        );
        self.connecting.insert(key, eid);
        self.adjacent_edges.insert((sink, eid));
        self.adjacent_edges.insert((source, eid));
        eid
    }
}

impl EdgeShrinkableGraph for TreeBackedGraph {
    fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge> {
        let e = self.edges.remove(edge)?;
        self.connecting.remove(&unordered(e.source, e.sink));
        self.adjacent_edges.remove(&(e.sink, e.id));
        self.adjacent_edges.remove(&(e.source, e.id));
        Some(e)
    }
}

impl VertexShrinkableGraph for TreeBackedGraph {
    fn remove_vertex(&mut self, vertex: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static> {
        if !self.vertices.remove(vertex) {
            return Box::new(std::iter::empty());
        }
        let start = (*vertex, EdgeId::MIN);
        let end = (vertex.next(), EdgeId::MIN);
        let incident: Vec<_> = self
            .adjacent_edges
            .range(start..end)
            .map(|(_, eid)| *eid)
            .collect();
        let res: Vec<_> = incident
            .into_iter()
            .filter_map(|eid| self.remove_edge(&eid))
            .collect();
        Box::new(res.into_iter())
    }
}

impl QueryableGraph for TreeBackedGraph {
    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.vertices.contains(v)
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.edges.values().copied())
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.edges.contains_key(e)
    }

    fn issued_edge_ids(&self) -> usize {
        self.eid_factory.issued()
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        self.edges.get(e).copied()
    }

    fn edge_connecting(&self, source: &VertexId, sink: &VertexId) -> Option<Edge> {
        let e = self
            .connecting
            .get(&unordered(*source, *sink))
            .and_then(|eid| self.find_edge(eid))?;
        if e.source == *source {
            Some(e)
        } else {
            Some(e.reversed())
        }
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self.out_edges(v).map(|e| e.reversed());
        Box::new(it)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let v = *v;
        let start = (v, EdgeId::MIN);
        let end = (v.next(), EdgeId::MIN);
        let it = self.adjacent_edges.range(start..end).map(move |(_, eid)| {
            let e = *self.edges.get(eid).unwrap();
            if e.source == v {
                e
            } else {
                e.reversed()
            }
        });
        Box::new(it)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use petgraph::stable_graph::{NodeIndex, StableUnGraph};
    use quickcheck_macros::*;
    use std::collections::{BTreeSet, HashMap};

    #[quickcheck]
    fn tree_backed_gen(ops: directed::Ops) {
        let trial: undirected::TreeBackedGraph = ops.build();

        let mut oracle = StableUnGraph::<VertexId, f64>::default();
        let mut vmap: HashMap<VertexId, NodeIndex> = HashMap::new();
        for op in ops.iter() {
            match op {
                directed::Op::AddVertex(v) => {
                    vmap.insert(*v, oracle.add_node(*v));
                }
                directed::Op::RemoveVertex(v) => {
                    if let Some(n) = vmap.remove(v) {
                        oracle.remove_node(n);
                    }
                }
                directed::Op::AddEdge((src, snk, w)) => {
                    oracle.update_edge(vmap[src], vmap[snk], *w);
                }
                directed::Op::RemoveEdge((src, snk)) => {
                    if let (Some(a), Some(b)) = (vmap.get(src), vmap.get(snk)) {
                        if let Some(e) = oracle.find_edge(*a, *b) {
                            oracle.remove_edge(e);
                        }
                    }
                }
            }
        }

        assert_eq!(trial.vertex_size(), oracle.node_count());
        assert_eq!(trial.edge_size(), oracle.edge_count());
        let trial_edges: BTreeSet<_> = trial
            .iter_edges()
            .map(|e| {
                let (a, b) = e.undirected().endpoints();
                (a, b, e.weight.to_bits())
            })
            .collect();
        let oracle_edges: BTreeSet<_> = oracle
            .edge_indices()
            .map(|e| {
                let (a, b) = oracle.edge_endpoints(e).unwrap();
                let (a, b) = (oracle[a].min(oracle[b]), oracle[a].max(oracle[b]));
                (a, b, oracle[e].to_bits())
            })
            .collect();
        assert_eq!(trial_edges, oracle_edges);
        for v in trial.iter_vertices() {
            let outs: Vec<_> = trial.out_edges(&v).collect();
            let ins: Vec<_> = trial.in_edges(&v).collect();
            assert_eq!(outs.len(), ins.len());
            for (o, i) in outs.iter().zip(ins.iter()) {
                assert_eq!(o.source, v);
                assert_eq!(i.sink, v);
                assert_eq!(o.id, i.id);
            }
        }
    }

    #[test]
    fn both_orientations_name_the_same_edge() {
        let mut g = undirected::TreeBackedGraph::new();
        for i in 0..3 {
            g.add_vertex(VertexId(i));
        }
        let e = g.add_edge(VertexId(0), VertexId(1), 4.0);
        assert_eq!(g.add_edge(VertexId(1), VertexId(0), 2.0), e);
        assert_eq!(g.edge_size(), 1);
        let seen_from_1 = g.edge_connecting(&VertexId(1), &VertexId(0)).unwrap();
        assert_eq!(seen_from_1.source, VertexId(1));
        assert_eq!(seen_from_1.weight, 2.0);
        let outs: Vec<_> = g.out_edges(&VertexId(1)).map(|e| e.sink).collect();
        assert_eq!(outs, vec![VertexId(0)]);
        assert!(g.remove_edge(&e).is_some());
        assert!(g.out_edges(&VertexId(0)).next().is_none());
        assert!(g.out_edges(&VertexId(1)).next().is_none());
    }

    #[test]
    fn self_loop_is_listed_once() {
        let mut g = undirected::TreeBackedGraph::new();
        g.add_vertex(VertexId(0));
        g.add_edge(VertexId(0), VertexId(0), 1.0);
        assert_eq!(g.out_edges(&VertexId(0)).count(), 1);
        assert_eq!(g.remove_vertex(&VertexId(0)).count(), 1);
        assert_eq!(g.edge_size(), 0);
    }
}
