use crate::graph::*;
use ahash::RandomState;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A directed graph with balanced computational complexity.
///
/// There is at most one edge for each ordered pair of vertices.
/// Adjacency is kept in edge insertion order.
///
/// |                    | Complexity                                                            |
/// | ------------------ | --------------------------------------------------------------------- |
/// | `add_vertex`       | O(log V)                                                              |
/// | `add_edge`         | O(log E)                                                              |
/// | `remove_edge`      | O(log E)                                                              |
/// | `remove_vertex`    | O(log V + E' log E), where E' is the set of edges touching the vertex |
/// | `vertex_size`      | O(1)                                                                  |
/// | `iter_vertices`    | amortized O(1) per step                                               |
/// | `contains_vertex`  | O(log V)                                                              |
/// | `edge_size`        | O(1)                                                                  |
/// | `iter_edges`       | amortized O(1) per step                                               |
/// | `contains_edge`    | O(log E)                                                              |
/// | `find_edge`        | O(log E)                                                              |
/// | `edge_connecting`  | O(1) expected                                                         |
/// | `in_edges`         | returns in O(log E), then amortized O(log E) per step                 |
/// | `out_edges`        | returns in O(log E), then amortized O(log E) per step                 |
#[derive(Clone)]
pub struct TreeBackedGraph {
    eid_factory: EdgeIdFactory,
    vertices: BTreeSet<VertexId>,
    edges: BTreeMap<EdgeId, Edge>,
    connecting: HashMap<(VertexId, VertexId), EdgeId, RandomState>,
    in_edges: BTreeSet<(VertexId, EdgeId)>,
    out_edges: BTreeSet<(VertexId, EdgeId)>,
}

impl DirectedOrNot for TreeBackedGraph {
    const DIRECTED_OR_NOT: bool = true;
}

impl std::fmt::Debug for TreeBackedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TreeBackedGraph {{")?;
        for v in self.vertices.iter() {
            writeln!(f, "{:?}:", v)?;
            for e in self.out_edges(v) {
                writeln!(f, "  -> {:?} by {:?} weighing {}", e.sink, e.id, e.weight)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl TreeBackedGraph {
    fn edges_in_range<'a>(
        &'a self,
        index: &'a BTreeSet<(VertexId, EdgeId)>,
        v: &VertexId,
    ) -> impl Iterator<Item = Edge> + 'a {
        let start = (*v, EdgeId::MIN);
        let end = (v.next(), EdgeId::MIN);
        index
            .range(start..end)
            .map(move |(_, eid)| *self.edges.get(eid).unwrap())
    }
}

impl GrowableGraph for TreeBackedGraph {
    fn new() -> Self {
        Self {
            eid_factory: EdgeIdFactory::new(),
            vertices: BTreeSet::new(),
            edges: BTreeMap::new(),
            connecting: HashMap::with_hasher(RandomState::new()),
            in_edges: BTreeSet::new(),
            out_edges: BTreeSet::new(),
        }
    }

    fn add_vertex(&mut self, vertex: VertexId) -> bool {
        self.vertices.insert(vertex)
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId, weight: f64) -> EdgeId {
        debug_assert!(self.vertices.contains(&source));
        debug_assert!(self.vertices.contains(&sink));
        if let Some(eid) = self.connecting.get(&(source, sink)) {
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
        self.connecting.insert((source, sink), eid);
        self.in_edges.insert((sink, eid));
        self.out_edges.insert((source, eid));
        eid
    }
}

impl EdgeShrinkableGraph for TreeBackedGraph {
    fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge> {
        let e = self.edges.remove(edge)?;
        self.connecting.remove(&(e.source, e.sink));
        self.in_edges.remove(&(e.sink, e.id));
        self.out_edges.remove(&(e.source, e.id));
        Some(e)
    }
}

impl VertexShrinkableGraph for TreeBackedGraph {
    fn remove_vertex(&mut self, vertex: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static> {
        if !self.vertices.remove(vertex) {
            return Box::new(std::iter::empty());
        }
        let ins = self.edges_in_range(&self.in_edges, vertex);
        let outs = self.edges_in_range(&self.out_edges, vertex);
        let res: BTreeSet<_> = ins.chain(outs).map(|e| e.id).collect();
        let res: Vec<_> = res
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
        self.connecting
            .get(&(*source, *sink))
            .and_then(|eid| self.find_edge(eid))
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.edges_in_range(&self.in_edges, v))
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.edges_in_range(&self.out_edges, v))
    }
}
