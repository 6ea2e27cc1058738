use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

/// A subgraph by shadowing some of vertices and edges in the underlying graph.
///
/// Removing vertices and edges from a [ShadowedSubgraph] just shadows them.
/// Therefore, shrinking a [ShadowedSubgraph] keeps the underlying graph unchanged.
pub struct ShadowedSubgraph<'a, G> {
    lower_graph: &'a G,
    shadowed_vertices: HashSet<VertexId, RandomState>,
    shadowed_edges: HashSet<EdgeId, RandomState>,
}

impl<'a, G> DirectedOrNot for ShadowedSubgraph<'a, G>
where
    G: DirectedOrNot,
{
    const DIRECTED_OR_NOT: bool = G::DIRECTED_OR_NOT;
}

impl<'a, G> ShadowedSubgraph<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(lower_graph: &'a G) -> Self {
        Self {
            lower_graph,
            shadowed_edges: HashSet::with_hasher(RandomState::new()),
            shadowed_vertices: HashSet::with_hasher(RandomState::new()),
        }
    }

    /// Brings a shadowed edge, and its endpoints, back.
    pub fn disclose_edge(&mut self, e: EdgeId) -> &mut Self {
        if let Some(edge) = self.lower_graph.find_edge(&e) {
            self.shadowed_edges.remove(&e);
            self.disclose_vertex(edge.source).disclose_vertex(edge.sink);
        }
        self
    }

    pub fn disclose_vertex(&mut self, v: VertexId) -> &mut Self {
        self.shadowed_vertices.remove(&v);
        self
    }

    fn is_visible(&self, e: &Edge) -> bool {
        !self.shadowed_edges.contains(&e.id)
            && !self.shadowed_vertices.contains(&e.source)
            && !self.shadowed_vertices.contains(&e.sink)
    }
}

impl<'a, G> EdgeShrinkableGraph for ShadowedSubgraph<'a, G>
where
    G: QueryableGraph,
{
    fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge> {
        if self.shadowed_edges.contains(edge) {
            return None;
        }
        if let Some(e) = self.lower_graph.find_edge(edge) {
            self.shadowed_edges.insert(e.id);
            Some(e)
        } else {
            None
        }
    }
}

impl<'a, G> VertexShrinkableGraph for ShadowedSubgraph<'a, G>
where
    G: QueryableGraph,
{
    fn remove_vertex(&mut self, vertex: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static> {
        if self.shadowed_vertices.contains(vertex) {
            return Box::new(std::iter::empty());
        }
        if !self.lower_graph.contains_vertex(vertex) {
            return Box::new(std::iter::empty());
        }
        let lower_graph = self.lower_graph;
        let edges = lower_graph
            .in_edges(vertex)
            .chain(lower_graph.out_edges(vertex));
        let mut res = vec![];
        for e in edges {
            if self.remove_edge(&e.id).is_some() {
                res.push(e);
            }
        }
        self.shadowed_vertices.insert(*vertex);
        Box::new(res.into_iter())
    }
}

impl<'a, G> QueryableGraph for ShadowedSubgraph<'a, G>
where
    G: QueryableGraph,
{
    fn vertex_size(&self) -> usize {
        self.lower_graph.vertex_size() - self.shadowed_vertices.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let it = self
            .lower_graph
            .iter_vertices()
            .filter(|v| !self.shadowed_vertices.contains(v));
        Box::new(it)
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        !self.shadowed_vertices.contains(v) && self.lower_graph.contains_vertex(v)
    }

    fn edge_size(&self) -> usize {
        self.iter_edges().count()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self
            .lower_graph
            .iter_edges()
            .filter(|e| self.is_visible(e));
        Box::new(it)
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.find_edge(e).is_some()
    }

    fn issued_edge_ids(&self) -> usize {
        self.lower_graph.issued_edge_ids()
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        self.lower_graph.find_edge(e).filter(|e| self.is_visible(e))
    }

    fn edge_connecting(&self, source: &VertexId, sink: &VertexId) -> Option<Edge> {
        self.lower_graph
            .edge_connecting(source, sink)
            .filter(|e| self.is_visible(e))
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        if self.shadowed_vertices.contains(v) {
            return Box::new(std::iter::empty());
        }
        let it = self
            .lower_graph
            .in_edges(v)
            .filter(|e| self.is_visible(e));
        Box::new(it)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        if self.shadowed_vertices.contains(v) {
            return Box::new(std::iter::empty());
        }
        let it = self
            .lower_graph
            .out_edges(v)
            .filter(|e| self.is_visible(e));
        Box::new(it)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::*;
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeSet;

    #[quickcheck]
    fn shadowed_subgraph(ops: Ops) {
        let (add, remove): (Vec<_>, Vec<_>) = ops.iter().cloned().partition(|op| match op {
            Op::AddVertex(_) => true,
            Op::AddEdge(_) => true,
            Op::RemoveVertex(_) => false,
            Op::RemoveEdge(_) => false,
        });
        let base: TreeBackedGraph = Ops { ops: add.clone() }.build();
        let oracle: TreeBackedGraph = {
            let mut all = add;
            all.extend(remove.iter().copied());
            Ops { ops: all }.build()
        };
        let mut trial = ShadowedSubgraph::new(&base);
        for op in remove.iter() {
            match op {
                Op::RemoveVertex(v) => {
                    let _ = trial.remove_vertex(v);
                }
                Op::RemoveEdge((src, snk)) => {
                    if let Some(e) = trial.edge_connecting(src, snk) {
                        trial.remove_edge(&e.id);
                    }
                }
                _ => unreachable!(),
            }
        }

        assert_eq!(trial.vertex_size(), oracle.vertex_size());
        assert_eq!(trial.edge_size(), oracle.edge_size());
        let trial_vertices: BTreeSet<_> = trial.iter_vertices().collect();
        let oracle_vertices: BTreeSet<_> = oracle.iter_vertices().collect();
        assert_eq!(trial_vertices, oracle_vertices);
        let trial_edges: Vec<_> = trial.iter_edges().collect();
        let oracle_edges: Vec<_> = oracle.iter_edges().collect();
        assert_eq!(trial_edges, oracle_edges);
    }

    #[test]
    fn disclose_restores_visibility() {
        let mut g = TreeBackedGraph::new();
        g.add_vertex(VertexId(0));
        g.add_vertex(VertexId(1));
        let eid = g.add_edge(VertexId(0), VertexId(1), 1.0);
        let mut sub = ShadowedSubgraph::new(&g);
        assert_eq!(sub.remove_vertex(&VertexId(1)).count(), 1);
        assert_eq!(sub.vertex_size(), 1);
        assert!(!sub.contains_edge(&eid));
        sub.disclose_edge(eid);
        assert!(sub.contains_edge(&eid));
        assert_eq!(sub.out_edges(&VertexId(0)).count(), 1);
        assert_eq!(g.edge_size(), 1);
    }
}
