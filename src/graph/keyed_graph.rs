use crate::{algorithm::*, graph::*, GraphError, Result};
use ahash::RandomState;
use std::collections::HashSet;
use std::hash::Hash;

/// A weighted graph whose vertices are caller values.
///
/// Values are registered in a [`VertexRegistry`] and the edges live in a low-level graph `G`,
/// so algorithms always run on dense [`VertexId`]s.
///
/// Mutating calls register unseen values on the fly.
/// Read-only calls never do: asking about an unknown value is [`GraphError::VertexNotFound`].
#[derive(Clone)]
pub struct Graph<T, G = directed::TreeBackedGraph>
where
    T: Hash + Eq,
{
    lower_graph: G,
    registry: VertexRegistry<T>,
}

pub type DiGraph<T> = Graph<T, directed::TreeBackedGraph>;
pub type UnGraph<T> = Graph<T, undirected::TreeBackedGraph>;

impl<T, G> Default for Graph<T, G>
where
    T: Hash + Eq + Clone,
    G: GrowableGraph,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, G> Graph<T, G>
where
    T: Hash + Eq + Clone,
    G: GrowableGraph,
{
    pub fn new() -> Self {
        Self {
            lower_graph: G::new(),
            registry: VertexRegistry::new(),
        }
    }

    /// A graph without edges whose vertices are numbered in the order of `values`.
    pub fn with_vertices<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut res = Self::new();
        res.add_vertices(values);
        res
    }

    /// Adds `value` if it is not a vertex yet. Returns its id either way.
    pub fn add_vertex(&mut self, value: &T) -> VertexId {
        let vid = self.registry.index_of(value);
        self.lower_graph.add_vertex(vid);
        vid
    }

    pub fn add_vertices<I>(&mut self, values: I) -> Vec<VertexId>
    where
        I: IntoIterator<Item = T>,
    {
        let vids = self.registry.register_all(values);
        for vid in vids.iter() {
            self.lower_graph.add_vertex(*vid);
        }
        vids
    }

    /// Connects `source` to `sink` with [`DEFAULT_WEIGHT`].
    pub fn add_edge(&mut self, source: &T, sink: &T) -> EdgeId {
        self.add_weighted_edge(source, sink, DEFAULT_WEIGHT)
    }

    /// Connects `source` to `sink`, registering either of them if needed.
    ///
    /// Connecting an already connected pair overwrites the weight.
    pub fn add_weighted_edge(&mut self, source: &T, sink: &T, weight: f64) -> EdgeId {
        let source = self.add_vertex(source);
        let sink = self.add_vertex(sink);
        self.lower_graph.add_edge(source, sink, weight)
    }

    /// Like [`add_weighted_edge`](Self::add_weighted_edge), between vertices known by id.
    pub fn add_edge_by_id(&mut self, source: VertexId, sink: VertexId, weight: f64) -> Result<EdgeId> {
        self.registry.value_of(&source)?;
        self.registry.value_of(&sink)?;
        Ok(self.lower_graph.add_edge(source, sink, weight))
    }
}

impl<T, G> Graph<T, G>
where
    T: Hash + Eq + Clone,
    G: EdgeShrinkableGraph + QueryableGraph,
{
    /// Removes the edge from `source` to `sink`, if there is one.
    pub fn remove_edge(&mut self, source: &T, sink: &T) -> Option<Edge> {
        let source = self.registry.get_index(source)?;
        let sink = self.registry.get_index(sink)?;
        let e = self.lower_graph.edge_connecting(&source, &sink)?;
        self.lower_graph.remove_edge(&e.id)
    }

    pub fn remove_edge_by_id(&mut self, eid: &EdgeId) -> Result<Edge> {
        self.lower_graph
            .remove_edge(eid)
            .ok_or_else(|| self.missing_edge(eid))
    }
}

impl<T, G> Graph<T, G>
where
    T: Hash + Eq + Clone,
    G: VertexShrinkableGraph + QueryableGraph,
{
    /// Removes `value` along with its edges, which are returned.
    ///
    /// The id of `value` is retired: adding `value` again gives it a fresh id.
    pub fn remove_vertex(&mut self, value: &T) -> Vec<Edge> {
        match self.registry.get_index(value) {
            Some(vid) => {
                self.registry.remove(&vid);
                let edges: Vec<_> = self.lower_graph.remove_vertex(&vid).collect();
                tracing::trace!(?vid, edges = edges.len(), "vertex removed");
                edges
            }
            None => vec![],
        }
    }
}

impl<T, G> Graph<T, G>
where
    T: Hash + Eq + Clone,
    G: QueryableGraph,
{
    pub fn lower_graph(&self) -> &G {
        &self.lower_graph
    }

    pub fn registry(&self) -> &VertexRegistry<T> {
        &self.registry
    }

    /// Every vertex of the lower graph is registered.
    fn registered(&self, vid: &VertexId) -> &T {
        self.registry.value_of(vid).unwrap()
    }

    pub fn index_of(&self, value: &T) -> Result<VertexId> {
        self.registry
            .get_index(value)
            .ok_or(GraphError::VertexNotFound)
    }

    pub fn value_of(&self, vid: &VertexId) -> Result<&T> {
        self.registry.value_of(vid)
    }

    /// Maps ids back to values, keeping their order.
    pub fn get_vertices(&self, vids: &[VertexId]) -> Result<Vec<&T>> {
        vids.iter().map(|vid| self.registry.value_of(vid)).collect()
    }

    pub fn contains_vertex(&self, value: &T) -> bool {
        self.registry.contains_value(value)
    }

    pub fn contains_edge(&self, source: &T, sink: &T) -> bool {
        match (self.registry.get_index(source), self.registry.get_index(sink)) {
            (Some(source), Some(sink)) => self.lower_graph.edge_connecting(&source, &sink).is_some(),
            _ => false,
        }
    }

    pub fn vertex_size(&self) -> usize {
        self.lower_graph.vertex_size()
    }

    pub fn edge_size(&self) -> usize {
        self.lower_graph.edge_size()
    }

    /// Vertices in the order they were added.
    pub fn iter_vertices(&self) -> impl Iterator<Item = &T> + '_ {
        self.lower_graph
            .iter_vertices()
            .map(move |vid| self.registered(&vid))
    }

    /// Edges in the order they were added.
    pub fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.lower_graph.iter_edges()
    }

    pub fn edge_set(&self) -> HashSet<Edge, RandomState> {
        self.lower_graph.iter_edges().collect()
    }

    pub fn edge(&self, eid: &EdgeId) -> Result<Edge> {
        self.lower_graph
            .find_edge(eid)
            .ok_or_else(|| self.missing_edge(eid))
    }

    /// Ids never issued are out of range; issued ones name removed edges.
    fn missing_edge(&self, eid: &EdgeId) -> GraphError {
        let size = self.lower_graph.issued_edge_ids();
        if eid.to_raw() < size {
            GraphError::EdgeNotFound(eid.to_raw())
        } else {
            GraphError::OutOfRange {
                index: eid.to_raw(),
                size,
            }
        }
    }

    pub fn out_edges(&self, value: &T) -> Result<Box<dyn Iterator<Item = Edge> + '_>> {
        let vid = self.index_of(value)?;
        Ok(self.lower_graph.out_edges(&vid))
    }

    pub fn in_edges(&self, value: &T) -> Result<Box<dyn Iterator<Item = Edge> + '_>> {
        let vid = self.index_of(value)?;
        Ok(self.lower_graph.in_edges(&vid))
    }

    /// Values `value` has an edge to, in adjacency order.
    pub fn neighbors(&self, value: &T) -> Result<Vec<&T>> {
        Ok(self
            .out_edges(value)?
            .map(|e| self.registered(&e.sink))
            .collect())
    }

    /// Dumps the lower graph, vertices and edges by id.
    pub fn debug(&self) -> GraphDebug<'_, G> {
        self.lower_graph.debug()
    }

    pub fn dfs(&self, start: &T) -> Result<Dfs<'_, G>> {
        let vid = self.index_of(start)?;
        Ok(self.lower_graph.dfs(&vid))
    }

    pub fn bfs(&self, start: &T) -> Result<Bfs<'_, G>> {
        let vid = self.index_of(start)?;
        Ok(self.lower_graph.bfs(&vid))
    }

    pub fn dfs_by_id(&self, start: &VertexId) -> Result<Dfs<'_, G>> {
        self.registry.value_of(start)?;
        Ok(self.lower_graph.dfs(start))
    }

    pub fn bfs_by_id(&self, start: &VertexId) -> Result<Bfs<'_, G>> {
        self.registry.value_of(start)?;
        Ok(self.lower_graph.bfs(start))
    }

    /// Tells `visitor` about every value reachable from `start`, in depth-first order.
    pub fn visit_dfs<V>(&self, start: &T, visitor: &mut V) -> Result<()>
    where
        V: Visitor<T> + ?Sized,
    {
        for vid in self.dfs(start)? {
            visitor.visit(self.registered(&vid));
        }
        Ok(())
    }

    /// Tells `visitor` about every value reachable from `start`, in breadth-first order.
    pub fn visit_bfs<V>(&self, start: &T, visitor: &mut V) -> Result<()>
    where
        V: Visitor<T> + ?Sized,
    {
        for vid in self.bfs(start)? {
            visitor.visit(self.registered(&vid));
        }
        Ok(())
    }

    /// All simple paths from `source` to `sink`, in the order depth-first search completes them.
    pub fn simple_paths(&self, source: &T, sink: &T) -> Result<Vec<Vec<T>>> {
        let source = self.index_of(source)?;
        let sink = self.index_of(sink)?;
        let res = self
            .lower_graph
            .simple_paths(&source, &sink)
            .map(|path| path.iter().map(|vid| self.registered(vid).clone()).collect())
            .collect();
        Ok(res)
    }

    /// `Ok(None)` if `sink` is unreachable from `source`.
    pub fn shortest_path(&self, source: &T, sink: &T) -> Result<Option<Path<T>>> {
        let source = self.index_of(source)?;
        let sink = self.index_of(sink)?;
        self.lower_graph
            .shortest_path(&source, &sink)
            .map(|path| path.try_map(|vid| self.registry.value_of(&vid).cloned()))
            .transpose()
    }
}

impl<T, G> Graph<T, G>
where
    T: Hash + Eq + Clone,
    G: QueryableGraph + DirectedOrNot,
{
    pub fn has_cycle(&self) -> bool {
        self.lower_graph.has_cycle()
    }
}

impl<T> Graph<T, directed::TreeBackedGraph>
where
    T: Hash + Eq + Clone,
{
    /// The same vertices, ids and weights with every edge turned around.
    pub fn reverse(&self) -> Self {
        let mut lower_graph = directed::TreeBackedGraph::new();
        for vid in self.lower_graph.iter_vertices() {
            lower_graph.add_vertex(vid);
        }
        for e in self.lower_graph.iter_edges() {
            lower_graph.add_edge(e.sink, e.source, e.weight);
        }
        Self {
            lower_graph,
            registry: self.registry.clone(),
        }
    }

    /// Values in topological order, ties going to the earlier added vertex.
    ///
    /// If the graph has a cycle, only the vertices before any cycle are returned.
    pub fn toposort(&self) -> Vec<T> {
        self.lower_graph
            .toposort()
            .map(|vid| self.registered(&vid).clone())
            .collect()
    }

    pub fn visit_toposort<V>(&self, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        for vid in self.lower_graph.toposort() {
            visitor.visit(self.registered(&vid));
        }
    }
}

impl<T> Graph<T, undirected::TreeBackedGraph>
where
    T: Hash + Eq + Clone,
{
    /// Prim's minimum spanning tree of the component of `start`.
    pub fn minimum_spanning_tree(&self, start: &T) -> Result<HashSet<UndirectedEdge, RandomState>> {
        let start = self.index_of(start)?;
        Ok(self
            .lower_graph
            .minimum_spanning_tree(&start)
            .iter()
            .map(Edge::undirected)
            .collect())
    }
}

impl<T, G> std::fmt::Debug for Graph<T, G>
where
    T: Hash + Eq + std::fmt::Debug,
    G: QueryableGraph + DirectedOrNot,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dump = self
            .lower_graph
            .debug()
            .with_labels(|vid: &VertexId, f: &mut std::fmt::Formatter<'_>| {
                match self.registry.value_of(vid) {
                    Ok(value) => write!(f, "{:?}", value),
                    Err(_) => Err(std::fmt::Error),
                }
            });
        std::fmt::Debug::fmt(&dump, f)
    }
}
