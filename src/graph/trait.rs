use crate::graph::*;

pub trait GrowableGraph {
    fn new() -> Self;

    /// Starts tracking `vertex`. Returns `false` if it was already tracked.
    fn add_vertex(&mut self, vertex: VertexId) -> bool;

    /// Connects `source` to `sink`.
    ///
    /// Both vertices must have been added.
    /// If they are already connected, the weight is overwritten and the existing id is returned.
    fn add_edge(&mut self, source: VertexId, sink: VertexId, weight: f64) -> EdgeId;
}

pub trait EdgeShrinkableGraph {
    fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge>;
}

pub trait VertexShrinkableGraph: EdgeShrinkableGraph {
    /// Removes a vertex and returns the edges that were connected to it.
    fn remove_vertex(&mut self, vertex: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static>;
}

pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    /// Vertices in ascending id order.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    fn edge_size(&self) -> usize;
    /// Edges in insertion order.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn contains_edge(&self, e: &EdgeId) -> bool;
    /// Number of edge ids handed out so far, removed edges included.
    fn issued_edge_ids(&self) -> usize;
    fn find_edge(&self, e: &EdgeId) -> Option<Edge>;
    fn edge_connecting(&self, source: &VertexId, sink: &VertexId) -> Option<Edge>;
    /// Edges ending at `v`, in insertion order, with `sink == v`.
    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;
    /// Edges leaving `v`, in insertion order, with `source == v`.
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}
