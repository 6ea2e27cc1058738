//! Traits and implementations for directed and undirected graphs and useful graph wrappers.
//!
//! # Low-level graphs and `Graph`
//!
//! Vertices and edges in low-level graphs are lightweight ids.
//! They are essentially `usize`, so algorithm authors may feel free to copy and store them.
//! Low-level graphs never invent vertex ids: whoever adds a vertex decides its id.
//!
//! [`Graph`] puts caller values on top.
//! Its [`VertexRegistry`] hands out dense ids from zero in registration order
//! and the edges live in a low-level graph.
//!
//! Every low-level graph keeps at most one edge per pair of vertices,
//! and iterates edges in insertion order.
//!
//! # Graph wrappers
//!
//! ## `ShadowedSubgraph`
//!
//! It forms a subgraph with hidden vertices and edges.
//! The subgraph is shrinkable while the underlying graph is kept unchanged.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod registry;
pub use self::registry::*;
mod shadowed_subgraph;
pub use self::shadowed_subgraph::*;
mod graph_debug;
pub use self::graph_debug::*;
mod keyed_graph;
pub use self::keyed_graph::*;

pub mod directed;
pub mod undirected;
