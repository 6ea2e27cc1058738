//! Directed and undirected weighted graphs over arbitrary hashable values.
//!
//! A [`graph::Graph`] maps caller values to dense [`graph::VertexId`]s and keeps
//! its edges in a low-level graph.
//! Algorithms in [`algorithm`] run on the low-level graphs and are also exposed
//! through value-based methods on [`graph::Graph`].
//!
//! ```rust
//! use valgraph::graph::DiGraph;
//!
//! let mut g = DiGraph::with_vertices(["a", "b", "c"]);
//! g.add_weighted_edge(&"a", &"b", 2.0);
//! g.add_weighted_edge(&"b", &"c", 3.0);
//! g.add_weighted_edge(&"a", &"c", 10.0);
//!
//! let path = g.shortest_path(&"a", &"c").unwrap().unwrap();
//! assert_eq!(path.vertices, vec!["a", "b", "c"]);
//! assert_eq!(path.weight, 5.0);
//! ```
//!
//! Graphs are plain single-threaded structures.
//! Iterators borrow the graph, so the borrow checker rules out mutation during a traversal.

pub mod algorithm;
mod error;
pub use self::error::*;
pub mod graph;
