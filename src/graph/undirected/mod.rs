//! Implementations of low-level undirected graphs

mod tree_backed;
pub use self::tree_backed::*;
