use thiserror::Error;

/// Errors reported by graph operations.
///
/// Algorithmic "no result" outcomes, such as an unreachable target, are not errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex index is not tracked by the registry,
    /// or an edge index was never issued by the graph.
    #[error("index {index} out of range (size {size})")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of indices ever issued.
        size: usize,
    },
    /// An edge index was issued, but its edge has been removed.
    #[error("edge index {0} not found")]
    EdgeNotFound(usize),
    /// A value is not a vertex of the graph.
    #[error("vertex not found")]
    VertexNotFound,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
