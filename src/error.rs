//! Error types of the crate.
//!
//! Most queries cannot fail: unknown vertices behave like isolated vertices and unreachable
//! targets are reported through `None` / [`Distance::Unreachable`](crate::weight::Distance).
//! Errors are reserved for operations that are not applicable to a graph at all.

use crate::node::{Node, NumNodes};

/// Graph error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Topological orderings only exist for directed graphs.
    #[error("Topological sort is only defined for directed graphs")]
    UndirectedTopologicalSort,

    /// A dense graph was indexed outside of `0..n`.
    #[error("Vertex {vertex} is out of range for a graph with {n} vertices")]
    VertexOutOfRange { vertex: Node, n: NumNodes },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
