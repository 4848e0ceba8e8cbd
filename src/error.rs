//! Error types for graph construction, mutation and traversal.

/// Broad classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A vertex id lies outside `[0, n)`.
    OutOfRange,
    /// The arguments are well-typed but describe something the graph forbids.
    InvalidArgument,
    /// The operation is not valid in the object's current state.
    IllegalState,
}

/// The error type for all fallible graph operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex id was negative or not below the vertex count.
    VertexOutOfRange {
        /// The offending id, as supplied by the caller.
        vertex: i64,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge from a vertex to itself was requested.
    SelfLoop {
        /// The vertex given for both endpoints.
        vertex: usize,
    },
    /// A vertex count that cannot describe a graph (negative or too large).
    InvalidVertexCount {
        /// The rejected count.
        count: i64,
    },
    /// A traversal was advanced after it had already yielded every vertex.
    TraversalExhausted,
}

impl GraphError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::VertexOutOfRange { .. } => ErrorKind::OutOfRange,
            Self::SelfLoop { .. } | Self::InvalidVertexCount { .. } => ErrorKind::InvalidArgument,
            Self::TraversalExhausted => ErrorKind::IllegalState,
        }
    }

    pub(crate) fn out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Self::VertexOutOfRange {
            vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
            vertex_count,
        }
    }
}

impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::VertexOutOfRange { vertex, vertex_count } => {
                write!(f, "vertex {vertex} out of range for graph with {vertex_count} vertices")
            }
            Self::SelfLoop { vertex } => write!(f, "self-loop on vertex {vertex} is not allowed"),
            Self::InvalidVertexCount { count } => write!(f, "invalid vertex count {count}"),
            Self::TraversalExhausted => f.write_str("depth-first traversal has ended"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
