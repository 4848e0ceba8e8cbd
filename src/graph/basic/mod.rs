//! Basic graph building blocks.
//!
//! This module contains the adjacency-list representation and the lazy
//! traversal every analysis is written against.

pub mod edge;
pub mod traversal;
pub mod undirected;

pub use edge::Edge;
pub use traversal::Dfs;
pub use undirected::{Graph, Vertex};
