//! Undirected graphs and the connectivity analyses built on them.
//!
//! Graph code is organized into categories:
//! - `basic`: the graph representation, canonical edges and depth-first traversal
//! - `connectivity`: articulation points and wide bridges

pub mod basic;
pub mod connectivity;
pub(crate) mod access;

// Re-export commonly used types from submodules
pub use basic::{Dfs, Edge, Graph, Vertex};
pub use connectivity::{ArticulationAnalysis, ArticulationInfo};
