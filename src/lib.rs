//! # `cutset` - Connectivity Analysis for Undirected Graphs
//!
//! A small in-memory undirected multigraph with the structural queries built on
//! depth-first search:
//!
//! - **Traversal**: a lazy, explicit-stack [`Dfs`] that can treat two vertices as
//!   removed from the graph.
//! - **Articulation points**: cut vertices from discovery times and low-links
//!   ([`Graph::articulation_points`]).
//! - **Wide bridges**: edges `{u, v}` such that removing both vertices `u` and `v`
//!   disconnects what remains ([`Graph::wide_bridges`]).
//!
//! ## Invariants
//!
//! - The vertex count is fixed at construction; ids are `0..n`.
//! - Every neighbor id is a valid vertex id and no vertex lists itself.
//! - Adjacency is symmetric with multiplicity: inserting `(a, b)` appends `b` to
//!   `a`'s list and `a` to `b`'s list, parallel edges included.
//! - Every fallible operation validates before it mutates.
//!
//! ## Example
//!
//! ```rust
//! use cutset::{Edge, Graph};
//!
//! let mut graph = Graph::new(4);
//! for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)] {
//!     graph.add_edge(a, b)?;
//! }
//!
//! assert!(graph.is_connected());
//! assert!(graph.articulation_points().is_empty());
//! assert_eq!(graph.wide_bridges().into_iter().collect::<Vec<_>>(), vec![Edge::new(0, 2)]);
//! # Ok::<(), cutset::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::{ErrorKind, GraphError, Result};
pub use graph::{ArticulationAnalysis, ArticulationInfo, Dfs, Edge, Graph, Vertex};
