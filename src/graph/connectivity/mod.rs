//! Structural queries over undirected graphs.
//!
//! Both analyses depend only on [`Graph`](crate::graph::Graph) and its traversal;
//! they do not depend on each other, except that the articulation-based
//! wide-bridge formulation is defined in terms of articulation points.

pub mod articulation;
pub mod wide_bridges;

pub use articulation::{ArticulationAnalysis, ArticulationInfo};
