//! Wide bridges: edges whose two endpoint vertices together separate the graph.
//!
//! Two formulations live here side by side:
//! - [`Graph::wide_bridges`] removes both endpoints of every edge and checks that
//!   the remaining `n - 2` vertices are still reachable from one another. This is
//!   the reference definition.
//! - [`Graph::wide_bridges_from_articulation_points`] derives candidates from
//!   articulation points and their pendant leaves without any per-edge traversal.
//!
//! They are not equivalent. On connected simple graphs every edge the
//! articulation formulation reports is also a reference wide bridge, but it
//! misses separating pairs that involve no cut vertex of degree 3 or more.

use std::collections::BTreeSet;

use crate::graph::basic::edge::Edge;
use crate::graph::basic::undirected::Graph;

impl Graph {
    /// Returns every canonical edge `{u, v}` such that removing vertices `u` and `v`
    /// leaves the rest of the graph disconnected.
    ///
    /// Runs one exclusion traversal per edge: \(O(m \cdot (n + m))\).
    pub fn wide_bridges(&self) -> BTreeSet<Edge> {
        let remaining = self.size().saturating_sub(2);

        let wide: BTreeSet<Edge> = self
            .edges()
            .into_iter()
            .filter(|&edge| {
                let (u, v) = edge.endpoints();
                // An edge implies at least two vertices, so vertex 0 exists.
                let reached = self.dfs_excluding(0, u, v).map_or(0, Iterator::count);

                #[cfg(feature = "tracing")]
                tracing::trace!(%edge, reached, remaining, "classified edge");

                reached != remaining
            })
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            vertices = self.size(),
            wide_bridges = wide.len(),
            "wide bridge analysis finished"
        );

        wide
    }

    /// Derives wide bridges from articulation points.
    ///
    /// Every edge incident to an articulation point of degree at least 3 is
    /// reported, except an edge to a leaf when that leaf is the articulation
    /// point's only leaf neighbor.
    pub fn wide_bridges_from_articulation_points(&self) -> BTreeSet<Edge> {
        let mut wide = BTreeSet::new();

        for cut in self.articulation_points() {
            let neighbors = self.adjacent(cut);
            if neighbors.len() < 3 {
                continue;
            }

            let is_leaf = |w: usize| self.adjacent(w).len() == 1;
            let leaves = neighbors.iter().filter(|&&w| is_leaf(w)).count();

            for &w in neighbors {
                let lone_leaf = is_leaf(w) && leaves == 1;
                if !lone_leaf {
                    wide.insert(Edge::new(cut, w));
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            vertices = self.size(),
            wide_bridges = wide.len(),
            "articulation-based wide bridge analysis finished"
        );

        wide
    }
}
