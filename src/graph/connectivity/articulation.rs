//! Articulation points via discovery times and low-links.
//!
//! The depth-first pass uses an explicit frame stack instead of recursion, so
//! long paths cannot overflow the call stack. Updates happen in the same order
//! as the recursive formulation: a tree child's low-link is folded into its
//! parent when the child's frame is popped.

use std::collections::BTreeSet;

use crate::graph::basic::undirected::Graph;

/// Per-vertex state recorded by one articulation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticulationInfo {
    /// Parent in the depth-first tree, `None` for a root.
    pub parent: Option<usize>,
    /// Discovery time.
    pub discovery: usize,
    /// Smallest discovery time reachable from the subtree through one back edge.
    pub low: usize,
    /// Whether the pass reached this vertex.
    pub visited: bool,
}

impl ArticulationInfo {
    #[inline]
    fn update_low(&mut self, value: usize) {
        self.low = self.low.min(value);
    }
}

/// The result of one articulation pass over a graph.
///
/// Fresh state is allocated for every [`ArticulationAnalysis::run`]; nothing is
/// cached on the graph.
#[derive(Debug, Clone)]
pub struct ArticulationAnalysis {
    info: Vec<ArticulationInfo>,
    points: BTreeSet<usize>,
}

impl ArticulationAnalysis {
    /// Runs the analysis over every component, rooting the first pass at vertex 0.
    pub fn run(graph: &Graph) -> Self {
        let mut analysis = Self {
            info: vec![ArticulationInfo::default(); graph.size()],
            points: BTreeSet::new(),
        };

        if graph.is_empty() {
            return analysis;
        }

        let mut time = 0;
        for root in 0..graph.size() {
            if !analysis.info[root].visited {
                analysis.search_from(graph, root, &mut time);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            vertices = graph.size(),
            articulation_points = analysis.points.len(),
            "articulation analysis finished"
        );

        analysis
    }

    fn search_from(&mut self, graph: &Graph, root: usize, time: &mut usize) {
        // (vertex, index of the next neighbor to inspect)
        let mut stack = vec![(root, 0usize)];
        let mut root_children = 0usize;
        self.discover(root, None, time);

        while let Some(frame) = stack.last_mut() {
            let (v, next) = *frame;
            let neighbors = graph.adjacent(v);

            if let Some(&w) = neighbors.get(next) {
                frame.1 += 1;
                if !self.info[w].visited {
                    if v == root {
                        root_children += 1;
                    }
                    self.discover(w, Some(v), time);
                    stack.push((w, 0));
                } else if self.info[v].parent != Some(w) {
                    let disc = self.info[w].discovery;
                    self.info[v].update_low(disc);
                }
                continue;
            }

            stack.pop();
            if let Some(parent) = self.info[v].parent {
                let low = self.info[v].low;
                self.info[parent].update_low(low);
                if parent != root && low >= self.info[parent].discovery {
                    self.points.insert(parent);
                }
            }
        }

        if root_children > 1 {
            self.points.insert(root);
        }
    }

    fn discover(&mut self, vertex: usize, parent: Option<usize>, time: &mut usize) {
        self.info[vertex] = ArticulationInfo {
            parent,
            discovery: *time,
            low: *time,
            visited: true,
        };
        *time += 1;
    }

    /// The articulation points found, in ascending order.
    pub fn points(&self) -> &BTreeSet<usize> {
        &self.points
    }

    /// Consumes the analysis, returning the articulation points.
    pub fn into_points(self) -> BTreeSet<usize> {
        self.points
    }

    /// Returns `true` if `vertex` is an articulation point.
    pub fn is_articulation_point(&self, vertex: usize) -> bool {
        self.points.contains(&vertex)
    }

    /// The record for `vertex`, or `None` for an invalid id.
    pub fn info(&self, vertex: usize) -> Option<&ArticulationInfo> {
        self.info.get(vertex)
    }
}

impl Graph {
    /// Returns the set of articulation (cut) vertices.
    ///
    /// Leaves are never articulation points; a depth-first root is one iff it has
    /// more than one tree child.
    pub fn articulation_points(&self) -> BTreeSet<usize> {
        ArticulationAnalysis::run(self).into_points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[usize]) -> BTreeSet<usize> {
        items.iter().copied().collect()
    }

    #[test]
    fn empty_graph_has_no_articulation_points() {
        assert!(Graph::new(0).articulation_points().is_empty());
    }

    #[test]
    fn cycle_has_no_articulation_points() {
        let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        assert!(graph.articulation_points().is_empty());
    }

    #[test]
    fn path_interior_vertices_are_articulation_points() {
        let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(graph.articulation_points(), set(&[1, 2]));
    }

    #[test]
    fn shared_cut_vertices() {
        let graph =
            Graph::from_edges(6, [(0, 1), (0, 5), (1, 2), (1, 3), (2, 3), (4, 3), (4, 2)]).unwrap();
        assert_eq!(graph.articulation_points(), set(&[0, 1]));
    }

    #[test]
    fn root_with_one_child_is_not_an_articulation_point() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let analysis = ArticulationAnalysis::run(&graph);

        assert!(!analysis.is_articulation_point(0));
        let root = analysis.info(0).unwrap();
        assert_eq!(root.parent, None);
        assert_eq!(root.discovery, 0);
        assert!(root.visited);
    }

    #[test]
    fn low_links_follow_back_edges() {
        // 0 - 1 - 2 - 0 triangle with a pendant 3 on vertex 2.
        let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
        let analysis = ArticulationAnalysis::run(&graph);

        // DFS: 0 -> 1 -> 2 -> 3, back edge 2 -> 0.
        assert_eq!(analysis.info(1).unwrap().parent, Some(0));
        assert_eq!(analysis.info(2).unwrap().parent, Some(1));
        assert_eq!(analysis.info(2).unwrap().low, 0);
        assert_eq!(analysis.info(1).unwrap().low, 0);
        assert_eq!(analysis.info(3).unwrap().low, 3);
        assert_eq!(analysis.points(), &set(&[2]));
        assert!(analysis.info(4).is_none());
    }

    #[test]
    fn every_component_is_analysed() {
        // Triangle on {0, 1, 2} and a path 3 - 4 - 5.
        let graph = Graph::from_edges(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5)]).unwrap();
        assert_eq!(graph.articulation_points(), set(&[4]));
    }

    #[test]
    fn parallel_edge_to_parent_does_not_lower_link() {
        let graph = Graph::from_edges(3, [(0, 1), (0, 1), (1, 2)]).unwrap();
        assert_eq!(graph.articulation_points(), set(&[1]));
    }

    #[test]
    fn long_path_does_not_recurse() {
        let n = 100_000;
        let graph = Graph::from_edges(n, (0..n - 1).map(|i| (i, i + 1))).unwrap();
        assert_eq!(graph.articulation_points().len(), n - 2);
    }

    #[test]
    fn repeated_runs_agree() {
        let graph =
            Graph::from_edges(6, [(0, 1), (0, 5), (1, 2), (1, 3), (2, 3), (4, 3), (4, 2)]).unwrap();
        assert_eq!(graph.articulation_points(), graph.articulation_points());
    }
}
