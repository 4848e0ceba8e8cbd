//! Lazy depth-first traversal with optional vertex exclusion.
//!
//! [`Dfs`] is a pull-based state machine: an explicit stack, a visited flag per
//! vertex and up to two excluded vertex ids. Each call to [`Dfs::advance`] (or
//! `Iterator::next`) yields one vertex. Excluded vertices are treated as if they
//! were removed from the graph: they are never pushed, visited or yielded.
//!
//! Order is fully determined by adjacency insertion order. Neighbors are pushed in
//! list order, so the last-inserted unvisited neighbor is explored first.

use core::iter::FusedIterator;

use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedFlags;
use crate::graph::basic::edge::Edge;
use crate::graph::basic::undirected::Graph;

/// A depth-first traversal over a borrowed [`Graph`].
///
/// The stack top always holds the next vertex to yield; when the stack is empty
/// the traversal has ended.
#[derive(Debug, Clone)]
pub struct Dfs<'g> {
    graph: &'g Graph,
    visited: VisitedFlags,
    stack: Vec<usize>,
    excluded: [Option<usize>; 2],
}

impl<'g> Dfs<'g> {
    /// Creates a traversal of every vertex reachable from `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `start` is not a vertex.
    pub fn new(graph: &'g Graph, start: usize) -> Result<Self> {
        Self::with_exclusions(graph, start, [None, None])
    }

    /// Creates a traversal that behaves as if vertices `u` and `v` were removed.
    ///
    /// If `start` is itself excluded, the traversal starts from the smallest
    /// non-excluded id instead; if there is none, it is empty.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `start` is not a vertex.
    pub fn excluding(graph: &'g Graph, start: usize, u: usize, v: usize) -> Result<Self> {
        Self::with_exclusions(graph, start, [Some(u), Some(v)])
    }

    fn with_exclusions(graph: &'g Graph, start: usize, excluded: [Option<usize>; 2]) -> Result<Self> {
        graph.vertex(start)?;

        let mut dfs = Self {
            graph,
            visited: VisitedFlags::new(graph.size()),
            stack: Vec::new(),
            excluded,
        };

        let first = if dfs.is_excluded(start) {
            (0..graph.size()).find(|&id| !dfs.is_excluded(id))
        } else {
            Some(start)
        };
        dfs.stack.extend(first);
        debug_assert_eq!(dfs.visited.len(), graph.size());

        Ok(dfs)
    }

    /// Returns `true` if `vertex` is one of the excluded ids.
    #[inline]
    pub fn is_excluded(&self, vertex: usize) -> bool {
        self.excluded.contains(&Some(vertex))
    }

    /// The vertex the next advance will yield, if any.
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        self.stack.last().copied()
    }

    /// Returns `true` once every reachable vertex has been yielded.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.stack.is_empty()
    }

    /// Number of vertices yielded so far.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.count()
    }

    /// Returns `true` if `vertex` has already been yielded.
    pub fn is_visited(&self, vertex: usize) -> bool {
        vertex < self.visited.len() && self.visited.is_visited(vertex)
    }

    /// Yields the next vertex in depth-first order.
    ///
    /// # Errors
    /// Returns [`GraphError::TraversalExhausted`] if the traversal has already ended.
    pub fn advance(&mut self) -> Result<usize> {
        self.next().ok_or(GraphError::TraversalExhausted)
    }

    #[inline(always)]
    fn is_skippable(&self, vertex: usize) -> bool {
        self.visited.is_visited(vertex) || self.is_excluded(vertex)
    }
}

impl Iterator for Dfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let vertex = self.stack.pop()?;
        self.visited.try_visit(vertex);

        for &neighbor in graph.adjacent(vertex) {
            if !self.is_skippable(neighbor) {
                self.stack.push(neighbor);
            }
        }

        // Parallel edges and earlier pushes leave stale entries behind.
        while let Some(&top) = self.stack.last() {
            if !self.is_skippable(top) {
                break;
            }
            self.stack.pop();
        }

        Some(vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.graph.size() - self.visited.count();
        (usize::from(!self.stack.is_empty()), Some(remaining))
    }
}

impl FusedIterator for Dfs<'_> {}

impl Graph {
    /// Starts a depth-first traversal from `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `start` is not a vertex.
    pub fn dfs(&self, start: usize) -> Result<Dfs<'_>> {
        Dfs::new(self, start)
    }

    /// Starts a depth-first traversal from `start` with vertices `u` and `v` excluded.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `start` is not a vertex.
    pub fn dfs_excluding(&self, start: usize, u: usize, v: usize) -> Result<Dfs<'_>> {
        Dfs::excluding(self, start, u, v)
    }

    /// Collects the depth-first order from `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `start` is not a vertex.
    pub fn depth_first_order(&self, start: usize) -> Result<Vec<usize>> {
        Ok(self.dfs(start)?.collect())
    }

    /// Collects the depth-first order from `start` with both endpoints of `edge` excluded.
    ///
    /// Both endpoint *vertices* are removed, not only the edge between them.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `start` is not a vertex.
    pub fn depth_first_order_excluding(&self, start: usize, edge: Edge) -> Result<Vec<usize>> {
        let (u, v) = edge.endpoints();
        Ok(self.dfs_excluding(start, u, v)?.collect())
    }

    /// Counts the vertices reachable from `start` with both endpoints of `edge` excluded.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `start` is not a vertex.
    pub fn reachable_count_excluding(&self, start: usize, edge: Edge) -> Result<usize> {
        let (u, v) = edge.endpoints();
        Ok(self.dfs_excluding(start, u, v)?.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn star_of_four() -> Graph {
        Graph::from_edges(6, [(0, 1), (0, 4), (1, 4), (2, 4), (4, 5), (3, 4), (3, 5)]).unwrap()
    }

    #[test]
    fn dfs_from_other_end_of_path() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        assert_eq!(graph.depth_first_order(2).unwrap(), vec![2, 1, 0]);
    }

    #[test]
    fn dfs_explores_last_inserted_neighbor_first() {
        // Vertex 4's list is [0, 1, 2, 5, 3]: 3 sits on top after expanding 4.
        let graph = star_of_four();
        assert_eq!(graph.depth_first_order(0).unwrap(), vec![0, 4, 3, 5, 2, 1]);
    }

    #[test]
    fn dfs_order_follows_insertion_order() {
        // Same edge set, but (3, 4) precedes (4, 5), which flips 3 and 5.
        let graph =
            Graph::from_edges(6, [(0, 1), (0, 4), (1, 4), (2, 4), (3, 4), (4, 5), (3, 5)]).unwrap();
        assert_eq!(graph.depth_first_order(0).unwrap(), vec![0, 4, 5, 3, 2, 1]);
    }

    #[test]
    fn dfs_on_single_vertex() {
        let graph = Graph::new(1);
        assert_eq!(graph.depth_first_order(0).unwrap(), vec![0]);
    }

    #[test]
    fn dfs_rejects_invalid_start() {
        let graph = Graph::new(2);
        assert_eq!(graph.dfs(2).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(Graph::new(0).dfs(0).unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn advance_past_end_is_illegal_state() {
        let graph = Graph::from_edges(2, [(0, 1)]).unwrap();
        let mut dfs = graph.dfs(0).unwrap();

        assert_eq!(dfs.peek(), Some(0));
        assert_eq!(dfs.advance().unwrap(), 0);
        assert_eq!(dfs.visited_count(), 1);
        assert!(dfs.is_visited(0));
        assert!(!dfs.is_visited(1));
        assert_eq!(dfs.advance().unwrap(), 1);
        assert!(dfs.is_finished());

        let err = dfs.advance().unwrap_err();
        assert_eq!(err, GraphError::TraversalExhausted);
        assert_eq!(err.kind(), ErrorKind::IllegalState);
        assert_eq!(dfs.next(), None);
    }

    #[test]
    fn parallel_edges_yield_each_vertex_once() {
        let graph = Graph::from_edges(3, [(0, 1), (0, 1), (1, 2), (2, 1), (0, 2)]).unwrap();
        let order = graph.depth_first_order(0).unwrap();
        assert_eq!(order, vec![0, 2, 1]);
    }

    #[test]
    fn excluded_vertices_are_never_yielded() {
        let graph = star_of_four();
        let order = graph.depth_first_order_excluding(0, Edge::new(4, 5)).unwrap();
        assert_eq!(order, vec![0, 1]);
        assert_eq!(graph.reachable_count_excluding(0, Edge::new(4, 5)).unwrap(), 2);
    }

    #[test]
    fn excluded_start_moves_to_smallest_remaining_id() {
        let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();

        let dfs = graph.dfs_excluding(0, 0, 1).unwrap();
        assert_eq!(dfs.peek(), Some(2));
        assert_eq!(dfs.collect::<Vec<_>>(), vec![2, 3]);

        let order = graph.depth_first_order_excluding(1, Edge::new(1, 2)).unwrap();
        assert_eq!(order, vec![0, 3]);
    }

    #[test]
    fn excluding_every_vertex_gives_empty_traversal() {
        let graph = Graph::from_edges(2, [(0, 1)]).unwrap();
        let mut dfs = graph.dfs_excluding(0, 0, 1).unwrap();
        assert!(dfs.is_finished());
        assert_eq!(dfs.advance().unwrap_err().kind(), ErrorKind::IllegalState);
    }

    #[test]
    fn traversal_does_not_cross_components() {
        let graph = Graph::from_edges(5, [(0, 1), (2, 3), (3, 4)]).unwrap();
        assert_eq!(graph.depth_first_order(3).unwrap(), vec![3, 4, 2]);
        assert_eq!(graph.dfs(0).unwrap().count(), 2);
    }
}
