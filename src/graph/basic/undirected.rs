//! A fixed-size undirected multigraph over vertex ids `0..n`.
//!
//! Adjacency is kept as one `Vec<usize>` per vertex in insertion order. Parallel
//! edges are recorded every time they are inserted, so `degree` counts them and
//! traversals see them; only [`Graph::edges`] collapses them into canonical pairs.

use std::collections::BTreeSet;

use crate::error::{GraphError, Result};
use crate::graph::basic::edge::Edge;

/// A single vertex: its id and its neighbor ids in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: usize,
    neighbors: Vec<usize>,
}

impl Vertex {
    fn new(id: usize) -> Self {
        Self {
            id,
            neighbors: Vec::new(),
        }
    }

    /// The vertex id, equal to its index in the graph.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Neighbor ids in insertion order, duplicates included.
    #[inline]
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// Number of incident edge endpoints, counting parallel edges individually.
    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// An undirected graph with a vertex count fixed at construction.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(1)\) amortized | Appends to both adjacency lists |
/// | `degree` | \(O(1)\) | returns `Vec::len` |
/// | `neighbors` | \(O(1)\) | borrows the adjacency list |
/// | `edges` | \(O((n + m) \log m)\) | Scans every adjacency list once |
/// | `is_connected` | \(O(n + m)\) | One depth-first traversal from vertex 0 |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<Vertex>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertices: (0..vertex_count).map(Vertex::new).collect(),
        }
    }

    /// Creates a graph from a signed vertex count, as read from untyped input.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexCount`] if `count` is negative or does
    /// not fit in `usize`.
    pub fn with_vertex_count(count: i64) -> Result<Self> {
        usize::try_from(count)
            .map(Self::new)
            .map_err(|_| GraphError::InvalidVertexCount { count })
    }

    /// Creates a graph with `vertex_count` vertices and the given edges, inserted in order.
    ///
    /// # Errors
    /// Fails on the first pair [`Graph::add_edge`] would reject.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        for (a, b) in edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Number of vertices.
    #[inline]
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of inserted edges, counting parallel edges individually.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum::<usize>() / 2
    }

    /// Converts a signed id into a vertex id of this graph.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `raw` is negative or `>= size()`.
    pub fn checked_vertex(&self, raw: i64) -> Result<usize> {
        usize::try_from(raw)
            .ok()
            .filter(|&v| v < self.size())
            .ok_or(GraphError::VertexOutOfRange {
                vertex: raw,
                vertex_count: self.size(),
            })
    }

    #[inline]
    fn ensure_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.size() {
            Ok(())
        } else {
            Err(GraphError::out_of_range(vertex, self.size()))
        }
    }

    /// Inserts the undirected edge `{a, b}`.
    ///
    /// Re-inserting an existing pair records a parallel edge.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if either id is not a vertex, and
    /// [`GraphError::SelfLoop`] if `a == b`. The graph is unchanged on error.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<()> {
        self.ensure_vertex(a)?;
        self.ensure_vertex(b)?;
        if a == b {
            return Err(GraphError::SelfLoop { vertex: a });
        }

        self.vertices[a].neighbors.push(b);
        self.vertices[b].neighbors.push(a);
        Ok(())
    }

    /// Returns the vertex record for `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an invalid id.
    pub fn vertex(&self, vertex: usize) -> Result<&Vertex> {
        self.vertices
            .get(vertex)
            .ok_or_else(|| GraphError::out_of_range(vertex, self.size()))
    }

    /// Iterates over all vertices in id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    /// Returns the degree of `vertex`, counting parallel edges individually.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an invalid id.
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        self.vertex(vertex).map(Vertex::degree)
    }

    /// Returns the neighbors of `vertex` in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an invalid id.
    pub fn neighbors(&self, vertex: usize) -> Result<&[usize]> {
        self.vertex(vertex).map(Vertex::neighbors)
    }

    /// Unchecked adjacency access for traversals that already validated `vertex`.
    #[inline(always)]
    pub(crate) fn adjacent(&self, vertex: usize) -> &[usize] {
        &self.vertices[vertex].neighbors
    }

    /// Returns the set of canonical edges; parallel edges appear once.
    pub fn edges(&self) -> BTreeSet<Edge> {
        self.vertices
            .iter()
            .flat_map(|v| v.neighbors.iter().map(move |&n| Edge::new(v.id, n)))
            .collect()
    }

    /// Returns `true` if a traversal from vertex 0 reaches every vertex.
    ///
    /// A graph with no vertices is connected.
    pub fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        self.dfs(0).is_ok_and(|dfs| dfs.count() == self.size())
    }

    /// Validates the structural invariants of the adjacency lists.
    ///
    /// Checks that:
    /// 1. Every vertex id equals its index
    /// 2. Every neighbor id is a vertex of this graph
    /// 3. No vertex lists itself
    /// 4. Adjacency is symmetric, with multiplicity
    #[cfg(debug_assertions)]
    pub fn validate_invariants(&self) -> bool {
        let n = self.size();
        let mut multiplicity = std::collections::HashMap::<(usize, usize), isize>::new();

        for (idx, vertex) in self.vertices.iter().enumerate() {
            if vertex.id != idx {
                return false;
            }
            for &w in &vertex.neighbors {
                if w >= n || w == idx {
                    return false;
                }
                // +1 for the low -> high side, -1 for the mirror entry.
                let delta = if idx < w { 1 } else { -1 };
                *multiplicity.entry((idx.min(w), idx.max(w))).or_default() += delta;
            }
        }

        multiplicity.values().all(|&m| m == 0)
    }
}

impl TryFrom<i64> for Graph {
    type Error = GraphError;

    fn try_from(count: i64) -> Result<Self> {
        Self::with_vertex_count(count)
    }
}
