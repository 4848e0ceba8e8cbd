//! Visited bookkeeping for graph traversals.
//!
//! Each traversal owns one `VisitedFlags` sized to the full vertex count of the
//! graph it walks; flags are never shared between traversals.

/// A per-vertex visited flag vector with a running count of marked vertices.
#[derive(Debug, Clone)]
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
    marked: usize,
}

impl VisitedFlags {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
            marked: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.flags.len()
    }

    /// Number of vertices marked so far.
    #[inline(always)]
    pub(crate) fn count(&self) -> usize {
        self.marked
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, idx: usize) -> bool {
        self.flags[idx]
    }

    /// Returns `true` iff the vertex was not yet visited, marking it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, idx: usize) -> bool {
        if self.flags[idx] {
            return false;
        }
        self.flags[idx] = true;
        self.marked += 1;
        true
    }
}
