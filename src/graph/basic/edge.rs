//! Canonical undirected edges.

use serde::{Deserialize, Serialize};

/// An undirected edge stored as the ordered pair `(low, high)`.
///
/// Two insertions of the same endpoints, in either direction, map to the same
/// `Edge`. Ordering is lexicographic by `(low, high)`, so a `BTreeSet<Edge>`
/// iterates in ascending pair order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    low: usize,
    high: usize,
}

impl Edge {
    /// Creates the canonical edge between `a` and `b`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// The smaller endpoint.
    #[inline]
    pub fn low(&self) -> usize {
        self.low
    }

    /// The larger endpoint.
    #[inline]
    pub fn high(&self) -> usize {
        self.high
    }

    /// Both endpoints as `(low, high)`.
    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.low, self.high)
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    #[inline]
    pub fn touches(&self, vertex: usize) -> bool {
        self.low == vertex || self.high == vertex
    }

    /// Returns the endpoint opposite `vertex`, or `None` if `vertex` is not on this edge.
    pub fn other(&self, vertex: usize) -> Option<usize> {
        if vertex == self.low {
            Some(self.high)
        } else if vertex == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

impl core::fmt::Display for Edge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.low, self.high)
    }
}
