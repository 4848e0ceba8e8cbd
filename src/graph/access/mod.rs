//! Internal graph accessors and low-level building blocks.
//!
//! This module is `pub(crate)` so traversals and analyses can share the same
//! visited bookkeeping without exposing it as part of the public API surface.

pub(crate) mod visited;
