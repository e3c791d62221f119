//! Undirected graph container APIs used by `mbvst`.
//!
//! This crate holds the `Graph` container plus a small set of traversal
//! helpers exported as `mbvst_graphlib::alg`. Node and edge iteration order is
//! always insertion order, so every algorithm built on top of it is a pure
//! function of how the graph was constructed, never of hash layout.

mod graph;

pub use graph::{Edge, Graph, alg};
