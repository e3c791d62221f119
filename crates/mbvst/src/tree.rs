//! Validated spanning trees.
//!
//! Branch-vertex counting is only meaningful on a tree, so the count lives on
//! a type whose constructor checks treeness. Arbitrary edge sets never get a
//! branch count; they get `None` here and stay working state.

use mbvst_graphlib::{Edge, Graph, alg};
use serde::Serialize;

/// A connected, acyclic, spanning edge set over some vertex universe, plus the
/// number of its branch vertices (tree degree > 2).
#[derive(Debug, Clone, Serialize)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    branch_vertices: usize,
}

impl SpanningTree {
    /// Validates `g` as a spanning tree of its own vertex universe:
    /// `|E| = |V| - 1` and connected (which together imply acyclic).
    /// Returns `None` for anything else, including the empty graph.
    pub fn try_new(g: &Graph) -> Option<Self> {
        if g.node_count() == 0 || g.edge_count() + 1 != g.node_count() {
            return None;
        }
        if !alg::is_connected(g) {
            return None;
        }
        let branch_vertices = g.degrees().values().filter(|&&d| d > 2).count();
        Some(Self {
            edges: g.edge_list(),
            branch_vertices,
        })
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn branch_vertices(&self) -> usize {
        self.branch_vertices
    }
}
