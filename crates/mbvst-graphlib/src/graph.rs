//! Undirected graph container.
//!
//! The container stores a vertex universe plus a simple (loop-free,
//! parallel-free) undirected edge set. Nodes and edges keep insertion order;
//! index maps give O(1) membership tests. Edge lookup is orientation-agnostic:
//! the container canonicalizes endpoints on every insert and query, so
//! `has_edge("a", "b")` and `has_edge("b", "a")` always agree.

use rustc_hash::FxBuildHasher;
use std::collections::BTreeMap;

mod edge_key;

pub mod alg;

pub use edge_key::Edge;
use edge_key::EdgeView;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<String>,
    node_index: HashMap<String, usize>,

    edges: Vec<Edge>,
    edge_index: HashMap<Edge, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph over a fixed vertex universe plus an edge selection.
    ///
    /// This is the shape every repair phase works with: the instance's full
    /// vertex set, combined with whatever edge subset the phase owns. Vertices
    /// with no incident edge are kept (they matter for connectivity queries).
    pub fn from_parts(
        nodes: impl IntoIterator<Item = impl Into<String>>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Self {
        let mut g = Self::new();
        for id in nodes {
            g.add_node(id);
        }
        for e in edges {
            g.add_edge(e.u().to_string(), e.v().to_string());
        }
        g
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn add_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return self;
        }
        let idx = self.nodes.len();
        self.nodes.push(id.clone());
        self.node_index.insert(id, idx);
        self
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.as_str())
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.clone()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn edge_list(&self) -> Vec<Edge> {
        self.edges.clone()
    }

    /// Inserts the edge `{u, v}`, adding missing endpoints to the vertex set.
    ///
    /// Idempotent: inserting an edge that is already present (in either
    /// orientation) leaves the graph unchanged.
    pub fn add_edge(&mut self, u: impl Into<String>, v: impl Into<String>) -> &mut Self {
        let u = u.into();
        let v = v.into();
        let edge = Edge::new(u.clone(), v.clone());
        if self.edge_index.contains_key(&edge) {
            return self;
        }
        self.add_node(u);
        self.add_node(v);
        let idx = self.edges.len();
        self.edges.push(edge.clone());
        self.edge_index.insert(edge, idx);
        self
    }

    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.edge_index.contains_key(&EdgeView::new(u, v))
    }

    /// Removes the edge `{u, v}` in either orientation. Endpoints stay in the
    /// vertex set. Returns whether an edge was removed.
    pub fn remove_edge(&mut self, u: &str, v: &str) -> bool {
        let Some(idx) = self.edge_index.remove(&EdgeView::new(u, v)) else {
            return false;
        };
        self.edges.remove(idx);
        for (i, e) in self.edges.iter().enumerate().skip(idx) {
            self.edge_index.insert(e.clone(), i);
        }
        true
    }

    /// Neighbors of `id` in edge insertion order.
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.edges.iter().filter_map(|e| e.other(id)).collect()
    }

    /// Incident-edge count of `id` within the current edge set.
    pub fn degree(&self, id: &str) -> usize {
        self.edges.iter().filter(|e| e.touches(id)).count()
    }

    /// Degree map over the whole vertex universe; isolated vertices map to 0.
    ///
    /// Recomputed from the edge set on every call. The repair phases mutate
    /// edge sets constantly, and a cached map going stale is exactly the bug
    /// class this avoids.
    pub fn degrees(&self) -> BTreeMap<String, usize> {
        let mut out: BTreeMap<String, usize> = BTreeMap::new();
        for id in &self.nodes {
            out.insert(id.clone(), 0);
        }
        for e in &self.edges {
            if let Some(d) = out.get_mut(e.u()) {
                *d += 1;
            }
            if let Some(d) = out.get_mut(e.v()) {
                *d += 1;
            }
        }
        out
    }

    fn node_ix(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }
}
