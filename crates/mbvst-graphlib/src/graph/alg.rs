//! Traversal helpers shared by the repair phases.
//!
//! All traversals visit nodes in insertion order and neighbors in edge
//! insertion order, so results are a fixed function of construction order.

use super::{Edge, Graph};
use std::collections::VecDeque;

/// Neighbor indices per node, in edge insertion order. `skip` drops one edge
/// from the adjacency, which is how connectivity probes avoid mutating the
/// graph under test.
fn adjacency(g: &Graph, skip: Option<&Edge>) -> Vec<Vec<usize>> {
    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); g.node_count()];
    for e in g.edges() {
        if skip.is_some_and(|s| s == e) {
            continue;
        }
        let (Some(u), Some(v)) = (g.node_ix(e.u()), g.node_ix(e.v())) else {
            continue;
        };
        adj[u].push(v);
        adj[v].push(u);
    }
    adj
}

fn reachable_from(adj: &[Vec<usize>], start: usize, seen: &mut [bool]) -> Vec<usize> {
    let mut out: Vec<usize> = Vec::new();
    let mut q: VecDeque<usize> = VecDeque::new();
    seen[start] = true;
    q.push_back(start);
    while let Some(v) = q.pop_front() {
        out.push(v);
        for &w in &adj[v] {
            if !seen[w] {
                seen[w] = true;
                q.push_back(w);
            }
        }
    }
    out
}

/// True iff a breadth-first traversal from the first inserted node reaches
/// every node. The empty graph is vacuously connected.
pub fn is_connected(g: &Graph) -> bool {
    if g.node_count() == 0 {
        return true;
    }
    let adj = adjacency(g, None);
    let mut seen = vec![false; g.node_count()];
    reachable_from(&adj, 0, &mut seen).len() == g.node_count()
}

/// Connectivity of the graph with one edge left out.
///
/// Equivalent to remove-test-reinsert, without touching the edge set (and so
/// without perturbing its insertion order).
pub fn is_connected_without(g: &Graph, skip: &Edge) -> bool {
    if g.node_count() == 0 {
        return true;
    }
    let adj = adjacency(g, Some(skip));
    let mut seen = vec![false; g.node_count()];
    reachable_from(&adj, 0, &mut seen).len() == g.node_count()
}

/// Partitions the vertex set by reachability. Parts are disjoint, their union
/// is the vertex set, and both the parts and the vertices within each part
/// come out in insertion/discovery order.
pub fn components(g: &Graph) -> Vec<Vec<String>> {
    let adj = adjacency(g, None);
    let mut seen = vec![false; g.node_count()];
    let ids = g.node_ids();
    let mut out: Vec<Vec<String>> = Vec::new();

    for start in 0..ids.len() {
        if seen[start] {
            continue;
        }
        let comp = reachable_from(&adj, start, &mut seen);
        out.push(comp.into_iter().map(|ix| ids[ix].clone()).collect());
    }

    out
}

/// Breadth-first traversal edges from `root`, one per node discovered.
///
/// On a connected graph this is a spanning tree with `|V| - 1` edges; on a
/// disconnected one it only covers `root`'s component. An unknown root yields
/// no edges.
pub fn bfs_tree(g: &Graph, root: &str) -> Vec<Edge> {
    let Some(start) = g.node_ix(root) else {
        return Vec::new();
    };
    let adj = adjacency(g, None);
    let ids = g.node_ids();
    let mut seen = vec![false; g.node_count()];
    let mut out: Vec<Edge> = Vec::new();
    let mut q: VecDeque<usize> = VecDeque::new();
    seen[start] = true;
    q.push_back(start);
    while let Some(v) = q.pop_front() {
        for &w in &adj[v] {
            if !seen[w] {
                seen[w] = true;
                out.push(Edge::new(ids[v].clone(), ids[w].clone()));
                q.push_back(w);
            }
        }
    }
    out
}
