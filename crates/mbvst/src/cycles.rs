//! Fundamental cycle basis extraction.
//!
//! A breadth-first spanning forest is grown over the edge set; every edge
//! left out of the forest closes exactly one cycle, reconstructed by walking
//! both endpoints up to their lowest common ancestor. The basis therefore has
//! exactly `|E| - |V| + |components|` cycles, one per redundant edge.

use mbvst_graphlib::Graph;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

const NO_PARENT: usize = usize::MAX;

/// Cycles as vertex sequences: consecutive entries (wrapping around) are edges
/// of `g`. No particular starting vertex or orientation is promised, but the
/// output is a fixed function of `g`'s insertion order.
pub fn cycle_basis(g: &Graph) -> Vec<Vec<String>> {
    let ids = g.node_ids();
    let n = ids.len();
    let ix: FxHashMap<&str, usize> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();

    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
    for e in g.edges() {
        let (u, v) = (ix[e.u()], ix[e.v()]);
        adj[u].push(v);
        adj[v].push(u);
    }

    // BFS forest over every component, nodes in insertion order.
    let mut parent: Vec<usize> = vec![NO_PARENT; n];
    let mut depth: Vec<usize> = vec![0; n];
    let mut seen: Vec<bool> = vec![false; n];
    for start in 0..n {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut q: VecDeque<usize> = VecDeque::new();
        q.push_back(start);
        while let Some(v) = q.pop_front() {
            for &w in &adj[v] {
                if !seen[w] {
                    seen[w] = true;
                    parent[w] = v;
                    depth[w] = depth[v] + 1;
                    q.push_back(w);
                }
            }
        }
    }

    // Each non-forest edge {u, v} closes the cycle u -> .. -> lca -> .. -> v,
    // with the edge itself as the wrap-around step.
    let mut cycles: Vec<Vec<String>> = Vec::new();
    for e in g.edges() {
        let (u, v) = (ix[e.u()], ix[e.v()]);
        if parent[u] == v || parent[v] == u {
            continue;
        }

        let (mut a, mut b) = (u, v);
        let mut up_a = vec![a];
        let mut up_b = vec![b];
        while depth[a] > depth[b] {
            a = parent[a];
            up_a.push(a);
        }
        while depth[b] > depth[a] {
            b = parent[b];
            up_b.push(b);
        }
        while a != b {
            a = parent[a];
            up_a.push(a);
            b = parent[b];
            up_b.push(b);
        }

        // Both walks end at the LCA; drop its duplicate from the second.
        up_b.pop();
        up_b.reverse();
        up_a.extend(up_b);
        cycles.push(up_a.into_iter().map(|i| ids[i].clone()).collect());
    }

    cycles
}
