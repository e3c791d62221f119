//! Cycle breaking policies.
//!
//! Both policies remove at most one edge per basis cycle from a working
//! graph. The connectivity-safe policy never disconnects what was connected;
//! the degree-greedy policy skips the connectivity probes and may fragment
//! the graph, which the repair loop tolerates because reconnection runs at
//! the start of the next iteration.
//!
//! Cycles are re-checked against the current edge set on every step: an edge
//! removed while breaking an earlier cycle both drops out of later cycles'
//! candidate lists and can turn their remaining edges into bridges.

use mbvst_graphlib::{Edge, Graph, alg};
use rand::Rng;
use rand::rngs::SmallRng;

/// The cycle's edges still present in `g`, in cycle order.
fn present_edges(g: &Graph, cycle: &[String]) -> Vec<Edge> {
    let k = cycle.len();
    (0..k)
        .filter_map(|i| {
            let u = &cycle[i];
            let v = &cycle[(i + 1) % k];
            g.has_edge(u, v).then(|| Edge::new(u.clone(), v.clone()))
        })
        .collect()
}

/// Connectivity-safe policy: per cycle, keep only the edges whose individual
/// removal leaves the whole current graph connected, then remove one of them
/// (uniformly at random when `rng` is given, else the first in cycle order).
/// A cycle with no safe edge is left alone: its surviving edges are bridges.
///
/// Running this over an already-acyclic edge set removes nothing.
///
/// Returns the number of edges removed.
pub fn break_cycles_safe(
    g: &mut Graph,
    cycles: &[Vec<String>],
    mut rng: Option<&mut SmallRng>,
) -> usize {
    let mut removed = 0;
    for cycle in cycles {
        let present = present_edges(g, cycle);
        if present.is_empty() {
            continue;
        }

        let safe: Vec<Edge> = present
            .into_iter()
            .filter(|e| alg::is_connected_without(g, e))
            .collect();
        if safe.is_empty() {
            continue;
        }

        let pick = match rng.as_deref_mut() {
            Some(rng) => rng.random_range(0..safe.len()),
            None => 0,
        };
        let e = &safe[pick];
        g.remove_edge(e.u(), e.v());
        removed += 1;
    }
    removed
}

/// Degree-greedy policy: per cycle, remove the present edge whose endpoints
/// have the largest combined degree in the whole current graph (ties keep the
/// first in cycle order). No connectivity probe; removal is unconditional.
///
/// Returns the number of edges removed.
pub fn break_cycles_greedy(g: &mut Graph, cycles: &[Vec<String>]) -> usize {
    let mut removed = 0;
    for cycle in cycles {
        let mut best: Option<(Edge, usize)> = None;
        for e in present_edges(g, cycle) {
            let score = g.degree(e.u()) + g.degree(e.v());
            match &best {
                Some((_, top)) if score <= *top => {}
                _ => best = Some((e, score)),
            }
        }
        let Some((e, _)) = best else {
            continue;
        };
        g.remove_edge(e.u(), e.v());
        removed += 1;
    }
    removed
}
