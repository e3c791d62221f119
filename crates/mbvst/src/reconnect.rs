//! Component reconnection.
//!
//! Folds every orphan component of a working edge set into the largest one
//! (the hub), adding exactly one edge per orphan, drawn from the instance's
//! edge universe. Candidates are scored by how many endpoints they would
//! newly push over the branch threshold, measured against the degrees of the
//! edges kept and added so far in this pass, not the instance's degrees.

use crate::error::{Error, Result};
use mbvst_graphlib::{Edge, Graph, alg};

/// Makes `work` connected by adding instance edges, one per orphan component.
/// The hub is the largest component (ties keep the first-encountered); orphans
/// are folded in component-enumeration order and the hub grows monotonically.
///
/// Returns the number of edges added. Fails with [`Error::ReconnectImpossible`]
/// when some orphan has no instance edge into the hub, which means the
/// instance universe itself cannot be spanned.
pub fn reconnect_components(work: &mut Graph, instance: &Graph) -> Result<usize> {
    let comps = alg::components(work);
    if comps.len() <= 1 {
        return Ok(0);
    }

    let mut hub_ix = 0;
    for (i, comp) in comps.iter().enumerate() {
        if comp.len() > comps[hub_ix].len() {
            hub_ix = i;
        }
    }
    let mut hub: Vec<String> = comps[hub_ix].clone();

    let mut added = 0;
    for (i, comp) in comps.iter().enumerate() {
        if i == hub_ix {
            continue;
        }

        // Candidates in orphan-vertex x hub-vertex order; first-encountered
        // wins ties, so the scan order is the tie-break.
        let mut best: Option<(Edge, usize)> = None;
        for u in comp {
            for v in &hub {
                if !instance.has_edge(u, v) {
                    continue;
                }
                let impact = new_branches(work, u, v);
                match &best {
                    Some((_, top)) if *top <= impact => {}
                    _ => best = Some((Edge::new(u.clone(), v.clone()), impact)),
                }
            }
        }

        let Some((edge, _)) = best else {
            return Err(Error::ReconnectImpossible {
                vertex: comp.first().cloned().unwrap_or_default(),
            });
        };

        work.add_edge(edge.u().to_string(), edge.v().to_string());
        hub.extend(comp.iter().cloned());
        added += 1;
    }

    Ok(added)
}

/// How many endpoints of `{u, v}` would newly cross the branch threshold
/// (degree > 2) if the edge were added to `work` right now. An endpoint that
/// is already a branch vertex does not count again: attaching to an existing
/// branch vertex is free by this measure.
fn new_branches(work: &Graph, u: &str, v: &str) -> usize {
    usize::from(work.degree(u) == 2) + usize::from(work.degree(v) == 2)
}
