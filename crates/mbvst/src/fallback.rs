//! Guaranteed-valid fallback tree.

use crate::error::{Error, Result};
use crate::tree::SpanningTree;
use mbvst_graphlib::{Graph, alg};

/// Breadth-first spanning tree from the instance's first node.
///
/// This is the correctness backstop for runs where no iteration produced a
/// valid tree; it makes no attempt to minimize branch vertices. Fails iff the
/// instance cannot be spanned at all (disconnected or empty).
pub fn fallback_tree(instance: &Graph) -> Result<SpanningTree> {
    let comps = alg::components(instance);
    if instance.node_count() == 0 || comps.len() != 1 {
        return Err(Error::DisconnectedInput {
            components: comps.len(),
        });
    }

    let Some(root) = instance.nodes().next() else {
        return Err(Error::DisconnectedInput { components: 0 });
    };
    let edges = alg::bfs_tree(instance, root);
    let t = Graph::from_parts(instance.node_ids(), edges);
    let tree = SpanningTree::try_new(&t)
        .expect("BFS over a connected instance always yields a spanning tree");
    Ok(tree)
}
