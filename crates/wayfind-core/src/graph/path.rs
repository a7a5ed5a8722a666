//! Path reconstruction utilities for graph traversal

use crate::graph::types::Path;
use std::collections::HashMap;
use std::hash::Hash;

/// Walk predecessor links back from `target` to `source`.
///
/// The returned path excludes `source` and ends with `target`. A target with
/// no recorded predecessor (the source itself) yields an empty path.
pub fn reconstruct_path<N>(source: &N, target: &N, predecessors: &HashMap<N, N>) -> Path<N>
where
    N: Clone + Eq + Hash,
{
    let mut nodes = Vec::new();
    let mut current = target;

    while current != source {
        let Some(pred) = predecessors.get(current) else {
            break;
        };
        nodes.push(current.clone());
        current = pred;
    }

    nodes.reverse();
    nodes
}
