use crate::config::SearchOptions;
use crate::graph::algos::shared::Budget;
use crate::graph::traversal::NeighborProvider;
use crate::graph::types::{Distance, Path};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::time::Instant;

/// A node on the current path together with the neighbors not yet tried
struct Frame<N, I> {
    node: N,
    pending: I,
    /// Neighbors already descended into; parallel edges are followed once
    tried: HashSet<N>,
}

/// Enumerate every simple path from `source` to each node satisfying `is_goal`.
///
/// Goals do not end the exploration: the walk continues through them, so one
/// goal can collect paths of several lengths. A node already on the current
/// path (the source included) is never re-entered, but the same node is free
/// to appear again on another branch. A neighbor listed more than once is
/// followed once, so every recorded path is distinct. Paths exclude the
/// source; a source that satisfies `is_goal` maps to a single empty path.
///
/// The number of simple paths grows exponentially with graph density.
/// `max_distance` (edges per path) and `max_expansions` bound the walk.
#[tracing::instrument(skip_all, fields(max_expansions = ?opts.max_expansions, max_distance = ?opts.max_distance))]
pub fn find_all_paths<N, P, G>(
    provider: &P,
    source: &N,
    opts: &SearchOptions,
    mut is_goal: G,
) -> HashMap<N, Vec<Path<N>>>
where
    N: Clone + Eq + Hash,
    P: NeighborProvider<N>,
    G: FnMut(&N) -> bool,
{
    let start = Instant::now();
    let mut budget = Budget::new(opts);
    let mut paths: HashMap<N, Vec<Path<N>>> = HashMap::new();
    let mut path: Path<N> = Vec::new();
    let mut on_path: HashSet<N> = HashSet::new();
    let mut stack = Vec::new();

    if is_goal(source) {
        paths.entry(source.clone()).or_default().push(Vec::new());
    }

    if budget.within_distance(1) && budget.try_expand() {
        on_path.insert(source.clone());
        stack.push(Frame {
            node: source.clone(),
            pending: provider.neighbors(source).into_iter(),
            tried: HashSet::new(),
        });
    }

    while let Some(frame) = stack.last_mut() {
        let Some(next) = frame.pending.next() else {
            // Backtrack: the exhausted node leaves the current path
            if let Some(done) = stack.pop() {
                on_path.remove(&done.node);
            }
            path.pop();
            continue;
        };

        if on_path.contains(&next) || !frame.tried.insert(next.clone()) {
            continue;
        }

        path.push(next.clone());
        if is_goal(&next) {
            paths.entry(next.clone()).or_default().push(path.clone());
        }

        let depth = Distance::try_from(path.len()).unwrap_or(Distance::MAX);
        if !budget.within_distance(depth.saturating_add(1)) {
            path.pop();
            continue;
        }
        if !budget.try_expand() {
            path.pop();
            break;
        }

        on_path.insert(next.clone());
        let pending = provider.neighbors(&next).into_iter();
        stack.push(Frame {
            node: next,
            pending,
            tried: HashSet::new(),
        });
    }

    tracing::debug!(
        goals = paths.len(),
        paths = paths.values().map(Vec::len).sum::<usize>(),
        expanded = budget.expanded(),
        truncated = budget.truncation().map(|t| t.as_str()),
        "dfs finished"
    );
    crate::trace_time!(start, "dfs");

    paths
}
