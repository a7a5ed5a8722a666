use crate::config::SearchOptions;
use crate::graph::algos::shared::{best_first, Engine};
use crate::graph::traversal::EdgeProvider;
use crate::graph::types::{Distance, ShortestPath};
use std::collections::HashMap;
use std::hash::Hash;

/// Minimum total weight from `source` to the first finalized node satisfying
/// `is_goal`.
///
/// Edge weights must be non-negative. Negative weights are not detected and
/// produce wrong distances rather than a panic.
#[tracing::instrument(skip_all, fields(max_expansions = ?opts.max_expansions, max_distance = ?opts.max_distance))]
pub fn find_shortest_distance<N, P, G>(
    provider: &P,
    source: &N,
    opts: &SearchOptions,
    is_goal: G,
) -> Option<Distance>
where
    N: Clone + Eq + Hash,
    P: EdgeProvider<N>,
    G: FnMut(&N) -> bool,
{
    best_first(Engine::Dijkstra, provider, source, opts, |_| 0, is_goal)
        .goal
        .map(|(_, distance)| distance)
}

/// Like [`find_shortest_distance`], also returning the nodes on the path
#[tracing::instrument(skip_all, fields(max_expansions = ?opts.max_expansions, max_distance = ?opts.max_distance))]
pub fn find_shortest_path<N, P, G>(
    provider: &P,
    source: &N,
    opts: &SearchOptions,
    is_goal: G,
) -> Option<ShortestPath<N>>
where
    N: Clone + Eq + Hash,
    P: EdgeProvider<N>,
    G: FnMut(&N) -> bool,
{
    best_first(Engine::Dijkstra, provider, source, opts, |_| 0, is_goal).into_path(source)
}

/// Shortest distance to every node reachable from `source`
#[tracing::instrument(skip_all, fields(max_expansions = ?opts.max_expansions, max_distance = ?opts.max_distance))]
pub fn distances<N, P>(provider: &P, source: &N, opts: &SearchOptions) -> HashMap<N, Distance>
where
    N: Clone + Eq + Hash,
    P: EdgeProvider<N>,
{
    best_first(Engine::Dijkstra, provider, source, opts, |_| 0, |_| false).distances
}
