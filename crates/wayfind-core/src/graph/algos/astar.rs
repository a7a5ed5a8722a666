use crate::config::SearchOptions;
use crate::graph::algos::shared::{best_first, Engine};
use crate::graph::traversal::EdgeProvider;
use crate::graph::types::{Distance, ShortestPath};
use std::hash::Hash;

/// Heuristic-guided shortest distance from `source` to a node satisfying
/// `is_goal`.
///
/// The frontier is ordered by `distance + heuristic(node)`. Finalized nodes are
/// never reopened, so `heuristic` must be consistent: for every edge
/// `u -> v` of weight `w`, `heuristic(u) <= w + heuristic(v)`, and it must be 0
/// on goal nodes. Debug builds log a warning the first time a relaxed edge
/// violates this. A heuristic of 0 everywhere degenerates to Dijkstra.
#[tracing::instrument(skip_all, fields(max_expansions = ?opts.max_expansions, max_distance = ?opts.max_distance))]
pub fn find_shortest_distance<N, P, H, G>(
    provider: &P,
    source: &N,
    opts: &SearchOptions,
    heuristic: H,
    is_goal: G,
) -> Option<Distance>
where
    N: Clone + Eq + Hash,
    P: EdgeProvider<N>,
    H: Fn(&N) -> Distance,
    G: FnMut(&N) -> bool,
{
    best_first(Engine::AStar, provider, source, opts, heuristic, is_goal)
        .goal
        .map(|(_, distance)| distance)
}

/// Like [`find_shortest_distance`], also returning the nodes on the path
#[tracing::instrument(skip_all, fields(max_expansions = ?opts.max_expansions, max_distance = ?opts.max_distance))]
pub fn find_shortest_path<N, P, H, G>(
    provider: &P,
    source: &N,
    opts: &SearchOptions,
    heuristic: H,
    is_goal: G,
) -> Option<ShortestPath<N>>
where
    N: Clone + Eq + Hash,
    P: EdgeProvider<N>,
    H: Fn(&N) -> Distance,
    G: FnMut(&N) -> bool,
{
    best_first(Engine::AStar, provider, source, opts, heuristic, is_goal).into_path(source)
}
