use crate::config::SearchOptions;
use crate::graph::algos::shared::Budget;
use crate::graph::path::reconstruct_path;
use crate::graph::traversal::NeighborProvider;
use crate::graph::types::{Distance, ShortestPath};
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;
use std::time::Instant;

/// State tracked during BFS traversal
struct BfsState<N> {
    visited: HashSet<N>,
    queue: VecDeque<(N, Distance)>,
    budget: Budget,
    visits: usize,
    stopped: bool,
}

impl<N> BfsState<N>
where
    N: Clone + Eq + Hash,
{
    fn new(source: &N, opts: &SearchOptions) -> Self {
        let mut visited = HashSet::new();
        visited.insert(source.clone());
        let mut queue = VecDeque::new();
        queue.push_back((source.clone(), 0));

        Self {
            visited,
            queue,
            budget: Budget::new(opts),
            visits: 0,
            stopped: false,
        }
    }
}

/// Level-order walk shared by every BFS entry point.
///
/// Nodes are marked visited when enqueued, so each is handed to `visit` once
/// and at its fewest-edge distance. `on_discover(parent, child)` fires when a
/// node is enqueued.
fn traverse<N, P, V, D>(
    provider: &P,
    source: &N,
    opts: &SearchOptions,
    mut visit: V,
    mut on_discover: D,
) where
    N: Clone + Eq + Hash,
    P: NeighborProvider<N>,
    V: FnMut(&N, Distance) -> bool,
    D: FnMut(&N, &N),
{
    let start = Instant::now();
    let mut state = BfsState::new(source, opts);

    while let Some((node, distance)) = state.queue.pop_front() {
        state.visits += 1;
        if visit(&node, distance) {
            state.stopped = true;
            break;
        }

        // Every neighbor of this node would sit one layer further out
        let next = distance + 1;
        if !state.budget.within_distance(next) {
            continue;
        }
        if !state.budget.try_expand() {
            break;
        }

        for neighbor in provider.neighbors(&node) {
            if !state.visited.contains(&neighbor) {
                state.visited.insert(neighbor.clone());
                on_discover(&node, &neighbor);
                state.queue.push_back((neighbor, next));
            }
        }
    }

    tracing::debug!(
        visited = state.visits,
        discovered = state.visited.len(),
        expanded = state.budget.expanded(),
        stopped = state.stopped,
        truncated = state.budget.truncation().map(|t| t.as_str()),
        "bfs finished"
    );
    crate::trace_time!(start, "bfs");
}

/// Visit nodes reachable from `source` in non-decreasing distance order.
///
/// `visit` receives each node once together with its edge count from the
/// source (0 for the source itself). Returning `true` stops the search before
/// that node is expanded.
#[tracing::instrument(skip_all, fields(max_expansions = ?opts.max_expansions, max_distance = ?opts.max_distance))]
pub fn for_each_node<N, P, V>(provider: &P, source: &N, opts: &SearchOptions, visit: V)
where
    N: Clone + Eq + Hash,
    P: NeighborProvider<N>,
    V: FnMut(&N, Distance) -> bool,
{
    traverse(provider, source, opts, visit, |_, _| {});
}

/// Edge count from `source` to the nearest node satisfying `is_goal`
pub fn find_shortest_distance<N, P, G>(
    provider: &P,
    source: &N,
    opts: &SearchOptions,
    mut is_goal: G,
) -> Option<Distance>
where
    N: Clone + Eq + Hash,
    P: NeighborProvider<N>,
    G: FnMut(&N) -> bool,
{
    let mut found = None;
    for_each_node(provider, source, opts, |node, distance| {
        if is_goal(node) {
            found = Some(distance);
            true
        } else {
            false
        }
    });
    found
}

/// Fewest-edge distance of every node reachable from `source`
pub fn distances<N, P>(provider: &P, source: &N, opts: &SearchOptions) -> HashMap<N, Distance>
where
    N: Clone + Eq + Hash,
    P: NeighborProvider<N>,
{
    let mut table = HashMap::new();
    for_each_node(provider, source, opts, |node, distance| {
        table.insert(node.clone(), distance);
        false
    });
    table
}

/// Fewest-edge path from `source` to the nearest node satisfying `is_goal`
#[tracing::instrument(skip_all, fields(max_expansions = ?opts.max_expansions, max_distance = ?opts.max_distance))]
pub fn find_path<N, P, G>(
    provider: &P,
    source: &N,
    opts: &SearchOptions,
    mut is_goal: G,
) -> Option<ShortestPath<N>>
where
    N: Clone + Eq + Hash,
    P: NeighborProvider<N>,
    G: FnMut(&N) -> bool,
{
    let mut predecessors: HashMap<N, N> = HashMap::new();
    let mut found = None;

    traverse(
        provider,
        source,
        opts,
        |node, distance| {
            if is_goal(node) {
                found = Some((node.clone(), distance));
                true
            } else {
                false
            }
        },
        |parent, child| {
            predecessors.insert(child.clone(), parent.clone());
        },
    );

    let (target, distance) = found?;
    let nodes = reconstruct_path(source, &target, &predecessors);
    Some(ShortestPath {
        target,
        distance,
        nodes,
    })
}
