use crate::config::SearchOptions;
use crate::graph::path::reconstruct_path;
use crate::graph::traversal::EdgeProvider;
use crate::graph::types::{Distance, ShortestPath};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;
use std::time::Instant;

/// Why a search stopped before its frontier ran dry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    MaxExpansions,
    MaxDistance,
}

impl Truncation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Truncation::MaxExpansions => "max_expansions",
            Truncation::MaxDistance => "max_distance",
        }
    }
}

/// Per-invocation accounting of the limits in [`SearchOptions`]
#[derive(Debug)]
pub struct Budget {
    max_expansions: Option<usize>,
    max_distance: Option<Distance>,
    expanded: usize,
    truncation: Option<Truncation>,
}

impl Budget {
    pub fn new(opts: &SearchOptions) -> Self {
        Self {
            max_expansions: opts.max_expansions,
            max_distance: opts.max_distance,
            expanded: 0,
            truncation: None,
        }
    }

    /// Count one expansion. Returns false once the expansion budget is spent.
    pub fn try_expand(&mut self) -> bool {
        if let Some(max) = self.max_expansions {
            if self.expanded >= max {
                self.set_truncation(Truncation::MaxExpansions);
                return false;
            }
        }
        self.expanded += 1;
        true
    }

    /// Whether a node at `distance` may still be reached
    pub fn within_distance(&mut self, distance: Distance) -> bool {
        match self.max_distance {
            Some(max) if distance > max => {
                self.set_truncation_if_unset(Truncation::MaxDistance);
                false
            }
            _ => true,
        }
    }

    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn truncation(&self) -> Option<Truncation> {
        self.truncation
    }

    fn set_truncation(&mut self, reason: Truncation) {
        if self.truncation != Some(reason) {
            tracing::trace!(reason = reason.as_str(), "search truncated");
        }
        self.truncation = Some(reason);
    }

    fn set_truncation_if_unset(&mut self, reason: Truncation) {
        if self.truncation.is_none() {
            self.set_truncation(reason);
        }
    }
}

/// Wrapper for BinaryHeap to use as min-heap (ordered by priority)
///
/// Ties on priority go to the entry with the larger accumulated distance, which
/// for A* is the one nearer the goal.
#[derive(Debug, Clone)]
pub struct HeapEntry<N> {
    pub node: N,
    pub distance: Distance,
    pub priority: Distance,
    pub parent: Option<N>,
}

impl<N> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.distance == other.distance
    }
}

impl<N> Eq for HeapEntry<N> {}

impl<N> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.distance.cmp(&self.distance))
    }
}

/// Which engine is driving [`best_first`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Dijkstra,
    AStar,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Dijkstra => "dijkstra",
            Engine::AStar => "astar",
        }
    }
}

/// Nodes finalized by a best-first search
#[derive(Debug)]
pub struct Settled<N> {
    /// First finalized node that satisfied the goal predicate
    pub goal: Option<(N, Distance)>,
    /// Final distance of every finalized node
    pub distances: HashMap<N, Distance>,
    /// Parent each finalized node was reached from
    pub predecessors: HashMap<N, N>,
}

impl<N> Settled<N>
where
    N: Clone + Eq + Hash,
{
    pub fn into_path(self, source: &N) -> Option<ShortestPath<N>> {
        let (target, distance) = self.goal?;
        let nodes = reconstruct_path(source, &target, &self.predecessors);
        Some(ShortestPath {
            target,
            distance,
            nodes,
        })
    }
}

/// Best-first search with lazy duplicate pruning.
///
/// Every relaxed edge is pushed; entries for nodes that are already finalized
/// are discarded when popped. With a zero heuristic this is Dijkstra, otherwise
/// A*, which additionally needs `heuristic` to be consistent.
pub fn best_first<N, P, H, G>(
    engine: Engine,
    provider: &P,
    source: &N,
    opts: &SearchOptions,
    heuristic: H,
    mut is_goal: G,
) -> Settled<N>
where
    N: Clone + Eq + Hash,
    P: EdgeProvider<N>,
    H: Fn(&N) -> Distance,
    G: FnMut(&N) -> bool,
{
    let start = Instant::now();
    let mut budget = Budget::new(opts);
    let mut heap: BinaryHeap<Reverse<HeapEntry<N>>> = BinaryHeap::new();
    let mut settled = Settled {
        goal: None,
        distances: HashMap::new(),
        predecessors: HashMap::new(),
    };
    let mut pushed = 1usize;
    let mut stale = 0usize;
    let mut inconsistent = false;

    heap.push(Reverse(HeapEntry {
        node: source.clone(),
        distance: 0,
        priority: heuristic(source),
        parent: None,
    }));

    while let Some(Reverse(entry)) = heap.pop() {
        if settled.distances.contains_key(&entry.node) {
            stale += 1;
            continue;
        }

        settled
            .distances
            .insert(entry.node.clone(), entry.distance);
        if let Some(parent) = entry.parent {
            settled.predecessors.insert(entry.node.clone(), parent);
        }

        if is_goal(&entry.node) {
            settled.goal = Some((entry.node, entry.distance));
            break;
        }

        if !budget.try_expand() {
            break;
        }

        let estimate = entry.priority.saturating_sub(entry.distance);
        for edge in provider.edges(&entry.node) {
            let distance = entry.distance.saturating_add(edge.weight);
            if !budget.within_distance(distance) {
                continue;
            }

            let remaining = heuristic(&edge.target);
            if cfg!(debug_assertions)
                && engine == Engine::AStar
                && !inconsistent
                && estimate > edge.weight.saturating_add(remaining)
            {
                inconsistent = true;
                tracing::warn!(
                    estimate,
                    weight = edge.weight,
                    remaining,
                    "heuristic is not consistent; A* distances may not be shortest"
                );
            }

            heap.push(Reverse(HeapEntry {
                node: edge.target,
                distance,
                priority: distance.saturating_add(remaining),
                parent: Some(entry.node.clone()),
            }));
            pushed += 1;
        }
    }

    tracing::debug!(
        engine = engine.as_str(),
        expanded = budget.expanded(),
        pushed,
        stale,
        finalized = settled.distances.len(),
        found = settled.goal.is_some(),
        truncated = budget.truncation().map(|t| t.as_str()),
        "best-first search finished"
    );
    crate::trace_time!(start, "best_first");

    settled
}
