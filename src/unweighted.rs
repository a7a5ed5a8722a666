//! Unweighted graph façade

use std::collections::HashMap;
use std::hash::Hash;

use wayfind_core::graph::{bfs, dfs};
use wayfind_core::{Distance, NeighborProvider, Path, SearchOptions, ShortestPath};

/// A neighbor function bound to the breadth- and depth-first engines
#[derive(Debug, Clone)]
pub struct UnweightedGraph<P> {
    provider: P,
    options: SearchOptions,
}

impl<P> UnweightedGraph<P> {
    /// Bind `provider` with unbounded search options
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            options: SearchOptions::default(),
        }
    }

    /// Replace the budgets applied to every search on this graph
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Visit nodes in non-decreasing distance order until `visit` returns `true`
    pub fn bfs_apply<N, V>(&self, source: &N, visit: V)
    where
        N: Clone + Eq + Hash,
        P: NeighborProvider<N>,
        V: FnMut(&N, Distance) -> bool,
    {
        bfs::for_each_node(&self.provider, source, &self.options, visit);
    }

    /// Fewest edges from `source` to the nearest node satisfying `is_goal`
    pub fn bfs_distance<N, G>(&self, source: &N, is_goal: G) -> Option<Distance>
    where
        N: Clone + Eq + Hash,
        P: NeighborProvider<N>,
        G: FnMut(&N) -> bool,
    {
        bfs::find_shortest_distance(&self.provider, source, &self.options, is_goal)
    }

    /// Fewest edges from `source` to `target`
    pub fn bfs_distance_to<N>(&self, source: &N, target: &N) -> Option<Distance>
    where
        N: Clone + Eq + Hash,
        P: NeighborProvider<N>,
    {
        self.bfs_distance(source, |node| node == target)
    }

    /// Fewest-edge distance of every node reachable from `source`
    pub fn bfs_distances<N>(&self, source: &N) -> HashMap<N, Distance>
    where
        N: Clone + Eq + Hash,
        P: NeighborProvider<N>,
    {
        bfs::distances(&self.provider, source, &self.options)
    }

    /// Fewest-edge path from `source` to the nearest node satisfying `is_goal`
    pub fn bfs_path<N, G>(&self, source: &N, is_goal: G) -> Option<ShortestPath<N>>
    where
        N: Clone + Eq + Hash,
        P: NeighborProvider<N>,
        G: FnMut(&N) -> bool,
    {
        bfs::find_path(&self.provider, source, &self.options, is_goal)
    }

    /// Every simple path from `source` to each node satisfying `is_goal`
    pub fn dfs_paths<N, G>(&self, source: &N, is_goal: G) -> HashMap<N, Vec<Path<N>>>
    where
        N: Clone + Eq + Hash,
        P: NeighborProvider<N>,
        G: FnMut(&N) -> bool,
    {
        dfs::find_all_paths(&self.provider, source, &self.options, is_goal)
    }
}
