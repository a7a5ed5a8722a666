//! Weighted graph façade

use std::collections::HashMap;
use std::hash::Hash;

use wayfind_core::graph::{astar, dijkstra};
use wayfind_core::{Distance, EdgeProvider, SearchOptions, ShortestPath};

/// An edge function bound to the Dijkstra and A* engines.
///
/// Edge weights must be non-negative; A* heuristics must be consistent.
#[derive(Debug, Clone)]
pub struct WeightedGraph<P> {
    provider: P,
    options: SearchOptions,
}

impl<P> WeightedGraph<P> {
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

    /// Minimum total weight from `source` to the nearest node satisfying `is_goal`
    pub fn dijkstra_distance<N, G>(&self, source: &N, is_goal: G) -> Option<Distance>
    where
        N: Clone + Eq + Hash,
        P: EdgeProvider<N>,
        G: FnMut(&N) -> bool,
    {
        dijkstra::find_shortest_distance(&self.provider, source, &self.options, is_goal)
    }

    /// Minimum total weight from `source` to `target`
    pub fn dijkstra_distance_to<N>(&self, source: &N, target: &N) -> Option<Distance>
    where
        N: Clone + Eq + Hash,
        P: EdgeProvider<N>,
    {
        self.dijkstra_distance(source, |node| node == target)
    }

    /// Shortest path from `source` to the nearest node satisfying `is_goal`
    pub fn dijkstra_path<N, G>(&self, source: &N, is_goal: G) -> Option<ShortestPath<N>>
    where
        N: Clone + Eq + Hash,
        P: EdgeProvider<N>,
        G: FnMut(&N) -> bool,
    {
        dijkstra::find_shortest_path(&self.provider, source, &self.options, is_goal)
    }

    /// Shortest distance to every node reachable from `source`
    pub fn dijkstra_distances<N>(&self, source: &N) -> HashMap<N, Distance>
    where
        N: Clone + Eq + Hash,
        P: EdgeProvider<N>,
    {
        dijkstra::distances(&self.provider, source, &self.options)
    }

    /// Heuristic-guided minimum total weight from `source` to a goal node
    pub fn a_star_distance<N, H, G>(&self, source: &N, heuristic: H, is_goal: G) -> Option<Distance>
    where
        N: Clone + Eq + Hash,
        P: EdgeProvider<N>,
        H: Fn(&N) -> Distance,
        G: FnMut(&N) -> bool,
    {
        astar::find_shortest_distance(&self.provider, source, &self.options, heuristic, is_goal)
    }

    /// Heuristic-guided minimum total weight from `source` to `target`
    pub fn a_star_distance_to<N, H>(&self, source: &N, target: &N, heuristic: H) -> Option<Distance>
    where
        N: Clone + Eq + Hash,
        P: EdgeProvider<N>,
        H: Fn(&N) -> Distance,
    {
        self.a_star_distance(source, heuristic, |node| node == target)
    }

    /// Heuristic-guided shortest path from `source` to a goal node
    pub fn a_star_path<N, H, G>(
        &self,
        source: &N,
        heuristic: H,
        is_goal: G,
    ) -> Option<ShortestPath<N>>
    where
        N: Clone + Eq + Hash,
        P: EdgeProvider<N>,
        H: Fn(&N) -> Distance,
        G: FnMut(&N) -> bool,
    {
        astar::find_shortest_path(&self.provider, source, &self.options, heuristic, is_goal)
    }
}
