//! Wayfind
//!
//! Graph search over topologies the caller describes with a function instead
//! of a container. Bind a neighbor function to [`UnweightedGraph`] for
//! breadth- and depth-first search, or an edge function to [`WeightedGraph`]
//! for Dijkstra and A*:
//!
//! ```
//! use std::collections::HashMap;
//! use wayfind::{DirectedEdge, UnweightedGraph, WeightedGraph};
//!
//! let adj: HashMap<u32, Vec<u32>> = HashMap::from([(0, vec![1, 2]), (1, vec![2]), (2, vec![])]);
//! let graph = UnweightedGraph::new(|n: &u32| adj.get(n).cloned().unwrap_or_default());
//! assert_eq!(graph.bfs_distance(&0, |n| *n == 2), Some(1));
//!
//! let roads = WeightedGraph::new(|n: &u32| match n {
//!     0 => vec![DirectedEdge::new(1, 4), DirectedEdge::new(2, 9)],
//!     1 => vec![DirectedEdge::new(2, 3)],
//!     _ => vec![],
//! });
//! assert_eq!(roads.dijkstra_distance(&0, |n| *n == 2), Some(7));
//! ```

pub mod unweighted;
pub mod weighted;

pub use unweighted::UnweightedGraph;
pub use weighted::WeightedGraph;

pub use wayfind_core::graph::{astar, bfs, dfs, dijkstra};
pub use wayfind_core::{
    config, error, graph, logging, DirectedEdge, Distance, EdgeProvider, NeighborProvider, Path,
    Result, SearchError, SearchOptions, ShortestPath,
};
