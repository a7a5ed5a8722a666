//! Graph traversal and path-finding operations
//!
//! Provides search engines over caller-supplied graphs:
//! - BFS traversal with an early-stopping visitor
//! - DFS enumeration of every simple path to goal nodes
//! - Dijkstra and A* shortest paths over non-negative edge weights
//! - Provider traits binding a neighbor or edge function to the engines

pub mod algos;
pub mod path;
pub mod traversal;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use algos::{astar, bfs, dfs, dijkstra};
pub use traversal::{EdgeProvider, NeighborProvider};
pub use types::{DirectedEdge, Distance, Path, ShortestPath};
