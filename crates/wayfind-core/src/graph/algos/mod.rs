//! Graph algorithm implementations
//!
//! Contains the search engines:
//! - `bfs`: Breadth-first traversal and fewest-edge distances
//! - `dfs`: Depth-first enumeration of simple paths
//! - `dijkstra`: Weighted shortest paths
//! - `astar`: Heuristic-guided weighted shortest paths
//! - `shared`: Budget tracking and the best-first loop behind Dijkstra and A*

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub(crate) mod shared;
