//! Sample graphs shared by the engine tests
//!
//! Also compiled into the root integration tests, so items are reached
//! through the parent module rather than `crate::` paths.

use super::{DirectedEdge, Distance};
use std::collections::HashMap;

/// Eight-node digraph with cycles `2 <-> 3`, `5 <-> 6` and `0 -> 1 -> 4 -> 0`
pub const SAMPLE_EDGES: &[(u32, u32)] = &[
    (0, 1),
    (1, 2),
    (1, 4),
    (1, 5),
    (2, 3),
    (2, 6),
    (3, 2),
    (3, 7),
    (4, 0),
    (4, 5),
    (5, 6),
    (6, 5),
    (7, 3),
    (7, 6),
];

/// Fewest-edge distances from node 0 in [`SAMPLE_EDGES`]
pub const SAMPLE_DISTANCES: &[(u32, Distance)] = &[
    (0, 0),
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 2),
    (5, 2),
    (6, 3),
    (7, 4),
];

/// Thirteen-node digraph with three strongly connected regions
pub const TINY_DG_EDGES: &[(u32, u32)] = &[
    (4, 2),
    (2, 3),
    (3, 2),
    (6, 0),
    (0, 1),
    (2, 0),
    (11, 12),
    (12, 9),
    (9, 10),
    (9, 11),
    (7, 9),
    (10, 12),
    (11, 4),
    (4, 3),
    (3, 5),
    (6, 8),
    (8, 6),
    (5, 4),
    (0, 5),
    (6, 4),
    (6, 9),
    (7, 6),
];

/// Eight-node weighted digraph
pub const TINY_EWD_EDGES: &[(u32, u32, Distance)] = &[
    (4, 5, 35),
    (5, 4, 35),
    (4, 7, 37),
    (5, 7, 28),
    (7, 5, 28),
    (5, 1, 32),
    (0, 4, 38),
    (0, 2, 26),
    (7, 3, 39),
    (1, 3, 29),
    (2, 7, 34),
    (6, 2, 40),
    (3, 6, 52),
    (6, 0, 58),
    (6, 4, 93),
];

/// Shortest distances from node 0 in [`TINY_EWD_EDGES`]
pub const TINY_EWD_FROM_ZERO: &[(u32, Distance)] = &[
    (0, 0),
    (1, 105),
    (2, 26),
    (3, 99),
    (4, 38),
    (5, 73),
    (6, 151),
    (7, 60),
];

/// Exact remaining distance to node 6 in [`TINY_EWD_EDGES`]
pub const TINY_EWD_TO_SIX: &[(u32, Distance)] = &[
    (0, 151),
    (1, 81),
    (2, 125),
    (3, 52),
    (4, 128),
    (5, 113),
    (6, 0),
    (7, 91),
];

pub fn adjacency(edges: &[(u32, u32)]) -> HashMap<u32, Vec<u32>> {
    let mut adj: HashMap<u32, Vec<u32>> = HashMap::new();
    for &(from, to) in edges {
        adj.entry(from).or_default().push(to);
    }
    adj
}

pub fn weighted_adjacency(edges: &[(u32, u32, Distance)]) -> HashMap<u32, Vec<DirectedEdge<u32>>> {
    let mut adj: HashMap<u32, Vec<DirectedEdge<u32>>> = HashMap::new();
    for &(from, to, weight) in edges {
        adj.entry(from).or_default().push(DirectedEdge::new(to, weight));
    }
    adj
}

pub fn lookup(table: &[(u32, Distance)], node: u32) -> Distance {
    table
        .iter()
        .find(|(n, _)| *n == node)
        .map(|(_, d)| *d)
        .unwrap_or_else(|| panic!("node {node} missing from table"))
}
