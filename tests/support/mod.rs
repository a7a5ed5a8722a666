use std::collections::HashMap;
use wayfind::{DirectedEdge, Distance};

#[allow(dead_code)]
#[path = "../../crates/wayfind-core/src/graph/fixtures.rs"]
mod fixtures;

#[allow(unused_imports)]
pub use fixtures::{SAMPLE_DISTANCES, TINY_EWD_FROM_ZERO};

/// Directed sample graph with cycles `2 <-> 3`, `5 <-> 6` and `0 -> 1 -> 4 -> 0`
#[allow(dead_code)]
pub fn sample_graph() -> HashMap<u32, Vec<u32>> {
    fixtures::adjacency(fixtures::SAMPLE_EDGES)
}

/// Thirteen-node directed graph with three strongly connected regions
#[allow(dead_code)]
pub fn tiny_dg() -> HashMap<u32, Vec<u32>> {
    fixtures::adjacency(fixtures::TINY_DG_EDGES)
}

/// Eight-node weighted directed graph
#[allow(dead_code)]
pub fn tiny_ewd() -> HashMap<u32, Vec<DirectedEdge<u32>>> {
    fixtures::weighted_adjacency(fixtures::TINY_EWD_EDGES)
}

/// Exact remaining distance to node 6 in [`tiny_ewd`]
#[allow(dead_code)]
pub fn tiny_ewd_to_six(node: &u32) -> Distance {
    fixtures::lookup(fixtures::TINY_EWD_TO_SIX, *node)
}

#[allow(dead_code)]
pub type Cell = (i32, i32);

/// Four-connected grid with unit moves that stay in bounds and avoid walls
#[allow(dead_code)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub walls: Vec<Cell>,
}

#[allow(dead_code)]
impl Grid {
    pub fn open(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            walls: Vec::new(),
        }
    }

    pub fn neighbors(&self, &(x, y): &Cell) -> Vec<Cell> {
        [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
            .into_iter()
            .filter(|&(nx, ny)| nx >= 0 && ny >= 0 && nx < self.width && ny < self.height)
            .filter(|cell| !self.walls.contains(cell))
            .collect()
    }

    pub fn edges(&self, cell: &Cell) -> Vec<DirectedEdge<Cell>> {
        self.neighbors(cell)
            .into_iter()
            .map(DirectedEdge::unit)
            .collect()
    }
}

#[allow(dead_code)]
pub fn manhattan(from: &Cell, to: &Cell) -> Distance {
    Distance::from((from.0 - to.0).abs() + (from.1 - to.1).abs())
}

/// All-pairs shortest distances by Floyd-Warshall, `None` where unreachable
#[allow(dead_code)]
pub fn floyd_warshall(size: usize, edges: &[(u32, u32, Distance)]) -> Vec<Vec<Option<Distance>>> {
    let mut dist = vec![vec![None; size]; size];
    for (node, row) in dist.iter_mut().enumerate() {
        row[node] = Some(0);
    }
    for &(from, to, weight) in edges {
        let cell = &mut dist[from as usize][to as usize];
        if cell.is_none_or(|current| weight < current) {
            *cell = Some(weight);
        }
    }
    for k in 0..size {
        for i in 0..size {
            for j in 0..size {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].is_none_or(|current| a + b < current) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    dist
}
