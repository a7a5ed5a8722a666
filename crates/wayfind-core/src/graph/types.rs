/// Accumulated path cost. The source sits at distance 0.
///
/// There is no sentinel for "infinity": a node that was never reached simply
/// does not appear in any result.
pub type Distance = i64;

/// Sequence of nodes leading away from a source, the source itself excluded
pub type Path<N> = Vec<N>;

/// Outgoing edge of a weighted graph.
///
/// Dijkstra and A* assume `weight >= 0`. Negative weights are not rejected;
/// they just make the reported distances meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectedEdge<N> {
    pub target: N,
    pub weight: Distance,
}

impl<N> DirectedEdge<N> {
    pub fn new(target: N, weight: Distance) -> Self {
        DirectedEdge { target, weight }
    }

    /// Edge of weight 1, the cost every unweighted edge implicitly has
    pub fn unit(target: N) -> Self {
        DirectedEdge { target, weight: 1 }
    }
}

impl<N> From<(N, Distance)> for DirectedEdge<N> {
    fn from((target, weight): (N, Distance)) -> Self {
        DirectedEdge { target, weight }
    }
}

/// Result of a path query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<N> {
    /// The goal node that ended the search
    pub target: N,
    /// Total cost from the source to `target`
    pub distance: Distance,
    /// Nodes after the source, ending with `target`; empty when the source
    /// itself was the goal
    pub nodes: Path<N>,
}

impl<N> ShortestPath<N> {
    /// Number of edges on the path
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
