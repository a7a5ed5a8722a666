use crate::graph::types::DirectedEdge;

/// Trait for providing the outgoing neighbors of a node in an unweighted graph.
///
/// Implemented for every `Fn(&N) -> impl IntoIterator<Item = N>`, so a closure
/// over whatever structure the caller keeps (an adjacency map, a grid, a rule)
/// is a provider. Calls must be deterministic and free of side effects.
pub trait NeighborProvider<N> {
    type Neighbors: IntoIterator<Item = N>;

    fn neighbors(&self, node: &N) -> Self::Neighbors;
}

/// Trait for providing the outgoing weighted edges of a node
pub trait EdgeProvider<N> {
    type Edges: IntoIterator<Item = DirectedEdge<N>>;

    fn edges(&self, node: &N) -> Self::Edges;
}

impl<N, F, I> NeighborProvider<N> for F
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    type Neighbors = I;

    fn neighbors(&self, node: &N) -> I {
        self(node)
    }
}

impl<N, F, I> EdgeProvider<N> for F
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = DirectedEdge<N>>,
{
    type Edges = I;

    fn edges(&self, node: &N) -> I {
        self(node)
    }
}
