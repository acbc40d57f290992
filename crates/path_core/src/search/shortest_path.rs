use std::fmt;

use crate::constants::{Weight, INFINITY};

/// Result of a single query: the nodes from source to destination (inclusive)
/// and the total weight.
///
/// An unreachable destination is reported as `[destination]` with an infinite
/// weight.
#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath<N> {
    pub nodes: Vec<N>,
    pub weight: Weight,
}

impl<N> ShortestPath<N> {
    pub fn new(nodes: Vec<N>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }

    pub fn unreachable(destination: N) -> Self {
        ShortestPath {
            nodes: vec![destination],
            weight: INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.weight.is_finite()
    }

    /// Consecutive node pairs along the path. Empty for paths with a single node.
    pub fn hops(&self) -> impl Iterator<Item = (&N, &N)> {
        self.nodes.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

impl<N: fmt::Display> fmt::Display for ShortestPath<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", node)?;
        }
        write!(f, "]")
    }
}
