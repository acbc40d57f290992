use std::fmt::Display;

use rustc_hash::FxHashMap;

use crate::constants::Weight;
use crate::graph::{Connections, Node};

/// Sorted node set of a single query, with a reverse lookup from node to index.
///
/// Indices follow the node order, so "lowest index" and "smallest node" mean
/// the same thing.
#[derive(Debug, Clone)]
pub struct NodeUniverse<N> {
    nodes: Vec<N>,
    index: FxHashMap<N, usize>,
}

impl<N: Node> NodeUniverse<N> {
    pub fn new(connections: &Connections<N>, source: &N, destination: &N) -> Self {
        let nodes = connections.node_universe(source, destination);
        let index = nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.clone(), idx))
            .collect();

        NodeUniverse { nodes, index }
    }

    #[inline]
    pub fn index(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    #[inline]
    pub fn node(&self, idx: usize) -> &N {
        &self.nodes[idx]
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Index based adjacency lists built from [`Connections`]. Every connection
/// is added in both directions.
pub struct SearchGraph<N> {
    pub universe: NodeUniverse<N>,
    pub edges: Vec<Vec<(usize, Weight)>>,
}

impl<N: Node> SearchGraph<N> {
    pub fn new(connections: &Connections<N>, source: &N, destination: &N) -> Self {
        let universe = NodeUniverse::new(connections, source, destination);
        let mut edges: Vec<Vec<(usize, Weight)>> = vec![Vec::new(); universe.len()];

        for (a, b, weight) in connections.iter() {
            // Endpoints are always part of the universe
            if let (Some(a), Some(b)) = (universe.index(a), universe.index(b)) {
                edges[a].push((b, weight));
                edges[b].push((a, weight));
            }
        }

        // Stable neighbor order independent of hash map iteration
        for neighbors in edges.iter_mut() {
            neighbors.sort_by(|x, y| x.0.cmp(&y.0));
        }

        SearchGraph { universe, edges }
    }

    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = &(usize, Weight)> {
        self.edges[idx].iter()
    }
}

impl<N: Node> Display for SearchGraph<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "SearchGraph: #Nodes: {}, #Edges: {}",
            self.universe.len(),
            self.edges.iter().flatten().count() / 2
        )?;
        for (idx, neighbors) in self.edges.iter().enumerate() {
            write!(f, "  {}:", self.universe.node(idx))?;
            for (neighbor, weight) in neighbors {
                write!(f, " {}({})", self.universe.node(*neighbor), weight)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connections;

    #[test]
    fn builds_symmetric_adjacency() {
        let c = connections![("B", "A") => 1.0, ("B", "C") => 2.0].unwrap();
        let g = SearchGraph::new(&c, &"A", &"D");

        assert_eq!(g.universe.nodes(), ["A", "B", "C", "D"]);

        let b = g.universe.index(&"B").unwrap();
        let neighbors: Vec<_> = g.neighbors(b).copied().collect();
        assert_eq!(neighbors, vec![(0, 1.0), (2, 2.0)]);

        // Isolated destination
        assert_eq!(g.neighbors(3).count(), 0);
    }

    #[test]
    fn print_graph() {
        let c: Connections<i32> = connections![(0, 1) => 1.0, (1, 2) => 1.0].unwrap();
        let g = SearchGraph::new(&c, &0, &2);
        let printed = g.to_string();

        assert!(printed.starts_with("SearchGraph: #Nodes: 3, #Edges: 2"));
        assert!(printed.contains("  1: 0(1) 2(1)"));
    }
}
