use crate::constants::Weight;
use crate::graph::{Connections, Node};
use crate::search_graph::NodeUniverse;

use self::dijkstra::Dijkstra;
use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod heap_dijkstra;
pub mod shortest_path;

/// Shortest path from `source` to `destination` using the dense Dijkstra.
///
/// Never fails: an unreachable destination is returned as `[destination]`
/// with an infinite weight, and `source == destination` as `[source]` with
/// weight `0`.
pub fn shortest_path<N: Node>(
    source: &N,
    destination: &N,
    connections: &Connections<N>,
) -> ShortestPath<N> {
    Dijkstra::new(connections).search(source, destination)
}

/// Walks the predecessor table back from `target` until a node without
/// predecessor is reached.
pub(crate) fn reconstruct_path<N: Node>(
    target: usize,
    universe: &NodeUniverse<N>,
    distances: &[Weight],
    previous: &[Option<usize>],
) -> ShortestPath<N> {
    let mut path = vec![universe.node(target).clone()];
    let mut current = target;

    while let Some(prev_node) = previous[current] {
        path.push(universe.node(prev_node).clone());
        current = prev_node;
    }
    path.reverse();

    ShortestPath::new(path, distances[target])
}
