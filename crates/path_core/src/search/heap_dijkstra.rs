use std::collections::BinaryHeap;

use log::{debug, info};

use crate::constants::{Weight, INFINITY};
use crate::graph::{Connections, Node};
use crate::search::shortest_path::ShortestPath;
use crate::search_graph::SearchGraph;
use crate::statistics::SearchStats;

#[derive(Debug)]
pub(crate) struct Candidate {
    pub(crate) node_idx: usize,
    pub(crate) weight: Weight,
}

impl Candidate {
    pub(crate) fn new(node_idx: usize, weight: Weight) -> Self {
        Self { node_idx, weight }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    // Reversed, so the max-heap pops the smallest weight and, on equal
    // weights, the lowest node index first.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

/// Dijkstra on an adjacency list with a binary heap and lazy deletion.
///
/// Returns the same distances as [`super::dijkstra::Dijkstra`] but stops as
/// soon as the destination is settled. Prefer it once graphs grow beyond a few
/// dozen nodes.
pub struct HeapDijkstra<'a, N> {
    pub stats: SearchStats,
    connections: &'a Connections<N>,
}

impl<'a, N: Node> HeapDijkstra<'a, N> {
    pub fn new(connections: &'a Connections<N>) -> Self {
        HeapDijkstra {
            connections,
            stats: SearchStats::default(),
        }
    }

    pub fn search(&mut self, source: &N, destination: &N) -> ShortestPath<N> {
        self.stats.init();
        info!("BEGIN HEAP DIJKSTRA from {} to {}", source, destination);

        let g = SearchGraph::new(self.connections, source, destination);
        let (Some(src), Some(dst)) = (g.universe.index(source), g.universe.index(destination))
        else {
            self.stats.finish();
            return ShortestPath::unreachable(destination.clone());
        };

        let num_nodes = g.universe.len();
        let mut distances: Vec<Weight> = vec![INFINITY; num_nodes];
        let mut previous: Vec<Option<usize>> = vec![None; num_nodes];
        let mut settled = vec![false; num_nodes];

        let mut queue = BinaryHeap::new();
        distances[src] = 0.0;
        queue.push(Candidate::new(src, 0.0));

        while let Some(Candidate { node_idx, weight }) = queue.pop() {
            // Stale entry
            if settled[node_idx] {
                continue;
            }
            settled[node_idx] = true;
            self.stats.nodes_settled += 1;

            if node_idx == dst {
                break;
            }

            for &(neighbor, edge_weight) in g.neighbors(node_idx) {
                if settled[neighbor] {
                    continue;
                }
                let new_distance = weight + edge_weight;
                if new_distance < distances[neighbor] {
                    distances[neighbor] = new_distance;
                    previous[neighbor] = Some(node_idx);
                    self.stats.edges_relaxed += 1;
                    queue.push(Candidate::new(neighbor, new_distance));
                }
            }
        }
        self.stats.finish();

        let sp = super::reconstruct_path(dst, &g.universe, &distances, &previous);
        if sp.is_reachable() {
            debug!("Path found: {}", sp);
            info!(
                "Path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        } else {
            info!(
                "No path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        }

        sp
    }
}
