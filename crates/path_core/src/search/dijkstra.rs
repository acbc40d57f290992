use log::{debug, info};

use crate::constants::{Weight, INFINITY};
use crate::graph::{Connections, Node};
use crate::search::shortest_path::ShortestPath;
use crate::search_graph::NodeUniverse;
use crate::statistics::SearchStats;

/// Dense Dijkstra: the next node to settle is found by a linear scan over all
/// unsettled nodes, relaxation probes the connection map for every other
/// unsettled node. O(V²), meant for small graphs.
pub struct Dijkstra<'a, N> {
    pub stats: SearchStats,
    connections: &'a Connections<N>,
}

impl<'a, N: Node> Dijkstra<'a, N> {
    pub fn new(connections: &'a Connections<N>) -> Self {
        Dijkstra {
            connections,
            stats: SearchStats::default(),
        }
    }

    pub fn search(&mut self, source: &N, destination: &N) -> ShortestPath<N> {
        self.stats.init();
        info!("BEGIN DIJKSTRA from {} to {}", source, destination);

        let universe = NodeUniverse::new(self.connections, source, destination);
        let (Some(src), Some(dst)) = (universe.index(source), universe.index(destination)) else {
            // Both are inserted into the universe on construction
            self.stats.finish();
            return ShortestPath::unreachable(destination.clone());
        };

        let num_nodes = universe.len();
        let mut distances: Vec<Weight> = vec![INFINITY; num_nodes];
        let mut previous: Vec<Option<usize>> = vec![None; num_nodes];
        let mut settled = vec![false; num_nodes];

        distances[src] = 0.0;

        for _ in 0..num_nodes {
            let Some(node) = next_unsettled(&distances, &settled) else {
                break;
            };
            debug!(
                "Settle {} at distance {}",
                universe.node(node),
                distances[node]
            );

            // Nothing can be relaxed from an unreached node
            if distances[node] < INFINITY {
                for other in 0..num_nodes {
                    if settled[other] || other == node {
                        continue;
                    }
                    let Some(weight) = self
                        .connections
                        .weight(universe.node(node), universe.node(other))
                    else {
                        continue;
                    };

                    let new_distance = distances[node] + weight;
                    if new_distance < distances[other] {
                        distances[other] = new_distance;
                        previous[other] = Some(node);
                        self.stats.edges_relaxed += 1;
                    }
                }
            }

            settled[node] = true;
            self.stats.nodes_settled += 1;
        }
        self.stats.finish();

        let sp = super::reconstruct_path(dst, &universe, &distances, &previous);
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

/// Unsettled node with the smallest distance. Ties go to the lowest index.
fn next_unsettled(distances: &[Weight], settled: &[bool]) -> Option<usize> {
    let mut min: Option<usize> = None;
    for (idx, distance) in distances.iter().enumerate() {
        if settled[idx] {
            continue;
        }
        match min {
            Some(min_idx) if distances[min_idx] <= *distance => {}
            _ => min = Some(idx),
        }
    }
    min
}
