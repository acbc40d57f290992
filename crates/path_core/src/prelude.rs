//! Re-exports of the most commonly used items in `path_core`.
pub use crate::constants::{Weight, INFINITY};
pub use crate::error::PathError;
pub use crate::graph::{Connection, Connections, Node};
pub use crate::parse::{load_connections, parse_edge_map, parse_node};
pub use crate::render::{highlight_path, HighlightedPath};
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::heap_dijkstra::HeapDijkstra;
pub use crate::search::shortest_path::ShortestPath;
pub use crate::search::shortest_path;

pub use crate::util::test_graphs::sample_graph;
