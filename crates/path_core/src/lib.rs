//! Crate to find and highlight shortest paths in small undirected graphs.
//!
//! # Basic usage
//! Connections are parsed into a [`Connections`] map, searched, and the
//! resulting path is marked for drawing.
//!
//! ```
//! use path_core::prelude::*;
//!
//! // Parse the connections
//! let connections = parse_edge_map(r#"{ ("A","B"): 10, ("B","C"): 5, ("A","C"): 20 }"#)
//!     .expect("Failed to parse edge map");
//!
//! let a = "A".to_string();
//! let c = "C".to_string();
//!
//! // Search
//! let sp = shortest_path(&a, &c, &connections);
//! assert_eq!(sp.nodes, vec!["A", "B", "C"]);
//! assert_eq!(sp.weight, 15.0);
//!
//! // Mark the path for drawing
//! let highlighted = highlight_path(&a, &c, &connections);
//! assert_eq!(highlighted.graph.edges_on_path().count(), 2);
//! println!("{}", highlighted.caption());
//! ```
//!
//! [`Connections`]: crate::graph::Connections
pub mod constants;
pub mod error;
pub mod graph;
pub mod parse;
pub mod prelude;
pub mod render;
pub mod search;
pub mod search_graph;
pub mod statistics;
pub mod util;
