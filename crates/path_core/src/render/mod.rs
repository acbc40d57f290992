//! Turns a query result into something a drawing layer can show: an annotated
//! copy of the graph with the path edges marked, and a caption.
use log::debug;

use crate::constants::Weight;
use crate::graph::{Connections, Node};
use crate::search::{shortest_path, shortest_path::ShortestPath};

pub mod caption;
pub mod dot;

pub use caption::Caption;

/// How an edge should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    OnPath,
    OffPath,
}

impl EdgeStyle {
    pub fn color(&self) -> &'static str {
        match self {
            EdgeStyle::OnPath => "red",
            EdgeStyle::OffPath => "black",
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            EdgeStyle::OnPath => 4,
            EdgeStyle::OffPath => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedEdge<N> {
    pub a: N,
    pub b: N,
    pub weight: Weight,
    pub style: EdgeStyle,
}

impl<N: PartialEq> AnnotatedEdge<N> {
    /// `true` if the edge connects `x` and `y`, in either order.
    pub fn connects(&self, x: &N, y: &N) -> bool {
        (self.a == *x && self.b == *y) || (self.a == *y && self.b == *x)
    }
}

/// Undirected graph with one styled edge per connection.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedGraph<N> {
    pub nodes: Vec<N>,
    pub edges: Vec<AnnotatedEdge<N>>,
}

impl<N: Node> AnnotatedGraph<N> {
    /// All edges start out off-path. Nodes and edges are sorted.
    pub fn new(connections: &Connections<N>, source: &N, destination: &N) -> Self {
        let nodes = connections.node_universe(source, destination);
        let edges = connections
            .sorted()
            .into_iter()
            .map(|(a, b, weight)| AnnotatedEdge {
                a: a.clone(),
                b: b.clone(),
                weight,
                style: EdgeStyle::OffPath,
            })
            .collect();

        AnnotatedGraph { nodes, edges }
    }

    /// Marks every hop of `path` as on-path. Returns the number of edges marked.
    pub fn mark_path(&mut self, path: &ShortestPath<N>) -> usize {
        let mut marked = 0;
        for (x, y) in path.hops() {
            if let Some(edge) = self.edges.iter_mut().find(|edge| edge.connects(x, y)) {
                edge.style = EdgeStyle::OnPath;
                marked += 1;
            }
        }
        marked
    }

    pub fn edges_on_path(&self) -> impl Iterator<Item = &AnnotatedEdge<N>> {
        self.edges
            .iter()
            .filter(|edge| edge.style == EdgeStyle::OnPath)
    }
}

/// Everything a drawing layer needs for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightedPath<N> {
    pub source: N,
    pub destination: N,
    pub graph: AnnotatedGraph<N>,
    pub shortest_path: ShortestPath<N>,
}

impl<N: Node> HighlightedPath<N> {
    pub fn caption(&self) -> Caption<'_, N> {
        Caption::new(&self.source, &self.destination, &self.shortest_path)
    }

    pub fn to_dot(&self) -> String {
        dot::to_dot(&self.graph, &self.caption())
    }
}

/// Runs the search from `source` to `destination` and marks the resulting
/// path in an annotated copy of `connections`.
///
/// An unreachable destination or `source == destination` yields a path with a
/// single node, in which case no edge is marked.
pub fn highlight_path<N: Node>(
    source: &N,
    destination: &N,
    connections: &Connections<N>,
) -> HighlightedPath<N> {
    let shortest_path = shortest_path(source, destination, connections);

    let mut graph = AnnotatedGraph::new(connections, source, destination);
    let marked = graph.mark_path(&shortest_path);
    debug!("Marked {} of {} edges", marked, graph.edges.len());

    HighlightedPath {
        source: source.clone(),
        destination: destination.clone(),
        graph,
        shortest_path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connections;
    use crate::util::test_graphs::sample_graph;

    fn s(node: &str) -> String {
        node.to_string()
    }

    fn on_path<N: Node>(hp: &HighlightedPath<N>) -> Vec<(N, N)> {
        hp.graph
            .edges_on_path()
            .map(|edge| (edge.a.clone(), edge.b.clone()))
            .collect()
    }

    #[test]
    fn marks_sample_path() {
        let g = sample_graph();
        let hp = highlight_path(&s("F"), &s("M"), &g);

        assert_eq!(hp.shortest_path.nodes, vec![s("F"), s("E"), s("M")]);
        assert_eq!(hp.shortest_path.weight, 1010.0);
        assert_eq!(hp.graph.edges.len(), 18);
        assert_eq!(hp.graph.nodes.len(), 12);
        // Stored as ("F", "E") and ("E", "M")
        assert_eq!(on_path(&hp), vec![(s("E"), s("M")), (s("F"), s("E"))]);
    }

    #[test]
    fn marks_reversed_keys() {
        // Path runs C -> B -> A, keys are stored the other way around
        let g = connections![("A", "B") => 1.0, ("B", "C") => 1.0, ("A", "C") => 5.0].unwrap();
        let hp = highlight_path(&"C", &"A", &g);

        assert_eq!(hp.shortest_path.nodes, vec!["C", "B", "A"]);
        assert_eq!(on_path(&hp), vec![("A", "B"), ("B", "C")]);

        let off: Vec<_> = hp
            .graph
            .edges
            .iter()
            .filter(|edge| edge.style == EdgeStyle::OffPath)
            .collect();
        assert_eq!(off.len(), 1);
        assert!(off[0].connects(&"C", &"A"));
    }

    #[test]
    fn nothing_marked_for_single_node_paths() {
        let g = sample_graph();

        let same = highlight_path(&s("A"), &s("A"), &g);
        assert_eq!(same.shortest_path.nodes, vec![s("A")]);
        assert_eq!(same.graph.edges_on_path().count(), 0);

        let unreachable = highlight_path(&s("A"), &s("Z"), &g);
        assert!(!unreachable.shortest_path.is_reachable());
        assert_eq!(unreachable.graph.edges_on_path().count(), 0);
        // Isolated destination is still part of the drawing
        assert!(unreachable.graph.nodes.contains(&s("Z")));
    }

    #[test]
    fn edge_styles() {
        assert_eq!(EdgeStyle::OnPath.color(), "red");
        assert_eq!(EdgeStyle::OnPath.width(), 4);
        assert_eq!(EdgeStyle::OffPath.color(), "black");
        assert_eq!(EdgeStyle::OffPath.width(), 1);
    }
}
