use std::fmt;

use crate::graph::Node;

use super::{AnnotatedGraph, Caption};

/// Graphviz rendering of an [`AnnotatedGraph`], captioned.
pub struct Dot<'a, N> {
    graph: &'a AnnotatedGraph<N>,
    caption: &'a Caption<'a, N>,
}

impl<'a, N: Node> Dot<'a, N> {
    pub fn new(graph: &'a AnnotatedGraph<N>, caption: &'a Caption<'a, N>) -> Self {
        Dot { graph, caption }
    }
}

pub fn to_dot<N: Node>(graph: &AnnotatedGraph<N>, caption: &Caption<'_, N>) -> String {
    Dot::new(graph, caption).to_string()
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

impl<'a, N: Node> fmt::Display for Dot<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "graph shortest_path {{")?;
        writeln!(f, "    label=\"{}\";", escape(&self.caption.to_string()))?;
        writeln!(f, "    labelloc=t;")?;
        writeln!(
            f,
            "    node [shape=circle, style=filled, fillcolor=skyblue];"
        )?;

        for node in &self.graph.nodes {
            writeln!(f, "    \"{}\";", escape(&node.to_string()))?;
        }
        for edge in &self.graph.edges {
            writeln!(
                f,
                "    \"{}\" -- \"{}\" [label=\"{}\", color={}, penwidth={}];",
                escape(&edge.a.to_string()),
                escape(&edge.b.to_string()),
                edge.weight,
                edge.style.color(),
                edge.style.width()
            )?;
        }

        write!(f, "}}")
    }
}
