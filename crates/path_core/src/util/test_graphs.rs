use crate::{constants::Weight, graph::Connections};

/// Default query on the sample graph
pub const SAMPLE_SOURCE: &str = "F";
pub const SAMPLE_DESTINATION: &str = "M";

/// Connections of the illustrative sample graph.
pub const SAMPLE_CONNECTIONS: [(&str, &str, Weight); 18] = [
    ("A", "B", 10.0),
    ("A", "C", 100.0),
    ("B", "D", 100.0),
    ("C", "D", 10.0),
    ("A", "E", 200.0),
    ("B", "F", 200.0),
    ("C", "G", 200.0),
    ("D", "H", 200.0),
    ("G", "H", 10.0),
    ("F", "E", 10.0),
    ("F", "G", 100.0),
    ("E", "H", 100.0),
    ("A", "I", 1000.0),
    ("B", "J", 1000.0),
    ("I", "J", 10.0),
    ("F", "L", 1000.0),
    ("E", "M", 1000.0),
    ("L", "M", 10.0),
];

/// The sample graph in the textual edge-map format accepted by
/// [`crate::parse::parse_edge_map`].
pub const SAMPLE_EDGE_MAP: &str = r#"{
    ("A","B"):10,
    ("A","C"):100,
    ("B","D"):100,
    ("C","D"):10,
    ("A","E"):200,
    ("B","F"):200,
    ("C","G"):200,
    ("D","H"):200,
    ("G","H"):10,
    ("F","E"):10,
    ("F","G"):100,
    ("E","H"):100,
    ("A","I"):1000,
    ("B","J"):1000,
    ("I","J"):10,
    ("F","L"):1000,
    ("E","M"):1000,
    ("L","M"):10
}"#;

pub fn sample_graph() -> Connections<String> {
    let edges = SAMPLE_CONNECTIONS
        .iter()
        .map(|(a, b, weight)| (a.to_string(), b.to_string(), *weight));

    Connections::from_edges(edges).unwrap_or_default()
}

pub fn generate_complex_graph() -> Connections<u32> {
    let (a, b, c, d, e, f, g, h, i, j, k) = (0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);

    let edges = vec![
        (a, b, 3.0), // A <=> B
        (a, c, 5.0), // A <=> C
        (a, k, 3.0), // A <=> K
        (b, d, 5.0), // B <=> D
        (b, c, 3.0), // B <=> C
        (c, d, 2.0), // C <=> D
        (c, j, 2.0), // C <=> J
        (d, j, 4.0), // D <=> J
        (d, e, 7.0), // D <=> E
        (e, j, 3.0), // E <=> J
        (e, f, 6.0), // E <=> F
        (f, h, 2.0), // F <=> H
        (f, g, 4.0), // F <=> G
        (g, h, 3.0), // G <=> H
        (g, i, 5.0), // G <=> I
        (h, i, 3.0), // H <=> I
        (h, j, 2.0), // H <=> J
        (i, j, 4.0), // I <=> J
        (i, k, 6.0), // I <=> K
        (j, k, 3.0), // J <=> K
    ];

    Connections::from_edges(edges).unwrap_or_default()
}

pub fn generate_simple_graph() -> Connections<&'static str> {
    //           B
    //           |
    // E -- A -- C
    //      |  /
    //      D
    let edges = vec![
        ("A", "C", 1.0),
        ("A", "D", 1.0),
        ("E", "A", 1.0),
        ("C", "B", 1.0),
        ("C", "D", 1.0),
    ];

    Connections::from_edges(edges).unwrap_or_default()
}
