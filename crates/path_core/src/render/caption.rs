use std::fmt;

use crate::search::shortest_path::ShortestPath;

/// Summary shown above a rendered path.
///
/// ```text
/// Shortest Path from F to M (Distance = 1010)
/// Path: [F, E, M]
/// ```
///
/// An unreachable destination is reported with `Distance = inf`.
#[derive(Debug, Clone, Copy)]
pub struct Caption<'a, N> {
    pub source: &'a N,
    pub destination: &'a N,
    pub path: &'a ShortestPath<N>,
}

impl<'a, N: fmt::Display> Caption<'a, N> {
    pub fn new(source: &'a N, destination: &'a N, path: &'a ShortestPath<N>) -> Self {
        Caption {
            source,
            destination,
            path,
        }
    }

    pub fn title(&self) -> String {
        format!(
            "Shortest Path from {} to {} (Distance = {})",
            self.source, self.destination, self.path.weight
        )
    }
}

impl<'a, N: fmt::Display> fmt::Display for Caption<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        write!(f, "Path: {}", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::highlight_path;
    use crate::util::test_graphs::sample_graph;

    #[test]
    fn sample_caption() {
        let g = sample_graph();
        let hp = highlight_path(&"F".to_string(), &"M".to_string(), &g);

        assert_eq!(
            hp.caption().to_string(),
            "Shortest Path from F to M (Distance = 1010)\nPath: [F, E, M]"
        );
    }

    #[test]
    fn unreachable_caption() {
        let g = sample_graph();
        let hp = highlight_path(&"A".to_string(), &"Z".to_string(), &g);

        assert_eq!(
            hp.caption().to_string(),
            "Shortest Path from A to Z (Distance = inf)\nPath: [Z]"
        );
    }

    #[test]
    fn fractional_distance() {
        let path = ShortestPath::new(vec![1, 2], 2.5);
        let caption = Caption::new(&1, &2, &path);

        assert_eq!(caption.title(), "Shortest Path from 1 to 2 (Distance = 2.5)");
    }
}
