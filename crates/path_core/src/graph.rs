use crate::constants::Weight;
use crate::error::{PathError, PathResult};
use anyhow::Context;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, hash::Hash, path::Path};

/// Anything that can identify a node of the graph.
///
/// `Ord` decides ties between equally distant nodes during a search, so results
/// are reproducible for a given set of connections.
pub trait Node: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<T> Node for T where T: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

/// A single undirected, weighted connection. Also the row type of the CSV format.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Connection<N> {
    pub source: N,
    pub target: N,
    pub weight: Weight,
}

impl<N> Connection<N> {
    pub fn new(source: N, target: N, weight: Weight) -> Self {
        Connection {
            source,
            target,
            weight,
        }
    }
}

/// Edge-weight map of an undirected graph.
///
/// Every unordered pair of nodes is stored at most once, keyed in the
/// orientation it was first inserted with. Lookups try both orientations.
#[derive(Debug, Clone)]
pub struct Connections<N> {
    weights: FxHashMap<(N, N), Weight>,
}

impl<N: Node> Connections<N> {
    pub fn new() -> Self {
        Self {
            weights: FxHashMap::default(),
        }
    }

    pub fn with_capacity(num_connections: usize) -> Self {
        Self {
            weights: FxHashMap::with_capacity_and_hasher(num_connections, Default::default()),
        }
    }

    /// Builds the map from `(a, b, weight)` triples, failing on the first invalid one.
    pub fn from_edges<I>(edges: I) -> PathResult<Self>
    where
        I: IntoIterator<Item = (N, N, Weight)>,
    {
        let edges = edges.into_iter();
        let mut connections = Self::with_capacity(edges.size_hint().0);
        for (a, b, weight) in edges {
            connections.insert(a, b, weight)?;
        }
        Ok(connections)
    }

    /// Add a connection between `a` and `b`.
    ///
    /// If the pair is already known, the old weight is returned. The same
    /// orientation again replaces the weight; the reversed orientation keeps
    /// the smaller of the two, as a lookup trying both keys would.
    ///
    /// Fails with [`PathError::SelfLoop`] if `a == b` and with
    /// [`PathError::InvalidWeight`] for negative, NaN or infinite weights.
    pub fn insert(&mut self, a: N, b: N, weight: Weight) -> PathResult<Option<Weight>> {
        if a == b {
            return Err(PathError::SelfLoop {
                node: a.to_string(),
            });
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(PathError::InvalidWeight {
                a: a.to_string(),
                b: b.to_string(),
                weight,
            });
        }

        if let Some(old) = self.weights.get_mut(&(b.clone(), a.clone())) {
            let previous = *old;
            *old = previous.min(weight);
            return Ok(Some(previous));
        }
        Ok(self.weights.insert((a, b), weight))
    }

    pub fn add_connection(&mut self, connection: Connection<N>) -> PathResult<Option<Weight>> {
        self.insert(connection.source, connection.target, connection.weight)
    }

    /// Weight of the connection between `a` and `b`, regardless of the
    /// orientation it is stored in. `None` if the two nodes are not adjacent.
    pub fn weight(&self, a: &N, b: &N) -> Option<Weight> {
        self.weights
            .get(&(a.clone(), b.clone()))
            .or_else(|| self.weights.get(&(b.clone(), a.clone())))
            .copied()
    }

    pub fn contains(&self, a: &N, b: &N) -> bool {
        self.weight(a, b).is_some()
    }

    /// Returns an iterator over all connections as stored, i.e. in the
    /// orientation they were first inserted with.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &N, Weight)> {
        self.weights.iter().map(|((a, b), weight)| (a, b, *weight))
    }

    /// All connections ordered by their key. Used where output has to be stable.
    pub fn sorted(&self) -> Vec<(&N, &N, Weight)> {
        let mut connections: Vec<_> = self.iter().collect();
        connections.sort_by(|x, y| (x.0, x.1).cmp(&(y.0, y.1)));
        connections
    }

    /// Sorted set of every node that is an endpoint of some connection.
    pub fn nodes(&self) -> BTreeSet<&N> {
        self.weights.keys().flat_map(|(a, b)| [a, b]).collect()
    }

    /// Sorted node universe of a query: `source`, `destination` and all endpoints.
    pub fn node_universe(&self, source: &N, destination: &N) -> Vec<N> {
        let mut nodes = self.nodes();
        nodes.insert(source);
        nodes.insert(destination);
        nodes.into_iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Connections<String> {
    /// Read connections from a CSV file with the header `source,target,weight`.
    pub fn from_csv(path: &Path) -> anyhow::Result<Self> {
        info!("Reading connections from {:?}", path);

        let mut connections = Self::new();
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Could not open {}", path.display()))?;
        for (line, result) in reader.deserialize().enumerate() {
            let connection: Connection<String> =
                result.with_context(|| format!("Failed to parse connection #{}", line + 1))?;
            debug!("{:?}", connection);
            connections.add_connection(connection)?;
        }

        info!("Read {} connections", connections.len());
        Ok(connections)
    }

    pub fn export_csv(&self, path: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        for (source, target, weight) in self.sorted() {
            wtr.serialize(Connection::new(source, target, weight))?;
        }
        wtr.flush()?;
        debug!("Wrote {} connections to {:?}", self.len(), path);
        Ok(())
    }
}

impl<N: Node> Default for Connections<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> fmt::Display for Connections<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph has {} nodes and {} connections",
            self.nodes().len(),
            self.len()
        )
    }
}

/// Macro to build [`Connections`] from `(a, b) => weight` entries.
///
/// connections![("A", "B") => 10.0, ("B", "C") => 5.0]
///
/// Evaluates to a `PathResult<Connections<_>>`.
#[macro_export]
macro_rules! connections {
    ($(($a:expr, $b:expr) => $weight:expr),* $(,)?) => {
        $crate::graph::Connections::from_edges(vec![
            $(($a, $b, $weight as $crate::constants::Weight)),*
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_orientation() {
        let c = connections![("X", "Y") => 3.0].unwrap();

        assert_eq!(c.weight(&"X", &"Y"), Some(3.0));
        assert_eq!(c.weight(&"Y", &"X"), Some(3.0));
        assert_eq!(c.weight(&"X", &"Z"), None);
        assert!(c.contains(&"Y", &"X"));
    }

    #[test]
    fn reversed_insert_keeps_smaller_weight() {
        let mut c = Connections::new();
        assert_eq!(c.insert(0, 1, 2.0), Ok(None));
        assert_eq!(c.insert(1, 0, 1.0), Ok(Some(2.0)));

        assert_eq!(c.len(), 1);
        assert_eq!(c.weight(&0, &1), Some(1.0));
        // Key keeps the orientation of the first insert
        assert_eq!(c.iter().next(), Some((&0, &1, 1.0)));

        // A larger weight in reversed orientation does not win
        assert_eq!(c.insert(1, 0, 5.0), Ok(Some(1.0)));
        assert_eq!(c.weight(&1, &0), Some(1.0));
    }

    #[test]
    fn same_orientation_insert_replaces_weight() {
        let mut c = Connections::new();
        assert_eq!(c.insert(0, 1, 2.0), Ok(None));
        assert_eq!(c.insert(0, 1, 7.0), Ok(Some(2.0)));

        assert_eq!(c.len(), 1);
        assert_eq!(c.weight(&1, &0), Some(7.0));
    }

    #[test]
    fn reject_invalid_weights() {
        let mut c = Connections::new();

        assert!(matches!(
            c.insert(0, 1, -1.0),
            Err(PathError::InvalidWeight { weight, .. }) if weight == -1.0
        ));
        assert!(matches!(
            c.insert(0, 1, f64::NAN),
            Err(PathError::InvalidWeight { .. })
        ));
        assert!(matches!(
            c.insert(0, 1, f64::INFINITY),
            Err(PathError::InvalidWeight { .. })
        ));
        assert_eq!(c.insert(0, 0, 1.0), Err(PathError::SelfLoop { node: "0".into() }));
        assert!(c.is_empty());

        // Zero is a valid weight
        assert_eq!(c.insert(0, 1, 0.0), Ok(None));
    }

    #[test]
    fn node_universe_is_sorted_and_includes_query() {
        let c: Connections<u32> = connections![(3, 1) => 1.0, (1, 2) => 1.0].unwrap();

        assert_eq!(c.node_universe(&1, &2), vec![1, 2, 3]);
        assert_eq!(c.node_universe(&7, &0), vec![0, 1, 2, 3, 7]);
    }

    #[test]
    fn csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connections.csv");

        let c = Connections::from_edges(vec![
            ("A".to_string(), "B".to_string(), 10.0),
            ("B".to_string(), "C".to_string(), 2.5),
        ])
        .unwrap();
        c.export_csv(&path).unwrap();

        let read = Connections::from_csv(&path).unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read.weight(&"C".into(), &"B".into()), Some(2.5));
    }

    #[test]
    fn csv_with_negative_weight_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connections.csv");
        std::fs::write(&path, "source,target,weight\nA,B,-4\n").unwrap();

        let err = Connections::from_csv(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PathError>(),
            Some(PathError::InvalidWeight { .. })
        ));
    }
}
