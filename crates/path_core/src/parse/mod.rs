//! Reading connections and node names from text.
//!
//! The edge-map format maps quoted node pairs to weights:
//!
//! ```text
//! {
//!     ("A","B"):10,
//!     ("A","C"):100,
//!     ('C','D'):2.5,
//! }
//! ```
use std::path::Path;

use anyhow::Context;
use log::{debug, info, warn};
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

use crate::constants::Weight;
use crate::error::PathError;
use crate::graph::Connections;

#[derive(Parser)]
#[grammar = "parse/edge_map.pest"]
struct EdgeMapParser;

/// Parser errors
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Pest parsing error: {0}")]
    PestError(#[from] Box<pest::error::Error<Rule>>),

    #[error("Invalid syntax: {0}")]
    InvalidSyntax(String),

    #[error("Invalid weight `{0}`")]
    InvalidNumber(String),

    #[error("Empty node name")]
    EmptyNode,

    #[error(transparent)]
    Path(#[from] PathError),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Parse an edge-map string into connections.
///
/// A pair given twice in the same orientation keeps the later weight. Given
/// in both orientations, the smaller weight is kept.
pub fn parse_edge_map(input: &str) -> ParseResult<Connections<String>> {
    let pairs = EdgeMapParser::parse(Rule::edge_map, input)
        .map_err(|e| ParseError::PestError(Box::new(e)))?;

    let mut connections = Connections::new();
    for entry in pairs.flatten().filter(|pair| pair.as_rule() == Rule::entry) {
        let (a, b, weight) = parse_entry(entry)?;
        debug!("({:?}, {:?}): {}", a, b, weight);

        if let Some(old) = connections.insert(a.clone(), b.clone(), weight)? {
            warn!(
                "Connection {} <=> {} given twice ({} and {})",
                a, b, old, weight
            );
        }
    }

    Ok(connections)
}

fn parse_entry(entry: Pair<Rule>) -> ParseResult<(String, String, Weight)> {
    let text = entry.as_str().to_string();
    let mut inner = entry.into_inner();
    let (Some(a), Some(b), Some(weight)) = (inner.next(), inner.next(), inner.next()) else {
        return Err(ParseError::InvalidSyntax(text));
    };

    let weight = weight
        .as_str()
        .parse::<Weight>()
        .map_err(|_| ParseError::InvalidNumber(weight.as_str().to_string()))?;

    let (a, b) = (node_name(a), node_name(b));
    if a.is_empty() || b.is_empty() {
        return Err(ParseError::EmptyNode);
    }

    Ok((a, b, weight))
}

/// Name inside the quotes of a `node` pair.
fn node_name(node: Pair<Rule>) -> String {
    node.into_inner()
        .next()
        .map(|quoted| quoted.as_str().to_string())
        .unwrap_or_default()
}

/// Node name as typed into a free-form field: surrounding whitespace and one
/// pair of matching quotes are removed.
pub fn parse_node(input: &str) -> ParseResult<String> {
    let trimmed = input.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|quote| {
            trimmed
                .strip_prefix(*quote)
                .and_then(|rest| rest.strip_suffix(*quote))
        })
        .unwrap_or(trimmed);

    if unquoted.is_empty() {
        return Err(ParseError::EmptyNode);
    }
    Ok(unquoted.to_string())
}

/// Load connections from `path`. Files ending in `.csv` are read as CSV,
/// everything else as an edge map.
pub fn load_connections(path: &Path) -> anyhow::Result<Connections<String>> {
    let is_csv = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        return Connections::from_csv(path);
    }

    info!("Parsing edge map: {:?}", path);
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;
    let connections = parse_edge_map(&text)
        .with_context(|| format!("Could not parse edge map {}", path.display()))?;
    info!("{}", connections);

    Ok(connections)
}
