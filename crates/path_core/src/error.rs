use thiserror::Error;

use crate::constants::Weight;

/// Errors raised while building a set of connections.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Weight is negative, NaN or infinite
    #[error("Invalid weight {weight} for connection {a} <=> {b}")]
    InvalidWeight {
        a: String,
        b: String,
        weight: Weight,
    },

    /// Connection from a node to itself
    #[error("Connection from node {node} to itself")]
    SelfLoop { node: String },
}

pub type PathResult<T> = Result<T, PathError>;
