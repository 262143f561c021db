use thiserror::Error;

use crate::constants::RawWeight;

/// Why an edge was rejected while building a [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidEdgeReason {
    NegativeWeight,
    SelfLoop,
}

impl std::fmt::Display for InvalidEdgeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidEdgeReason::NegativeWeight => write!(f, "weight must not be negative"),
            InvalidEdgeReason::SelfLoop => write!(f, "endpoints must be distinct"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid edge {from} <=> {to} ({weight}): {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        weight: RawWeight,
        reason: InvalidEdgeReason,
    },

    #[error("Unknown node: {0}")]
    UnknownNode(String),
}
