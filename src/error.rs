//! Errors reported by graph construction, queries and measurements.

use crate::edge::{Edge, Vertex};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("not a vertex of the graph: {vertices:?}")]
    InvalidVertex { vertices: Vec<Vertex> },

    #[error("{metric} is undefined: {reason}")]
    UndefinedMetric {
        metric: &'static str,
        reason: String,
    },

    #[error("vertex {vertex} is not an endpoint of edge {edge}")]
    NotAnEndpoint { vertex: Vertex, edge: Edge },

    #[error("no edge between {v0} and {v1}")]
    MissingEdge { v0: Vertex, v1: Vertex },

    #[error("edge {edge} given conflicting weights {first} and {second}")]
    ConflictingWeight { edge: Edge, first: f64, second: f64 },

    #[error("edge {edge} has invalid weight {weight}, weights must be finite and nonnegative")]
    InvalidWeight { edge: Edge, weight: f64 },

    #[error("unknown backend {0:?}, expected one of \"set\", \"matrix\" or \"list\"")]
    UnknownBackend(String),
}

impl Error {
    pub(crate) fn undefined(metric: &'static str, reason: impl Into<String>) -> Self {
        Self::UndefinedMetric {
            metric,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
