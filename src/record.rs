//! Already-parsed input records, the form in which graphs are handed to the crate.

use crate::edge::{Edge, Vertex};

/// One `v0 v1 [weight]` line of an edge list, after tokenizing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    pub v0: Vertex,
    pub v1: Vertex,
    pub weight: Option<f64>,
}

impl Record {
    /// Creates an unweighted record.
    pub fn new(v0: Vertex, v1: Vertex) -> Self {
        Self {
            v0,
            v1,
            weight: None,
        }
    }

    /// Creates a record carrying an explicit weight.
    pub fn weighted(v0: Vertex, v1: Vertex, weight: f64) -> Self {
        Self {
            v0,
            v1,
            weight: Some(weight),
        }
    }

    /// Returns the canonical edge the record describes.
    pub fn edge(&self) -> Edge {
        Edge::new(self.v0, self.v1)
    }
}

impl From<(Vertex, Vertex)> for Record {
    fn from((v0, v1): (Vertex, Vertex)) -> Self {
        Self::new(v0, v1)
    }
}

impl From<(Vertex, Vertex, f64)> for Record {
    fn from((v0, v1, weight): (Vertex, Vertex, f64)) -> Self {
        Self::weighted(v0, v1, weight)
    }
}

impl From<(Vertex, Vertex, Option<f64>)> for Record {
    fn from((v0, v1, weight): (Vertex, Vertex, Option<f64>)) -> Self {
        Self { v0, v1, weight }
    }
}
