//! A module for working with edges.

use std::fmt;

use crate::error::{Error, Result};

/// A vertex identifier.
///
/// Identifiers are opaque keys: they need not start at zero or be contiguous.
pub type Vertex = i64;

/// A pair of vertices representing an undirected graph edge.
///
/// The endpoints are stored sorted, so `Edge::new(a, b)` and `Edge::new(b, a)` are the same value
/// and hash identically. The edge carries no weight, weights are stored by the backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    v0: Vertex,
    v1: Vertex,
}

impl Edge {
    /// Creates a new edge from two vertices.
    ///
    /// # Examples
    ///
    /// ```
    /// use netgraph::edge::Edge;
    ///
    /// let edge = Edge::new(7, 3);
    /// assert_eq!(edge, Edge::new(3, 7));
    /// assert_eq!(edge.v0(), 3);
    /// ```
    pub fn new(v0: Vertex, v1: Vertex) -> Self {
        Self {
            v0: v0.min(v1),
            v1: v0.max(v1),
        }
    }

    /// Returns the lower endpoint.
    pub fn v0(&self) -> Vertex {
        self.v0
    }

    /// Returns the higher endpoint.
    pub fn v1(&self) -> Vertex {
        self.v1
    }

    /// Returns whether the edge contains the given vertex.
    ///
    /// # Examples
    ///
    /// ```
    /// use netgraph::edge::Edge;
    ///
    /// let edge = Edge::new(1, 2);
    ///
    /// assert_eq!(edge.contains(1), true);
    /// assert_eq!(edge.contains(2), true);
    /// assert_eq!(edge.contains(3), false);
    /// ```
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.v0 == vertex || self.v1 == vertex
    }

    /// Returns the endpoint opposite to `vertex`.
    ///
    /// Fails with [`Error::NotAnEndpoint`] if `vertex` isn't one of the edge's endpoints.
    ///
    /// # Examples
    ///
    /// ```
    /// use netgraph::edge::Edge;
    ///
    /// let edge = Edge::new(1, 2);
    ///
    /// assert_eq!(edge.nbr(1).unwrap(), 2);
    /// assert!(edge.nbr(3).is_err());
    /// ```
    pub fn nbr(&self, vertex: Vertex) -> Result<Vertex> {
        if vertex == self.v0 {
            Ok(self.v1)
        } else if vertex == self.v1 {
            Ok(self.v0)
        } else {
            Err(Error::NotAnEndpoint {
                vertex,
                edge: *self,
            })
        }
    }

    /// Returns whether both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.v0 == self.v1
    }
}

//
// Trait implementations
//

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.v0, self.v1)
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from((v0, v1): (Vertex, Vertex)) -> Self {
        Self::new(v0, v1)
    }
}
