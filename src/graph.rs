//! A module for working with graphs.

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{
    backend::{Backend, EdgeList, ListBackend, MatrixBackend, SetBackend},
    edge::{Edge, Vertex},
    error::{Error, Result},
    record::Record,
    visualize::{Render, Visualization},
};

/// The storage strategy backing a [`Graph`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// A set of vertices and a set of edges, see [`SetBackend`].
    Set,
    /// A dense adjacency matrix, see [`MatrixBackend`].
    Matrix,
    /// An adjacency list, see [`ListBackend`].
    #[default]
    List,
}

impl BackendKind {
    pub const ALL: [BackendKind; 3] = [BackendKind::Set, BackendKind::Matrix, BackendKind::List];

    fn build(self, list: &EdgeList) -> Box<dyn Backend> {
        match self {
            BackendKind::Set => Box::new(SetBackend::new(list)),
            BackendKind::Matrix => Box::new(MatrixBackend::new(list)),
            BackendKind::List => Box::new(ListBackend::new(list)),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::Set => "set",
            BackendKind::Matrix => "matrix",
            BackendKind::List => "list",
        };

        f.write_str(name)
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "set" | "sets" => Ok(BackendKind::Set),
            "matrix" => Ok(BackendKind::Matrix),
            "list" => Ok(BackendKind::List),
            _ => Err(Error::UnknownBackend(s.to_owned())),
        }
    }
}

/// An undirected, optionally weighted graph.
///
/// The graph is built in one pass from already-parsed records and can't be mutated afterwards.
/// Queries naming a vertex the graph doesn't contain fail with [`Error::InvalidVertex`].
#[derive(Debug)]
pub struct Graph {
    kind: BackendKind,
    backend: Box<dyn Backend>,
}

impl Graph {
    /// Builds a graph from `records` using the given storage strategy.
    ///
    /// The graph is weighted iff at least one record carries a weight. Self-loop records only
    /// register their vertex, and repeated edges must agree on their weight.
    ///
    /// # Examples
    ///
    /// ```
    /// use netgraph::graph::{BackendKind, Graph};
    /// use netgraph::record::Record;
    ///
    /// let records = vec![Record::new(1, 2), Record::new(2, 3), Record::new(1, 3)];
    /// let graph = Graph::new(BackendKind::Matrix, records).unwrap();
    ///
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edge_count(), 3);
    /// assert!(!graph.has_weights());
    /// ```
    pub fn new<I>(kind: BackendKind, records: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Record>,
    {
        let list = EdgeList::from_records(records.into_iter().map(Into::into))?;
        let backend = kind.build(&list);

        debug!(
            backend = %kind,
            vertices = backend.vertex_count(),
            edges = backend.edge_count(),
            weighted = backend.has_weights(),
            "built graph"
        );

        Ok(Self { kind, backend })
    }

    /// Returns the storage strategy in use.
    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    /// Returns the vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.backend.vertices()
    }

    /// Returns every edge once, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.backend.edges()
    }

    /// Returns the vertex count of the graph.
    pub fn vertex_count(&self) -> usize {
        self.backend.vertex_count()
    }

    /// Returns the edge count of the graph.
    pub fn edge_count(&self) -> usize {
        self.backend.edge_count()
    }

    pub fn has_vertex(&self, vertex: Vertex) -> bool {
        self.backend.has_vertex(vertex)
    }

    /// Returns whether the graph contains an edge between `v0` and `v1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use netgraph::graph::{BackendKind, Graph};
    ///
    /// let graph = Graph::new(BackendKind::Set, [(1, 2)]).unwrap();
    ///
    /// assert_eq!(graph.has_edge(2, 1).unwrap(), true);
    /// assert!(graph.has_edge(1, 3).is_err());
    /// ```
    pub fn has_edge(&self, v0: Vertex, v1: Vertex) -> Result<bool> {
        self.ensure_vertices(&[v0, v1])?;

        Ok(self.backend.has_edge(v0, v1))
    }

    /// Returns whether the edges carry weights.
    pub fn has_weights(&self) -> bool {
        self.backend.has_weights()
    }

    /// Returns the distinct neighbors of `vertex`, in no particular order.
    ///
    /// Each call returns an independent iterator.
    pub fn neighbors(&self, vertex: Vertex) -> Result<impl Iterator<Item = Vertex> + '_> {
        self.ensure_vertices(&[vertex])?;

        Ok(self.backend.neighbors(vertex))
    }

    /// Returns the number of distinct neighbors of `vertex`.
    pub fn degree(&self, vertex: Vertex) -> Result<usize> {
        self.ensure_vertices(&[vertex])?;

        Ok(self.backend.degree(vertex))
    }

    /// Returns the weight of the edge between `v0` and `v1`, `None` if the graph is unweighted.
    ///
    /// Fails with [`Error::MissingEdge`] if both vertices exist but aren't adjacent.
    pub fn weight(&self, v0: Vertex, v1: Vertex) -> Result<Option<f64>> {
        if !self.has_edge(v0, v1)? {
            return Err(Error::MissingEdge { v0, v1 });
        }

        Ok(self.backend.weight(v0, v1))
    }

    /// Computes the density of the graph, the ratio of edges with respect to the maximum possible
    /// edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use netgraph::graph::{BackendKind, Graph};
    ///
    /// let graph = Graph::new(BackendKind::List, [(1, 2), (1, 3)]).unwrap();
    /// assert_eq!(graph.density().unwrap(), 2.0 / 3.0);
    /// ```
    pub fn density(&self) -> Result<f64> {
        let vc = self.vertex_count() as f64;
        let ec = self.edge_count() as f64;

        if vc < 2.0 {
            return Err(Error::undefined(
                "density",
                "the graph has fewer than two vertices",
            ));
        }

        // Calculate the total number of possible edges given a vertex count.
        let pec = vc * (vc - 1.0) / 2.0;
        // Actual edges divided by the possible edges gives the density.
        Ok(ec / pec)
    }

    /// Collects the vertex labels and edge pairs a renderer needs.
    pub fn visualization(&self) -> Visualization {
        Visualization::new(self.vertices(), self.edges())
    }

    /// Hands the graph's [`Visualization`] over to `renderer`.
    pub fn visualize<R: Render>(&self, renderer: &mut R) {
        renderer.render(&self.visualization());
    }

    /// Fails with [`Error::InvalidVertex`] naming every vertex of `vertices` that isn't part of
    /// the graph.
    pub fn ensure_vertices(&self, vertices: &[Vertex]) -> Result<()> {
        let mut missing: Vec<Vertex> = vertices
            .iter()
            .copied()
            .filter(|&vertex| !self.backend.has_vertex(vertex))
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        missing.dedup();
        Err(Error::InvalidVertex { vertices: missing })
    }
}
