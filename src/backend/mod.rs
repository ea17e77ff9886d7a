//! Storage strategies for undirected graphs.
//!
//! Every backend answers the same queries with the same results for the same input, they differ
//! only in memory layout and complexity:
//!
//! | backend | `has_edge`/`weight` | `neighbors`/`degree` | memory |
//! |---|---|---|---|
//! | [`SetBackend`] | O(1) | O(E) | O(V + E) |
//! | [`MatrixBackend`] | O(1) | O(V) | O(V²) |
//! | [`ListBackend`] | O(deg) | O(deg) | O(V + E) |
//!
//! Backends are built once from a sequence of [`Record`]s and are read-only afterwards. The
//! duplicate, self-loop and weight rules are applied by [`EdgeList::from_records`] before any
//! backend sees the input, which is what keeps them equivalent.

use std::{
    collections::{hash_map::Entry, HashMap, HashSet},
    fmt::Debug,
};

use tracing::debug;

use crate::{
    edge::{Edge, Vertex},
    error::{Error, Result},
    record::Record,
};

mod list;
mod matrix;
mod set;

pub use list::ListBackend;
pub use matrix::MatrixBackend;
pub use set::SetBackend;

/// Weight of an edge whose record carries none.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// The query contract shared by all storage strategies.
///
/// Vertex arguments are expected to be vertices of the graph; backends answer `false`, `0`,
/// `None` or an empty sequence otherwise. [`Graph`](crate::graph::Graph) validates them first.
///
/// Every call to a sequence-producing method returns a fresh iterator, so any number of them can
/// be alive at the same time.
pub trait Backend: Debug {
    /// Returns the number of distinct vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the number of distinct undirected edges.
    fn edge_count(&self) -> usize;

    fn has_vertex(&self, vertex: Vertex) -> bool;

    fn has_edge(&self, v0: Vertex, v1: Vertex) -> bool;

    /// Returns whether any input record carried an explicit weight.
    fn has_weights(&self) -> bool;

    /// Returns the distinct neighbors of `vertex`.
    fn neighbors(&self, vertex: Vertex) -> Box<dyn Iterator<Item = Vertex> + '_>;

    /// Returns the number of distinct neighbors of `vertex`.
    fn degree(&self, vertex: Vertex) -> usize {
        self.neighbors(vertex).count()
    }

    /// Returns the weight of the edge between `v0` and `v1`, `None` if the graph is unweighted
    /// or there is no such edge.
    fn weight(&self, v0: Vertex, v1: Vertex) -> Option<f64>;

    fn vertices(&self) -> Box<dyn Iterator<Item = Vertex> + '_>;

    /// Returns every undirected edge exactly once.
    fn edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
}

/// Validated, deduplicated input shared by the backend constructors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeList {
    /// Distinct vertices in first-seen order.
    pub(crate) vertices: Vec<Vertex>,
    /// Distinct canonical edges in first-seen order, with their effective weight.
    pub(crate) edges: Vec<(Edge, f64)>,
    pub(crate) weighted: bool,
}

impl EdgeList {
    /// Normalises a sequence of records.
    ///
    /// - The list is weighted iff at least one record carries a weight, records without one get
    ///   [`DEFAULT_WEIGHT`].
    /// - Weights must be finite and nonnegative.
    /// - A self-loop record registers its vertex but no edge.
    /// - Repeated edges collapse into one. Repeats must agree on the effective weight, otherwise
    ///   [`Error::ConflictingWeight`] is returned.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut list = Self::default();
        let mut seen_vertices = HashSet::new();
        // Position of each edge in `list.edges`.
        let mut seen_edges: HashMap<Edge, usize> = HashMap::new();

        for record in records {
            let edge = record.edge();

            if let Some(weight) = record.weight {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(Error::InvalidWeight { edge, weight });
                }
                list.weighted = true;
            }

            for vertex in [edge.v0(), edge.v1()] {
                if seen_vertices.insert(vertex) {
                    list.vertices.push(vertex);
                }
            }

            if edge.is_loop() {
                debug!(vertex = edge.v0(), "self-loop record registers its vertex only");
                continue;
            }

            let weight = record.weight.unwrap_or(DEFAULT_WEIGHT);
            match seen_edges.entry(edge) {
                Entry::Occupied(entry) => {
                    let first = list.edges[*entry.get()].1;
                    if first != weight {
                        return Err(Error::ConflictingWeight {
                            edge,
                            first,
                            second: weight,
                        });
                    }
                    debug!(%edge, "merged duplicate edge record");
                }
                Entry::Vacant(entry) => {
                    entry.insert(list.edges.len());
                    list.edges.push((edge, weight));
                }
            }
        }

        Ok(list)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }
}
