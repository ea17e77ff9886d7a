use std::collections::HashMap;

use nalgebra::DMatrix;
use tracing::warn;

use super::{Backend, EdgeList};
use crate::edge::{Edge, Vertex};

/// Above this many vertices the dense matrix gets large enough to be worth a warning.
const LARGE_MATRIX_VERTICES: usize = 4096;

/// A dense adjacency matrix of weights.
///
/// Vertices are mapped to rows/columns in first-seen order. `has_edge` and `weight` are O(1),
/// `neighbors` and `degree` walk a full row, and memory grows with the square of the vertex
/// count which makes this backend impractical beyond a few thousand vertices.
#[derive(Clone, Debug)]
pub struct MatrixBackend {
    /// A mapping of vertices to their row/column in the matrix.
    index: HashMap<Vertex, usize>,
    /// The inverse of `index`.
    vertices: Vec<Vertex>,
    /// Symmetric, `None` where there is no edge. Zero is a valid weight so absence can't be
    /// encoded as `0.0`.
    matrix: DMatrix<Option<f64>>,
    edge_count: usize,
    weighted: bool,
}

impl MatrixBackend {
    pub fn new(list: &EdgeList) -> Self {
        let n = list.vertices.len();
        if n > LARGE_MATRIX_VERTICES {
            warn!(vertices = n, cells = n * n, "allocating a large dense adjacency matrix");
        }

        let index: HashMap<Vertex, usize> = list
            .vertices
            .iter()
            .enumerate()
            .map(|(i, &vertex)| (vertex, i))
            .collect();

        let mut matrix = DMatrix::<Option<f64>>::from_element(n, n, None);
        for (edge, weight) in &list.edges {
            // The list's vertices include every endpoint of its edges.
            if let (Some(&i), Some(&j)) = (index.get(&edge.v0()), index.get(&edge.v1())) {
                // Both triangles are written as the graph is undirected.
                matrix[(i, j)] = Some(*weight);
                matrix[(j, i)] = Some(*weight);
            }
        }

        Self {
            index,
            vertices: list.vertices.clone(),
            matrix,
            edge_count: list.edges.len(),
            weighted: list.weighted,
        }
    }

    fn cell(&self, v0: Vertex, v1: Vertex) -> Option<f64> {
        let i = self.index.get(&v0)?;
        let j = self.index.get(&v1)?;

        self.matrix[(*i, *j)]
    }
}

impl Backend for MatrixBackend {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_vertex(&self, vertex: Vertex) -> bool {
        self.index.contains_key(&vertex)
    }

    fn has_edge(&self, v0: Vertex, v1: Vertex) -> bool {
        self.cell(v0, v1).is_some()
    }

    fn has_weights(&self) -> bool {
        self.weighted
    }

    fn neighbors(&self, vertex: Vertex) -> Box<dyn Iterator<Item = Vertex> + '_> {
        let Some(&i) = self.index.get(&vertex) else {
            return Box::new(std::iter::empty());
        };

        Box::new(
            (0..self.vertices.len())
                .filter(move |&j| self.matrix[(i, j)].is_some())
                .map(move |j| self.vertices[j]),
        )
    }

    fn degree(&self, vertex: Vertex) -> usize {
        self.index.get(&vertex).map_or(0, |&i| {
            self.matrix
                .row(i)
                .iter()
                .filter(|cell| cell.is_some())
                .count()
        })
    }

    fn weight(&self, v0: Vertex, v1: Vertex) -> Option<f64> {
        if !self.weighted {
            return None;
        }

        self.cell(v0, v1)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = Vertex> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let n = self.vertices.len();

        // Walk the upper triangle only, so each edge is yielded once.
        Box::new((0..n).flat_map(move |i| {
            (i + 1..n)
                .filter(move |&j| self.matrix[(i, j)].is_some())
                .map(move |j| Edge::new(self.vertices[i], self.vertices[j]))
        }))
    }
}
