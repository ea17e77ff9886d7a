use std::collections::{HashMap, HashSet};

use super::{Backend, EdgeList};
use crate::edge::{Edge, Vertex};

/// A set of vertices and a set of weighted edges.
///
/// Neighborhood queries scan every edge, this is the reference backend the others are checked
/// against rather than one meant for large graphs.
#[derive(Clone, Debug, Default)]
pub struct SetBackend {
    vertices: HashSet<Vertex>,
    /// Each canonical edge with its weight.
    edges: HashMap<Edge, f64>,
    weighted: bool,
}

impl SetBackend {
    pub fn new(list: &EdgeList) -> Self {
        Self {
            vertices: list.vertices.iter().copied().collect(),
            edges: list.edges.iter().copied().collect(),
            weighted: list.weighted,
        }
    }
}

impl Backend for SetBackend {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn has_vertex(&self, vertex: Vertex) -> bool {
        self.vertices.contains(&vertex)
    }

    fn has_edge(&self, v0: Vertex, v1: Vertex) -> bool {
        self.edges.contains_key(&Edge::new(v0, v1))
    }

    fn has_weights(&self) -> bool {
        self.weighted
    }

    fn neighbors(&self, vertex: Vertex) -> Box<dyn Iterator<Item = Vertex> + '_> {
        // Edges are unique and never loops, so each one contributes at most one neighbor.
        Box::new(self.edges.keys().filter_map(move |edge| edge.nbr(vertex).ok()))
    }

    fn weight(&self, v0: Vertex, v1: Vertex) -> Option<f64> {
        if !self.weighted {
            return None;
        }

        self.edges.get(&Edge::new(v0, v1)).copied()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = Vertex> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.edges.keys().copied())
    }
}
