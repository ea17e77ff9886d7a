use std::collections::{HashMap, HashSet};

use super::{Backend, EdgeList};
use crate::edge::{Edge, Vertex};

/// A mapping of vertices to their `(neighbor, weight)` pairs.
///
/// Every edge is stored under both endpoints.
#[derive(Clone, Debug, Default)]
pub struct ListBackend {
    adjacency: HashMap<Vertex, Vec<(Vertex, f64)>>,
    edge_count: usize,
    weighted: bool,
}

impl ListBackend {
    pub fn new(list: &EdgeList) -> Self {
        // Vertices without edges still need an (empty) entry.
        let mut adjacency: HashMap<Vertex, Vec<(Vertex, f64)>> = list
            .vertices
            .iter()
            .map(|&vertex| (vertex, Vec::new()))
            .collect();

        for &(edge, weight) in &list.edges {
            adjacency
                .entry(edge.v0())
                .or_default()
                .push((edge.v1(), weight));
            adjacency
                .entry(edge.v1())
                .or_default()
                .push((edge.v0(), weight));
        }

        Self {
            adjacency,
            edge_count: list.edges.len(),
            weighted: list.weighted,
        }
    }

    fn adjacent(&self, vertex: Vertex) -> &[(Vertex, f64)] {
        self.adjacency
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Backend for ListBackend {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_vertex(&self, vertex: Vertex) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    fn has_edge(&self, v0: Vertex, v1: Vertex) -> bool {
        self.adjacent(v0).iter().any(|&(neighbor, _)| neighbor == v1)
    }

    fn has_weights(&self) -> bool {
        self.weighted
    }

    fn neighbors(&self, vertex: Vertex) -> Box<dyn Iterator<Item = Vertex> + '_> {
        Box::new(self.adjacent(vertex).iter().map(|&(neighbor, _)| neighbor))
    }

    fn degree(&self, vertex: Vertex) -> usize {
        self.adjacent(vertex).len()
    }

    fn weight(&self, v0: Vertex, v1: Vertex) -> Option<f64> {
        if !self.weighted {
            return None;
        }

        self.adjacent(v0)
            .iter()
            .find(|&&(neighbor, _)| neighbor == v1)
            .map(|&(_, weight)| weight)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = Vertex> + '_> {
        Box::new(self.adjacency.keys().copied())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        // An edge is emitted from whichever endpoint is visited first, once a vertex is done
        // every edge touching it has been emitted.
        let mut emitted = HashSet::with_capacity(self.adjacency.len());
        let mut edges = Vec::with_capacity(self.edge_count);

        for (&vertex, adjacent) in &self.adjacency {
            for &(neighbor, _) in adjacent {
                if !emitted.contains(&neighbor) {
                    edges.push(Edge::new(vertex, neighbor));
                }
            }
            emitted.insert(vertex);
        }

        Box::new(edges.into_iter())
    }
}
