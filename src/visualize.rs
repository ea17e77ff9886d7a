//! The hand-off to an external renderer.
//!
//! The crate doesn't draw anything. A renderer receives the vertex labels and the deduplicated
//! edge pairs and gets no further access to the graph.

use crate::edge::{Edge, Vertex};

/// Graphs at or above this vertex count get the scalable layout.
pub const SCALABLE_LAYOUT_THRESHOLD: usize = 2000;

/// The layout a renderer is advised to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Force-directed placement.
    ForceDirected,
    /// Multiscale force-directed placement, for large graphs.
    ScalableForceDirected,
}

impl Layout {
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        if vertex_count < SCALABLE_LAYOUT_THRESHOLD {
            Layout::ForceDirected
        } else {
            Layout::ScalableForceDirected
        }
    }
}

/// Everything a renderer gets to see of a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Visualization {
    pub vertices: Vec<String>,
    pub edges: Vec<(String, String)>,
    pub layout: Layout,
}

impl Visualization {
    pub fn new(
        vertices: impl IntoIterator<Item = Vertex>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Self {
        let vertices: Vec<String> = vertices.into_iter().map(|v| v.to_string()).collect();
        let edges = edges
            .into_iter()
            .map(|edge| (edge.v0().to_string(), edge.v1().to_string()))
            .collect();

        Self {
            layout: Layout::for_vertex_count(vertices.len()),
            vertices,
            edges,
        }
    }
}

/// An external renderer, e.g. one driving graphviz.
pub trait Render {
    fn render(&mut self, view: &Visualization);
}
