use itertools::Itertools;

use crate::{
    edge::Vertex,
    error::{Error, Result},
    graph::Graph,
};

/// Returns the fraction of pairs of neighbors of `vertex` that are themselves adjacent.
///
/// Each unordered pair is checked once, so every triangle through `vertex` counts exactly once
/// against the `k(k - 1) / 2` possible pairs. Vertices with fewer than two neighbors can't close
/// a triangle and have a coefficient of `0`.
///
/// # Examples
///
/// ```
/// use netgraph::analysis::local_clustering_coefficient;
/// use netgraph::graph::{BackendKind, Graph};
/// use netgraph::record::Record;
///
/// let records = vec![Record::new(1, 2), Record::new(2, 3), Record::new(1, 3)];
/// let graph = Graph::new(BackendKind::Set, records).unwrap();
///
/// assert_eq!(local_clustering_coefficient(&graph, 1).unwrap(), 1.0);
/// ```
pub fn local_clustering_coefficient(graph: &Graph, vertex: Vertex) -> Result<f64> {
    // Materialised so the pairs below don't depend on a second traversal.
    let neighbors: Vec<Vertex> = graph.neighbors(vertex)?.collect();
    let k = neighbors.len();

    if k < 2 {
        return Ok(0.0);
    }

    let mut closed = 0usize;
    for (a, b) in neighbors.into_iter().tuple_combinations() {
        if graph.has_edge(a, b)? {
            closed += 1;
        }
    }

    let possible = k * (k - 1) / 2;
    Ok(closed as f64 / possible as f64)
}

/// Returns the mean of the local clustering coefficient over every vertex.
pub fn average_clustering_coefficient(graph: &Graph) -> Result<f64> {
    let n = graph.vertex_count();
    if n == 0 {
        return Err(Error::undefined(
            "average clustering coefficient",
            "the graph has no vertices",
        ));
    }

    let mut sum = 0.0;
    for vertex in graph.vertices() {
        sum += local_clustering_coefficient(graph, vertex)?;
    }

    Ok(sum / n as f64)
}
