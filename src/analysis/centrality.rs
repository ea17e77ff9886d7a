use std::{cmp::Reverse, collections::BTreeMap};

use crate::{
    edge::Vertex,
    error::{Error, Result},
    graph::Graph,
};

/// Returns the degree of `vertex` normalised by the highest possible degree, `n - 1`.
///
/// # Examples
///
/// ```
/// use netgraph::analysis::degree_centrality;
/// use netgraph::graph::{BackendKind, Graph};
/// use netgraph::record::Record;
///
/// let records = vec![Record::new(1, 2), Record::new(1, 3)];
/// let graph = Graph::new(BackendKind::List, records).unwrap();
///
/// assert_eq!(degree_centrality(&graph, 1).unwrap(), 1.0);
/// assert_eq!(degree_centrality(&graph, 2).unwrap(), 0.5);
/// ```
pub fn degree_centrality(graph: &Graph, vertex: Vertex) -> Result<f64> {
    let degree = graph.degree(vertex)?;
    let n = graph.vertex_count();

    if n < 2 {
        return Err(Error::undefined(
            "degree centrality",
            "the graph has a single vertex",
        ));
    }

    Ok(degree as f64 / (n - 1) as f64)
}

/// Returns a mapping of every vertex to its degree centrality.
pub fn degree_centralities(graph: &Graph) -> Result<BTreeMap<Vertex, f64>> {
    graph
        .vertices()
        .map(|vertex| degree_centrality(graph, vertex).map(|centrality| (vertex, centrality)))
        .collect()
}

/// Returns the mean degree of the neighbors of `vertex`.
pub fn average_neighbor_degree(graph: &Graph, vertex: Vertex) -> Result<f64> {
    let mut count = 0usize;
    let mut sum = 0usize;
    for neighbor in graph.neighbors(vertex)? {
        count += 1;
        sum += graph.degree(neighbor)?;
    }

    if count == 0 {
        return Err(Error::undefined(
            "average neighbor degree",
            format!("vertex {vertex} has no neighbors"),
        ));
    }

    Ok(sum as f64 / count as f64)
}

/// Returns the vertex with the highest degree, the smallest identifier among equals. `None` if the
/// graph is empty.
pub fn popular_vertex(graph: &Graph) -> Result<Option<Vertex>> {
    let degrees = graph
        .vertices()
        .map(|vertex| graph.degree(vertex).map(|degree| (vertex, degree)))
        .collect::<Result<Vec<_>>>()?;

    Ok(degrees
        .into_iter()
        .max_by_key(|&(vertex, degree)| (degree, Reverse(vertex)))
        .map(|(vertex, _)| vertex))
}
