use std::collections::HashSet;

use crate::{
    edge::Vertex,
    error::{Error, Result},
    graph::Graph,
};

/// Returns the Jaccard similarity of two vertices, the size of the intersection of their
/// neighborhoods over the size of the union.
///
/// Undefined when neither vertex has a neighbor.
pub fn jaccard_similarity(graph: &Graph, v0: Vertex, v1: Vertex) -> Result<f64> {
    graph.ensure_vertices(&[v0, v1])?;

    let n0: HashSet<Vertex> = graph.neighbors(v0)?.collect();
    let n1: HashSet<Vertex> = graph.neighbors(v1)?.collect();

    let union = n0.union(&n1).count();
    if union == 0 {
        return Err(Error::undefined(
            "jaccard similarity",
            format!("vertices {v0} and {v1} both have no neighbors"),
        ));
    }

    let intersection = n0.intersection(&n1).count();
    Ok(intersection as f64 / union as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analysis::fixtures::*, record::Record};

    #[test]
    fn kite_pairs() {
        for graph in each_backend(&kite()) {
            // N(1) = {2, 3}, N(2) = {1, 3}
            assert_eq!(jaccard_similarity(&graph, 1, 2).unwrap(), 1.0 / 3.0);
            // N(4) = {3}, N(1) = {2, 3}
            assert_eq!(jaccard_similarity(&graph, 4, 1).unwrap(), 0.5);
            // N(5) = {}
            assert_eq!(jaccard_similarity(&graph, 5, 3).unwrap(), 0.0);
        }
    }

    #[test]
    fn identical_neighborhoods() {
        let records = vec![
            Record::new(1, 3),
            Record::new(1, 4),
            Record::new(2, 3),
            Record::new(2, 4),
        ];
        for graph in each_backend(&records) {
            assert_eq!(jaccard_similarity(&graph, 1, 2).unwrap(), 1.0);
        }
    }

    #[test]
    fn symmetric() {
        for graph in each_backend(&kite()) {
            for a in 1..=4 {
                for b in 1..=4 {
                    assert_eq!(
                        jaccard_similarity(&graph, a, b).unwrap(),
                        jaccard_similarity(&graph, b, a).unwrap()
                    );
                }
            }
        }
    }

    #[test]
    fn both_isolated() {
        let records = vec![Record::new(1, 1), Record::new(2, 2)];
        for graph in each_backend(&records) {
            assert!(matches!(
                jaccard_similarity(&graph, 1, 2),
                Err(Error::UndefinedMetric { .. })
            ));
        }
    }

    #[test]
    fn invalid_vertices() {
        for graph in each_backend(&triangle()) {
            assert_eq!(
                jaccard_similarity(&graph, 7, 8),
                Err(Error::InvalidVertex {
                    vertices: vec![7, 8]
                })
            );
        }
    }
}
