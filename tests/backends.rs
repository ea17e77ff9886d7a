//! Every backend must answer every query the same way for the same records.

use std::collections::{BTreeSet, HashSet};

use netgraph::{
    analysis::{dijkstra, dijkstra_to, jaccard_similarity, local_clustering_coefficient},
    edge::{Edge, Vertex},
    graph::{BackendKind, Graph},
    record::Record,
    Error,
};

/// A graph with a dense part, a weighted part, a repeated edge, non-contiguous and negative
/// identifiers and an isolated vertex.
fn records() -> Vec<Record> {
    vec![
        Record::new(1, 2),
        Record::new(2, 3),
        Record::new(3, 1),
        Record::new(3, 4),
        Record::weighted(4, 10, 2.5),
        Record::weighted(10, -7, 0.5),
        Record::new(-7, 4),
        Record::new(2, 1),
        Record::weighted(100, 2, 4.0),
        Record::new(55, 55),
    ]
}

fn graphs() -> Vec<Graph> {
    BackendKind::ALL
        .into_iter()
        .map(|kind| Graph::new(kind, records()).unwrap())
        .collect()
}

fn vertex_set(graph: &Graph) -> BTreeSet<Vertex> {
    graph.vertices().collect()
}

fn edge_set(graph: &Graph) -> BTreeSet<Edge> {
    graph.edges().collect()
}

#[test]
fn counts_agree() {
    for graph in graphs() {
        assert_eq!(graph.vertex_count(), 8, "{}", graph.kind());
        assert_eq!(graph.edge_count(), 8, "{}", graph.kind());
        assert!(graph.has_weights());
    }
}

#[test]
fn vertices_and_edges_agree() {
    let graphs = graphs();
    let reference = &graphs[0];

    for graph in &graphs {
        assert_eq!(graph.vertices().count(), graph.vertex_count());
        assert_eq!(graph.edges().count(), graph.edge_count());
        assert_eq!(vertex_set(graph), vertex_set(reference));
        assert_eq!(edge_set(graph), edge_set(reference));
    }
}

#[test]
fn declared_edges_are_symmetric() {
    for graph in graphs() {
        for record in records().into_iter().filter(|r| r.v0 != r.v1) {
            let (a, b) = (record.v0, record.v1);

            assert!(graph.has_edge(a, b).unwrap());
            assert!(graph.has_edge(b, a).unwrap());
            assert!(graph.neighbors(a).unwrap().any(|n| n == b));
            assert!(graph.neighbors(b).unwrap().any(|n| n == a));
            assert_eq!(graph.weight(a, b).unwrap(), graph.weight(b, a).unwrap());
        }
    }
}

#[test]
fn degree_matches_distinct_neighbors() {
    for graph in graphs() {
        for vertex in graph.vertices() {
            let neighbors: Vec<Vertex> = graph.neighbors(vertex).unwrap().collect();
            let distinct: HashSet<Vertex> = neighbors.iter().copied().collect();

            assert_eq!(neighbors.len(), distinct.len());
            assert_eq!(graph.degree(vertex).unwrap(), neighbors.len());
        }
    }
}

#[test]
fn queries_agree_pairwise() {
    let graphs = graphs();
    let reference = &graphs[0];
    let vertices: Vec<Vertex> = vertex_set(reference).into_iter().collect();

    for graph in &graphs[1..] {
        for &a in &vertices {
            assert_eq!(graph.degree(a), reference.degree(a));
            for &b in &vertices {
                assert_eq!(graph.has_edge(a, b), reference.has_edge(a, b));
                assert_eq!(graph.weight(a, b), reference.weight(a, b));
            }
        }
    }
}

#[test]
fn weights() {
    for graph in graphs() {
        assert_eq!(graph.weight(10, 4).unwrap(), Some(2.5));
        assert_eq!(graph.weight(1, 2).unwrap(), Some(1.0));
        assert_eq!(
            graph.weight(1, 4),
            Err(Error::MissingEdge { v0: 1, v1: 4 })
        );
    }
}

#[test]
fn clustering_in_unit_interval() {
    for graph in graphs() {
        for vertex in graph.vertices() {
            let c = local_clustering_coefficient(&graph, vertex).unwrap();

            assert!((0.0..=1.0).contains(&c), "{vertex}: {c}");
        }
    }
}

#[test]
fn jaccard_symmetric() {
    for graph in graphs() {
        let vertices: Vec<Vertex> = graph.vertices().collect();
        for &a in &vertices {
            for &b in &vertices {
                let ab = jaccard_similarity(&graph, a, b);
                let ba = jaccard_similarity(&graph, b, a);

                match (ab, ba) {
                    (Ok(ab), Ok(ba)) => assert_eq!(ab, ba),
                    (Err(Error::UndefinedMetric { .. }), Err(Error::UndefinedMetric { .. })) => {
                        assert!(a == 55 && b == 55)
                    }
                    other => panic!("asymmetric result for ({a}, {b}): {other:?}"),
                }
            }
        }
    }
}

#[test]
fn dijkstra_agrees() {
    let graphs = graphs();
    let reference = dijkstra(&graphs[0], 1).unwrap();

    // 10 is reached through -7 (3 + 0.5) rather than straight from 4 (2 + 2.5).
    assert_eq!(reference[&-7], 3.0);
    assert_eq!(reference[&10], 3.5);
    assert_eq!(reference[&100], 5.0);
    assert_eq!(reference[&55], f64::INFINITY);

    for graph in &graphs {
        assert_eq!(dijkstra(graph, 1).unwrap(), reference);
        for vertex in graph.vertices() {
            assert_eq!(dijkstra_to(graph, vertex, vertex).unwrap(), Some(0.0));
        }
    }
}

#[test]
fn invalid_vertex_everywhere() {
    for graph in graphs() {
        let missing = Error::InvalidVertex { vertices: vec![8] };

        assert_eq!(graph.has_edge(1, 8), Err(missing.clone()));
        assert_eq!(graph.degree(8), Err(missing.clone()));
        assert_eq!(graph.weight(8, 1), Err(missing));
        assert!(graph.neighbors(8).is_err());
        assert!(!graph.has_vertex(8));
    }
}
