//! Network measures computed over a [`Graph`](crate::graph::Graph).
//!
//! Every function borrows the graph and only goes through its public queries, so the results
//! are the same whichever backend stores it. Measures whose denominator is structurally zero fail
//! with [`Error::UndefinedMetric`](crate::error::Error::UndefinedMetric) rather than returning a
//! made-up number.

mod centrality;
mod clustering;
mod shortest_path;
mod similarity;

pub use centrality::{
    average_neighbor_degree, degree_centralities, degree_centrality, popular_vertex,
};
pub use clustering::{average_clustering_coefficient, local_clustering_coefficient};
pub use shortest_path::{dijkstra, dijkstra_to, popular_distance, shortest_path};
pub use similarity::jaccard_similarity;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::graph::{BackendKind, Graph};
    use crate::record::Record;

    /// Builds the same graph with every backend.
    pub fn each_backend(records: &[Record]) -> Vec<Graph> {
        BackendKind::ALL
            .into_iter()
            .map(|kind| Graph::new(kind, records.to_vec()).unwrap())
            .collect()
    }

    pub fn triangle() -> Vec<Record> {
        vec![Record::new(1, 2), Record::new(2, 3), Record::new(1, 3)]
    }

    pub fn path() -> Vec<Record> {
        vec![Record::new(1, 2), Record::new(2, 3), Record::new(3, 4)]
    }

    /// A triangle 1-2-3 with a tail 3-4 and 5 on its own.
    pub fn kite() -> Vec<Record> {
        vec![
            Record::new(1, 2),
            Record::new(2, 3),
            Record::new(1, 3),
            Record::new(3, 4),
            Record::new(5, 5),
        ]
    }
}
