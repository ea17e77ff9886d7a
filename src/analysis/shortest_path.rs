use std::{
    cmp::Ordering,
    collections::{BTreeMap, BinaryHeap, HashMap, HashSet},
};

use tracing::trace;

use super::centrality::popular_vertex;
use crate::{
    backend::DEFAULT_WEIGHT,
    edge::Vertex,
    error::{Error, Result},
    graph::Graph,
};

/// A tentative distance waiting in the frontier.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    distance: f64,
    vertex: Vertex,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    // Reversed for the max-heap: the smallest distance pops first, then the smallest vertex.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// State left behind by a run of Dijkstra's algorithm.
struct Search {
    /// Every vertex of the graph, `f64::INFINITY` where no path was found.
    distances: BTreeMap<Vertex, f64>,
    /// The vertex each finalised vertex was reached from.
    previous: HashMap<Vertex, Vertex>,
    finalized: HashSet<Vertex>,
}

impl Search {
    /// Runs Dijkstra's algorithm from `source`, stopping early once `target` is finalised.
    ///
    /// Vertices are finalised by increasing distance, ties broken by the smallest identifier, so
    /// the result doesn't depend on the backend's iteration order.
    fn run(graph: &Graph, source: Vertex, target: Option<Vertex>) -> Result<Self> {
        match target {
            Some(target) => graph.ensure_vertices(&[source, target])?,
            None => graph.ensure_vertices(&[source])?,
        }

        let mut distances: BTreeMap<Vertex, f64> =
            graph.vertices().map(|vertex| (vertex, f64::INFINITY)).collect();
        distances.insert(source, 0.0);

        let mut previous = HashMap::new();
        let mut finalized = HashSet::new();
        let mut frontier = BinaryHeap::new();
        frontier.push(Candidate {
            distance: 0.0,
            vertex: source,
        });

        while let Some(Candidate { distance, vertex }) = frontier.pop() {
            // Stale entry, the vertex was already reached by a shorter path.
            if !finalized.insert(vertex) {
                continue;
            }
            trace!(vertex, distance, "finalized");

            if target == Some(vertex) {
                break;
            }

            for neighbor in graph.neighbors(vertex)? {
                if finalized.contains(&neighbor) {
                    continue;
                }

                let weight = graph.weight(vertex, neighbor)?.unwrap_or(DEFAULT_WEIGHT);
                let alternative = distance + weight;
                let known = distances
                    .get(&neighbor)
                    .copied()
                    .unwrap_or(f64::INFINITY);

                if alternative < known {
                    distances.insert(neighbor, alternative);
                    previous.insert(neighbor, vertex);
                    frontier.push(Candidate {
                        distance: alternative,
                        vertex: neighbor,
                    });
                }
            }
        }

        Ok(Self {
            distances,
            previous,
            finalized,
        })
    }

    fn distance_to(&self, target: Vertex) -> Option<f64> {
        if !self.finalized.contains(&target) {
            return None;
        }

        self.distances.get(&target).copied()
    }
}

/// Returns the shortest distance from `source` to every vertex of the graph.
///
/// Unweighted edges count as [`DEFAULT_WEIGHT`]. Vertices that can't be reached from `source`
/// are present with a distance of `f64::INFINITY`.
///
/// # Examples
///
/// ```
/// use netgraph::analysis::dijkstra;
/// use netgraph::graph::{BackendKind, Graph};
/// use netgraph::record::Record;
///
/// let records = vec![
///     Record::weighted(1, 2, 5.0),
///     Record::weighted(2, 3, 1.0),
///     Record::weighted(1, 3, 10.0),
/// ];
/// let graph = Graph::new(BackendKind::List, records).unwrap();
/// let distances = dijkstra(&graph, 1).unwrap();
///
/// assert_eq!(distances[&2], 5.0);
/// assert_eq!(distances[&3], 6.0);
/// ```
pub fn dijkstra(graph: &Graph, source: Vertex) -> Result<BTreeMap<Vertex, f64>> {
    Ok(Search::run(graph, source, None)?.distances)
}

/// Returns the shortest distance from `source` to `target`, `None` if `target` can't be reached.
///
/// The search stops as soon as `target` is finalised.
pub fn dijkstra_to(graph: &Graph, source: Vertex, target: Vertex) -> Result<Option<f64>> {
    Ok(Search::run(graph, source, Some(target))?.distance_to(target))
}

/// Returns the vertices along a shortest path from `source` to `target`, both included. `None` if
/// `target` can't be reached.
pub fn shortest_path(graph: &Graph, source: Vertex, target: Vertex) -> Result<Option<Vec<Vertex>>> {
    let search = Search::run(graph, source, Some(target))?;
    if !search.finalized.contains(&target) {
        return Ok(None);
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(&vertex) = search.previous.get(&current) {
        path.push(vertex);
        current = vertex;
    }
    path.reverse();

    Ok(Some(path))
}

/// Returns the shortest distance from `vertex` to the [`popular_vertex`] of the graph, `None` if
/// it can't be reached.
pub fn popular_distance(graph: &Graph, vertex: Vertex) -> Result<Option<f64>> {
    match popular_vertex(graph)? {
        Some(popular) => dijkstra_to(graph, vertex, popular),
        // Only an empty graph has no popular vertex.
        None => Err(Error::InvalidVertex {
            vertices: vec![vertex],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analysis::fixtures::*, record::Record};

    fn weighted_triangle() -> Vec<Record> {
        vec![
            Record::weighted(1, 2, 5.0),
            Record::weighted(2, 3, 1.0),
            Record::weighted(1, 3, 10.0),
        ]
    }

    #[test]
    fn candidate_order() {
        let mut frontier = BinaryHeap::from([
            Candidate {
                distance: 2.0,
                vertex: 1,
            },
            Candidate {
                distance: 1.0,
                vertex: 9,
            },
            Candidate {
                distance: 1.0,
                vertex: 4,
            },
        ]);

        assert_eq!(frontier.pop().map(|c| c.vertex), Some(4));
        assert_eq!(frontier.pop().map(|c| c.vertex), Some(9));
        assert_eq!(frontier.pop().map(|c| c.vertex), Some(1));
    }

    #[test]
    fn path_distance() {
        for graph in each_backend(&path()) {
            assert_eq!(dijkstra_to(&graph, 1, 4).unwrap(), Some(3.0));
            assert_eq!(dijkstra_to(&graph, 4, 1).unwrap(), Some(3.0));
        }
    }

    #[test]
    fn path_absent_target() {
        for graph in each_backend(&path()) {
            assert_eq!(
                dijkstra_to(&graph, 1, 5),
                Err(Error::InvalidVertex { vertices: vec![5] })
            );
        }
    }

    #[test]
    fn absent_source() {
        for graph in each_backend(&path()) {
            assert_eq!(
                dijkstra(&graph, 0),
                Err(Error::InvalidVertex { vertices: vec![0] })
            );
        }
    }

    #[test]
    fn weighted_detour() {
        for graph in each_backend(&weighted_triangle()) {
            assert_eq!(dijkstra_to(&graph, 1, 3).unwrap(), Some(6.0));
            assert_eq!(shortest_path(&graph, 1, 3).unwrap(), Some(vec![1, 2, 3]));
        }
    }

    #[test]
    fn source_to_itself() {
        for graph in each_backend(&kite()) {
            for vertex in 1..=5 {
                assert_eq!(dijkstra_to(&graph, vertex, vertex).unwrap(), Some(0.0));
                assert_eq!(
                    shortest_path(&graph, vertex, vertex).unwrap(),
                    Some(vec![vertex])
                );
            }
        }
    }

    #[test]
    fn full_map_keeps_unreachable_vertices() {
        for graph in each_backend(&kite()) {
            let distances = dijkstra(&graph, 1).unwrap();

            assert_eq!(distances.len(), 5);
            assert_eq!(distances[&1], 0.0);
            assert_eq!(distances[&2], 1.0);
            assert_eq!(distances[&3], 1.0);
            assert_eq!(distances[&4], 2.0);
            assert_eq!(distances[&5], f64::INFINITY);
        }
    }

    #[test]
    fn unreachable_target() {
        for graph in each_backend(&kite()) {
            assert_eq!(dijkstra_to(&graph, 1, 5).unwrap(), None);
            assert_eq!(shortest_path(&graph, 5, 1).unwrap(), None);
        }
    }

    #[test]
    fn zero_weight_edges() {
        let records = vec![Record::weighted(1, 2, 0.0), Record::weighted(2, 3, 0.0)];
        for graph in each_backend(&records) {
            assert_eq!(dijkstra_to(&graph, 1, 3).unwrap(), Some(0.0));
        }
    }

    #[test]
    fn equal_paths_break_ties_on_smallest_vertex() {
        // 1 reaches 4 through either 2 or 3 at the same cost.
        let records = vec![
            Record::new(1, 3),
            Record::new(1, 2),
            Record::new(3, 4),
            Record::new(2, 4),
        ];
        for graph in each_backend(&records) {
            assert_eq!(shortest_path(&graph, 1, 4).unwrap(), Some(vec![1, 2, 4]));
        }
    }

    #[test]
    fn popular_distance_kite() {
        for graph in each_backend(&kite()) {
            assert_eq!(popular_distance(&graph, 3).unwrap(), Some(0.0));
            assert_eq!(popular_distance(&graph, 1).unwrap(), Some(1.0));
            assert_eq!(popular_distance(&graph, 4).unwrap(), Some(1.0));
            assert_eq!(popular_distance(&graph, 5).unwrap(), None);
        }
    }

    #[test]
    fn popular_distance_weighted() {
        // 2 is the most connected vertex, reached from 4 through 3.
        let records = vec![
            Record::weighted(1, 2, 4.0),
            Record::weighted(2, 3, 1.5),
            Record::weighted(2, 5, 1.0),
            Record::weighted(3, 4, 2.0),
        ];
        for graph in each_backend(&records) {
            assert_eq!(popular_distance(&graph, 4).unwrap(), Some(3.5));
        }
    }

    #[test]
    fn popular_distance_invalid_vertex() {
        for graph in each_backend(&[]) {
            assert!(matches!(
                popular_distance(&graph, 1),
                Err(Error::InvalidVertex { .. })
            ));
        }
        for graph in each_backend(&kite()) {
            assert!(matches!(
                popular_distance(&graph, 9),
                Err(Error::InvalidVertex { .. })
            ));
        }
    }
}
