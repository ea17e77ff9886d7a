//! Netgraph is a small toolkit for analysing undirected, optionally weighted networks stored with
//! one of several interchangeable storage strategies.
//!
//! # Basic usage
//!
//! The library is centered around the [`Graph`](graph::Graph) structure which is built from
//! already-parsed [`Record`](record::Record)s, one per `v0 v1 [weight]` line of an edge list.
//! The storage strategy is picked with a [`BackendKind`](graph::BackendKind); every strategy
//! answers queries identically, so the measures in [`analysis`] work with all of them.
//!
//! ```rust
//! use netgraph::analysis::{degree_centrality, dijkstra_to, local_clustering_coefficient};
//! use netgraph::graph::{BackendKind, Graph};
//! use netgraph::record::Record;
//!
//! // The storage strategy can come from configuration.
//! let kind: BackendKind = "matrix".parse().unwrap();
//!
//! let records = vec![
//!     Record::weighted(1, 2, 5.0),
//!     Record::weighted(2, 3, 1.0),
//!     Record::weighted(1, 3, 10.0),
//! ];
//! let graph = Graph::new(kind, records).unwrap();
//!
//! assert_eq!(degree_centrality(&graph, 1).unwrap(), 1.0);
//! assert_eq!(local_clustering_coefficient(&graph, 1).unwrap(), 1.0);
//!
//! // The detour through 2 is shorter than the direct edge.
//! assert_eq!(dijkstra_to(&graph, 1, 3).unwrap(), Some(6.0));
//! ```

pub mod analysis;
pub mod backend;
pub mod edge;
pub mod error;
pub mod graph;
pub mod record;
pub mod visualize;

pub use error::{Error, Result};
