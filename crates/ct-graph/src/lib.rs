//! `ct-graph` — the contact graph implied by a collection of pair records.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`edges`]      | `EdgeGroup`, `group_by_edge`, `repeat_counts`, `node_degrees` |
//! | [`component`]  | `largest_component`, `filter_to_component`                |
//! | [`cluster`]    | `ClusterMetric`: clustering, density, triangles, squares  |
//! | [`error`]      | `GraphError`, `GraphResult<T>`                            |
//!
//! The graph is never materialised as a standalone structure: adjacency is
//! rebuilt from the records each call, undirected and unweighted for
//! component search and the cluster metrics, weighted by repeat count for
//! grouping.

pub mod cluster;
pub mod component;
pub mod edges;
pub mod error;


pub use cluster::ClusterMetric;
pub use component::{filter_to_component, largest_component};
pub use edges::{EdgeGroup, group_by_edge, node_degrees, repeat_counts};
pub use error::{GraphError, GraphResult};
