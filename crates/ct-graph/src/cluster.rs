//! Structural metrics of the contact graph.
//!
//! Null-model comparisons look at clustering as well as spreading, so the
//! same edge streams that feed the component filter can be summarised here.
//! The graph is simple and undirected: repeat contacts collapse into one edge
//! and self-pairs are ignored.  Per-node sums run in first-seen node order so
//! results do not depend on hash iteration order.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use ct_core::{Endpoints, Node};

use crate::component::adjacency;
use crate::{GraphError, GraphResult};

/// One scalar summary of the graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClusterMetric {
    /// Mean local clustering coefficient.
    AverageClustering { count_zeros: bool },
    /// `2m / (n (n - 1))`.
    Density,
    /// Mean number of triangles through a node.
    Triangles,
    /// Mean square clustering coefficient.
    AverageSquareClustering,
}

impl ClusterMetric {
    /// Evaluate over the graph whose edges are the endpoint pairs of
    /// `records`.
    ///
    /// # Errors
    ///
    /// [`GraphError::EmptyGraph`] without records;
    /// [`GraphError::NoClustering`] when zeros are excluded and no node has
    /// a non-zero coefficient.
    pub fn compute<E: Endpoints>(self, records: &[E]) -> GraphResult<f64> {
        let graph = SimpleGraph::new(records)?;
        let value = match self {
            ClusterMetric::AverageClustering { count_zeros } => graph.average_clustering(count_zeros)?,
            ClusterMetric::Density                          => graph.density(),
            ClusterMetric::Triangles                        => graph.mean_triangles(),
            ClusterMetric::AverageSquareClustering          => graph.average_square_clustering(),
        };
        tracing::debug!(metric = %self, nodes = graph.order.len(), value, "graph metric");
        Ok(value)
    }
}

impl fmt::Display for ClusterMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClusterMetric::AverageClustering { .. } => "average-clustering",
            ClusterMetric::Density                  => "density",
            ClusterMetric::Triangles                => "triangles",
            ClusterMetric::AverageSquareClustering  => "average-square-clustering",
        })
    }
}

// ── Simple graph ──────────────────────────────────────────────────────────────

struct SimpleGraph {
    neighbours: FxHashMap<Node, FxHashSet<Node>>,
    order:      Vec<Node>,
}

impl SimpleGraph {
    fn new<E: Endpoints>(records: &[E]) -> GraphResult<Self> {
        let (mut neighbours, order) = adjacency(records);
        if order.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        for (node, adj) in neighbours.iter_mut() {
            adj.remove(node);
        }
        Ok(SimpleGraph { neighbours, order })
    }

    fn adj(&self, node: &Node) -> &FxHashSet<Node> {
        &self.neighbours[node]
    }

    fn degree(&self, node: &Node) -> usize {
        self.adj(node).len()
    }

    /// Triangles through `node`: linked pairs among its neighbours.
    fn triangles(&self, node: &Node) -> usize {
        let adj = self.adj(node);
        adj.iter().map(|u| self.adj(u).intersection(adj).count()).sum::<usize>() / 2
    }

    fn local_clustering(&self, node: &Node) -> f64 {
        let k = self.degree(node);
        if k < 2 {
            return 0.0;
        }
        2.0 * self.triangles(node) as f64 / (k * (k - 1)) as f64
    }

    fn average_clustering(&self, count_zeros: bool) -> GraphResult<f64> {
        let values: Vec<f64> = self
            .order
            .iter()
            .map(|v| self.local_clustering(v))
            .filter(|&c| count_zeros || c > 0.0)
            .collect();
        if values.is_empty() {
            return Err(GraphError::NoClustering);
        }
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }

    fn density(&self) -> f64 {
        let n = self.order.len();
        if n < 2 {
            return 0.0;
        }
        let degree_sum: usize = self.order.iter().map(|v| self.degree(v)).sum();
        // degree_sum = 2m
        degree_sum as f64 / (n * (n - 1)) as f64
    }

    fn mean_triangles(&self) -> f64 {
        let total: usize = self.order.iter().map(|v| self.triangles(v)).sum();
        total as f64 / self.order.len() as f64
    }

    /// Squares through `node` over the squares its neighbour pairs could
    /// close, following Lind et al.; zero when no square is possible.
    fn square_clustering(&self, node: &Node) -> f64 {
        let mut nbrs: Vec<&Node> = self.adj(node).iter().collect();
        nbrs.sort();

        let (mut squares_total, mut potential) = (0usize, 0usize);
        for (i, &u) in nbrs.iter().enumerate() {
            for &w in &nbrs[i + 1..] {
                let squares = self.adj(u).intersection(self.adj(w)).filter(|&x| x != node).count();
                let mut shared = squares + 1;
                if self.adj(u).contains(w) {
                    shared += 1;
                }
                squares_total += squares;
                potential += (self.degree(u) - shared) + (self.degree(w) - shared) + squares;
            }
        }
        if potential == 0 { 0.0 } else { squares_total as f64 / potential as f64 }
    }

    fn average_square_clustering(&self) -> f64 {
        let total: f64 = self.order.iter().map(|v| self.square_clustering(v)).sum();
        total / self.order.len() as f64
    }
}
