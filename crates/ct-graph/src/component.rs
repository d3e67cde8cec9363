//! Largest connected component (LCC) of the contact graph.
//!
//! Diffusion from a node outside the giant component can only ever reach its
//! own small island, so traces are restricted to the LCC before simulation.

use rustc_hash::{FxHashMap, FxHashSet};

use ct_core::{Endpoints, Node};

use crate::{GraphError, GraphResult};

/// Node set of the largest connected component of the undirected graph
/// whose edges are the endpoint pairs of `records`.
///
/// Components are discovered by iterative DFS (explicit stack) starting from
/// nodes in first-seen order.  A component holding more than half of all
/// nodes is returned as soon as it is found; otherwise its nodes are removed
/// from the adjacency map and the search continues.  Ties go to the
/// first-found component.
pub fn largest_component<E: Endpoints>(records: &[E]) -> GraphResult<FxHashSet<Node>> {
    let (mut adjacency, order) = adjacency(records);

    let total = adjacency.len();
    if total == 0 {
        return Err(GraphError::EmptyGraph);
    }

    let mut best: Option<FxHashSet<Node>> = None;
    let mut found = 0usize;

    for start in &order {
        if !adjacency.contains_key(start) {
            continue;
        }
        let component = traverse(&adjacency, start);
        found += 1;

        if component.len() * 2 > total {
            tracing::debug!(size = component.len(), total, found, "giant component found early");
            return Ok(component);
        }

        for node in &component {
            adjacency.remove(node);
        }
        if best.as_ref().is_none_or(|b| component.len() > b.len()) {
            best = Some(component);
        }
    }

    let best = best.unwrap_or_default();
    tracing::debug!(size = best.len(), total, found, "largest component");
    Ok(best)
}

/// Keep only the records whose endpoints both lie in `component`.
///
/// Records straddling the component boundary are dropped, not trimmed.
pub fn filter_to_component<E: Endpoints>(records: Vec<E>, component: &FxHashSet<Node>) -> Vec<E> {
    records
        .into_iter()
        .filter(|r| {
            let (a, b) = r.endpoints();
            component.contains(a) && component.contains(b)
        })
        .collect()
}

/// Undirected adjacency of the endpoint pairs of `records`, plus the nodes
/// in first-seen order.  A self-pair lists its node as its own neighbour.
pub(crate) fn adjacency<E: Endpoints>(records: &[E]) -> (FxHashMap<Node, FxHashSet<Node>>, Vec<Node>) {
    let mut adjacency: FxHashMap<Node, FxHashSet<Node>> = FxHashMap::default();
    let mut order: Vec<Node> = Vec::new();

    for r in records {
        let (a, b) = r.endpoints();
        for (from, to) in [(a, b), (b, a)] {
            adjacency
                .entry(from.clone())
                .or_insert_with(|| {
                    order.push(from.clone());
                    FxHashSet::default()
                })
                .insert(to.clone());
        }
    }
    (adjacency, order)
}

/// All nodes reachable from `start`.
fn traverse(adjacency: &FxHashMap<Node, FxHashSet<Node>>, start: &Node) -> FxHashSet<Node> {
    let mut visited: FxHashSet<Node> = FxHashSet::default();
    let mut stack: Vec<&Node> = vec![start];

    while let Some(node) = stack.pop() {
        if !visited.insert(node.clone()) {
            continue;
        }
        if let Some(neighbours) = adjacency.get(node) {
            stack.extend(neighbours.iter().filter(|n| !visited.contains(*n)));
        }
    }
    visited
}
