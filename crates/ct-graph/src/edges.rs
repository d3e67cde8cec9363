//! Grouping of repeat contacts by unordered node pair.
//!
//! Groups are kept in first-seen order (an index map, not hash iteration
//! order), so the seeded shufflers downstream depend only on the input order
//! and the RNG.

use rustc_hash::FxHashMap;

use ct_core::{Contact, EdgeKey, Endpoints, Node, Timestamp};

/// All contact times of one node pair.
///
/// `times.len()` is the pair's repeat count (edge weight).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeGroup {
    pub key:   EdgeKey,
    pub times: Vec<Timestamp>,
}

impl EdgeGroup {
    #[inline]
    pub fn repeats(&self) -> usize {
        self.times.len()
    }
}

/// Group contacts by [`EdgeKey`], preserving first-seen pair order and the
/// input order of times within a pair.
pub fn group_by_edge(contacts: &[Contact]) -> Vec<EdgeGroup> {
    let mut index: FxHashMap<EdgeKey, usize> = FxHashMap::default();
    let mut groups: Vec<EdgeGroup> = Vec::new();

    for c in contacts {
        let key = c.key();
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(EdgeGroup { key, times: Vec::new() });
            groups.len() - 1
        });
        groups[slot].times.push(c.time);
    }
    groups
}

/// Number of records per unordered pair, first-seen order.
pub fn repeat_counts<E: Endpoints>(records: &[E]) -> Vec<(EdgeKey, usize)> {
    let mut index: FxHashMap<EdgeKey, usize> = FxHashMap::default();
    let mut counts: Vec<(EdgeKey, usize)> = Vec::new();

    for r in records {
        let key = r.edge_key();
        match index.get(&key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts
}

/// Distinct-neighbour count per node over a set of distinct pairs,
/// first-seen order.  A self-pair contributes one to its node.
pub fn node_degrees(groups: &[EdgeGroup]) -> Vec<(Node, usize)> {
    let mut index: FxHashMap<Node, usize> = FxHashMap::default();
    let mut degrees: Vec<(Node, usize)> = Vec::new();

    let mut bump = |node: &Node| match index.get(node) {
        Some(&slot) => degrees[slot].1 += 1,
        None => {
            index.insert(node.clone(), degrees.len());
            degrees.push((node.clone(), 1));
        }
    };

    for g in groups {
        bump(g.key.low());
        if !g.key.is_self_pair() {
            bump(g.key.high());
        }
    }
    degrees
}
