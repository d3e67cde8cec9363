//! The spreading loop.

use rustc_hash::FxHashSet;

use ct_core::{Contact, Node, Timestamp};

use crate::{DiffusionError, DiffusionResult, PrevalenceCurve, PrevalencePoint};

#[derive(Clone, Debug)]
pub struct DiffusionConfig {
    /// Initially infected node.
    pub source:       Node,
    /// Subtracted from every output timestamp.
    pub start_offset: Timestamp,
}

impl DiffusionConfig {
    pub fn new(source: impl Into<Node>, start_offset: Timestamp) -> Self {
        DiffusionConfig { source: source.into(), start_offset }
    }
}

/// Spread from `config.source` through `contacts`.
///
/// # Errors
///
/// [`DiffusionError::NoContacts`] when `contacts` is empty: the node
/// denominator would be zero.  [`DiffusionError::Time`] when a contact time
/// minus `start_offset` leaves the `i64` range.
pub fn simulate(mut contacts: Vec<Contact>, config: &DiffusionConfig) -> DiffusionResult<PrevalenceCurve> {
    if contacts.is_empty() {
        return Err(DiffusionError::NoContacts);
    }
    contacts.sort_by_key(|c| c.time);
    let nodes = distinct_nodes(&contacts);
    spread(&contacts, &nodes, &config.source, config.start_offset)
}

/// One curve per entry of `sources`, in the same order.
///
/// The contacts are sorted once and shared by every run.
pub fn simulate_sources(
    mut contacts: Vec<Contact>,
    sources:      &[Node],
    start_offset: Timestamp,
) -> DiffusionResult<Vec<PrevalenceCurve>> {
    if contacts.is_empty() {
        return Err(DiffusionError::NoContacts);
    }
    contacts.sort_by_key(|c| c.time);
    let nodes = distinct_nodes(&contacts);

    #[cfg(not(feature = "parallel"))]
    let curves = sources
        .iter()
        .map(|source| spread(&contacts, &nodes, source, start_offset))
        .collect::<DiffusionResult<Vec<PrevalenceCurve>>>()?;

    #[cfg(feature = "parallel")]
    let curves = {
        use rayon::prelude::*;
        sources
            .par_iter()
            .map(|source| spread(&contacts, &nodes, source, start_offset))
            .collect::<DiffusionResult<Vec<PrevalenceCurve>>>()?
    };

    Ok(curves)
}

fn distinct_nodes(contacts: &[Contact]) -> FxHashSet<&Node> {
    contacts.iter().flat_map(|c| [&c.node_a, &c.node_b]).collect()
}

/// `sorted` must be non-empty and sorted by time.
fn spread<'a>(
    sorted:       &'a [Contact],
    nodes:        &FxHashSet<&'a Node>,
    source:       &'a Node,
    start_offset: Timestamp,
) -> DiffusionResult<PrevalenceCurve> {
    if !nodes.contains(source) {
        tracing::warn!(%source, "source never appears in a contact; prevalence stays flat");
    }
    let total_nodes = nodes.len();

    let mut infected: FxHashSet<&Node> = FxHashSet::default();
    infected.insert(source);

    let mut points = Vec::new();
    let mut order: Vec<&Contact> = Vec::new();
    for group in sorted.chunk_by(|a, b| a.time == b.time) {
        order.clear();
        order.extend(group.iter().filter(|c| touches(c, &infected)));
        order.extend(group.iter().filter(|c| !touches(c, &infected)));

        for c in &order {
            if infected.contains(&c.node_a) != infected.contains(&c.node_b) {
                infected.insert(&c.node_a);
                infected.insert(&c.node_b);
            }
        }

        points.push(PrevalencePoint {
            time:     group[0].time.since(start_offset)?,
            infected: infected.len(),
            fraction: infected.len() as f64 / total_nodes as f64,
        });
    }

    tracing::debug!(
        %source,
        contacts = sorted.len(),
        total_nodes,
        infected = infected.len(),
        "diffusion finished"
    );
    Ok(PrevalenceCurve { total_nodes, points })
}

fn touches(c: &Contact, infected: &FxHashSet<&Node>) -> bool {
    infected.contains(&c.node_a) || infected.contains(&c.node_b)
}
