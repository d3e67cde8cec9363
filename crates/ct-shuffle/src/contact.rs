//! Contact-level null models (DCWB, DCB, DCW, D).
//!
//! Every algorithm first groups contacts by unordered node pair
//! ([`group_by_edge`]); the repeat count `R(e)` of an edge is the length of
//! its time list.  Shuffled contacts are emitted with the pair in canonical
//! `(low, high)` order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use ct_core::{Contact, EdgeKey, Node, ShuffleRng, Timestamp};
use ct_graph::{EdgeGroup, group_by_edge, node_degrees};

use crate::{ShuffleError, ShuffleResult};

/// The closed set of contact shufflers, selectable by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContactShuffle {
    /// No randomisation; the input is echoed unchanged.
    Original,
    /// Permute edge keys among edges with the same repeat count.
    Dcwb,
    /// Permute edge keys against time lists globally.
    Dcb,
    /// Redraw every edge's times from the shuffled global time pool.
    Dcw,
    /// Configuration model: rewire stubs, then deal out repeat counts and
    /// times.
    D,
}

impl ContactShuffle {
    pub const ALL: [ContactShuffle; 5] = [
        ContactShuffle::Original,
        ContactShuffle::Dcwb,
        ContactShuffle::Dcb,
        ContactShuffle::Dcw,
        ContactShuffle::D,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContactShuffle::Original => "Original",
            ContactShuffle::Dcwb     => "DCWB",
            ContactShuffle::Dcb      => "DCB",
            ContactShuffle::Dcw      => "DCW",
            ContactShuffle::D        => "D",
        }
    }

    /// Run the algorithm.  The output always has `contacts.len()` records.
    pub fn apply(self, contacts: Vec<Contact>, rng: &mut ShuffleRng) -> ShuffleResult<Vec<Contact>> {
        let shuffled = match self {
            ContactShuffle::Original => return Ok(contacts),
            ContactShuffle::Dcwb     => dcwb(&contacts, rng),
            ContactShuffle::Dcb      => dcb(&contacts, rng),
            ContactShuffle::Dcw      => dcw(&contacts, rng),
            ContactShuffle::D        => configuration_model(&contacts, rng)?,
        };
        tracing::debug!(algorithm = self.name(), contacts = shuffled.len(), seed = rng.seed(), "shuffled contacts");
        Ok(shuffled)
    }
}

impl FromStr for ContactShuffle {
    type Err = ShuffleError;

    /// Case-insensitive.  `"_"` selects the most destructive model, `D`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "original"  => Ok(ContactShuffle::Original),
            "dcwb"      => Ok(ContactShuffle::Dcwb),
            "dcb"       => Ok(ContactShuffle::Dcb),
            "dcw"       => Ok(ContactShuffle::Dcw),
            "d" | "_"   => Ok(ContactShuffle::D),
            _           => Err(ShuffleError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for ContactShuffle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Algorithms ────────────────────────────────────────────────────────────────

fn dcwb(contacts: &[Contact], rng: &mut ShuffleRng) -> Vec<Contact> {
    let groups = group_by_edge(contacts);

    // repeat count → member groups, in first-seen order
    let mut buckets: BTreeMap<usize, Vec<&EdgeGroup>> = BTreeMap::new();
    for g in &groups {
        buckets.entry(g.repeats()).or_default().push(g);
    }

    let mut out = Vec::with_capacity(contacts.len());
    for members in buckets.values() {
        let mut keys: Vec<&EdgeKey> = members.iter().map(|g| &g.key).collect();
        rng.shuffle(&mut keys);
        for (key, g) in keys.into_iter().zip(members) {
            emit(&mut out, key.low(), key.high(), &g.times);
        }
    }
    out
}

fn dcb(contacts: &[Contact], rng: &mut ShuffleRng) -> Vec<Contact> {
    let groups = group_by_edge(contacts);
    let mut keys: Vec<&EdgeKey> = groups.iter().map(|g| &g.key).collect();
    rng.shuffle(&mut keys);

    let mut out = Vec::with_capacity(contacts.len());
    for (key, g) in keys.into_iter().zip(&groups) {
        emit(&mut out, key.low(), key.high(), &g.times);
    }
    out
}

fn dcw(contacts: &[Contact], rng: &mut ShuffleRng) -> Vec<Contact> {
    let groups = group_by_edge(contacts);
    let mut pool: Vec<Timestamp> = contacts.iter().map(|c| c.time).collect();
    rng.shuffle(&mut pool);

    let mut out = Vec::with_capacity(contacts.len());
    let mut cursor = 0;
    for g in &groups {
        let drawn = &pool[cursor..cursor + g.repeats()];
        cursor += g.repeats();
        emit(&mut out, g.key.low(), g.key.high(), drawn);
    }
    out
}

/// Configuration model.
///
/// Each node enters the stub list once per distinct neighbour.  Stubs,
/// repeat counts, and times are shuffled independently; then for each
/// shuffled repeat count `r` the next two stubs form an edge that receives
/// the next `r` times.  Self-pairs and duplicate pairs may be produced and
/// are kept.
fn configuration_model(contacts: &[Contact], rng: &mut ShuffleRng) -> ShuffleResult<Vec<Contact>> {
    let groups = group_by_edge(contacts);
    if let Some(g) = groups.iter().find(|g| g.key.is_self_pair()) {
        return Err(ShuffleError::SelfContact(g.key.low().clone()));
    }

    let mut stubs: Vec<Node> = node_degrees(&groups)
        .into_iter()
        .flat_map(|(node, degree)| std::iter::repeat_n(node, degree))
        .collect();
    let mut repeats: Vec<usize> = groups.iter().map(EdgeGroup::repeats).collect();
    let mut times: Vec<Timestamp> = groups.iter().flat_map(|g| g.times.iter().copied()).collect();

    rng.shuffle(&mut stubs);
    rng.shuffle(&mut times);
    rng.shuffle(&mut repeats);

    assert_eq!(stubs.len(), 2 * repeats.len(), "stub list must pair up into exactly one edge per repeat count");
    assert_eq!(times.len(), repeats.iter().sum::<usize>(), "time pool must match the total repeat count");

    let mut out = Vec::with_capacity(contacts.len());
    let (mut stub_cursor, mut time_cursor) = (0usize, 0usize);
    for &r in &repeats {
        let (a, b) = (&stubs[stub_cursor], &stubs[stub_cursor + 1]);
        stub_cursor += 2;
        emit(&mut out, a, b, &times[time_cursor..time_cursor + r]);
        time_cursor += r;
    }

    assert_eq!(stub_cursor, stubs.len(), "unconsumed stubs after pairing");
    assert_eq!(time_cursor, times.len(), "unconsumed times after pairing");

    tracing::debug!(stubs = stubs.len(), edges = repeats.len(), "configuration model rewired");
    Ok(out)
}

fn emit(out: &mut Vec<Contact>, a: &Node, b: &Node, times: &[Timestamp]) {
    out.extend(times.iter().map(|&time| Contact {
        node_a: a.clone(),
        node_b: b.clone(),
        time,
    }));
}
