//! Cumulative encounter counts against elapsed time.
//!
//! Both tallies emit one `(elapsed_secs, running_total)` row per distinct
//! contact timestamp, after every contact at that timestamp is counted.
//! Time zero is `start` when given, otherwise the earliest contact.  An
//! elapsed time outside the `i64` range is a [`ct_core::CtError::TimeOverflow`].

use rustc_hash::FxHashSet;

use ct_core::{Contact, CtResult, EdgeKey, Timestamp};

/// Running total of all contacts.
pub fn tally(contacts: Vec<Contact>, start: Option<Timestamp>) -> CtResult<Vec<(i64, usize)>> {
    cumulative(contacts, start, |_| true)
}

/// Running total of distinct node pairs met so far.
pub fn unique_tally(contacts: Vec<Contact>, start: Option<Timestamp>) -> CtResult<Vec<(i64, usize)>> {
    let mut seen: FxHashSet<EdgeKey> = FxHashSet::default();
    cumulative(contacts, start, |c| seen.insert(c.key()))
}

fn cumulative(
    mut contacts: Vec<Contact>,
    start:        Option<Timestamp>,
    mut counts:   impl FnMut(&Contact) -> bool,
) -> CtResult<Vec<(i64, usize)>> {
    contacts.sort_by_key(|c| c.time);
    let Some(origin) = start.or_else(|| contacts.first().map(|c| c.time)) else {
        return Ok(vec![]);
    };

    let mut rows: Vec<(i64, usize)> = Vec::new();
    let mut total = 0usize;
    for group in contacts.chunk_by(|a, b| a.time == b.time) {
        total += group.iter().filter(|&c| counts(c)).count();
        rows.push((group[0].time.since(origin)?, total));
    }
    Ok(rows)
}
