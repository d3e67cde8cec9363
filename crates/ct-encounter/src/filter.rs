//! Session-level filters applied before extraction.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

use ct_core::{Node, Session, Timestamp};

/// Keep sessions still open at `start` (`end >= start`), left-trimming any
/// that began earlier so every kept session starts at or after `start`.
///
/// Used to align a trace with the moment diffusion is seeded.
pub fn filter_by_start(sessions: Vec<Session>, start: Timestamp) -> Vec<Session> {
    sessions
        .into_iter()
        .filter(|s| s.end >= start)
        .map(|mut s| {
            s.start = s.start.max(start);
            s
        })
        .collect()
}

/// Keep only the sessions of the given nodes.
pub fn filter_by_nodes(sessions: Vec<Session>, nodes: &FxHashSet<Node>) -> Vec<Session> {
    sessions.into_iter().filter(|s| nodes.contains(&s.node)).collect()
}

/// Number of sessions open after each distinct start/end timestamp.
///
/// At a timestamp where some sessions end and others start, both are
/// applied before the count is recorded.
pub fn active_sessions(sessions: &[Session]) -> Vec<(Timestamp, i64)> {
    // timestamp → (starts, ends)
    let mut deltas: BTreeMap<Timestamp, (i64, i64)> = BTreeMap::new();
    for s in sessions {
        deltas.entry(s.start).or_default().0 += 1;
        deltas.entry(s.end).or_default().1 += 1;
    }

    let mut active = 0i64;
    deltas
        .into_iter()
        .map(|(t, (starts, ends))| {
            active += starts - ends;
            (t, active)
        })
        .collect()
}
