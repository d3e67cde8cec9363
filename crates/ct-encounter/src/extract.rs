//! Interval-overlap sweep from sessions to encounters.

use rustc_hash::FxHashMap;

use ct_core::{Encounter, Location, Session, Timestamp};

// ── Options & result ──────────────────────────────────────────────────────────

/// Knobs for [`extract_encounters`].
#[derive(Clone, Debug, Default)]
pub struct ExtractOptions {
    /// Only keep encounters still in progress after this time.  Encounters
    /// ending at or before it are dropped; ones straddling it are
    /// left-trimmed to start exactly at it.
    pub start_time: Option<Timestamp>,
}

/// Output of one extraction run.
#[derive(Clone, Debug, Default)]
pub struct Extraction {
    pub encounters: Vec<Encounter>,
    /// Overlapping session pairs that belonged to the same node.  These are
    /// data anomalies (e.g. after optimistic session adjustment or session
    /// shuffling) and are dropped rather than reported as encounters.
    pub self_overlaps: usize,
}

// ── Sweep ─────────────────────────────────────────────────────────────────────

/// Emit one encounter for every pair of sessions at the same location whose
/// intervals overlap.
///
/// Sessions are stably sorted by start, so for each session every still-open
/// candidate at its location started no later than it did.  A candidate is
/// closed once its `end <= start` of the session being processed; since
/// later sessions start no earlier, it can never overlap anything again.
///
/// The encounter interval is `[max(start), min(end)]` and its node order is
/// `(later session's node, earlier session's node)`.
pub fn extract_encounters(mut sessions: Vec<Session>, opts: &ExtractOptions) -> Extraction {
    sessions.sort_by_key(|s| s.start);

    // Location → indices of sessions that may still overlap a later one.
    let mut open: FxHashMap<Location, Vec<usize>> = FxHashMap::default();
    let mut out = Extraction::default();

    for (i, s) in sessions.iter().enumerate() {
        let candidates = open.entry(s.location.clone()).or_default();
        candidates.retain(|&c| sessions[c].end > s.start);

        for &c in candidates.iter() {
            let other = &sessions[c];
            if other.node == s.node {
                out.self_overlaps += 1;
                continue;
            }
            out.encounters.push(Encounter {
                node_a:   s.node.clone(),
                node_b:   other.node.clone(),
                start:    s.start.max(other.start),
                end:      s.end.min(other.end),
                location: Some(s.location.clone()),
            });
        }

        candidates.push(i);
    }

    if let Some(cutoff) = opts.start_time {
        out.encounters = clip_to_window(out.encounters, cutoff);
    }

    tracing::debug!(
        sessions      = sessions.len(),
        encounters    = out.encounters.len(),
        self_overlaps = out.self_overlaps,
        "extracted encounters"
    );
    out
}

/// Drop encounters that end by `cutoff`; left-trim the ones straddling it.
fn clip_to_window(encounters: Vec<Encounter>, cutoff: Timestamp) -> Vec<Encounter> {
    encounters
        .into_iter()
        .filter(|e| e.end > cutoff)
        .map(|mut e| {
            e.start = e.start.max(cutoff);
            e
        })
        .collect()
}
