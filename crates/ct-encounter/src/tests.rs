//! Unit tests for ct-encounter.

use ct_core::{Contact, Encounter, Session, Timestamp};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sess(node: &str, start: i64, end: i64, loc: &str) -> Session {
    Session::new(node, Timestamp(start), Timestamp(end), loc).unwrap()
}

fn contact(a: &str, b: &str, t: i64) -> Contact {
    Contact::new(a, b, Timestamp(t))
}

/// `(sorted pair, start, end, location)` for order-independent comparison.
fn summary(e: &Encounter) -> (String, String, i64, i64, String) {
    let key = e.key();
    (
        key.low().to_string(),
        key.high().to_string(),
        e.start.0,
        e.end.0,
        e.location.as_ref().map(|l| l.to_string()).unwrap_or_default(),
    )
}

// ── Extraction ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod extract {
    use super::*;
    use crate::{ExtractOptions, extract_encounters};

    #[test]
    fn two_overlapping_sessions_make_one_encounter() {
        let out = extract_encounters(
            vec![sess("A", 0, 10, "L1"), sess("B", 5, 15, "L1")],
            &ExtractOptions::default(),
        );
        assert_eq!(out.encounters.len(), 1);
        let e = &out.encounters[0];
        assert_eq!(e.node_a.as_str(), "B");
        assert_eq!(e.node_b.as_str(), "A");
        assert_eq!((e.start, e.end), (Timestamp(5), Timestamp(10)));
        assert_eq!(e.location.as_ref().unwrap().as_str(), "L1");
    }

    #[test]
    fn input_order_does_not_matter() {
        let out = extract_encounters(
            vec![sess("B", 5, 15, "L1"), sess("A", 0, 10, "L1")],
            &ExtractOptions::default(),
        );
        assert_eq!(out.encounters.len(), 1);
        assert_eq!(summary(&out.encounters[0]), ("A".to_string(), "B".to_string(), 5, 10, "L1".to_string()));
    }

    #[test]
    fn different_locations_never_meet() {
        let out = extract_encounters(
            vec![sess("A", 0, 10, "L1"), sess("B", 0, 10, "L2")],
            &ExtractOptions::default(),
        );
        assert!(out.encounters.is_empty());
    }

    #[test]
    fn touching_sessions_do_not_meet() {
        let out = extract_encounters(
            vec![sess("A", 0, 10, "L1"), sess("B", 10, 20, "L1")],
            &ExtractOptions::default(),
        );
        assert!(out.encounters.is_empty());
    }

    #[test]
    fn contained_session_uses_inner_interval() {
        let out = extract_encounters(
            vec![sess("A", 0, 100, "L1"), sess("B", 20, 30, "L1")],
            &ExtractOptions::default(),
        );
        assert_eq!(summary(&out.encounters[0]), ("A".to_string(), "B".to_string(), 20, 30, "L1".to_string()));
    }

    #[test]
    fn self_overlap_is_dropped_and_counted() {
        let out = extract_encounters(
            vec![sess("A", 0, 10, "L1"), sess("A", 5, 15, "L1"), sess("B", 8, 9, "L1")],
            &ExtractOptions::default(),
        );
        assert_eq!(out.self_overlaps, 1);
        assert_eq!(out.encounters.len(), 2);
        assert!(out.encounters.iter().all(|e| e.node_a != e.node_b));
    }

    #[test]
    fn start_time_drops_and_trims() {
        let opts = ExtractOptions { start_time: Some(Timestamp(12)) };
        let out = extract_encounters(
            vec![
                sess("A", 0, 10, "L1"),
                sess("B", 5, 15, "L1"),
                sess("C", 8, 30, "L1"),
                // A–B and A–C end at 10 → dropped; B–C [8,15] → [12,15]
            ],
            &opts,
        );
        let got: Vec<_> = out.encounters.iter().map(summary).collect();
        assert_eq!(got, vec![("B".to_string(), "C".to_string(), 12, 15, "L1".to_string())]);
    }

    #[test]
    fn empty_input_is_empty_output() {
        let out = extract_encounters(vec![], &ExtractOptions::default());
        assert!(out.encounters.is_empty());
        assert_eq!(out.self_overlaps, 0);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod extract_props {
    use proptest::prelude::*;

    use super::*;
    use crate::{ExtractOptions, extract_encounters};

    fn sessions(max_nodes: usize) -> impl Strategy<Value = Vec<(usize, i64, i64, usize)>> {
        proptest::collection::vec((0..max_nodes, 0i64..100, 1i64..50, 0usize..3), 0..40)
    }

    proptest! {
        #[test]
        fn never_emits_self_encounters(raw in sessions(4)) {
            let input: Vec<Session> = raw
                .iter()
                .map(|&(n, s, len, l)| sess(&format!("n{n}"), s, s + len, &format!("L{l}")))
                .collect();
            let out = extract_encounters(input, &ExtractOptions::default());
            prop_assert!(out.encounters.iter().all(|e| e.node_a != e.node_b));
        }

        #[test]
        fn one_encounter_per_overlapping_pair(raw in sessions(1_000)) {
            // Give every session its own node so no pair is a self-overlap.
            let input: Vec<Session> = raw
                .iter()
                .enumerate()
                .map(|(i, &(_, s, len, l))| sess(&format!("n{i:03}"), s, s + len, &format!("L{l}")))
                .collect();

            let mut expected = Vec::new();
            for (i, a) in input.iter().enumerate() {
                for b in &input[i + 1..] {
                    let (start, end) = (a.start.max(b.start), a.end.min(b.end));
                    if a.location == b.location && start < end {
                        let (lo, hi) = if a.node < b.node { (&a.node, &b.node) } else { (&b.node, &a.node) };
                        expected.push((lo.to_string(), hi.to_string(), start.0, end.0, a.location.to_string()));
                    }
                }
            }

            let out = extract_encounters(input, &ExtractOptions::default());
            let mut got: Vec<_> = out.encounters.iter().map(summary).collect();
            got.sort();
            expected.sort();
            prop_assert_eq!(got, expected);
        }
    }
}

// ── Filters ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod filter {
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::{active_sessions, filter_by_nodes, filter_by_start};
    use ct_core::Node;

    #[test]
    fn filter_by_start_trims_straddlers() {
        let out = filter_by_start(
            vec![sess("A", 0, 5, "L1"), sess("B", 3, 20, "L1"), sess("C", 15, 20, "L2"), sess("D", 0, 10, "L1")],
            Timestamp(10),
        );
        let got: Vec<_> = out.iter().map(|s| (s.node.to_string(), s.start.0, s.end.0)).collect();
        assert_eq!(
            got,
            vec![("B".to_string(), 10, 20), ("C".to_string(), 15, 20), ("D".to_string(), 10, 10)]
        );
    }

    #[test]
    fn filter_by_nodes_keeps_listed() {
        let keep: FxHashSet<Node> = [Node::new("A")].into_iter().collect();
        let out = filter_by_nodes(vec![sess("A", 0, 5, "L1"), sess("B", 0, 5, "L1")], &keep);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].node.as_str(), "A");
    }

    #[test]
    fn active_sessions_counts_open_intervals() {
        let got = active_sessions(&[sess("A", 0, 10, "L1"), sess("B", 5, 15, "L2"), sess("C", 10, 12, "L1")]);
        assert_eq!(
            got,
            vec![
                (Timestamp(0), 1),
                (Timestamp(5), 2),
                (Timestamp(10), 2), // A ends, C starts
                (Timestamp(12), 1),
                (Timestamp(15), 0),
            ]
        );
    }
}

// ── Tallies ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tally {
    use super::*;
    use crate::{tally, unique_tally};

    fn sample() -> Vec<Contact> {
        vec![
            contact("A", "B", 20),
            contact("B", "A", 10),
            contact("A", "C", 10),
            contact("C", "A", 30),
        ]
    }

    #[test]
    fn total_tally_from_first_contact() {
        assert_eq!(tally(sample(), None).unwrap(), vec![(0, 2), (10, 3), (20, 4)]);
    }

    #[test]
    fn unique_tally_ignores_repeat_pairs() {
        assert_eq!(unique_tally(sample(), None).unwrap(), vec![(0, 2), (10, 2), (20, 2)]);
    }

    #[test]
    fn explicit_origin_shifts_time() {
        assert_eq!(tally(sample(), Some(Timestamp(0))).unwrap(), vec![(10, 2), (20, 3), (30, 4)]);
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(tally(vec![], None).unwrap().is_empty());
        assert!(unique_tally(vec![], Some(Timestamp(5))).unwrap().is_empty());
    }

    #[test]
    fn elapsed_time_out_of_range_is_an_error() {
        let err = tally(vec![contact("A", "B", i64::MAX)], Some(Timestamp(-1))).unwrap_err();
        assert!(matches!(err, ct_core::CtError::TimeOverflow { .. }), "{err}");
        assert!(unique_tally(vec![contact("A", "B", i64::MIN)], Some(Timestamp(1))).is_err());
    }
}
