//! Unit tests for ct-shuffle.

use ct_core::{Contact, EdgeKey, Session, ShuffleRng, Timestamp};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn c(a: &str, b: &str, t: i64) -> Contact {
    Contact::new(a, b, Timestamp(t))
}

fn sess(node: &str, start: i64, end: i64, loc: &str) -> Session {
    Session::new(node, Timestamp(start), Timestamp(end), loc).unwrap()
}

/// Edges a–b ×3, a–c ×1, b–c ×1, c–d ×2, d–e ×1.
fn sample() -> Vec<Contact> {
    vec![
        c("a", "b", 10),
        c("b", "a", 20),
        c("a", "c", 30),
        c("a", "b", 40),
        c("b", "c", 50),
        c("c", "d", 60),
        c("d", "c", 70),
        c("d", "e", 80),
    ]
}

fn sorted_times(contacts: &[Contact]) -> Vec<Timestamp> {
    let mut t: Vec<Timestamp> = contacts.iter().map(|c| c.time).collect();
    t.sort();
    t
}

fn sorted_edge_set(contacts: &[Contact]) -> Vec<EdgeKey> {
    let mut keys: Vec<EdgeKey> = ct_graph::group_by_edge(contacts).into_iter().map(|g| g.key).collect();
    keys.sort();
    keys
}

fn sorted_weights(contacts: &[Contact]) -> Vec<usize> {
    let mut w: Vec<usize> = ct_graph::repeat_counts(contacts).into_iter().map(|(_, n)| n).collect();
    w.sort();
    w
}

// ── Selector parsing ──────────────────────────────────────────────────────────

#[cfg(test)]
mod selector {
    use crate::{ContactShuffle, SessionShuffle, ShuffleError};

    #[test]
    fn contact_names_are_case_insensitive() {
        assert_eq!("DCWB".parse::<ContactShuffle>().unwrap(), ContactShuffle::Dcwb);
        assert_eq!("dcw".parse::<ContactShuffle>().unwrap(), ContactShuffle::Dcw);
        assert_eq!("Original".parse::<ContactShuffle>().unwrap(), ContactShuffle::Original);
        assert_eq!("_".parse::<ContactShuffle>().unwrap(), ContactShuffle::D);
    }

    #[test]
    fn every_contact_name_round_trips() {
        for alg in ContactShuffle::ALL {
            assert_eq!(alg.to_string().parse::<ContactShuffle>().unwrap(), alg);
        }
    }

    #[test]
    fn session_aliases() {
        assert_eq!("_".parse::<SessionShuffle>().unwrap(), SessionShuffle::DestroyAll);
        assert_eq!("TLLN".parse::<SessionShuffle>().unwrap(), SessionShuffle::Tlln);
        assert_eq!("tltn".parse::<SessionShuffle>().unwrap(), SessionShuffle::Tltn);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(matches!("dcx".parse::<ContactShuffle>(), Err(ShuffleError::UnknownAlgorithm(_))));
        assert!(matches!("tx".parse::<SessionShuffle>(), Err(ShuffleError::UnknownAlgorithm(_))));
    }
}

// ── Contact shufflers ─────────────────────────────────────────────────────────

#[cfg(test)]
mod contact {
    use super::*;
    use crate::{ContactShuffle, ShuffleError};

    fn run(alg: ContactShuffle, seed: u64) -> Vec<Contact> {
        alg.apply(sample(), &mut ShuffleRng::new(seed)).unwrap()
    }

    #[test]
    fn original_echoes_input() {
        assert_eq!(run(ContactShuffle::Original, 1), sample());
    }

    #[test]
    fn every_algorithm_preserves_cardinality() {
        for alg in ContactShuffle::ALL {
            assert_eq!(run(alg, 3).len(), sample().len(), "{alg}");
        }
    }

    #[test]
    fn same_seed_same_output() {
        for alg in ContactShuffle::ALL {
            assert_eq!(run(alg, 1000), run(alg, 1000), "{alg}");
        }
    }

    #[test]
    fn dcwb_keeps_edges_weights_and_times() {
        let out = run(ContactShuffle::Dcwb, 5);
        assert_eq!(sorted_edge_set(&out), sorted_edge_set(&sample()));
        assert_eq!(sorted_weights(&out), sorted_weights(&sample()));
        assert_eq!(sorted_times(&out), sorted_times(&sample()));
    }

    #[test]
    fn dcwb_only_swaps_lists_between_equal_weights() {
        // a–b is the only weight-3 edge, so it must keep its own times.
        let out = run(ContactShuffle::Dcwb, 9);
        let ab: Vec<i64> = out
            .iter()
            .filter(|x| x.key() == c("a", "b", 0).key())
            .map(|x| x.time.0)
            .collect();
        assert_eq!(ab, vec![10, 20, 40]);
    }

    #[test]
    fn dcb_keeps_edge_set_and_times() {
        let out = run(ContactShuffle::Dcb, 5);
        assert_eq!(sorted_edge_set(&out), sorted_edge_set(&sample()));
        assert_eq!(sorted_times(&out), sorted_times(&sample()));
    }

    #[test]
    fn dcw_keeps_edges_weights_and_time_multiset() {
        let out = run(ContactShuffle::Dcw, 5);
        assert_eq!(sorted_edge_set(&out), sorted_edge_set(&sample()));
        assert_eq!(sorted_weights(&out), sorted_weights(&sample()));
        assert_eq!(sorted_times(&out), sorted_times(&sample()));
    }

    #[test]
    fn configuration_model_keeps_time_multiset() {
        let out = run(ContactShuffle::D, 5);
        assert_eq!(sorted_times(&out), sorted_times(&sample()));
    }

    #[test]
    fn configuration_model_rejects_self_contacts() {
        let input = vec![c("a", "a", 1), c("a", "b", 2)];
        let err = ContactShuffle::D.apply(input, &mut ShuffleRng::new(0));
        assert!(matches!(err, Err(ShuffleError::SelfContact(_))));
    }

    #[test]
    fn empty_input_is_empty_output() {
        for alg in ContactShuffle::ALL {
            assert!(alg.apply(vec![], &mut ShuffleRng::new(0)).unwrap().is_empty(), "{alg}");
        }
    }
}

#[cfg(test)]
mod contact_props {
    use proptest::prelude::*;
    use rustc_hash::FxHashMap;

    use super::*;
    use crate::ContactShuffle;

    fn contacts() -> impl Strategy<Value = Vec<Contact>> {
        proptest::collection::vec((0u8..6, 1u8..6, 0i64..100), 0..60).prop_map(|raw| {
            raw.into_iter()
                // b = a + offset (mod 6) is never equal to a
                .map(|(a, off, t)| c(&format!("n{a}"), &format!("n{}", (a + off) % 6), t))
                .collect()
        })
    }

    /// Stub usage per node, counting both ends of every contact.
    fn stub_counts(contacts: &[Contact]) -> Vec<usize> {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for x in contacts {
            *counts.entry(x.node_a.to_string()).or_default() += 1;
            *counts.entry(x.node_b.to_string()).or_default() += 1;
        }
        let mut v: Vec<usize> = counts.into_values().collect();
        v.sort();
        v
    }

    proptest! {
        #[test]
        fn cardinality_is_invariant(input in contacts(), seed in any::<u64>()) {
            for alg in ContactShuffle::ALL {
                let out = alg.apply(input.clone(), &mut ShuffleRng::new(seed)).unwrap();
                prop_assert_eq!(out.len(), input.len());
            }
        }

        #[test]
        fn weight_preserving_models_keep_weight_multiset(input in contacts(), seed in any::<u64>()) {
            for alg in [ContactShuffle::Dcwb, ContactShuffle::Dcw] {
                let out = alg.apply(input.clone(), &mut ShuffleRng::new(seed)).unwrap();
                prop_assert_eq!(sorted_weights(&out), sorted_weights(&input));
                prop_assert_eq!(sorted_times(&out), sorted_times(&input));
            }
        }

        #[test]
        fn configuration_model_keeps_degree_sequence(input in contacts(), seed in any::<u64>()) {
            // With one contact per distinct pair, every synthesised edge is
            // exactly one output contact, so stub usage equals degree.
            let groups = ct_graph::group_by_edge(&input);
            let simple: Vec<Contact> = groups
                .iter()
                .map(|g| Contact { node_a: g.key.low().clone(), node_b: g.key.high().clone(), time: g.times[0] })
                .collect();

            let out = ContactShuffle::D.apply(simple.clone(), &mut ShuffleRng::new(seed)).unwrap();
            prop_assert_eq!(out.len(), simple.len());
            prop_assert_eq!(stub_counts(&out), stub_counts(&simple));
        }
    }
}

// ── Session shufflers ─────────────────────────────────────────────────────────

#[cfg(test)]
mod session {
    use super::*;
    use crate::{SessionShuffle, ShuffleError};

    fn sessions() -> Vec<Session> {
        vec![
            sess("a", 0, 10, "L1"),
            sess("b", 5, 15, "L2"),
            sess("a", 20, 30, "L2"),
            sess("c", 25, 40, "L1"),
            sess("b", 50, 60, "L3"),
            sess("c", 55, 70, "L1"),
        ]
    }

    fn run(alg: SessionShuffle, seed: u64) -> Vec<Session> {
        alg.apply(sessions(), &mut ShuffleRng::new(seed)).unwrap()
    }

    fn sorted<T: Ord>(mut v: Vec<T>) -> Vec<T> {
        v.sort();
        v
    }

    #[test]
    fn tn_permutes_locations_only() {
        let out = run(SessionShuffle::Tn, 4);
        for (o, i) in out.iter().zip(sessions()) {
            assert_eq!((&o.node, o.start, o.end), (&i.node, i.start, i.end));
        }
        assert_eq!(
            sorted(out.iter().map(|s| s.location.clone()).collect()),
            sorted(sessions().iter().map(|s| s.location.clone()).collect()),
        );
    }

    #[test]
    fn tl_permutes_nodes_only() {
        let out = run(SessionShuffle::Tl, 4);
        for (o, i) in out.iter().zip(sessions()) {
            assert_eq!((o.start, o.end, &o.location), (i.start, i.end, &i.location));
        }
        assert_eq!(
            sorted(out.iter().map(|s| s.node.clone()).collect()),
            sorted(sessions().iter().map(|s| s.node.clone()).collect()),
        );
    }

    #[test]
    fn tlln_keeps_intervals_within_location() {
        let out = run(SessionShuffle::Tlln, 8);
        for (o, i) in out.iter().zip(sessions()) {
            assert_eq!((&o.node, &o.location), (&i.node, &i.location));
        }
        for loc in ["L1", "L2", "L3"] {
            let at = |v: &[Session]| {
                sorted(v.iter().filter(|s| s.location.as_str() == loc).map(|s| (s.start, s.end)).collect())
            };
            assert_eq!(at(&out), at(&sessions()), "{loc}");
        }
    }

    #[test]
    fn lntn_keeps_locations_within_node() {
        let out = run(SessionShuffle::Lntn, 8);
        for (o, i) in out.iter().zip(sessions()) {
            assert_eq!((&o.node, o.start, o.end), (&i.node, i.start, i.end));
        }
        for node in ["a", "b", "c"] {
            let of = |v: &[Session]| {
                sorted(v.iter().filter(|s| s.node.as_str() == node).map(|s| s.location.clone()).collect())
            };
            assert_eq!(of(&out), of(&sessions()), "{node}");
        }
    }

    #[test]
    fn ln_keeps_interval_pairs_intact() {
        let out = run(SessionShuffle::Ln, 2);
        assert_eq!(
            sorted(out.iter().map(|s| (s.start, s.end)).collect()),
            sorted(sessions().iter().map(|s| (s.start, s.end)).collect()),
        );
        assert!(out.iter().all(|s| s.start <= s.end));
    }

    #[test]
    fn destroy_all_keeps_field_multisets() {
        let out = run(SessionShuffle::DestroyAll, 2);
        assert_eq!(out.len(), sessions().len());
        for (o, i) in out.iter().zip(sessions()) {
            assert_eq!((o.start, o.end), (i.start, i.end));
        }
        assert_eq!(
            sorted(out.iter().map(|s| s.location.clone()).collect()),
            sorted(sessions().iter().map(|s| s.location.clone()).collect()),
        );
    }

    #[test]
    fn tltn_is_unsupported() {
        let err = SessionShuffle::Tltn.apply(sessions(), &mut ShuffleRng::new(0));
        assert!(matches!(err, Err(ShuffleError::Unsupported("TLTN"))));
    }

    #[test]
    fn same_seed_same_output() {
        for alg in [SessionShuffle::Tn, SessionShuffle::Tlln, SessionShuffle::Lntn, SessionShuffle::DestroyAll] {
            assert_eq!(run(alg, 77), run(alg, 77), "{alg}");
        }
    }
}

// ── Pick ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pick {
    use super::*;
    use crate::pick_contact;

    #[test]
    fn picks_a_member_reproducibly() {
        let input = sample();
        let a = pick_contact(&input, &mut ShuffleRng::new(11)).unwrap();
        let b = pick_contact(&input, &mut ShuffleRng::new(11)).unwrap();
        assert_eq!(a, b);
        assert!(input.contains(&a));
    }

    #[test]
    fn empty_has_no_pick() {
        assert!(pick_contact(&[], &mut ShuffleRng::new(11)).is_none());
    }
}
