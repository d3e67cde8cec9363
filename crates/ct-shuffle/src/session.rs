//! Session-level null models.
//!
//! A session ties together a node (N), a time interval (T) and a location
//! (L).  Each model keeps some of the pairwise correlations TN, TL, LN and
//! destroys the rest by permuting one field, either across the whole trace
//! or only within groups sharing another field.
//!
//! | Model        | Keeps    | Destroys    | Mechanism                          |
//! |--------------|----------|-------------|------------------------------------|
//! | `Tn`         | TN       | TL, LN      | permute locations                  |
//! | `Ln`         | LN       | TL, TN      | permute `(start, end)` intervals   |
//! | `Tl`         | TL       | LN, TN      | permute nodes                      |
//! | `Tlln`       | TL, LN   | TN          | permute intervals within a location|
//! | `Lntn`       | LN, TN   | TL          | permute locations within a node    |
//! | `Tltn`       | TL, TN   | LN          | *not supported*                    |
//! | `DestroyAll` | —        | TL, TN, LN  | permute nodes, then locations      |
//!
//! Sessions keep their input order; only the permuted field changes.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use rustc_hash::FxHashMap;

use ct_core::{Session, ShuffleRng, Timestamp};

use crate::{ShuffleError, ShuffleResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SessionShuffle {
    Original,
    Tn,
    Ln,
    Tl,
    Tlln,
    Lntn,
    /// Would need time bucketing to keep both TL and TN; rejected by
    /// [`SessionShuffle::apply`].
    Tltn,
    DestroyAll,
}

impl SessionShuffle {
    pub fn name(self) -> &'static str {
        match self {
            SessionShuffle::Original   => "Original",
            SessionShuffle::Tn         => "TN",
            SessionShuffle::Ln         => "LN",
            SessionShuffle::Tl         => "TL",
            SessionShuffle::Tlln       => "TLLN",
            SessionShuffle::Lntn       => "LNTN",
            SessionShuffle::Tltn       => "TLTN",
            SessionShuffle::DestroyAll => "destroy_all",
        }
    }

    /// Run the model.  The output always has `sessions.len()` records.
    pub fn apply(self, sessions: Vec<Session>, rng: &mut ShuffleRng) -> ShuffleResult<Vec<Session>> {
        let shuffled = match self {
            SessionShuffle::Original => return Ok(sessions),
            SessionShuffle::Tltn => return Err(ShuffleError::Unsupported(self.name())),
            SessionShuffle::Tn => permute_within(
                sessions, rng, |_| (), |s| s.location.clone(), |s, l| s.location = l,
            ),
            SessionShuffle::Ln => permute_within(
                sessions, rng, |_| (), interval, set_interval,
            ),
            SessionShuffle::Tl => permute_within(
                sessions, rng, |_| (), |s| s.node.clone(), |s, n| s.node = n,
            ),
            SessionShuffle::Tlln => permute_within(
                sessions, rng, |s| s.location.clone(), interval, set_interval,
            ),
            SessionShuffle::Lntn => permute_within(
                sessions, rng, |s| s.node.clone(), |s| s.location.clone(), |s, l| s.location = l,
            ),
            SessionShuffle::DestroyAll => {
                let by_node = permute_within(sessions, rng, |_| (), |s| s.node.clone(), |s, n| s.node = n);
                permute_within(by_node, rng, |_| (), |s| s.location.clone(), |s, l| s.location = l)
            }
        };
        tracing::debug!(algorithm = self.name(), sessions = shuffled.len(), seed = rng.seed(), "shuffled sessions");
        Ok(shuffled)
    }
}

impl FromStr for SessionShuffle {
    type Err = ShuffleError;

    /// Case-insensitive.  `"_"` is an alias for `destroy_all`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "original"          => Ok(SessionShuffle::Original),
            "tn"                => Ok(SessionShuffle::Tn),
            "ln"                => Ok(SessionShuffle::Ln),
            "tl"                => Ok(SessionShuffle::Tl),
            "tlln"              => Ok(SessionShuffle::Tlln),
            "lntn"              => Ok(SessionShuffle::Lntn),
            "tltn"              => Ok(SessionShuffle::Tltn),
            "destroy_all" | "_" => Ok(SessionShuffle::DestroyAll),
            _                   => Err(ShuffleError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for SessionShuffle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn interval(s: &Session) -> (Timestamp, Timestamp) {
    (s.start, s.end)
}

fn set_interval(s: &mut Session, (start, end): (Timestamp, Timestamp)) {
    s.start = start;
    s.end = end;
}

/// Permute the field read by `take` among sessions sharing the same
/// `group` key, writing the permuted values back with `put`.
///
/// Groups are shuffled in first-seen order and consumed with one forward
/// cursor each, so the result depends only on the input order and the RNG.
fn permute_within<K, V>(
    sessions: Vec<Session>,
    rng:      &mut ShuffleRng,
    group:    impl Fn(&Session) -> K,
    take:     impl Fn(&Session) -> V,
    put:      impl Fn(&mut Session, V),
) -> Vec<Session>
where
    K: Eq + Hash,
    V: Clone,
{
    let mut slot_of: FxHashMap<K, usize> = FxHashMap::default();
    let mut pools: Vec<Vec<V>> = Vec::new();
    let mut membership: Vec<usize> = Vec::with_capacity(sessions.len());

    for s in &sessions {
        let slot = *slot_of.entry(group(s)).or_insert_with(|| {
            pools.push(Vec::new());
            pools.len() - 1
        });
        pools[slot].push(take(s));
        membership.push(slot);
    }

    for pool in &mut pools {
        rng.shuffle(pool);
    }

    let mut cursors = vec![0usize; pools.len()];
    sessions
        .into_iter()
        .zip(membership)
        .map(|(mut s, slot)| {
            put(&mut s, pools[slot][cursors[slot]].clone());
            cursors[slot] += 1;
            s
        })
        .collect()
}
