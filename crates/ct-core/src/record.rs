//! Trace records: presence sessions, pairwise encounters, and the
//! instantaneous contacts that shuffling and diffusion operate on.
//!
//! Every record is a plain value.  Transforms take collections by value and
//! return fresh ones; nothing here is mutated in place after ingest.

use std::fmt;

use crate::{CtError, CtResult, Location, Node, Timestamp};

// ── Endpoints ─────────────────────────────────────────────────────────────────

/// Any record that names an (unordered) pair of nodes.
///
/// Graph code is generic over this so the same component filter runs over
/// contacts, encounters, and raw edge rows with pass-through fields.
pub trait Endpoints {
    fn endpoints(&self) -> (&Node, &Node);

    fn edge_key(&self) -> EdgeKey {
        let (a, b) = self.endpoints();
        EdgeKey::new(a.clone(), b.clone())
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// One continuous presence of `node` at `location` over `[start, end]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    pub node:     Node,
    pub start:    Timestamp,
    pub end:      Timestamp,
    pub location: Location,
}

impl Session {
    /// Build a session, rejecting `start > end`.
    pub fn new(
        node:     impl Into<Node>,
        start:    Timestamp,
        end:      Timestamp,
        location: impl Into<Location>,
    ) -> CtResult<Self> {
        if start > end {
            return Err(CtError::InvalidInterval { start, end });
        }
        Ok(Self { node: node.into(), start, end, location: location.into() })
    }
}

// ── EdgeKey ───────────────────────────────────────────────────────────────────

/// The unordered pair `{a, b}`.
///
/// Stored in canonical `(min, max)` order so `EdgeKey::new(a, b)` and
/// `EdgeKey::new(b, a)` are equal and hash identically.  All grouping of
/// repeat contacts goes through this type.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeKey {
    low:  Node,
    high: Node,
}

impl EdgeKey {
    pub fn new(a: Node, b: Node) -> Self {
        if a <= b { EdgeKey { low: a, high: b } } else { EdgeKey { low: b, high: a } }
    }

    /// The smaller endpoint.
    #[inline]
    pub fn low(&self) -> &Node {
        &self.low
    }

    /// The larger endpoint.
    #[inline]
    pub fn high(&self) -> &Node {
        &self.high
    }

    pub fn is_self_pair(&self) -> bool {
        self.low == self.high
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.low, self.high)
    }
}

// ── Encounter ─────────────────────────────────────────────────────────────────

/// Two nodes co-present at `location` over `[start, end]`.
///
/// The node order carries no meaning; compare via [`Encounter::key`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    pub node_a:   Node,
    pub node_b:   Node,
    pub start:    Timestamp,
    pub end:      Timestamp,
    /// `None` for encounters read from a 3-field stream.
    pub location: Option<Location>,
}

impl Encounter {
    /// Build an encounter, rejecting self-pairs and `start > end`.
    pub fn new(
        node_a:   Node,
        node_b:   Node,
        start:    Timestamp,
        end:      Timestamp,
        location: Option<Location>,
    ) -> CtResult<Self> {
        if node_a == node_b {
            return Err(CtError::SelfEncounter(node_a));
        }
        if start > end {
            return Err(CtError::InvalidInterval { start, end });
        }
        Ok(Self { node_a, node_b, start, end, location })
    }

    pub fn key(&self) -> EdgeKey {
        self.edge_key()
    }

    /// Project to the instantaneous form, stamped at the encounter start.
    pub fn to_contact(&self) -> Contact {
        Contact {
            node_a: self.node_a.clone(),
            node_b: self.node_b.clone(),
            time:   self.start,
        }
    }
}

// ── Contact ───────────────────────────────────────────────────────────────────

/// An instantaneous contact event `(node_a, node_b, time)`.
///
/// No self-pair check: the configuration-model shuffle may synthesise
/// contacts whose endpoints coincide.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contact {
    pub node_a: Node,
    pub node_b: Node,
    pub time:   Timestamp,
}

impl Contact {
    pub fn new(node_a: impl Into<Node>, node_b: impl Into<Node>, time: Timestamp) -> Self {
        Self { node_a: node_a.into(), node_b: node_b.into(), time }
    }

    pub fn key(&self) -> EdgeKey {
        self.edge_key()
    }
}

impl Endpoints for Contact {
    #[inline]
    fn endpoints(&self) -> (&Node, &Node) {
        (&self.node_a, &self.node_b)
    }
}

impl Endpoints for Encounter {
    #[inline]
    fn endpoints(&self) -> (&Node, &Node) {
        (&self.node_a, &self.node_b)
    }
}

impl Endpoints for EdgeKey {
    #[inline]
    fn endpoints(&self) -> (&Node, &Node) {
        (&self.low, &self.high)
    }
}
