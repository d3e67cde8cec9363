//! Trace time model.
//!
//! All trace times are integer Unix seconds.  Using an integer newtype means
//! interval arithmetic is exact and the wire format round-trips unchanged:
//! a `Timestamp` displays as its bare integer.

use std::fmt;

use crate::{CtError, CtResult};

/// An absolute trace time in seconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Seconds elapsed from `origin` to `self`.  Negative if `self` is earlier.
    ///
    /// Fails when the gap does not fit in an `i64`.
    #[inline]
    pub fn since(self, origin: Timestamp) -> CtResult<i64> {
        self.0
            .checked_sub(origin.0)
            .ok_or(CtError::TimeOverflow { time: self, origin })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
