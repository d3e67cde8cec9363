//! Toolbox error type.
//!
//! Sub-crates define their own error enums and wrap `CtError` as one variant
//! where record construction can fail inside them.

use thiserror::Error;

use crate::{Node, Timestamp};

/// The top-level error type for `ct-core` record construction and time arithmetic.
#[derive(Debug, Error)]
pub enum CtError {
    #[error("interval starts at {start} but ends earlier at {end}")]
    InvalidInterval { start: Timestamp, end: Timestamp },

    #[error("node {0} cannot encounter itself")]
    SelfEncounter(Node),

    #[error("time {time} is out of range relative to {origin}")]
    TimeOverflow { time: Timestamp, origin: Timestamp },
}

/// Shorthand result type for `ct-core`.
pub type CtResult<T> = Result<T, CtError>;
