//! `ct-encounter` — turn per-device presence sessions into pairwise
//! encounters.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`extract`]  | `extract_encounters`, `ExtractOptions`, `Extraction`        |
//! | [`filter`]   | `filter_by_start`, `filter_by_nodes`, `active_sessions`     |
//! | [`tally`]    | `tally`, `unique_tally` (cumulative encounters vs. time)    |
//!
//! # Sweep model (summary)
//!
//! ```text
//! sort sessions by start
//! for s in sessions:
//!     active[s.location].retain(|c| c.end > s.start)
//!     emit (s, c) for every c in active[s.location] with c.node != s.node
//!     active[s.location].push(s)
//! ```
//!
//! Each session is compared only against sessions still open at its
//! location, never against the full trace.

pub mod extract;
pub mod filter;
pub mod tally;

#[cfg(test)]
mod tests;

pub use extract::{ExtractOptions, Extraction, extract_encounters};
pub use filter::{active_sessions, filter_by_nodes, filter_by_start};
pub use tally::{tally, unique_tally};
