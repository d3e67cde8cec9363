//! `ct-diffusion` — ideal spreading over a contact trace.
//!
//! Every contact transmits with probability 1: a contact between an
//! infected and a susceptible node infects the susceptible one.  The result
//! is a prevalence curve, one point per distinct contact timestamp.
//!
//! # Per-timestamp step
//!
//! ```text
//! sort contacts by time (stable)
//! for each group of contacts sharing a timestamp t:
//!   ① Partition — pairs touching an infected node first, the rest after,
//!                 each side in input order.
//!   ② Spread    — in that order, a pair with exactly one infected
//!                 endpoint infects the other one.
//!   ③ Record    — (t - start_offset, |infected|, |infected| / total_nodes)
//! ```
//!
//! Step ① is a single pass, not a closure: a chain `A→B→C→D` inside one
//! timestamp may stop short when the later links were listed first.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | [`simulate_sources`] runs one source per Rayon task.      |

pub mod curve;
pub mod error;
pub mod simulate;


pub use curve::{PrevalenceCurve, PrevalencePoint};
pub use error::{DiffusionError, DiffusionResult};
pub use simulate::{DiffusionConfig, simulate, simulate_sources};
