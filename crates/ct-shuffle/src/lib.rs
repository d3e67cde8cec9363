//! `ct-shuffle` — null models for contact networks.
//!
//! Each shuffler destroys one set of correlations in a trace while exactly
//! preserving another, so an observed property (e.g. spreading speed) can be
//! compared with what chance alone would produce.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`contact`]  | `ContactShuffle` (`Original`, `Dcwb`, `Dcb`, `Dcw`, `D`)   |
//! | [`session`]  | `SessionShuffle` (time / node / location correlations)     |
//! | [`pick`]     | `pick_contact`: seeded uniform choice of one contact       |
//! | [`error`]    | `ShuffleError`, `ShuffleResult<T>`                         |
//!
//! # Contact null models
//!
//! | Algorithm | Preserved                                  | Destroyed                         |
//! |-----------|--------------------------------------------|-----------------------------------|
//! | `Dcwb`    | edge set, per-edge repeat count            | edge ↔ time-list, within a weight bucket |
//! | `Dcb`     | edge set                                   | per-edge repeat count and times   |
//! | `Dcw`     | edge set, per-edge repeat count, all times | which times belong to which edge  |
//! | `D`       | degree sequence, repeat-count multiset, all times | topology                   |
//!
//! All shufflers take an explicit [`ShuffleRng`][ct_core::ShuffleRng] and
//! return exactly as many records as they were given.

pub mod contact;
pub mod error;
pub mod pick;
pub mod session;

#[cfg(test)]
mod tests;

pub use contact::ContactShuffle;
pub use error::{ShuffleError, ShuffleResult};
pub use pick::pick_contact;
pub use session::SessionShuffle;
