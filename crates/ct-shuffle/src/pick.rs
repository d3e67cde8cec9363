//! Seeded selection of a single contact event.
//!
//! Diffusion experiments are seeded from a random contact: its first
//! endpoint becomes the source and its time the start offset.

use ct_core::{Contact, ShuffleRng};

/// Pick one contact uniformly at random.  `None` for an empty slice.
pub fn pick_contact(contacts: &[Contact], rng: &mut ShuffleRng) -> Option<Contact> {
    rng.choose(contacts).cloned()
}
