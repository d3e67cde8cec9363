//! `ct-core` — foundational types for the `contact_trace` toolbox.
//!
//! Device and location labels, trace timestamps and the three trace record
//! shapes (sessions, encounters, contacts) live here, together with the
//! seeded RNG that every randomized `ct-*` operation draws from.
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `Node`, `Location` opaque labels                         |
//! | [`time`]     | `Timestamp`                                              |
//! | [`record`]   | `Session`, `Encounter`, `Contact`, `EdgeKey`, `Endpoints`|
//! | [`rng`]      | `ShuffleRng` (explicitly seeded, passed by `&mut`)       |
//! | [`error`]    | `CtError`, `CtResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod record;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CtError, CtResult};
pub use ids::{Location, Node};
pub use record::{Contact, EdgeKey, Encounter, Endpoints, Session};
pub use rng::ShuffleRng;
pub use time::Timestamp;
