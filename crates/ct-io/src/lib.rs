//! `ct-io` — the comma-separated text streams every tool reads and writes.
//!
//! No stream has a header row.  Fields are trimmed; blank lines are skipped.
//!
//! | Stream      | Fields                                   | Reader / writer                      |
//! |-------------|------------------------------------------|--------------------------------------|
//! | sessions    | `node,start,end,location`                | `read_sessions` / `write_sessions`   |
//! | encounters  | `node_a,node_b,start[,end,location]`     | `read_encounters` / `write_encounters` |
//! | contacts    | `node_a,node_b,time[,end,location]`      | `read_contacts` / `write_contacts`   |
//! | edges       | `node_a,node_b[,...]`                    | `read_edges` / `write_edges`         |
//! | prevalence  | `relative_time,infected_fraction`        | `write_prevalence`                   |
//! | pairs       | any two scalar columns                   | `write_pairs`                        |
//! | rows        | any tuple of scalar columns              | `write_rows`                         |
//!
//! A malformed row aborts the whole read with [`IoError::Malformed`]
//! carrying its 1-based line number.

pub mod error;
pub mod read;
pub mod write;


pub use error::{IoError, IoResult};
pub use read::{EdgeRow, read_contacts, read_edges, read_encounters, read_sessions};
pub use write::{
    write_contacts, write_edges, write_encounters, write_pairs, write_prevalence, write_rows, write_sessions,
};
