//! Stream writers.
//!
//! Writers take any `Write` sink and flush it before returning.  Nothing is
//! quoted unless a field contains a comma, quote, or newline.

use std::io::Write;

use csv::{Writer, WriterBuilder};
use serde::Serialize;

use ct_core::{Contact, Encounter, Session};

use crate::IoResult;
use crate::read::EdgeRow;

/// `node,start,end,location`.
pub fn write_sessions<W: Write>(writer: W, sessions: &[Session]) -> IoResult<()> {
    let mut wtr = csv_writer(writer);
    for s in sessions {
        wtr.serialize(s)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Five fields when the encounter has a location, otherwise the three-field
/// `node_a,node_b,start` form.
pub fn write_encounters<W: Write>(writer: W, encounters: &[Encounter]) -> IoResult<()> {
    let mut wtr = csv_writer(writer);
    for e in encounters {
        match &e.location {
            Some(loc) => wtr.serialize((&e.node_a, &e.node_b, e.start, e.end, loc))?,
            None      => wtr.serialize((&e.node_a, &e.node_b, e.start))?,
        }
    }
    wtr.flush()?;
    Ok(())
}

/// `node_a,node_b,time`.
pub fn write_contacts<W: Write>(writer: W, contacts: &[Contact]) -> IoResult<()> {
    let mut wtr = csv_writer(writer);
    for c in contacts {
        wtr.serialize(c)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Endpoints followed by the row's pass-through fields.
pub fn write_edges<W: Write>(writer: W, edges: &[EdgeRow]) -> IoResult<()> {
    let mut wtr = csv_writer(writer);
    for e in edges {
        let fields = [e.node_a.as_str(), e.node_b.as_str()]
            .into_iter()
            .chain(e.rest.iter().map(String::as_str));
        wtr.write_record(fields)?;
    }
    wtr.flush()?;
    Ok(())
}

/// `relative_time,infected_fraction`.  Fractions always carry a decimal
/// point (`1.0`, not `1`).
pub fn write_prevalence<W: Write>(writer: W, points: impl IntoIterator<Item = (i64, f64)>) -> IoResult<()> {
    write_pairs(writer, points)
}

/// Two scalar columns per row, e.g. `(elapsed, count)` tallies.
pub fn write_pairs<W, A, B>(writer: W, rows: impl IntoIterator<Item = (A, B)>) -> IoResult<()>
where
    W: Write,
    A: Serialize,
    B: Serialize,
{
    write_rows(writer, rows)
}

/// Any serialisable row shape: tuples of scalars, labels, and timestamps.
pub fn write_rows<W: Write, R: Serialize>(writer: W, rows: impl IntoIterator<Item = R>) -> IoResult<()> {
    let mut wtr = csv_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Headerless; row widths may vary (edge pass-through, short encounters).
fn csv_writer<W: Write>(writer: W) -> Writer<W> {
    WriterBuilder::new().has_headers(false).flexible(true).from_writer(writer)
}
