//! Stream readers.
//!
//! Each reader accepts any `Read` source: a file, stdin, or a
//! `std::io::Cursor` in tests.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;

use ct_core::{Contact, Encounter, Endpoints, Location, Node, Session, Timestamp};

use crate::{IoError, IoResult};

// ── CSV rows ──────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SessionRow {
    node:     String,
    start:    i64,
    end:      i64,
    location: String,
}

#[derive(Deserialize)]
struct ContactRow {
    node_a: String,
    node_b: String,
    time:   i64,
}

#[derive(Deserialize)]
struct EncounterRow {
    node_a:   String,
    node_b:   String,
    start:    i64,
    end:      i64,
    location: String,
}

/// One contact-graph edge with whatever trailing fields it arrived with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeRow {
    pub node_a: Node,
    pub node_b: Node,
    /// Fields after the two endpoints, passed through verbatim.
    pub rest:   Vec<String>,
}

impl Endpoints for EdgeRow {
    fn endpoints(&self) -> (&Node, &Node) {
        (&self.node_a, &self.node_b)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// `node,start,end,location`.
pub fn read_sessions<R: Read>(reader: R) -> IoResult<Vec<Session>> {
    let mut out = Vec::new();
    for rec in records(reader) {
        let (line, rec) = rec?;
        expect_fields(line, &rec, &[4])?;
        let row: SessionRow = deserialize(line, &rec)?;
        let session = Session::new(row.node, Timestamp(row.start), Timestamp(row.end), row.location)
            .map_err(|source| IoError::Record { line, source })?;
        out.push(session);
    }
    tracing::debug!(sessions = out.len(), "read sessions");
    Ok(out)
}

/// `node_a,node_b,start,end,location`, or the instantaneous
/// `node_a,node_b,time` form, which becomes a zero-length encounter with no
/// location.
pub fn read_encounters<R: Read>(reader: R) -> IoResult<Vec<Encounter>> {
    let mut out = Vec::new();
    for rec in records(reader) {
        let (line, rec) = rec?;
        expect_fields(line, &rec, &[3, 5])?;
        let encounter = if rec.len() == 3 {
            let row: ContactRow = deserialize(line, &rec)?;
            let t = Timestamp(row.time);
            Encounter::new(Node::from(row.node_a), Node::from(row.node_b), t, t, None)
        } else {
            let row: EncounterRow = deserialize(line, &rec)?;
            Encounter::new(
                Node::from(row.node_a),
                Node::from(row.node_b),
                Timestamp(row.start),
                Timestamp(row.end),
                Some(Location::from(row.location)),
            )
        };
        out.push(encounter.map_err(|source| IoError::Record { line, source })?);
    }
    tracing::debug!(encounters = out.len(), "read encounters");
    Ok(out)
}

/// `node_a,node_b,time`, or a five-field encounter row read as a contact at
/// the encounter's start.
pub fn read_contacts<R: Read>(reader: R) -> IoResult<Vec<Contact>> {
    let mut out = Vec::new();
    for rec in records(reader) {
        let (line, rec) = rec?;
        expect_fields(line, &rec, &[3, 5])?;
        let head: StringRecord = rec.iter().take(3).collect();
        let row: ContactRow = deserialize(line, &head)?;
        out.push(Contact::new(row.node_a, row.node_b, Timestamp(row.time)));
    }
    tracing::debug!(contacts = out.len(), "read contacts");
    Ok(out)
}

/// `node_a,node_b` followed by any number of pass-through fields.
pub fn read_edges<R: Read>(reader: R) -> IoResult<Vec<EdgeRow>> {
    let mut out = Vec::new();
    for rec in records(reader) {
        let (line, rec) = rec?;
        if rec.len() < 2 {
            return Err(malformed(line, format!("expected at least 2 fields, found {}", rec.len())));
        }
        out.push(EdgeRow {
            node_a: Node::new(&rec[0]),
            node_b: Node::new(&rec[1]),
            rest:   rec.iter().skip(2).map(str::to_owned).collect(),
        });
    }
    tracing::debug!(edges = out.len(), "read edges");
    Ok(out)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn records<R: Read>(reader: R) -> impl Iterator<Item = IoResult<(u64, StringRecord)>> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
        .into_records()
        .map(|rec| -> IoResult<(u64, StringRecord)> {
            let rec = rec?;
            let line = rec.position().map_or(0, |p| p.line());
            Ok((line, rec))
        })
}

fn expect_fields(line: u64, rec: &StringRecord, allowed: &[usize]) -> IoResult<()> {
    if allowed.contains(&rec.len()) {
        return Ok(());
    }
    let expected: Vec<String> = allowed.iter().map(usize::to_string).collect();
    Err(malformed(line, format!("expected {} fields, found {}", expected.join(" or "), rec.len())))
}

fn deserialize<'de, T: Deserialize<'de>>(line: u64, rec: &'de StringRecord) -> IoResult<T> {
    rec.deserialize(None).map_err(|e| match e.kind() {
        csv::ErrorKind::Deserialize { err, .. } => malformed(line, err.to_string()),
        _ => malformed(line, e.to_string()),
    })
}

fn malformed(line: u64, reason: String) -> IoError {
    IoError::Malformed { line, reason }
}
