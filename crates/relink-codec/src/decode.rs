//! Decoder: line-oriented text back into a rand-linked list

use crate::error::{CodecError, Result};
use crate::escape::unescape;
use crate::wire::*;
use relink_core::{NodeId, RandList};
use std::collections::{HashMap, HashSet};
use std::io::Read;

/// Raw fields of one parsed record, before any node exists.
struct RawRecord {
    payload: Option<String>,
    rand: u64,
    prev: u64,
    next: u64,
}

/// Decode a document into a list. Empty or blank input yields an empty
/// list. Any malformed record fails the whole decode; no partial list is
/// ever returned.
pub fn decode(text: &str) -> Result<RandList> {
    let records = parse_records(text)?;
    let list = resolve_records(&records)?;
    tracing::debug!(nodes = list.len(), "decoded list");
    Ok(list)
}

/// Decode from a caller-owned source, reading it to exhaustion first. The
/// source is read from, not closed.
pub fn decode_from<R: Read>(source: &mut R) -> Result<RandList> {
    let mut text = String::new();
    source.read_to_string(&mut text)?;
    decode(&text)
}

/// Parse pass: split lines into fields and build the identifier-keyed
/// raw-field map. No nodes are created here.
fn parse_records(text: &str) -> Result<HashMap<u64, RawRecord>> {
    let mut records = HashMap::new();
    for (number, line) in text.lines().enumerate() {
        let number = number + 1;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line
            .split(FIELD_DELIM)
            .filter(|field| !field.is_empty())
            .collect();
        if fields.len() < MIN_FIELDS {
            return Err(CodecError::ShortRecord {
                line: number,
                found: fields.len(),
            });
        }

        let id = parse_reference(fields[0], number)?;
        if id == NULL_REF {
            return Err(CodecError::BadReference {
                line: number,
                value: field_value(fields[0], number)?.to_owned(),
            });
        }
        let payload = unescape(field_value(fields[1], number)?)?;
        let rand = parse_reference(fields[2], number)?;
        let prev = parse_reference(fields[3], number)?;
        let next = parse_reference(fields[4], number)?;

        records.insert(
            id,
            RawRecord {
                payload,
                rand,
                prev,
                next,
            },
        );
    }
    Ok(records)
}

fn field_value<'a>(field: &'a str, line: usize) -> Result<&'a str> {
    field
        .split_once(TAG_SEP)
        .map(|(_, value)| value)
        .ok_or_else(|| CodecError::MissingSeparator {
            line,
            field: field.to_owned(),
        })
}

fn parse_reference(field: &str, line: usize) -> Result<u64> {
    let value = field_value(field, line)?;
    value.parse().map_err(|_| CodecError::BadReference {
        line,
        value: value.to_owned(),
    })
}

/// Resolve pass: get-or-create every node, then link it. Creation and
/// linking are decoupled, so reference cycles terminate once every
/// participant exists in the table.
fn resolve_records(records: &HashMap<u64, RawRecord>) -> Result<RandList> {
    let mut list = RandList::new();
    let mut restored: HashMap<u64, NodeId> = HashMap::new();
    let mut last = None;

    for (&id, record) in records {
        let node = restore_node(id, records, &mut restored, &mut list)?;
        let rand = restore_link(record.rand, records, &mut restored, &mut list)?;
        let prev = restore_link(record.prev, records, &mut restored, &mut list)?;
        let next = restore_link(record.next, records, &mut restored, &mut list)?;
        list.set_rand(node, rand);
        list.set_prev(node, prev);
        list.set_next(node, next);
        last = Some(node);
    }

    let Some(start) = last else {
        return Ok(list);
    };
    recover_ends(&mut list, start)?;
    Ok(list)
}

/// Get-or-create the node for an identifier. Repeated references to one
/// identifier always yield the same node instance.
fn restore_node(
    id: u64,
    records: &HashMap<u64, RawRecord>,
    restored: &mut HashMap<u64, NodeId>,
    list: &mut RandList,
) -> Result<NodeId> {
    if let Some(&node) = restored.get(&id) {
        return Ok(node);
    }
    let record = records.get(&id).ok_or(CodecError::UnknownId { id })?;
    let node = list.add_node(record.payload.clone());
    restored.insert(id, node);
    Ok(node)
}

fn restore_link(
    id: u64,
    records: &HashMap<u64, RawRecord>,
    restored: &mut HashMap<u64, NodeId>,
    list: &mut RandList,
) -> Result<Option<NodeId>> {
    if id == NULL_REF {
        return Ok(None);
    }
    restore_node(id, records, restored, list).map(Some)
}

/// Recover head and tail by walking outward from any resolved node. The
/// document does not mark which record was the head, so it is found where
/// the `prev` walk terminates. A revisited node (a prev/next cycle) or a
/// chain shorter than the node count (a second, disconnected chain) fails
/// the decode.
fn recover_ends(list: &mut RandList, start: NodeId) -> Result<()> {
    let mut seen = HashSet::from([start]);
    let mut head = start;
    while let Some(prev) = list.prev(head) {
        if !seen.insert(prev) {
            return Err(CodecError::BrokenChain);
        }
        head = prev;
    }

    let mut seen = HashSet::from([head]);
    let mut tail = head;
    while let Some(next) = list.next(tail) {
        if !seen.insert(next) {
            return Err(CodecError::BrokenChain);
        }
        tail = next;
    }
    if seen.len() != list.len() {
        return Err(CodecError::BrokenChain);
    }

    list.set_head(Some(head));
    list.set_tail(Some(tail));
    Ok(())
}
