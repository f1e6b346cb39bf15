//! Encoder: rand-linked list to line-oriented text

use crate::error::Result;
use crate::escape::escape;
use crate::wire::*;
use relink_core::{NodeId, RandList};
use std::collections::HashMap;
use std::io::Write;

/// Transient encoding state, discarded once the document is written.
///
/// Identifier assignment is lazy and memoized: a node gets its identifier
/// the first time any reference to it is resolved, whether as the record
/// being formatted or as a link target of another record. Assigning the
/// identifier before resolving the node's own links is what terminates
/// cyclic `rand` chains: a re-entered node short-circuits to its already
/// assigned identifier instead of recursing again. The record cache keeps
/// a node formatted during recursion from being derived twice when the
/// chain walk reaches it.
struct Encoder<'a> {
    list: &'a RandList,
    ids: HashMap<NodeId, u64>,
    records: HashMap<NodeId, String>,
    next_id: u64,
}

impl<'a> Encoder<'a> {
    fn new(list: &'a RandList) -> Self {
        Encoder {
            list,
            ids: HashMap::new(),
            records: HashMap::new(),
            next_id: 1,
        }
    }

    /// Get-or-assign the identifier for a node. Idempotent.
    fn assign_id(&mut self, node: NodeId) -> u64 {
        if let Some(&id) = self.ids.get(&node) {
            return id;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.ids.insert(node, id);
        id
    }

    /// Identifier for a link target, formatting the target first if it has
    /// not been encountered yet. Absent links resolve to the null sentinel.
    fn resolve(&mut self, target: Option<NodeId>) -> u64 {
        match target {
            None => NULL_REF,
            Some(node) => {
                if let Some(&id) = self.ids.get(&node) {
                    id
                } else {
                    self.format_node(node);
                    self.ids[&node]
                }
            }
        }
    }

    /// Format one record, memoized per node.
    fn format_node(&mut self, node: NodeId) -> String {
        if let Some(record) = self.records.get(&node) {
            return record.clone();
        }

        let id = self.assign_id(node);
        let rand = self.resolve(self.list.rand(node));
        let prev = self.resolve(self.list.prev(node));
        let next = self.resolve(self.list.next(node));
        let data = escape(self.list.payload(node));

        let record = format!(
            "{TAG_ID}{TAG_SEP}{id}\
             {FIELD_DELIM}{TAG_DATA}{TAG_SEP}{data}\
             {FIELD_DELIM}{TAG_RAND}{TAG_SEP}{rand}\
             {FIELD_DELIM}{TAG_PREV}{TAG_SEP}{prev}\
             {FIELD_DELIM}{TAG_NEXT}{TAG_SEP}{next}"
        );
        self.records.insert(node, record.clone());
        record
    }
}

/// Encode a list into its textual document. An empty list encodes to an
/// empty string. The list is only read, never mutated.
pub fn encode(list: &RandList) -> String {
    let mut encoder = Encoder::new(list);
    let mut out = String::new();
    let mut cursor = list.head();
    while let Some(node) = cursor {
        out.push_str(&encoder.format_node(node));
        out.push('\n');
        cursor = list.next(node);
    }
    tracing::debug!(nodes = encoder.records.len(), "encoded list");
    out
}

/// Encode a list into a caller-owned sink. The sink is written to, not
/// flushed or closed.
pub fn encode_to<W: Write>(list: &RandList, sink: &mut W) -> Result<()> {
    sink.write_all(encode(list).as_bytes())?;
    Ok(())
}
