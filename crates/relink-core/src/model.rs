//! Core data structures for the rand-linked list

use serde::{Deserialize, Serialize};

/// Unique, stable identifier for a node within one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

/// Which of a node's three outgoing links an edge carries.
///
/// `Prev` and `Next` form the primary chain; `Rand` is the auxiliary link
/// and may target any node in the same list, including the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    Prev,
    Next,
    Rand,
}

/// A single node in the list.
///
/// The payload is optional: `None` is an absent value, distinct from an
/// empty string. Links are not stored here; they live as typed edges in
/// the owning [`RandList`](crate::list::RandList) arena, so several nodes
/// can reference the same target without aliasing issues.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub payload: Option<String>,
}
