//! List wrapper using petgraph::StableDiGraph with custom NodeId

use crate::model::*;
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashSet;

/// A doubly-linked list with an extra arbitrary link per node.
///
/// Nodes live in a stable arena; `prev`/`next`/`rand` are directed edges
/// keyed by [`LinkKind`], at most one outgoing edge per kind per node.
/// The chain invariant (`head` reaches `tail` by repeated `next`, no
/// branching, no cycle) is maintained by [`RandList::push_back`] and
/// expected from callers that wire links by hand. `rand` is exempt: it may
/// point anywhere in the list, including back at its own node.
pub struct RandList {
    inner: StableDiGraph<Node, LinkKind>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl std::fmt::Debug for RandList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandList")
            .field("len", &self.inner.node_count())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

impl RandList {
    pub fn new() -> Self {
        RandList {
            inner: StableDiGraph::new(),
            head: None,
            tail: None,
        }
    }

    /// Add a detached node (no links, not on the chain). Returns its id.
    pub fn add_node(&mut self, payload: Option<String>) -> NodeId {
        let idx = self.inner.add_node(Node { payload });
        NodeId(idx.index() as u64)
    }

    /// Append a node at the tail, maintaining head/tail and the chain links.
    pub fn push_back(&mut self, payload: Option<String>) -> NodeId {
        let id = self.add_node(payload);
        match self.tail {
            Some(tail) => {
                self.set_link(tail, LinkKind::Next, Some(id));
                self.set_link(id, LinkKind::Prev, Some(tail));
                self.tail = Some(id);
            }
            None => {
                self.head = Some(id);
                self.tail = Some(id);
            }
        }
        id
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.inner.node_weight(NodeIndex::new(id.0 as usize))
    }

    /// Get a mutable node by id.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.inner.node_weight_mut(NodeIndex::new(id.0 as usize))
    }

    /// Payload of a node, flattened over both levels of absence.
    pub fn payload(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(|n| n.payload.as_deref())
    }

    /// Follow one outgoing link of the given kind.
    pub fn link(&self, id: NodeId, kind: LinkKind) -> Option<NodeId> {
        self.inner
            .edges_directed(NodeIndex::new(id.0 as usize), Direction::Outgoing)
            .find(|edge| *edge.weight() == kind)
            .map(|edge| NodeId(edge.target().index() as u64))
    }

    /// Replace one outgoing link of the given kind; `None` clears it.
    pub fn set_link(&mut self, id: NodeId, kind: LinkKind, target: Option<NodeId>) {
        let idx = NodeIndex::new(id.0 as usize);
        let existing = self
            .inner
            .edges_directed(idx, Direction::Outgoing)
            .find(|edge| *edge.weight() == kind)
            .map(|edge| edge.id());
        if let Some(edge) = existing {
            self.inner.remove_edge(edge);
        }
        if let Some(target) = target {
            self.inner
                .add_edge(idx, NodeIndex::new(target.0 as usize), kind);
        }
    }

    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.link(id, LinkKind::Prev)
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.link(id, LinkKind::Next)
    }

    pub fn rand(&self, id: NodeId) -> Option<NodeId> {
        self.link(id, LinkKind::Rand)
    }

    pub fn set_prev(&mut self, id: NodeId, target: Option<NodeId>) {
        self.set_link(id, LinkKind::Prev, target);
    }

    pub fn set_next(&mut self, id: NodeId, target: Option<NodeId>) {
        self.set_link(id, LinkKind::Next, target);
    }

    pub fn set_rand(&mut self, id: NodeId, target: Option<NodeId>) {
        self.set_link(id, LinkKind::Rand, target);
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn set_head(&mut self, head: Option<NodeId>) {
        self.head = head;
    }

    pub fn set_tail(&mut self, tail: Option<NodeId>) {
        self.tail = tail;
    }

    /// Total number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.inner.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Iterate the chain in order, head to tail.
    pub fn iter(&self) -> Chain<'_> {
        Chain {
            list: self,
            cursor: self.head,
        }
    }

    /// Zero-based position lookup along the chain. Out of range is `None`.
    pub fn node_at(&self, index: usize) -> Option<NodeId> {
        self.iter().nth(index)
    }

    /// Distinct nodes reachable from `head` along `next`.
    ///
    /// Equals [`RandList::len`] whenever the chain invariant holds; stops
    /// counting if the walk revisits a node.
    pub fn chain_len(&self) -> usize {
        let mut seen = HashSet::new();
        self.iter().take_while(|id| seen.insert(*id)).count()
    }
}

impl Default for RandList {
    fn default() -> Self {
        Self::new()
    }
}

/// Chain-order iterator over node ids.
pub struct Chain<'a> {
    list: &'a RandList,
    cursor: Option<NodeId>,
}

impl Iterator for Chain<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.cursor?;
        self.cursor = self.list.next(current);
        Some(current)
    }
}

/// Position-wise structural comparison of two lists.
///
/// Equal when the chains have the same length and, at every position, the
/// payloads match and the `rand` links agree on presence (targets are
/// compared by presence, not by position; identities are list-local).
pub fn same_shape(a: &RandList, b: &RandList) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| {
        a.node(x).map(|n| &n.payload) == b.node(y).map(|n| &n.payload)
            && a.rand(x).is_some() == b.rand(y).is_some()
    })
}
