//! Arena-based node table.
//!
//! Nodes are stored in a flat `Vec<SearchNode>` and referenced by `NodeId`.
//! An `FxHashMap` from `NodeKey` to `NodeId` makes the table a transposition
//! table: every (board, turn) pair maps to exactly one node for the lifetime
//! of the table. Nothing is evicted; call `clear` between games to bound memory.

use rustc_hash::FxHashMap;

use super::node::{NodeId, SearchNode};
use crate::core::{Board, NodeKey, PlayerId};

/// Transposition table and node arena.
#[derive(Clone, Debug, Default)]
pub struct NodeTable {
    /// All nodes, in creation order.
    nodes: Vec<SearchNode>,

    /// Canonical key to arena index.
    index: FxHashMap<NodeKey, NodeId>,
}

impl NodeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with custom initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Get the node for (board, turn), creating it if absent.
    ///
    /// Idempotent: equal keys always return the same `NodeId`.
    pub fn resolve(&mut self, board: &Board, turn: PlayerId) -> NodeId {
        self.resolve_key(NodeKey::new(board, turn))
    }

    /// Get the node for a canonical key, creating it if absent.
    pub fn resolve_key(&mut self, key: NodeKey) -> NodeId {
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(SearchNode::new(key));
        self.index.insert(key, id);
        id
    }

    /// Find an existing node without creating one.
    #[must_use]
    pub fn lookup(&self, board: &Board, turn: PlayerId) -> Option<NodeId> {
        self.index.get(&NodeKey::new(board, turn)).copied()
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Number of nodes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Get statistics about the table.
    #[must_use]
    pub fn stats(&self) -> TableStats {
        TableStats {
            node_count: self.nodes.len(),
            expanded_count: self.nodes.iter().filter(|n| n.visited).count(),
            determined_count: self
                .nodes
                .iter()
                .filter(|n| n.minimax_value.is_determined())
                .count(),
            total_edges: self.nodes.iter().map(|n| n.child_count()).sum(),
        }
    }
}

/// Statistics about the node table.
#[derive(Clone, Debug, Default)]
pub struct TableStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Nodes whose children have been expanded.
    pub expanded_count: usize,

    /// Nodes with a determined minimax winner.
    pub determined_count: usize,

    /// Total number of edges.
    pub total_edges: usize,
}

impl TableStats {
    /// Average edges per expanded node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expanded_count == 0 {
            0.0
        } else {
            self.total_edges as f64 / self.expanded_count as f64
        }
    }
}
