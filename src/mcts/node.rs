//! Search node and edge structures.
//!
//! Nodes live in the `NodeTable` arena and reference each other by `NodeId`.
//! The graph is not a tree: a node is shared by every path that reaches its
//! (board, turn) pair, so nodes hold no parent pointer. Each simulation
//! carries its own path instead.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, BoardKey, NodeKey, PlayerId};

/// Index into the `NodeTable` arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Result of an exact evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No forced result within the searched depth.
    #[default]
    Undetermined,
    /// Forced (or already completed) win for a player.
    Won(PlayerId),
}

impl Outcome {
    /// Check whether a winner is known.
    #[inline]
    #[must_use]
    pub fn is_determined(self) -> bool {
        matches!(self, Outcome::Won(_))
    }

    /// The winner, if known.
    #[inline]
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::Undetermined => None,
        }
    }
}

/// Edge from a node to one of its successors.
///
/// The action lives on the edge, so a child shared by several parents always
/// knows which move reaches it from *this* parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// The action this edge represents.
    pub action: Action,

    /// Child node.
    pub child: NodeId,
}

/// A node in the search graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchNode {
    /// Canonical board; fixed at construction.
    pub board: BoardKey,

    /// Player to move.
    pub turn: PlayerId,

    /// Action that led here from the parent that most recently enumerated it.
    pub action: Option<Action>,

    /// Whether children have been expanded.
    pub visited: bool,

    /// Outgoing edges, in enumeration order.
    edges: Vec<Edge>,

    /// Depth the minimax value was computed at (None = not evaluated).
    pub minimax_depth: Option<u32>,

    /// Exact value at `minimax_depth`.
    pub minimax_value: Outcome,

    /// Static evaluation in [-1, 1], positive favours player 0.
    pub minimax_heuristic: f64,

    /// Simulations that passed through this node.
    pub simulations: u32,

    /// Signed score for the player who chose this node.
    pub wins: i64,
}

impl SearchNode {
    /// Create an unevaluated, unexpanded node.
    pub fn new(key: NodeKey) -> Self {
        Self {
            board: key.board,
            turn: key.turn,
            action: None,
            visited: false,
            edges: Vec::new(),
            minimax_depth: None,
            minimax_value: Outcome::Undetermined,
            minimax_heuristic: 0.0,
            simulations: 0,
            wins: 0,
        }
    }

    /// The node's identity.
    #[must_use]
    pub fn key(&self) -> NodeKey {
        NodeKey {
            board: self.board,
            turn: self.turn,
        }
    }

    /// Decode the board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board.decode()
    }

    /// Outgoing edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Child node IDs, in enumeration order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter().map(|e| e.child)
    }

    /// Number of children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.edges.len()
    }

    /// Replace the edge list and mark the node expanded.
    pub(crate) fn set_edges(&mut self, edges: Vec<Edge>) {
        self.edges = edges;
        self.visited = true;
    }

    /// Mean signed score; 0.0 before any simulation.
    #[must_use]
    pub fn mean_score(&self) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            self.wins as f64 / self.simulations as f64
        }
    }

    /// Check whether a cached minimax result answers a query at `depth`.
    #[must_use]
    pub fn minimax_covers(&self, depth: u32) -> bool {
        self.minimax_value.is_determined() || self.minimax_depth.is_some_and(|d| d >= depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Position, Slide};

    fn node() -> SearchNode {
        SearchNode::new(NodeKey::new(&Board::empty(), PlayerId::ZERO))
    }

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "NodeId(5)");
    }

    #[test]
    fn test_outcome() {
        assert!(!Outcome::Undetermined.is_determined());
        assert_eq!(Outcome::Undetermined.winner(), None);
        assert!(Outcome::Won(PlayerId::ONE).is_determined());
        assert_eq!(Outcome::Won(PlayerId::ONE).winner(), Some(PlayerId::ONE));
    }

    #[test]
    fn test_new_node() {
        let node = node();
        assert!(!node.visited);
        assert_eq!(node.child_count(), 0);
        assert_eq!(node.minimax_depth, None);
        assert_eq!(node.minimax_value, Outcome::Undetermined);
        assert_eq!(node.simulations, 0);
        assert_eq!(node.wins, 0);
        assert_eq!(node.board(), Board::empty());
    }

    #[test]
    fn test_set_edges_marks_visited() {
        let mut node = node();
        let action = Action::new(Position::new(0, 0), Slide::Right);
        node.set_edges(vec![Edge { action, child: NodeId::new(3) }]);

        assert!(node.visited);
        assert_eq!(node.children().collect::<Vec<_>>(), vec![NodeId::new(3)]);
        assert_eq!(node.edges()[0].action, action);
    }

    #[test]
    fn test_mean_score() {
        let mut node = node();
        assert_eq!(node.mean_score(), 0.0);

        node.simulations = 4;
        node.wins = -2;
        assert_eq!(node.mean_score(), -0.5);
    }

    #[test]
    fn test_minimax_covers() {
        let mut node = node();
        assert!(!node.minimax_covers(0));

        node.minimax_depth = Some(2);
        assert!(node.minimax_covers(0));
        assert!(node.minimax_covers(2));
        assert!(!node.minimax_covers(3));

        node.minimax_value = Outcome::Won(PlayerId::ZERO);
        assert!(node.minimax_covers(10));
    }

    #[test]
    fn test_serialization() {
        let mut node = node();
        node.simulations = 100;
        node.minimax_value = Outcome::Won(PlayerId::ONE);

        let json = serde_json::to_string(&node).unwrap();
        let deserialized: SearchNode = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.simulations, 100);
        assert_eq!(deserialized.minimax_value, Outcome::Won(PlayerId::ONE));
        assert_eq!(deserialized.key(), node.key());
    }
}
