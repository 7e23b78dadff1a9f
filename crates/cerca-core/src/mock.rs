//! Scripted game-tree positions.
//!
//! [`TreePosition`] implements [`Position`] over a hand-wired tree of nodes
//! instead of real chess rules, letting the search core be exercised in
//! isolation with exactly the terminal states, material counts, and attacked
//! squares a test calls for. It enforces the make/undo stack discipline with
//! hard assertions, so a search that unwinds moves out of order fails loudly.

use tracing::trace;

use crate::chess_move::Move;
use crate::piece::{Color, PieceKind};
use crate::position::Position;
use crate::square::Square;

/// Identifier of a node in a scripted tree.
pub type NodeId = usize;

/// Validation errors reported by [`TreeBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The designated root node does not exist.
    #[error("root node {id} does not exist")]
    UnknownRoot { id: NodeId },
    /// An edge targets a node that was never created.
    #[error("edge {mv} from node {from} targets unknown node {to}")]
    UnknownTarget { from: NodeId, mv: Move, to: NodeId },
    /// A node lists the same move twice.
    #[error("node {id} lists move {mv} more than once")]
    DuplicateMove { id: NodeId, mv: Move },
    /// A node flagged terminal still has outgoing moves.
    #[error("terminal node {id} has outgoing moves")]
    TerminalWithMoves { id: NodeId },
}

#[derive(Debug, Clone, PartialEq)]
struct Node {
    side: Color,
    counts: [[u8; PieceKind::COUNT]; Color::COUNT],
    attacked: Vec<Square>,
    checkmate: bool,
    stalemate: bool,
    insufficient_material: bool,
    fifty_move_draw: bool,
    edges: Vec<(Move, NodeId)>,
}

impl Node {
    fn new(side: Color) -> Node {
        Node {
            side,
            counts: [[0; PieceKind::COUNT]; Color::COUNT],
            attacked: Vec::new(),
            checkmate: false,
            stalemate: false,
            insufficient_material: false,
            fifty_move_draw: false,
            edges: Vec::new(),
        }
    }

    fn is_terminal(&self) -> bool {
        self.checkmate || self.stalemate || self.insufficient_material || self.fifty_move_draw
    }
}

/// Builder for a [`TreePosition`].
///
/// Create nodes with [`node`](TreeBuilder::node), describe them with the
/// setter methods, wire them together with [`edge`](TreeBuilder::edge), then
/// [`build`](TreeBuilder::build).
///
/// The setters index nodes directly and panic on an unknown id; structural
/// problems that only show up once the whole tree is known (dangling edge
/// targets, duplicate moves, terminal nodes with children) are reported by
/// `build` as [`TreeError`]s.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    /// Create an empty builder.
    pub fn new() -> TreeBuilder {
        TreeBuilder { nodes: Vec::new() }
    }

    /// Add a node with `side` to move and return its id.
    ///
    /// The node starts with no pieces, no attacked squares, no terminal
    /// flags, and no outgoing moves.
    pub fn node(&mut self, side: Color) -> NodeId {
        self.nodes.push(Node::new(side));
        self.nodes.len() - 1
    }

    /// Set how many pieces of `kind` the given `color` has at node `id`.
    pub fn set_count(&mut self, id: NodeId, color: Color, kind: PieceKind, count: u8) {
        self.nodes[id].counts[color.index()][kind.index()] = count;
    }

    /// Give both sides at node `id` a full starting army (8 pawns, 2 knights,
    /// 2 bishops, 2 rooks, 1 queen, 1 king) so material evaluates to zero.
    pub fn set_balanced_armies(&mut self, id: NodeId) {
        for color in Color::ALL {
            self.set_count(id, color, PieceKind::Pawn, 8);
            self.set_count(id, color, PieceKind::Knight, 2);
            self.set_count(id, color, PieceKind::Bishop, 2);
            self.set_count(id, color, PieceKind::Rook, 2);
            self.set_count(id, color, PieceKind::Queen, 1);
            self.set_count(id, color, PieceKind::King, 1);
        }
    }

    /// Flag node `id` as checkmate (side to move is mated).
    pub fn mark_checkmate(&mut self, id: NodeId) {
        self.nodes[id].checkmate = true;
    }

    /// Flag node `id` as stalemate.
    pub fn mark_stalemate(&mut self, id: NodeId) {
        self.nodes[id].stalemate = true;
    }

    /// Flag node `id` as drawn by insufficient material.
    pub fn mark_insufficient_material(&mut self, id: NodeId) {
        self.nodes[id].insufficient_material = true;
    }

    /// Flag node `id` as drawn by the fifty-move rule.
    pub fn mark_fifty_move_draw(&mut self, id: NodeId) {
        self.nodes[id].fifty_move_draw = true;
    }

    /// Record that `square` is attacked by the opponent at node `id`.
    pub fn add_attacked(&mut self, id: NodeId, square: Square) {
        self.nodes[id].attacked.push(square);
    }

    /// Script `mv` as a legal move at node `from`, leading to node `to`.
    ///
    /// Edges are reported by `legal_moves` in insertion order.
    pub fn edge(&mut self, from: NodeId, mv: Move, to: NodeId) {
        self.nodes[from].edges.push((mv, to));
    }

    /// Validate the tree and produce a [`TreePosition`] rooted at `root`.
    pub fn build(self, root: NodeId) -> Result<TreePosition, TreeError> {
        if root >= self.nodes.len() {
            return Err(TreeError::UnknownRoot { id: root });
        }
        for (id, node) in self.nodes.iter().enumerate() {
            if node.is_terminal() && !node.edges.is_empty() {
                return Err(TreeError::TerminalWithMoves { id });
            }
            for (i, &(mv, to)) in node.edges.iter().enumerate() {
                if to >= self.nodes.len() {
                    return Err(TreeError::UnknownTarget { from: id, mv, to });
                }
                if node.edges[..i].iter().any(|&(other, _)| other == mv) {
                    return Err(TreeError::DuplicateMove { id, mv });
                }
            }
        }
        Ok(TreePosition {
            nodes: self.nodes,
            current: root,
            trail: Vec::new(),
        })
    }
}

/// A [`Position`] that walks a scripted tree.
///
/// # Panics
///
/// As a test double this type asserts its contract instead of recovering:
/// `make_move` panics on a move the current node does not script, and
/// `undo_move` panics when called with anything but the most recently made
/// and not yet undone move.
#[derive(Debug, Clone, PartialEq)]
pub struct TreePosition {
    nodes: Vec<Node>,
    current: NodeId,
    trail: Vec<(Move, NodeId)>,
}

impl TreePosition {
    /// Id of the node the position currently sits on.
    ///
    /// Together with [`ply`](TreePosition::ply) this lets tests assert that a
    /// search left the position exactly where it found it.
    pub fn current_node(&self) -> NodeId {
        self.current
    }

    /// Number of made-and-not-undone moves.
    pub fn ply(&self) -> usize {
        self.trail.len()
    }

    fn node(&self) -> &Node {
        &self.nodes[self.current]
    }
}

impl Position for TreePosition {
    fn legal_moves(&self) -> Vec<Move> {
        self.node().edges.iter().map(|&(mv, _)| mv).collect()
    }

    fn make_move(&mut self, mv: Move) {
        let target = self
            .node()
            .edges
            .iter()
            .find(|&&(edge, _)| edge == mv)
            .map(|&(_, to)| to);
        let Some(target) = target else {
            panic!("move {mv} is not scripted at node {}", self.current);
        };
        trace!(node = self.current, %mv, "make");
        self.trail.push((mv, self.current));
        self.current = target;
    }

    fn undo_move(&mut self, mv: Move) {
        let Some((last, origin)) = self.trail.pop() else {
            panic!("undo {mv} with no move made");
        };
        assert_eq!(
            mv, last,
            "undo out of order: expected {last}, got {mv} at node {}",
            self.current
        );
        trace!(node = origin, %mv, "undo");
        self.current = origin;
    }

    fn side_to_move(&self) -> Color {
        self.node().side
    }

    fn is_checkmate(&self) -> bool {
        self.node().checkmate
    }

    fn is_stalemate(&self) -> bool {
        self.node().stalemate
    }

    fn is_insufficient_material(&self) -> bool {
        self.node().insufficient_material
    }

    fn is_fifty_move_draw(&self) -> bool {
        self.node().fifty_move_draw
    }

    fn piece_count(&self, color: Color, kind: PieceKind) -> u32 {
        self.node().counts[color.index()][kind.index()] as u32
    }

    fn is_attacked_by_opponent(&self, square: Square) -> bool {
        self.node().attacked.contains(&square)
    }
}
