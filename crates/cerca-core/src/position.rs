//! The opaque Position capability the search core runs against.

use crate::chess_move::Move;
use crate::piece::{Color, PieceKind};
use crate::square::Square;

/// Board, rules, and move-generation capability supplied by the embedder.
///
/// The search core queries and mutates a `Position` but never implements one:
/// any rules engine satisfying this contract can be substituted, including
/// the scripted test double in [`mock`](crate::mock).
///
/// # Make/undo discipline
///
/// [`make_move`](Position::make_move) and [`undo_move`](Position::undo_move)
/// form a strictly nested pair: every undo must name the most recently made
/// and not yet undone move (LIFO). Undoing out of order is a programming
/// error; implementations are encouraged to assert on it, as the mock does.
/// The search guarantees that across any of its public entry points the net
/// effect on the position is zero.
pub trait Position {
    /// All legal moves in the current state.
    ///
    /// Empty exactly when no legal move exists. No duplicates; the order is
    /// arbitrary but must be deterministic for a given position.
    fn legal_moves(&self) -> Vec<Move>;

    /// Apply `mv` to the position in place.
    fn make_move(&mut self, mv: Move);

    /// Revert `mv`, which must be the most recent un-undone move.
    fn undo_move(&mut self, mv: Move);

    /// The side to move.
    fn side_to_move(&self) -> Color;

    /// Whether the side to move is checkmated.
    fn is_checkmate(&self) -> bool;

    /// Whether the side to move is stalemated.
    fn is_stalemate(&self) -> bool;

    /// Whether neither side retains mating material.
    fn is_insufficient_material(&self) -> bool;

    /// Whether the fifty-move rule makes this position a draw.
    fn is_fifty_move_draw(&self) -> bool;

    /// Number of pieces of `kind` belonging to `color`.
    fn piece_count(&self, color: Color, kind: PieceKind) -> u32;

    /// Whether `square` is attacked by the opponent of the side to move.
    fn is_attacked_by_opponent(&self, square: Square) -> bool;
}
