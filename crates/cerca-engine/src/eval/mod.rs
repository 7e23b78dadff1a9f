//! Static evaluation.

pub mod material;
pub mod score;

use cerca_core::{Color, Position};

use crate::eval::material::material;
use crate::eval::score::{DRAW, MATE, MATE_STEP};

/// Statically score `pos` from the perspective of the side to move.
///
/// `depth_left` is the number of plies the search had left when it stopped
/// here. It only matters for checkmates, where it grades mate distance:
/// a mate reached with fewer plies remaining scores with strictly larger
/// magnitude, so the search always favors it over a slower mate, and any
/// mate always dominates any material score.
///
/// - Checkmate: `-MATE + MATE_STEP * depth_left` (the side to move is mated).
/// - Stalemate, insufficient material, or fifty-move draw: exactly [`DRAW`].
/// - Otherwise: material balance, negated when Black is to move.
pub fn evaluate<P: Position>(pos: &P, depth_left: u8) -> i32 {
    if pos.is_checkmate() {
        return -MATE + MATE_STEP * depth_left as i32;
    }

    if pos.is_stalemate() || pos.is_insufficient_material() || pos.is_fifty_move_draw() {
        return DRAW;
    }

    let white_score = material(pos);
    match pos.side_to_move() {
        Color::White => white_score,
        Color::Black => -white_score,
    }
}
