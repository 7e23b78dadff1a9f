//! Heuristic move ordering.
//!
//! A cheap, zero-lookahead priority: promotions and big captures first,
//! pieces escaping attack next, moves into attacked squares last. The sort
//! only improves the alpha-beta cutoff rate; search correctness never
//! depends on it.

use cerca_core::{Move, Position};

use crate::eval::material::piece_value;

/// Fixed offset applied to promotions, one queen ahead of everything else.
const PROMOTION_PRIORITY: i32 = -880;

/// Ordering priority of `mv` at `pos`. Lower values are searched first.
///
/// Four additive, independent contributions, computed without making the
/// move:
/// - promotions get [`PROMOTION_PRIORITY`];
/// - captures subtract the victim's value;
/// - a destination attacked by the opponent adds the mover's value;
/// - an origin attacked by the opponent subtracts the mover's value.
pub fn move_priority<P: Position>(mv: Move, pos: &P) -> i32 {
    let mut priority = if mv.is_promotion() {
        PROMOTION_PRIORITY
    } else {
        0
    };
    if let Some(victim) = mv.captured() {
        priority -= piece_value(victim);
    }
    if pos.is_attacked_by_opponent(mv.dest()) {
        priority += piece_value(mv.piece());
    }
    if pos.is_attacked_by_opponent(mv.source()) {
        priority -= piece_value(mv.piece());
    }
    priority
}

/// Sort `moves` ascending by priority.
///
/// The sort is stable, so moves with equal priority keep their generation
/// order.
pub fn order_moves<P: Position>(moves: &mut [Move], pos: &P) {
    moves.sort_by_key(|&mv| move_priority(mv, pos));
}
