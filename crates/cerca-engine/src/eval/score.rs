//! Score scale shared by evaluation and search.
//!
//! One consistent unit system: integer centipawns, positive meaning good for
//! the side to move at the node being scored.

use crate::search::MAX_DEPTH;

/// The neutral score for drawn positions.
pub const DRAW: i32 = 0;

/// Base magnitude for checkmate scores.
///
/// More than an order of magnitude above any reachable material sum (a full
/// army is worth under 5 000), so a mate score can never be confused with a
/// material swing.
pub const MATE: i32 = 99_000;

/// Per-ply mate-distance adjustment, one pawn per ply.
///
/// A checkmate seen with `depth_left` plies still unsearched scores
/// `-MATE + MATE_STEP * depth_left`; smaller `depth_left` gives the strictly
/// larger magnitude. `MAX_DEPTH * MATE_STEP` stays well below `MATE` minus
/// the material range, so mate-distance ordering never crosses into material
/// scores.
pub const MATE_STEP: i32 = 100;

/// Scores at or beyond this magnitude denote a forced mate.
pub const MATE_THRESHOLD: i32 = MATE - MAX_DEPTH as i32 * MATE_STEP;

/// Whether `score` denotes a forced mate for either side.
#[inline]
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::{DRAW, MATE, MATE_STEP, MATE_THRESHOLD, is_mate_score};
    use crate::search::MAX_DEPTH;

    #[test]
    fn mate_dominates_material_at_any_depth() {
        // Largest material swing: a full army minus the king.
        let full_army = 8 * 100 + 2 * 320 + 2 * 333 + 2 * 510 + 880;
        assert!(MATE_THRESHOLD > full_army);
        assert!(MATE - MAX_DEPTH as i32 * MATE_STEP > full_army);
    }

    #[test]
    fn mate_detection() {
        assert!(is_mate_score(MATE));
        assert!(is_mate_score(-MATE));
        assert!(is_mate_score(-MATE + MATE_STEP * MAX_DEPTH as i32));
        assert!(!is_mate_score(DRAW));
        assert!(!is_mate_score(880));
        assert!(!is_mate_score(-4006));
    }
}
