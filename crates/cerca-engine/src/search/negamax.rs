//! Fixed-depth negamax with alpha-beta pruning.

use cerca_core::Position;

use crate::eval::evaluate;
use crate::search::guard::MoveGuard;
use crate::search::ordering::order_moves;

/// Search `pos` to `depth` plies within the window `(alpha, beta)`.
///
/// Returns a score from the perspective of the side to move at `pos`
/// (negamax convention: scores are negated at every recursive boundary).
/// Pruning is fail-hard: a score at or above `beta` returns `beta` itself,
/// and a node whose moves all fail low returns `alpha`.
///
/// At `depth == 0`, and at any node with no legal moves, the evaluator
/// scores the position statically; in the no-legal-moves case the remaining
/// depth is passed through so the evaluator can grade mate distance.
///
/// `nodes` counts every node visited, for diagnostics.
pub fn negamax<P: Position>(
    pos: &mut P,
    mut alpha: i32,
    beta: i32,
    depth: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return evaluate(pos, 0);
    }

    let mut moves = pos.legal_moves();

    // Terminal before the horizon: checkmate or a drawn state. The evaluator
    // sees the remaining depth for its mate-distance adjustment.
    if moves.is_empty() {
        return evaluate(pos, depth);
    }

    order_moves(&mut moves, pos);

    for mv in moves {
        let score = {
            let mut guard = MoveGuard::new(pos, mv);
            -negamax(guard.position(), -beta, -alpha, depth - 1, nodes)
        };

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}
