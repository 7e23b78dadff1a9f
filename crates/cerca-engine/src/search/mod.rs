//! Move ordering, negamax search, and the root driver.

mod guard;
pub mod negamax;
pub mod ordering;

use cerca_core::{Move, Position};
use tracing::debug;

use crate::eval::score::{MATE, MATE_STEP};
use guard::MoveGuard;
use negamax::negamax;
use ordering::order_moves;

/// Maximum search depth in plies. Deeper requests are clamped.
pub const MAX_DEPTH: u8 = 64;

/// Outcome of a completed root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The best-scoring root move.
    pub best_move: Move,
    /// Its score from the root side's perspective, in centipawns.
    pub score: i32,
    /// Total nodes visited.
    pub nodes: u64,
    /// Effective depth searched, after clamping.
    pub depth: u8,
}

/// Search every root move of `pos` to `max_depth` total plies and return the
/// best one.
///
/// Returns `None` exactly when the position has no legal move; the caller is
/// expected not to invoke the search in that state, and must treat `None` as
/// "no move available".
///
/// Every root move is searched with the full `(-MATE, MATE)` window — no
/// aspiration. The first move in heuristic order wins ties; a later move
/// replaces the incumbent only on strict improvement. `max_depth` counts
/// plies including the root's own move, so at `max_depth <= 1` each child is
/// scored by pure static evaluation and no recursion happens.
pub fn select_best_move<P: Position>(pos: &mut P, max_depth: u8) -> Option<SearchResult> {
    let depth = max_depth.min(MAX_DEPTH);
    let mut moves = pos.legal_moves();
    if moves.is_empty() {
        return None;
    }

    order_moves(&mut moves, pos);

    // Strictly below any attainable score, one mate step under -MATE, so the
    // first root move always becomes the incumbent.
    let mut best_move = moves[0];
    let mut best_score = -MATE - MATE_STEP;
    let mut nodes = 0u64;

    for mv in moves {
        let score = {
            let mut guard = MoveGuard::new(pos, mv);
            -negamax(
                guard.position(),
                -MATE,
                MATE,
                depth.saturating_sub(1),
                &mut nodes,
            )
        };
        debug!(%mv, score, "searched root move");

        if score > best_score {
            best_score = score;
            best_move = mv;
        }
    }

    Some(SearchResult {
        best_move,
        score: best_score,
        nodes,
        depth,
    })
}

#[cfg(test)]
mod tests {
    use cerca_core::mock::TreeBuilder;
    use cerca_core::{Color, Move, PieceKind, Square};

    use super::select_best_move;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn mv(from: &str, to: &str) -> Move {
        Move::new(sq(from), sq(to), PieceKind::Pawn)
    }

    #[test]
    fn no_legal_moves_yields_none() {
        let mut builder = TreeBuilder::new();
        let root = builder.node(Color::White);
        builder.mark_stalemate(root);
        let mut pos = builder.build(root).unwrap();
        assert!(select_best_move(&mut pos, 3).is_none());
    }

    #[test]
    fn picks_the_materially_better_move() {
        let mut builder = TreeBuilder::new();
        let root = builder.node(Color::White);
        let worse = builder.node(Color::Black);
        let better = builder.node(Color::Black);
        builder.set_count(better, Color::White, PieceKind::Rook, 1);
        let bad = mv("a2", "a3");
        let good = mv("b2", "b3");
        builder.edge(root, bad, worse);
        builder.edge(root, good, better);
        let mut pos = builder.build(root).unwrap();

        let result = select_best_move(&mut pos, 1).unwrap();
        assert_eq!(result.best_move, good);
        assert_eq!(result.score, 510);
        assert_eq!(pos.ply(), 0, "search must restore the root position");
    }

    #[test]
    fn first_move_in_heuristic_order_wins_ties() {
        let mut builder = TreeBuilder::new();
        let root = builder.node(Color::White);
        let left = builder.node(Color::Black);
        let right = builder.node(Color::Black);
        let first = mv("a2", "a3");
        let second = mv("b2", "b3");
        builder.edge(root, first, left);
        builder.edge(root, second, right);
        let mut pos = builder.build(root).unwrap();

        // Both children score zero; the tie goes to the first move in order.
        let result = select_best_move(&mut pos, 2).unwrap();
        assert_eq!(result.best_move, first);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn depth_zero_degrades_to_static_child_evaluation() {
        let mut builder = TreeBuilder::new();
        let root = builder.node(Color::White);
        let child = builder.node(Color::Black);
        builder.set_count(child, Color::White, PieceKind::Pawn, 2);
        let only = mv("e2", "e4");
        builder.edge(root, only, child);
        let mut pos = builder.build(root).unwrap();

        for depth in [0, 1] {
            let result = select_best_move(&mut pos, depth).unwrap();
            assert_eq!(result.best_move, only);
            assert_eq!(result.score, 200);
        }
    }
}
