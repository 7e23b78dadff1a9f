//! Scoped make/undo pairing.

use cerca_core::{Move, Position};

/// Applies a move on construction and reverts it on drop.
///
/// Every exit path of a search node, including the early return on a beta
/// cutoff, unwinds through the guard, so the make/undo pairing nests
/// correctly with the recursion by construction.
pub(super) struct MoveGuard<'a, P: Position> {
    pos: &'a mut P,
    mv: Move,
}

impl<'a, P: Position> MoveGuard<'a, P> {
    /// Apply `mv` to `pos` and take custody of the undo.
    pub(super) fn new(pos: &'a mut P, mv: Move) -> MoveGuard<'a, P> {
        pos.make_move(mv);
        MoveGuard { pos, mv }
    }

    /// The position with the move applied.
    pub(super) fn position(&mut self) -> &mut P {
        self.pos
    }
}

impl<P: Position> Drop for MoveGuard<'_, P> {
    fn drop(&mut self) {
        self.pos.undo_move(self.mv);
    }
}
