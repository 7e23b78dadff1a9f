//! Material balance.

use cerca_core::{Color, PieceKind, Position};

/// Piece values in centipawns, indexed by [`PieceKind::index()`].
///
/// Berliner's system: pawn 1, knight 3.2, bishop 3.33, rook 5.1, queen 8.8.
/// The king is worth zero; it is never captured and its presence is implicit.
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [100, 320, 333, 510, 880, 0];

/// Material value of a piece kind in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    MATERIAL_VALUE[kind.index()]
}

/// Material balance from White's perspective.
///
/// Sums `value(kind) * (white_count - black_count)` over every piece kind;
/// positive when White is ahead. The king contributes nothing.
pub fn material<P: Position>(pos: &P) -> i32 {
    let mut score = 0;
    for kind in PieceKind::ALL {
        let white = pos.piece_count(Color::White, kind) as i32;
        let black = pos.piece_count(Color::Black, kind) as i32;
        score += piece_value(kind) * (white - black);
    }
    score
}

#[cfg(test)]
mod tests {
    use cerca_core::mock::TreeBuilder;
    use cerca_core::{Color, PieceKind};

    use super::{material, piece_value};

    #[test]
    fn value_ratios_follow_berliner() {
        assert_eq!(piece_value(PieceKind::Pawn), 100);
        assert_eq!(piece_value(PieceKind::Knight), 320);
        assert_eq!(piece_value(PieceKind::Bishop), 333);
        assert_eq!(piece_value(PieceKind::Rook), 510);
        assert_eq!(piece_value(PieceKind::Queen), 880);
        assert_eq!(piece_value(PieceKind::King), 0);
    }

    #[test]
    fn balanced_armies_are_zero() {
        let mut builder = TreeBuilder::new();
        let root = builder.node(Color::White);
        builder.set_balanced_armies(root);
        let pos = builder.build(root).unwrap();
        assert_eq!(material(&pos), 0);
    }

    #[test]
    fn missing_black_queen_gives_queen_advantage() {
        let mut builder = TreeBuilder::new();
        let root = builder.node(Color::White);
        builder.set_balanced_armies(root);
        builder.set_count(root, Color::Black, PieceKind::Queen, 0);
        let pos = builder.build(root).unwrap();
        assert_eq!(material(&pos), piece_value(PieceKind::Queen));
    }

    #[test]
    fn kings_do_not_count() {
        let mut builder = TreeBuilder::new();
        let root = builder.node(Color::White);
        builder.set_count(root, Color::White, PieceKind::King, 1);
        let pos = builder.build(root).unwrap();
        assert_eq!(material(&pos), 0);
    }
}
