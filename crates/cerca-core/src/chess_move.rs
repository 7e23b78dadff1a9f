//! Move representation.
//!
//! The Position behind the [`Position`](crate::Position) trait is opaque, so a
//! move carries everything the search needs to reason about it without making
//! it: the squares involved, the moved piece, and the captured and promotion
//! piece kinds when present.

use std::fmt;

use crate::piece::PieceKind;
use crate::square::Square;

/// An immutable move value.
///
/// Compared by value for result reporting; never hashed as a transposition
/// key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
    piece: PieceKind,
    captured: Option<PieceKind>,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Create a quiet move of `piece` from `source` to `dest`.
    pub const fn new(source: Square, dest: Square, piece: PieceKind) -> Move {
        Move {
            source,
            dest,
            piece,
            captured: None,
            promotion: None,
        }
    }

    /// Mark this move as capturing a piece of the given kind.
    pub const fn with_capture(mut self, victim: PieceKind) -> Move {
        self.captured = Some(victim);
        self
    }

    /// Mark this move as promoting to the given kind.
    pub const fn with_promotion(mut self, promo: PieceKind) -> Move {
        self.promotion = Some(promo);
        self
    }

    /// Origin square.
    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    /// Destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// Kind of the moved piece.
    #[inline]
    pub const fn piece(self) -> PieceKind {
        self.piece
    }

    /// Kind of the captured piece, if this move is a capture.
    #[inline]
    pub const fn captured(self) -> Option<PieceKind> {
        self.captured
    }

    /// Promotion piece kind, if this move is a promotion.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// Whether this move captures a piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Whether this move is a promotion.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Display for Move {
    /// UCI-style notation: source, destination, and promotion letter if any
    /// (e.g. "e2e4", "e7e8q").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.letter())?;
        }
        Ok(())
    }
}
