//! Board squares, encoded rank-major: A1 = 0, B1 = 1, ..., H8 = 63.

use std::fmt;

/// A square on the board, `rank * 8 + file`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a zero-based index, `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Parse an algebraic square name (e.g. "e4").
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0];
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Square((rank - b'1') * 8 + (file - b'a')))
    }

    /// Zero-based index (0..64).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// File letter ('a'..='h').
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.0 % 8) as char
    }

    /// Rank digit ('1'..='8').
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'1' + self.0 / 8) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn from_index_bounds() {
        assert!(Square::from_index(0).is_some());
        assert!(Square::from_index(63).is_some());
        assert!(Square::from_index(64).is_none());
    }

    #[test]
    fn algebraic_roundtrip() {
        for index in 0..64u8 {
            let sq = Square::from_index(index).unwrap();
            assert_eq!(Square::from_algebraic(&sq.to_string()), Some(sq));
        }
    }

    #[test]
    fn algebraic_corners() {
        assert_eq!(Square::from_algebraic("a1").unwrap().index(), 0);
        assert_eq!(Square::from_algebraic("h1").unwrap().index(), 7);
        assert_eq!(Square::from_algebraic("a8").unwrap().index(), 56);
        assert_eq!(Square::from_algebraic("h8").unwrap().index(), 63);
    }

    #[test]
    fn algebraic_rejects_garbage() {
        assert_eq!(Square::from_algebraic(""), None);
        assert_eq!(Square::from_algebraic("e"), None);
        assert_eq!(Square::from_algebraic("i4"), None);
        assert_eq!(Square::from_algebraic("e9"), None);
        assert_eq!(Square::from_algebraic("e44"), None);
    }

    #[test]
    fn display() {
        assert_eq!(Square::from_algebraic("e4").unwrap().to_string(), "e4");
    }
}
