//! Boundary types for the cerca search core: pieces, squares, moves, and the
//! opaque `Position` capability the search queries and mutates.

mod chess_move;
mod piece;
mod position;
mod square;

pub mod mock;

pub use chess_move::Move;
pub use piece::{Color, PieceKind};
pub use position::Position;
pub use square::Square;
