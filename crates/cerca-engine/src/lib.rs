//! Search and evaluation for cerca.

pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use eval::score::{DRAW, MATE, MATE_STEP, is_mate_score};
pub use search::negamax::negamax;
pub use search::{MAX_DEPTH, SearchResult, select_best_move};
