//! Score bands.
//!
//! Heuristic scores stay within `±heuristic_bound`, far inside the two
//! terminal sentinels, so a decided position outranks any evaluation at any
//! depth.

use crate::game::window::windows;
use crate::game::Dimensions;

pub type Score = i64;

/// The side to move already has a connection.
pub const WIN_SCORE: Score = 100_000_000_000_000;
/// The opponent of the side to move has a connection.
pub const LOSS_SCORE: Score = -10_000_000_000_000;
pub const DRAW_SCORE: Score = 0;

/// Open bound of the search window. Its negation is representable.
pub const INFINITY: Score = Score::MAX;

const _: () = assert!(-INFINITY < LOSS_SCORE && INFINITY > WIN_SCORE);

/// Largest per-window contribution the heuristic can make.
pub const MAX_WINDOW_SCORE: Score = 100;

/// Upper bound on the absolute value of any heuristic evaluation.
pub fn heuristic_bound(dims: Dimensions) -> Score {
    windows(dims).count() as Score * MAX_WINDOW_SCORE
}
