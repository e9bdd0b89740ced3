use super::board::Board;
use super::window::windows;
use super::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Side),
    Draw,
}

/// Does `side` own every cell of at least one window?
pub fn has_four_in_a_row(board: &Board, side: Side) -> bool {
    let cell = side.to_cell();
    windows(board.dimensions()).any(|window| board.window_cells(window).all(|c| c == cell))
}

/// Full board with no winner. A full board can also be a won board, so both
/// sides are checked.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && Side::ALL.iter().all(|&side| !has_four_in_a_row(board, side))
}

/// The decided result of the position, if any.
///
/// Only one side can have a connection in a legally played game; if a
/// hand-built position has both, Red is reported.
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    Side::ALL
        .into_iter()
        .find(|&side| has_four_in_a_row(board, side))
        .map(GameOutcome::Winner)
        .or_else(|| board.is_full().then_some(GameOutcome::Draw))
}
