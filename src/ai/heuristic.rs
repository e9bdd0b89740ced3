use crate::game::window::{windows, WindowCounts};
use crate::game::{Board, Side};

use super::score::{Score, MAX_WINDOW_SCORE};

/// Trait for evaluating a board position from a side's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, side: Side) -> Score;
}

/// One scoring rule for a single window. The rules partition windows by exact
/// piece counts, so at most one of them applies to any window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRule {
    /// Every cell is ours.
    Complete,
    /// One short of complete, the missing cell empty.
    OwnNearComplete,
    /// Two short of complete, both missing cells empty.
    OwnOpenPair,
    /// The opponent is one short of complete, the missing cell empty.
    OpponentNearComplete,
}

impl WindowRule {
    pub const ALL: [WindowRule; 4] = [
        WindowRule::Complete,
        WindowRule::OwnNearComplete,
        WindowRule::OwnOpenPair,
        WindowRule::OpponentNearComplete,
    ];

    pub fn weight(self) -> Score {
        match self {
            WindowRule::Complete => MAX_WINDOW_SCORE,
            WindowRule::OwnNearComplete => 5,
            WindowRule::OwnOpenPair => 2,
            // Deliberately lighter than OwnNearComplete.
            WindowRule::OpponentNearComplete => -4,
        }
    }

    pub fn matches(self, counts: WindowCounts, len: usize) -> bool {
        let WindowCounts {
            own,
            opponent,
            empty,
        } = counts;
        match self {
            WindowRule::Complete => own == len,
            WindowRule::OwnNearComplete => own + 1 == len && empty == 1,
            WindowRule::OwnOpenPair => own + 2 == len && empty == 2,
            WindowRule::OpponentNearComplete => opponent + 1 == len && empty == 1,
        }
    }
}

/// Score one window of `len` cells. Every matching rule contributes.
pub fn evaluate_window(counts: WindowCounts, len: usize) -> Score {
    WindowRule::ALL
        .into_iter()
        .filter(|rule| rule.matches(counts, len))
        .map(WindowRule::weight)
        .sum()
}

/// Sum of [`evaluate_window`] over every window on the board. Windows overlap,
/// so a piece counts once per window it sits in.
pub fn score_position(board: &Board, side: Side) -> Score {
    let len = board.dimensions().connect;
    windows(board.dimensions())
        .map(|window| evaluate_window(WindowCounts::tally(board, window, side), len))
        .sum()
}

/// Default heuristic that scans all windows and scores threats.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, side: Side) -> Score {
        score_position(board, side)
    }
}
