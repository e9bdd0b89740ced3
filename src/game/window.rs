//! Enumeration of every straight run of `connect` cells on a board.
//!
//! Win detection and the heuristic both walk the same set of windows, so the
//! scan lives here once.

use std::ops::Range;

use super::board::{Board, Cell, Dimensions};
use super::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right, `\`.
    DiagonalDown,
    /// Bottom-left to top-right, `/`.
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// Row and column ranges of valid window start cells.
    fn starts(self, dims: Dimensions) -> (Range<usize>, Range<usize>) {
        let span = |len: usize| 0..(len + 1).saturating_sub(dims.connect);
        match self {
            Direction::Horizontal => (0..dims.rows, span(dims.cols)),
            Direction::Vertical => (span(dims.rows), 0..dims.cols),
            Direction::DiagonalDown => (span(dims.rows), span(dims.cols)),
            Direction::DiagonalUp => {
                let rows = span(dims.rows);
                let shift = dims.connect - 1;
                (rows.start + shift..rows.end + shift, span(dims.cols))
            }
        }
    }
}

/// A run of cells identified by its first cell and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Window {
    /// The `len` positions `(row, col)` covered by this window.
    pub fn positions(self, len: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..len).map(move |i| match self.direction {
            Direction::Horizontal => (self.row, self.col + i),
            Direction::Vertical => (self.row + i, self.col),
            Direction::DiagonalDown => (self.row + i, self.col + i),
            Direction::DiagonalUp => (self.row - i, self.col + i),
        })
    }
}

/// Every window of `dims.connect` cells, in all four directions.
pub fn windows(dims: Dimensions) -> impl Iterator<Item = Window> {
    Direction::ALL.into_iter().flat_map(move |direction| {
        let (rows, cols) = direction.starts(dims);
        rows.flat_map(move |row| {
            cols.clone().map(move |col| Window {
                row,
                col,
                direction,
            })
        })
    })
}

/// Cell tally of one window from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowCounts {
    pub own: usize,
    pub opponent: usize,
    pub empty: usize,
}

impl WindowCounts {
    pub fn tally(board: &Board, window: Window, side: Side) -> Self {
        let own_cell = side.to_cell();
        let mut counts = WindowCounts::default();
        for cell in board.window_cells(window) {
            match cell {
                Cell::Empty => counts.empty += 1,
                c if c == own_cell => counts.own += 1,
                _ => counts.opponent += 1,
            }
        }
        counts
    }
}
