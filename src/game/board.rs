use std::fmt;

use super::window::Window;
use super::Side;
use crate::error::{BoardParseError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CONNECT: usize = 4;

/// Fixed shape of a game: grid size and the run length that wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
    pub connect: usize,
}

impl Dimensions {
    /// The classic 6 x 7 board, four in a row.
    pub const STANDARD: Dimensions = Dimensions::new(ROWS, COLS, CONNECT);

    pub const fn new(rows: usize, cols: usize, connect: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board must have at least one cell");
        assert!(connect >= 2, "connect length must be at least 2");
        Dimensions {
            rows,
            cols,
            connect,
        }
    }

    /// Total number of cells, which is also the longest possible game.
    pub const fn cells(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn center(&self) -> usize {
        self.cols / 2
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::STANDARD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The side owning this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Side::Red),
            Cell::Yellow => Some(Side::Yellow),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// Grid of cells under gravity.
///
/// Row 0 is the top, row `rows - 1` is the bottom. Within a column the
/// occupied cells always form a contiguous run from the bottom up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty standard board
    pub fn new() -> Self {
        Self::with_dimensions(Dimensions::STANDARD)
    }

    pub fn with_dimensions(dims: Dimensions) -> Self {
        Board {
            dims,
            cells: vec![Cell::Empty; dims.cells()],
        }
    }

    /// Build a board from a top-to-bottom diagram using `.`, `R` and `Y`.
    ///
    /// The diagram determines the grid size; the connect length is always
    /// [`CONNECT`].
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        let first = rows.first().ok_or(BoardParseError::Empty)?;
        let cols = first.chars().count();
        if cols == 0 {
            return Err(BoardParseError::Empty);
        }

        let mut board = Board::with_dimensions(Dimensions::new(rows.len(), cols, CONNECT));
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(BoardParseError::RaggedRow {
                    row,
                    found,
                    expected: cols,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => Cell::Empty,
                    'R' | 'r' => Cell::Red,
                    'Y' | 'y' => Cell::Yellow,
                    _ => return Err(BoardParseError::UnknownCell { ch, row, col }),
                };
                let idx = board.index(row, col);
                board.cells[idx] = cell;
            }
        }

        for row in 0..board.rows() - 1 {
            for col in 0..cols {
                if board.get(row, col) != Cell::Empty && board.get(row + 1, col) == Cell::Empty {
                    return Err(BoardParseError::FloatingPiece { row, col });
                }
            }
        }

        Ok(board)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.dims.cols + col
    }

    /// Get the cell at a specific position
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Cells covered by `window`, in window order.
    pub fn window_cells(&self, window: Window) -> impl Iterator<Item = Cell> + '_ {
        window
            .positions(self.dims.connect)
            .map(move |(row, col)| self.get(row, col))
    }

    /// A column is open iff its top cell is empty. Out-of-range columns are
    /// never open.
    pub fn is_column_open(&self, col: usize) -> bool {
        col < self.dims.cols && self.get(0, col) == Cell::Empty
    }

    /// Row index of the lowest empty cell in `col`, scanning from the bottom.
    pub fn lowest_open_row(&self, col: usize) -> Result<usize, MoveError> {
        if col >= self.dims.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                columns: self.dims.cols,
            });
        }

        (0..self.dims.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(MoveError::ColumnFull { column: col })
    }

    /// Drop a piece for `side` into `col`; returns the row where it landed.
    /// That row is what [`Board::undo_move`] needs to take the move back.
    pub fn apply_move(&mut self, col: usize, side: Side) -> Result<usize, MoveError> {
        let row = self.lowest_open_row(col)?;
        let idx = self.index(row, col);
        self.cells[idx] = side.to_cell();
        Ok(row)
    }

    /// Clear the cell written by the matching [`Board::apply_move`].
    ///
    /// The board keeps no history: callers pair every apply with exactly one
    /// undo, last in first out.
    pub fn undo_move(&mut self, col: usize, row: usize) {
        debug_assert!(
            self.get(row, col) != Cell::Empty,
            "undo of empty cell ({row}, {col})"
        );
        debug_assert!(
            row == 0 || self.get(row - 1, col) == Cell::Empty,
            "undo of ({row}, {col}) which is not the top piece of its column"
        );
        let idx = self.index(row, col);
        self.cells[idx] = Cell::Empty;
    }

    /// Columns whose top cell is empty, left to right.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.dims.cols)
            .filter(|&col| self.is_column_open(col))
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.dims.cols).all(|col| !self.is_column_open(col))
    }

    /// Number of pieces on the board.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dims.rows {
            let line: String = (0..self.dims.cols)
                .map(|col| self.get(row, col).symbol())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
