use crate::game::Board;

/// Order in which the search tries candidate columns.
///
/// Ordering only affects how much alpha-beta can prune; the value found is
/// the same either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveOrder {
    /// Center column, then outward to the right edge, then outward to the left.
    #[default]
    CenterOut,
    /// Plain left to right.
    LeftToRight,
}

impl MoveOrder {
    /// Every column of a `cols`-wide board in this order.
    pub fn sequence(self, cols: usize) -> Vec<usize> {
        match self {
            MoveOrder::CenterOut => {
                let mid = cols / 2;
                (mid..cols).chain((0..mid).rev()).collect()
            }
            MoveOrder::LeftToRight => (0..cols).collect(),
        }
    }

    /// The board's open columns in this order.
    pub fn columns(self, board: &Board) -> Vec<usize> {
        self.sequence(board.cols())
            .into_iter()
            .filter(|&col| board.is_column_open(col))
            .collect()
    }
}
