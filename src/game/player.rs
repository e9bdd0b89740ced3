use std::str::FromStr;

use super::board::Cell;

/// One of the two players. Red moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Yellow,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Red, Side::Yellow];

    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::Red => Side::Yellow,
            Side::Yellow => Side::Red,
        }
    }

    /// Convert side to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Side::Red => Cell::Red,
            Side::Yellow => Cell::Yellow,
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Yellow => "Yellow",
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Side::Red),
            "yellow" | "y" => Ok(Side::Yellow),
            other => Err(format!("unknown side '{other}' (expected 'red' or 'yellow')")),
        }
    }
}
