use serde::{Deserialize, Serialize};

use crate::*;

/// Typed view of a single board value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Unexplored,
    Revealed(u8),
}

impl CellView {
    pub const fn from_board_value(value: i8) -> Result<Self> {
        match value {
            UNEXPLORED => Ok(Self::Unexplored),
            0..=8 => Ok(Self::Revealed(value as u8)),
            _ => Err(GameError::InvalidCellValue),
        }
    }

    pub const fn to_board_value(self) -> i8 {
        match self {
            Self::Unexplored => UNEXPLORED,
            Self::Revealed(count) => count as i8,
        }
    }

    pub const fn is_unexplored(self) -> bool {
        matches!(self, Self::Unexplored)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Unexplored
    }
}
