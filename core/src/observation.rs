use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// `-1` for unexplored cells, adjacency count otherwise.
    pub board: Array2<i8>,
    /// `true` exactly where `board` is unexplored.
    pub action_mask: Array2<bool>,
    pub num_mines: CellCount,
    pub step_count: u32,
}

impl Observation {
    pub fn new(
        board: Array2<i8>,
        action_mask: Array2<bool>,
        num_mines: CellCount,
        step_count: u32,
    ) -> Result<Self> {
        let obs = Self {
            board,
            action_mask,
            num_mines,
            step_count,
        };
        obs.validate()?;
        Ok(obs)
    }

    pub fn from_state(state: &State) -> Self {
        let board = state.board().clone();
        let action_mask = board.mapv(|value| value == UNEXPLORED);

        Self {
            board,
            action_mask,
            num_mines: state.num_mines(),
            step_count: state.step_count(),
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.board.dim();
        (rows as Coord, cols as Coord)
    }

    /// Checks internal consistency: matching shapes, board values in `-1..=8`, mask equal to
    /// the unexplored cells, and a mine count that leaves a safe cell.
    pub fn validate(&self) -> Result<()> {
        if self.action_mask.dim() != self.board.dim() {
            return Err(GameError::InvalidBoardShape);
        }

        for (&value, &legal) in self.board.iter().zip(self.action_mask.iter()) {
            if legal != CellView::from_board_value(value)?.is_unexplored() {
                return Err(GameError::InconsistentActionMask);
            }
        }

        let (rows, cols) = self.board.dim();
        if usize::from(self.num_mines) >= rows * cols {
            return Err(GameError::TooManyMines);
        }

        Ok(())
    }
}
