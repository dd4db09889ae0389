use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Closed interval a scalar output stays within.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundedSpec {
    pub minimum: f32,
    pub maximum: f32,
}

impl BoundedSpec {
    pub fn contains(&self, value: f32) -> bool {
        (self.minimum..=self.maximum).contains(&value)
    }
}

/// Multi-discrete action space: `row` in `0..num_values[0]`, `col` in `0..num_values[1]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    pub num_values: [Coord; 2],
}

impl ActionSpec {
    pub fn validate(&self, action: Action) -> Result<Action> {
        if action.row < self.num_values[0] && action.col < self.num_values[1] {
            Ok(action)
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}

/// Shape and contents an [`Observation`] of a given config must have.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationSpec {
    pub config: MinesweeperConfig,
}

impl ObservationSpec {
    pub fn validate(&self, observation: &Observation) -> Result<()> {
        if observation.board.dim() != self.shape() {
            return Err(GameError::InvalidBoardShape);
        }
        observation.validate()?;
        if observation.num_mines != self.config.num_mines() {
            return Err(GameError::MineCountMismatch);
        }
        Ok(())
    }

    /// Observation conforming to this spec, as seen right after a reset.
    pub fn generate_value(&self) -> Observation {
        Observation {
            board: Array2::from_elem(self.shape(), UNEXPLORED),
            action_mask: Array2::from_elem(self.shape(), true),
            num_mines: self.config.num_mines(),
            step_count: 0,
        }
    }

    fn shape(&self) -> (usize, usize) {
        (self.config.num_rows().into(), self.config.num_cols().into())
    }
}
