#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use geometry::*;
pub use observation::*;
pub use policy::*;
pub use specs::*;
pub use state::*;
pub use tile::*;
pub use timestep::*;
pub use types::*;

mod adjacency;
mod engine;
mod error;
mod generator;
mod geometry;
mod observation;
mod policy;
mod specs;
mod state;
mod tile;
mod timestep;
mod types;

/// Grid dimensions and mine count of a game.
///
/// Always valid: at least one row and column, at least one mine and at least one safe cell.
/// Deserialization goes through [`MinesweeperConfig::new`] as well.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct MinesweeperConfig {
    num_rows: Coord,
    num_cols: Coord,
    num_mines: CellCount,
}

#[derive(Deserialize)]
struct RawConfig {
    num_rows: Coord,
    num_cols: Coord,
    num_mines: CellCount,
}

impl TryFrom<RawConfig> for MinesweeperConfig {
    type Error = GameError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        Self::new(raw.num_rows, raw.num_cols, raw.num_mines)
    }
}

impl MinesweeperConfig {
    pub const fn new(num_rows: Coord, num_cols: Coord, num_mines: CellCount) -> Result<Self> {
        if num_rows == 0 || num_cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if num_mines == 0 {
            return Err(GameError::NoMines);
        }
        if num_mines >= mult(num_rows, num_cols) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(num_rows, num_cols, num_mines))
    }

    const fn new_unchecked(num_rows: Coord, num_cols: Coord, num_mines: CellCount) -> Self {
        Self {
            num_rows,
            num_cols,
            num_mines,
        }
    }

    /// 10x10 grid with 10 mines, the standard environment preset.
    pub const fn standard() -> Self {
        Self::new_unchecked(10, 10, 10)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(16, 30, 99)
    }

    pub const fn num_rows(&self) -> Coord {
        self.num_rows
    }

    pub const fn num_cols(&self) -> Coord {
        self.num_cols
    }

    pub const fn num_mines(&self) -> CellCount {
        self.num_mines
    }

    pub const fn size(&self) -> Coord2 {
        (self.num_rows, self.num_cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.num_rows, self.num_cols)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.num_mines
    }
}

impl Default for MinesweeperConfig {
    fn default() -> Self {
        Self::standard()
    }
}
