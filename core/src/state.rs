use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Selection of one cell to reveal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: Coord,
    pub col: Coord,
}

impl Action {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    pub const fn coords(self) -> Coord2 {
        (self.row, self.col)
    }
}

impl From<Coord2> for Action {
    fn from((row, col): Coord2) -> Self {
        Self::new(row, col)
    }
}

/// Sorted set of distinct flat indices holding mines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineLayout {
    size: Coord2,
    mine_locations: Vec<CellCount>,
}

impl MineLayout {
    pub fn new(size: Coord2, mut mine_locations: Vec<CellCount>) -> Result<Self> {
        let total_cells = mult(size.0, size.1);
        mine_locations.sort_unstable();

        let distinct = mine_locations.windows(2).all(|pair| pair[0] != pair[1]);
        let in_range = mine_locations.iter().all(|&index| index < total_cells);
        if !distinct || !in_range {
            return Err(GameError::InvalidMineLayout);
        }

        Ok(Self {
            size,
            mine_locations,
        })
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn mine_locations(&self) -> &[CellCount] {
        &self.mine_locations
    }

    pub fn mine_count(&self) -> CellCount {
        // bounded by total_cells, which fits CellCount
        self.mine_locations.len() as CellCount
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_locations
            .binary_search(&flat_index(coords, self.size))
            .is_ok()
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        count_adjacent_mines(&self.mine_locations, self.size, coords)
    }

    pub(crate) fn into_locations(self) -> Vec<CellCount> {
        self.mine_locations
    }
}

/// Immutable snapshot of one episode.
///
/// Produced by [`Minesweeper::reset`] and replaced, never modified, by [`Minesweeper::step`].
///
/// Deserialization goes through [`State::from_parts`], so a checkpoint cannot smuggle in a
/// board or mine set the kernel would not have produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawState")]
pub struct State {
    pub(crate) board: Array2<i8>,
    pub(crate) step_count: u32,
    pub(crate) mine_locations: Vec<CellCount>,
    pub(crate) seed: u64,
}

#[derive(Deserialize)]
struct RawState {
    board: Array2<i8>,
    step_count: u32,
    mine_locations: Vec<CellCount>,
    seed: u64,
}

impl TryFrom<RawState> for State {
    type Error = GameError;

    fn try_from(raw: RawState) -> Result<Self> {
        Self::from_parts(raw.board, raw.step_count, raw.mine_locations, raw.seed)
    }
}

impl State {
    /// Rebuilds a state from its fields, checking every invariant `reset` and `step` uphold:
    /// grid dimensions fit `Coord`, the mines form a valid layout leaving a safe cell, and each
    /// revealed cell is a non-mine holding its true adjacency count.
    pub fn from_parts(
        board: Array2<i8>,
        step_count: u32,
        mine_locations: Vec<CellCount>,
        seed: u64,
    ) -> Result<Self> {
        let (rows, cols) = board.dim();
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        let (Ok(rows), Ok(cols)) = (Coord::try_from(rows), Coord::try_from(cols)) else {
            return Err(GameError::InvalidBoardShape);
        };
        let size = (rows, cols);

        let layout = MineLayout::new(size, mine_locations)?;
        if layout.mine_count() == 0 {
            return Err(GameError::NoMines);
        }
        if layout.mine_count() >= mult(rows, cols) {
            return Err(GameError::TooManyMines);
        }

        for ((row, col), &value) in board.indexed_iter() {
            // indices are below rows/cols, which fit Coord
            let coords = (row as Coord, col as Coord);
            if let CellView::Revealed(count) = CellView::from_board_value(value)? {
                if layout.contains_mine(coords) || count != layout.adjacent_mine_count(coords) {
                    return Err(GameError::InvalidCellValue);
                }
            }
        }

        Ok(Self {
            board,
            step_count,
            mine_locations: layout.into_locations(),
            seed,
        })
    }

    /// Fresh all-unexplored board over `layout`.
    pub fn new(layout: MineLayout, seed: u64) -> Self {
        let size = layout.size();
        Self {
            board: Array2::from_elem(size.to_nd_index(), UNEXPLORED),
            step_count: 0,
            mine_locations: layout.into_locations(),
            seed,
        }
    }

    pub fn board(&self) -> &Array2<i8> {
        &self.board
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    pub fn mine_locations(&self) -> &[CellCount] {
        &self.mine_locations
    }

    /// Seed the mine placement was drawn from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.board.dim();
        // dimensions are checked against Coord on every construction path
        (rows as Coord, cols as Coord)
    }

    pub fn num_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn num_mines(&self) -> CellCount {
        self.mine_locations.len() as CellCount
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        match self.board[coords.to_nd_index()] {
            UNEXPLORED => CellView::Unexplored,
            count => CellView::Revealed(count as u8),
        }
    }

    pub fn mine_at(&self, coords: Coord2) -> bool {
        self.mine_locations
            .contains(&flat_index(coords, self.size()))
    }

    pub fn is_explored(&self, coords: Coord2) -> bool {
        self.board[coords.to_nd_index()] != UNEXPLORED
    }

    pub fn num_revealed(&self) -> CellCount {
        self.board.iter().map(|&value| CellCount::from(value != UNEXPLORED)).sum()
    }

    pub fn num_unexplored(&self) -> CellCount {
        self.num_cells() - self.num_revealed()
    }
}
