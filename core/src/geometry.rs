use crate::*;

/// Offsets of the eight surrounding cells, in a fixed order.
const DISPLACEMENTS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One entry of a [`NeighborTable`].
///
/// Slots that fall outside the grid still carry coordinates (clamped onto the grid) so every
/// slot can be consumed by the same arithmetic; `in_grid` is the sentinel that masks them out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NeighborSlot {
    pub coords: Coord2,
    pub in_grid: bool,
}

/// Fixed-size neighbor list of a cell, always eight slots long.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NeighborTable(pub [NeighborSlot; 8]);

impl NeighborTable {
    pub fn slots(&self) -> &[NeighborSlot; 8] {
        &self.0
    }
}

/// Applies `delta` to `coords`, clamping onto the grid and reporting whether no clamp was needed.
fn apply_delta(coords: Coord2, delta: (i16, i16), bounds: Coord2) -> NeighborSlot {
    let row = i16::from(coords.0) + delta.0;
    let col = i16::from(coords.1) + delta.1;
    let max_row = i16::from(bounds.0) - 1;
    let max_col = i16::from(bounds.1) - 1;

    let in_grid = (row >= 0) & (row <= max_row) & (col >= 0) & (col <= max_col);

    NeighborSlot {
        coords: (
            row.clamp(0, max_row.max(0)) as Coord,
            col.clamp(0, max_col.max(0)) as Coord,
        ),
        in_grid,
    }
}

/// Eight-slot neighbor table of `coords` in a grid of `size`.
///
/// `coords` must lie inside the grid.
pub fn neighbors(size: Coord2, coords: Coord2) -> NeighborTable {
    NeighborTable(DISPLACEMENTS.map(|delta| apply_delta(coords, delta, size)))
}
