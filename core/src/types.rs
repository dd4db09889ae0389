/// Single coordinate axis used for grid rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts, total-cell counts, and flat cell indices.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Board value of a cell that has not been explored yet.
pub const UNEXPLORED: i8 = -1;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Flat index `row * num_cols + col` of `coords` in a grid of `size`.
pub const fn flat_index((row, col): Coord2, size: Coord2) -> CellCount {
    row as CellCount * size.1 as CellCount + col as CellCount
}

/// Inverse of [`flat_index`].
pub const fn coords_of(index: CellCount, size: Coord2) -> Coord2 {
    let cols = size.1 as CellCount;
    ((index / cols) as Coord, (index % cols) as Coord)
}
