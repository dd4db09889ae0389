use crate::*;

/// Number of mines among the neighbors of `coords`.
///
/// Every one of the eight neighbor slots is visited; slots outside the grid are masked out
/// by multiplying with their `in_grid` flag instead of being skipped.
pub fn count_adjacent_mines(mine_locations: &[CellCount], size: Coord2, coords: Coord2) -> u8 {
    neighbors(size, coords)
        .slots()
        .iter()
        .map(|slot| {
            let is_mine = mine_locations.contains(&flat_index(slot.coords, size));
            u8::from(is_mine) * u8::from(slot.in_grid)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_neighbors_inside_the_grid() {
        // mine at (0, 0) of a 2x2 grid
        let mines = [0];

        assert_eq!(count_adjacent_mines(&mines, (2, 2), (1, 1)), 1);
        assert_eq!(count_adjacent_mines(&mines, (2, 2), (0, 1)), 1);
        // clamped out-of-grid slots of (0, 0) land on the mine itself and must not count
        assert_eq!(count_adjacent_mines(&mines, (2, 2), (0, 0)), 0);
    }

    #[test]
    fn fully_surrounded_cell_counts_eight() {
        let size = (3, 3);
        let mines = [0, 1, 2, 3, 5, 6, 7, 8];

        assert_eq!(count_adjacent_mines(&mines, size, (1, 1)), 8);
        assert_eq!(count_adjacent_mines(&mines, size, (0, 0)), 2);
    }

    #[test]
    fn ignores_mines_beyond_the_ring() {
        let size = (4, 4);
        let mines = [flat_index((3, 3), size)];

        assert_eq!(count_adjacent_mines(&mines, size, (0, 0)), 0);
        assert_eq!(count_adjacent_mines(&mines, size, (2, 2)), 1);
    }
}
