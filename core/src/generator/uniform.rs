use alloc::vec::Vec;

use super::*;

/// Draws `num_mines` distinct cell indices in `0..num_cells`, uniformly without replacement.
///
/// Every cell receives a random key drawn in index order and the cells with the lowest keys
/// become mines, so the amount of work never depends on what was drawn. The same seed always
/// yields the same indices, returned in ascending order.
pub fn sample(seed: u64, num_cells: CellCount, num_mines: CellCount) -> Result<Vec<CellCount>> {
    use rand::prelude::*;

    if num_mines == 0 {
        return Err(GameError::NoMines);
    }
    if num_mines >= num_cells {
        return Err(GameError::TooManyMines);
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut keyed: Vec<(u64, CellCount)> = (0..num_cells)
        .map(|index| (rng.random::<u64>(), index))
        .collect();
    keyed.sort_unstable();

    let mut mines: Vec<CellCount> = keyed
        .into_iter()
        .take(num_mines.into())
        .map(|(_, index)| index)
        .collect();
    mines.sort_unstable();
    Ok(mines)
}

/// Default generator: mine positions depend only on the seed.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct UniformSamplingGenerator;

impl MineGenerator for UniformSamplingGenerator {
    fn generate(&self, config: &MinesweeperConfig, seed: u64) -> Result<MineLayout> {
        let mines = sample(seed, config.total_cells(), config.num_mines())?;
        MineLayout::new(config.size(), mines)
    }
}
