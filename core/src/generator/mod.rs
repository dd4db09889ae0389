use crate::*;
pub use fixed::*;
pub use uniform::*;

mod fixed;
mod uniform;

/// Source of mine placements for [`Minesweeper::reset`].
pub trait MineGenerator {
    fn generate(&self, config: &MinesweeperConfig, seed: u64) -> Result<MineLayout>;
}

impl<T: MineGenerator + ?Sized> MineGenerator for &T {
    fn generate(&self, config: &MinesweeperConfig, seed: u64) -> Result<MineLayout> {
        (**self).generate(config, seed)
    }
}
