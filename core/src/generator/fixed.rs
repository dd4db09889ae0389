use alloc::vec::Vec;

use super::*;

/// Generator that ignores the seed and always places mines on the given flat indices.
///
/// Used for scripted episodes; the layout is checked against the config on every reset.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mine_locations: Vec<CellCount>,
}

impl FixedMineGenerator {
    pub fn new(mine_locations: impl IntoIterator<Item = CellCount>) -> Self {
        Self {
            mine_locations: mine_locations.into_iter().collect(),
        }
    }

    pub fn from_coords(size: Coord2, mine_coords: &[Coord2]) -> Self {
        Self::new(mine_coords.iter().map(|&coords| flat_index(coords, size)))
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(&self, config: &MinesweeperConfig, _seed: u64) -> Result<MineLayout> {
        let layout = MineLayout::new(config.size(), self.mine_locations.clone())?;
        if layout.mine_count() != config.num_mines() {
            log::warn!(
                "Fixed mine layout rejected, holds {} mines but config requires {}",
                layout.mine_count(),
                config.num_mines()
            );
            return Err(GameError::MineCountMismatch);
        }
        Ok(layout)
    }
}
