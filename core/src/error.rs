use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid must have at least one row and one column")]
    InvalidDimensions,
    #[error("At least one mine is required")]
    NoMines,
    #[error("Too many mines, at least one safe cell is required")]
    TooManyMines,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Mine layout has duplicate or out of range cells")]
    InvalidMineLayout,
    #[error("Mine layout does not match the configured mine count")]
    MineCountMismatch,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board cell holds a value outside -1..=8")]
    InvalidCellValue,
    #[error("Action mask does not match unexplored cells")]
    InconsistentActionMask,
}

pub type Result<T> = core::result::Result<T, GameError>;
