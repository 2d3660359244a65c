use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be positive")]
    InvalidDimensions,
    #[error("Too many mines: {mines} requested but the board has {capacity} cells")]
    TooManyMines { mines: CellCount, capacity: CellCount },
    #[error("Mine position outside the board")]
    MineOutOfBounds,
}

pub type Result<T> = core::result::Result<T, GameError>;
