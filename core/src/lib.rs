use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use publisher::*;
pub use state::*;
pub use timer::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod publisher;
mod state;
mod timer;
mod types;

/// Rectangular matrix of cells addressed by `(row, column)`, dimensions
/// fixed for the lifetime of one game.
pub type Grid = Array2<Cell>;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub columns: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new(rows: Coord, columns: Coord, mines: CellCount) -> Self {
        Self {
            rows,
            columns,
            mines,
        }
    }

    /// The classic 9x9 board with 10 mines.
    pub const fn beginner() -> Self {
        Self::new(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new(16, 30, 99)
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_total(self.rows, self.columns)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if self.mines > self.total_cells() {
            return Err(GameError::TooManyMines {
                mines: self.mines,
                capacity: self.total_cells(),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::beginner()
    }
}
