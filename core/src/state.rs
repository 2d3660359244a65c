use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle phase of one game.
///
/// Valid transitions:
/// - NotStarted -> Playing (via `start`)
/// - Playing -> Victory
/// - Playing -> Loss
///
/// Terminal statuses only ever change through a new `start`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    Playing,
    Victory,
    Loss,
}

impl GameStatus {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Loss)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// The engine's single mutable aggregate. The engine owns it exclusively;
/// every consumer receives a deep copy, never the live value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    pub rows: Coord,
    pub columns: Coord,
    pub total_mines: CellCount,
    pub flags_placed: CellCount,
    /// Revealed non-mine cells. Mines revealed at a loss are not counted.
    pub cells_revealed: CellCount,
    /// Driven by the external timer collaborator via `GameEngine::tick`.
    pub elapsed_seconds: u32,
    pub grid: Grid,
}

impl GameState {
    /// Pre-start placeholder: `NotStarted`, empty grid, zero dimensions.
    pub fn placeholder() -> Self {
        Self {
            status: GameStatus::NotStarted,
            rows: 0,
            columns: 0,
            total_mines: 0,
            flags_placed: 0,
            cells_revealed: 0,
            elapsed_seconds: 0,
            grid: Array2::default((0, 0)),
        }
    }

    pub fn in_bounds(&self, row: Coord, column: Coord) -> bool {
        row < self.rows && column < self.columns
    }

    pub fn cell_at(&self, position: Position) -> Option<Cell> {
        self.grid.get(position.to_nd_index()).copied()
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_total(self.rows, self.columns)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.total_mines)
    }

    /// How many mines have not been flagged yet. Negative when the player
    /// placed more flags than there are mines.
    pub fn mines_left(&self) -> isize {
        (self.total_mines as isize) - (self.flags_placed as isize)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_empty_and_not_started() {
        let state = GameState::placeholder();
        assert_eq!(state.status, GameStatus::NotStarted);
        assert_eq!(state.total_cells(), 0);
        assert!(!state.in_bounds(0, 0));
        assert_eq!(state.cell_at(Position::new(0, 0)), None);
    }

    #[test]
    fn mines_left_goes_negative_with_excess_flags() {
        let mut state = GameState::placeholder();
        state.total_mines = 2;
        state.flags_placed = 5;
        assert_eq!(state.mines_left(), -3);
    }

    #[test]
    fn status_helpers() {
        assert!(GameStatus::Playing.is_playing());
        assert!(!GameStatus::Playing.is_terminal());
        assert!(GameStatus::Victory.is_terminal());
        assert!(GameStatus::Loss.is_terminal());
        assert!(!GameStatus::NotStarted.is_playing());
        assert_eq!(GameStatus::default(), GameStatus::NotStarted);
    }
}
