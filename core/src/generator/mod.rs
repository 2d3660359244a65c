use crate::*;

pub use random::*;

mod random;

/// Strategy seam for producing the initial grid of a new game.
pub trait BoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Grid>;
}

/// Lays out mines at explicit positions. Useful for reproducing a known
/// board; the random placement used for normal play is
/// [`RandomBoardGenerator`].
#[derive(Clone, Debug, PartialEq)]
pub struct FixedBoardGenerator {
    mines: Vec<Position>,
}

impl FixedBoardGenerator {
    pub fn new(mines: &[(Coord, Coord)]) -> Self {
        Self {
            mines: mines.iter().copied().map(Position::from).collect(),
        }
    }
}

impl BoardGenerator for FixedBoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Grid> {
        config.validate()?;

        let mut grid = empty_grid(config);
        for &position in &self.mines {
            if position.row >= config.rows || position.column >= config.columns {
                return Err(GameError::MineOutOfBounds);
            }
            grid[position.to_nd_index()].mine = true;
        }

        let placed = grid.iter().filter(|cell| cell.mine).count() as CellCount;
        if placed != config.mines {
            log::warn!(
                "fixed layout places {} mines but the config declares {}",
                placed,
                config.mines
            );
        }

        count_adjacent_mines(&mut grid);
        Ok(grid)
    }
}

/// All-hidden grid with per-cell positions filled in.
pub(crate) fn empty_grid(config: GameConfig) -> Grid {
    Grid::from_shape_fn(
        (config.rows as usize, config.columns as usize),
        |(row, column)| Cell::hidden_at(Position::new(row as Coord, column as Coord)),
    )
}

/// Second pass over a placed grid: every mine bumps the count of each of its
/// in-bounds neighbors. A mine never counts itself, but it does pick up
/// counts from neighboring mines.
pub(crate) fn count_adjacent_mines(grid: &mut Grid) {
    let mine_positions: Vec<Position> = grid
        .iter()
        .filter(|cell| cell.mine)
        .map(|cell| cell.position)
        .collect();

    for position in mine_positions {
        for neighbor in grid.iter_neighbors(position) {
            grid[neighbor.to_nd_index()].adjacent_mines += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_layout_places_requested_mines() {
        let mut generator = FixedBoardGenerator::new(&[(0, 0), (1, 2)]);
        let grid = generator.generate(GameConfig::new(3, 3, 2)).unwrap();

        assert!(grid[[0, 0]].mine);
        assert!(grid[[1, 2]].mine);
        assert_eq!(grid.iter().filter(|cell| cell.mine).count(), 2);
    }

    #[test]
    fn fixed_layout_rejects_out_of_bounds_mines() {
        let mut generator = FixedBoardGenerator::new(&[(3, 0)]);
        assert_eq!(
            generator.generate(GameConfig::new(3, 3, 1)),
            Err(GameError::MineOutOfBounds)
        );
    }

    #[test]
    fn adjacency_counts_follow_the_moore_neighborhood() {
        // single central mine: every other cell of a 3x3 board touches it
        let mut generator = FixedBoardGenerator::new(&[(1, 1)]);
        let grid = generator.generate(GameConfig::new(3, 3, 1)).unwrap();

        for cell in grid.iter() {
            if cell.mine {
                assert_eq!(cell.adjacent_mines, 0);
            } else {
                assert_eq!(cell.adjacent_mines, 1, "at {:?}", cell.position);
            }
        }
    }

    #[test]
    fn mines_pick_up_counts_from_neighboring_mines() {
        let mut generator = FixedBoardGenerator::new(&[(0, 0), (0, 1)]);
        let grid = generator.generate(GameConfig::new(2, 2, 2)).unwrap();

        assert_eq!(grid[[0, 0]].adjacent_mines, 1);
        assert_eq!(grid[[0, 1]].adjacent_mines, 1);
        assert_eq!(grid[[1, 0]].adjacent_mines, 2);
        assert_eq!(grid[[1, 1]].adjacent_mines, 2);
    }
}
