use std::time::{SystemTime, UNIX_EPOCH};

use super::*;

/// Uniform mine placement: a Fisher-Yates shuffle over the full position
/// list, with the prefix of `config.mines` positions becoming mines. Exactly
/// that many mines, no duplicates, no bias toward any position.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: rand::rngs::SmallRng,
}

impl RandomBoardGenerator {
    /// Seeds from the system clock.
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::from(elapsed.subsec_nanos()) ^ elapsed.as_secs())
            .unwrap_or(0x5eed);
        Self::from_seed(seed)
    }

    /// Reproducible layouts: the same seed and config always produce the
    /// same board.
    pub fn from_seed(seed: u64) -> Self {
        use rand::prelude::*;

        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBoardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Grid> {
        use rand::prelude::*;

        config.validate()?;

        let mut grid = empty_grid(config);

        let mut positions: Vec<Position> = grid.iter().map(|cell| cell.position).collect();
        positions.shuffle(&mut self.rng);
        for &position in &positions[..config.mines as usize] {
            grid[position.to_nd_index()].mine = true;
        }

        count_adjacent_mines(&mut grid);

        log::debug!(
            "generated {}x{} board with {} mines",
            config.rows,
            config.columns,
            config.mines
        );
        Ok(grid)
    }
}
