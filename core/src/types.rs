use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Zero-indexed `(row, column)` address of one board square.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub row: Coord,
    pub column: Coord,
}

impl Position {
    pub const fn new(row: Coord, column: Coord) -> Self {
        Self { row, column }
    }

    pub const fn to_nd_index(self) -> [usize; 2] {
        [self.row as usize, self.column as usize]
    }
}

impl From<(Coord, Coord)> for Position {
    fn from((row, column): (Coord, Coord)) -> Self {
        Self::new(row, column)
    }
}

pub const fn cell_total(rows: Coord, columns: Coord) -> CellCount {
    let rows = rows as CellCount;
    let columns = columns as CellCount;
    rows.saturating_mul(columns)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: Position) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, center: Position) -> NeighborIter {
        let dim = self.dim();
        let bounds = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        NeighborIter::new(center, bounds)
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `center`, returning a value only when it remains in bounds.
fn apply_delta(center: Position, delta: (isize, isize), bounds: (Coord, Coord)) -> Option<Position> {
    let (d_row, d_column) = delta;
    let (rows, columns) = bounds;

    let row = center.row.checked_add_signed(d_row.try_into().ok()?)?;
    if row >= rows {
        return None;
    }

    let column = center.column.checked_add_signed(d_column.try_into().ok()?)?;
    if column >= columns {
        return None;
    }

    Some(Position::new(row, column))
}

/// Walks the up-to-8 in-bounds Moore neighbors of a cell. Holds no borrow of
/// the grid it was created from.
#[derive(Debug)]
pub struct NeighborIter {
    center: Position,
    bounds: (Coord, Coord),
    index: u8,
}

impl NeighborIter {
    fn new(center: Position, bounds: (Coord, Coord)) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
