use std::fmt;

use super::UniverseError;

/// Offsets of the Moore neighbourhood, row by row, centre excluded.
#[rustfmt::skip]
pub const NEIGHBOUR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Cell is a position on the unbounded lattice.
/// It carries no state of its own: a cell is alive iff the universe holds it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`, or `None` if either axis leaves the i64 range
    pub fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The 8 Moore-neighbourhood positions around this cell
    pub fn neighbours(self) -> Result<[Cell; 8], UniverseError> {
        let mut out = [self; 8];
        for (slot, &(dx, dy)) in out.iter_mut().zip(NEIGHBOUR_OFFSETS.iter()) {
            *slot = self
                .offset(dx, dy)
                .ok_or(UniverseError::CoordinateOverflow { cell: self })?;
        }
        Ok(out)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Cell> for (i64, i64) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}
