use crate::GridInt;

/// A position on the game grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: GridInt,
    pub y: GridInt,
}

impl Cell {
    pub const fn new(x: GridInt, y: GridInt) -> Self {
        Cell { x, y }
    }

    /// The cell reached by stepping `(dx, dy)` from this one.
    pub fn offset(self, (dx, dy): (GridInt, GridInt)) -> Self {
        Cell { x: self.x + dx, y: self.y + dy }
    }

    pub fn is_within(self, cols: GridInt, rows: GridInt) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < cols && self.y < rows
    }
}

impl From<(GridInt, GridInt)> for Cell {
    fn from((x, y): (GridInt, GridInt)) -> Self {
        Cell { x, y }
    }
}
