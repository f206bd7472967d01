use crate::GridInt;
use Direction::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Heading of the snake. `Still` is the zero vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Still,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parses a raw `(dx, dy)` pair. Anything that isn't a unit vector
    /// along one axis (or the zero vector) is rejected.
    pub fn from_delta(dx: GridInt, dy: GridInt) -> Option<Self> {
        match (dx, dy) {
            (0, 0) => Some(Still),
            (0, -1) => Some(Up),
            (0, 1) => Some(Down),
            (-1, 0) => Some(Left),
            (1, 0) => Some(Right),
            _ => None,
        }
    }

    pub fn delta(self) -> (GridInt, GridInt) {
        match self {
            Still => (0, 0),
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn axis(self) -> Option<Axis> {
        match self {
            Still => None,
            Up | Down => Some(Axis::Vertical),
            Left | Right => Some(Axis::Horizontal),
        }
    }

    pub fn is_moving(self) -> bool {
        self != Still
    }
}
