use std::collections::VecDeque;

use crate::cell::Cell;
use crate::direction::Direction::{self, *};

/// Where a fresh snake is placed, and which way it faces.
pub const START_CELL: Cell = Cell::new(4, 6);
pub const START_DIRECTION: Direction = Down;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Head first.
    body: VecDeque<Cell>,
    /// Direction applied on the last step. Axis lock is checked against this.
    heading: Direction,
    /// Direction the next step will use.
    direction: Direction,
}

// Never empty, so no is_empty.
#[allow(clippy::len_without_is_empty)]
impl Snake {
    pub fn new(pos: Cell, direction: Direction) -> Self {
        Snake { body: VecDeque::from(vec![pos]), heading: direction, direction }
    }

    /// Builds a snake from explicit cells, head first. Returns `None` for an
    /// empty body.
    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I, direction: Direction) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();

        if body.is_empty() {
            return None;
        }

        Some(Snake { body, heading: direction, direction })
    }

    pub fn head(&self) -> Cell {
        // Never empty: both constructors guarantee at least one cell and
        // advance() pushes before it pops.
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Queues a new direction, unless it runs along the axis the snake is
    /// currently travelling on. Returns whether the request was accepted.
    pub fn steer(&mut self, new_direction: Direction) -> bool {
        if !new_direction.is_moving() {
            return false;
        }

        match self.heading.axis() {
            Some(axis) if new_direction.axis() == Some(axis) => false,
            _ => {
                self.direction = new_direction;
                true
            }
        }
    }

    /// The cell the head would move into on the next step, or `None` while
    /// the snake is standing still.
    pub fn next_head(&self) -> Option<Cell> {
        if !self.direction.is_moving() {
            return None;
        }

        Some(self.head().offset(self.direction.delta()))
    }

    /// Moves the head into `new_head`. The tail is kept when `grow` is set.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);
        self.heading = self.direction;

        if !grow {
            self.body.pop_back();
        }
    }
}
