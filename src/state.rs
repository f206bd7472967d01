//! The game world and its run-mode state machine.
//!
//! `GameState` owns the grid size, the snake, the food and the mode. The host
//! calls [`GameState::tick`] on a fixed timer and forwards key presses to the
//! input handlers; nothing else mutates it.

use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::cell::Cell;
use crate::direction::Direction;
use crate::error::GameError;
use crate::food;
use crate::snake::{Snake, START_CELL, START_DIRECTION};
use crate::GridInt;

/// Below this the food interior would be empty.
pub const MIN_GRID: GridInt = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Running,
    Paused,
    Over,
}

/// What a single call to [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, or the snake is standing still.
    Idle,
    Moved,
    Ate,
    /// The head would have entered this cell. The game is now over.
    Collided(Cell),
}

pub struct GameState {
    cols: GridInt,
    rows: GridInt,
    snake: Snake,
    food: Cell,
    mode: Mode,
    rng: StdRng,
}

impl GameState {
    pub fn new(cols: GridInt, rows: GridInt) -> Result<Self, GameError> {
        Self::with_rng(cols, rows, StdRng::from_entropy())
    }

    /// Same as [`GameState::new`] but with reproducible food placement.
    pub fn with_seed(cols: GridInt, rows: GridInt, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(cols, rows, StdRng::seed_from_u64(seed))
    }

    fn with_rng(cols: GridInt, rows: GridInt, rng: StdRng) -> Result<Self, GameError> {
        check_grid(cols, rows)?;

        let mut state = GameState {
            cols,
            rows,
            snake: canonical_snake(cols, rows),
            food: Cell::new(1, 1),
            mode: Mode::Running,
            rng,
        };
        state.spawn_food();

        Ok(state)
    }

    pub fn cols(&self) -> GridInt {
        self.cols
    }

    pub fn rows(&self) -> GridInt {
        self.rows
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Replaces the snake, for scripted scenarios. The body is taken as
    /// given: distinct, adjacent cells are not checked.
    pub fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    /// Moves the food, for scripted scenarios.
    pub fn set_food(&mut self, food: Cell) {
        self.food = food;
    }

    /// Advances the simulation by one step. Does nothing unless running.
    pub fn tick(&mut self) -> TickOutcome {
        if self.mode != Mode::Running {
            return TickOutcome::Idle;
        }

        let new_head = match self.snake.next_head() {
            Some(cell) => cell,
            None => return TickOutcome::Idle,
        };

        // Checked against the body before the tail moves, so chasing the
        // tail into the cell it is leaving this same step still counts.
        if !new_head.is_within(self.cols, self.rows) || self.snake.occupies(new_head) {
            self.mode = Mode::Over;
            info!(
                "Game over: head hit ({}, {}) with length {}",
                new_head.x,
                new_head.y,
                self.snake.len()
            );
            return TickOutcome::Collided(new_head);
        }

        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);

        if ate {
            self.spawn_food();
            debug!("Food eaten, length now {}", self.snake.len());
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }

    /// Raw direction request. Anything that isn't a unit vector is ignored,
    /// as is a request along the axis the snake is already moving on.
    /// Not gated by mode: a turn can be queued while paused.
    pub fn set_direction(&mut self, dx: GridInt, dy: GridInt) -> bool {
        match Direction::from_delta(dx, dy) {
            Some(direction) => self.steer(direction),
            None => {
                debug!("Ignoring malformed direction ({}, {})", dx, dy);
                false
            }
        }
    }

    pub fn steer(&mut self, direction: Direction) -> bool {
        self.snake.steer(direction)
    }

    /// Flips between running and paused and returns the new mode. Has no
    /// effect once the game is over.
    pub fn toggle_pause(&mut self) -> Mode {
        self.mode = match self.mode {
            Mode::Running => Mode::Paused,
            Mode::Paused => Mode::Running,
            Mode::Over => Mode::Over,
        };

        debug!("Mode is now {:?}", self.mode);
        self.mode
    }

    /// Throws away the current round and starts a fresh one.
    pub fn reset(&mut self) {
        self.snake = canonical_snake(self.cols, self.rows);
        self.spawn_food();
        self.mode = Mode::Running;
    }

    /// Restart input: resets only when the game is over. Returns whether it
    /// did.
    pub fn restart(&mut self) -> bool {
        if self.mode != Mode::Over {
            return false;
        }

        self.reset();
        info!("Restarted on a {}x{} grid", self.cols, self.rows);
        true
    }

    /// Adopts new grid dimensions. The snake and food stay where they are,
    /// even if that is now outside the grid.
    pub fn on_resize(&mut self, cols: GridInt, rows: GridInt) -> Result<(), GameError> {
        if let Err(e) = check_grid(cols, rows) {
            warn!("Keeping {}x{} grid: {}", self.cols, self.rows, e);
            return Err(e);
        }

        info!("Grid resized from {}x{} to {}x{}", self.cols, self.rows, cols, rows);
        self.cols = cols;
        self.rows = rows;
        Ok(())
    }

    pub fn spawn_food(&mut self) {
        self.food = food::spawn(&mut self.rng, self.cols, self.rows);
    }
}

fn check_grid(cols: GridInt, rows: GridInt) -> Result<(), GameError> {
    if cols < MIN_GRID || rows < MIN_GRID {
        return Err(GameError::GridTooSmall { cols, rows, min: MIN_GRID });
    }

    Ok(())
}

fn canonical_snake(cols: GridInt, rows: GridInt) -> Snake {
    let start = Cell::new(START_CELL.x.min(cols - 2), START_CELL.y.min(rows - 2));
    Snake::new(start, START_DIRECTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction::*;

    fn state(cols: GridInt, rows: GridInt) -> GameState {
        GameState::with_seed(cols, rows, 3).unwrap()
    }

    #[test]
    fn starts_running_with_canonical_snake() {
        let state = state(30, 20);
        assert_eq!(state.mode(), Mode::Running);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.snake().head(), START_CELL);
        assert_eq!(state.snake().direction(), START_DIRECTION);
    }

    #[test]
    fn canonical_start_is_clamped_on_small_grids() {
        let state = state(4, 3);
        assert_eq!(state.snake().head(), Cell::new(2, 1));
    }

    #[test]
    fn rejects_tiny_grids() {
        assert_eq!(
            GameState::new(2, 10).err(),
            Some(GameError::GridTooSmall { cols: 2, rows: 10, min: MIN_GRID })
        );
    }

    #[test]
    fn moves_one_cell_per_tick() {
        let mut state = state(30, 20);
        state.set_food(Cell::new(20, 15));

        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.snake().head(), Cell::new(4, 7));
        assert_eq!(state.snake().len(), 1);
    }

    #[test]
    fn eating_grows_by_one_and_respawns_food() {
        let mut state = state(30, 20);
        state.set_food(Cell::new(4, 7));

        assert_eq!(state.tick(), TickOutcome::Ate);
        assert_eq!(state.snake().len(), 2);
        assert_eq!(state.snake().body()[1], Cell::new(4, 6));

        let food = state.food();
        assert!(food.x >= 1 && food.x <= 28 && food.y >= 1 && food.y <= 18);
    }

    #[test]
    fn moving_into_the_vacating_tail_is_a_collision() {
        let mut state = state(10, 10);
        let ring = vec![Cell::new(5, 5), Cell::new(5, 6), Cell::new(4, 6), Cell::new(4, 5)];
        state.set_snake(Snake::from_cells(ring, Left).unwrap());
        state.set_food(Cell::new(1, 1));

        assert_eq!(state.tick(), TickOutcome::Collided(Cell::new(4, 5)));
        assert_eq!(state.mode(), Mode::Over);
    }

    #[test]
    fn stationary_snake_is_idle() {
        let mut state = state(10, 10);
        state.set_snake(Snake::new(Cell::new(5, 5), Still));

        assert_eq!(state.tick(), TickOutcome::Idle);
        assert_eq!(state.mode(), Mode::Running);
    }

    #[test]
    fn pause_toggles_and_ignores_over() {
        let mut state = state(10, 10);
        assert_eq!(state.toggle_pause(), Mode::Paused);
        assert_eq!(state.toggle_pause(), Mode::Running);

        state.set_snake(Snake::new(Cell::new(9, 5), Right));
        state.tick();
        assert_eq!(state.toggle_pause(), Mode::Over);
    }

    #[test]
    fn direction_can_be_queued_while_paused() {
        let mut state = state(30, 20);
        state.toggle_pause();

        assert!(state.set_direction(1, 0));
        assert_eq!(state.tick(), TickOutcome::Idle);
        assert_eq!(state.snake().head(), START_CELL);

        state.toggle_pause();
        state.set_food(Cell::new(1, 1));
        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.snake().head(), Cell::new(5, 6));
    }

    #[test]
    fn malformed_directions_are_ignored() {
        let mut state = state(30, 20);
        assert!(!state.set_direction(1, 1));
        assert!(!state.set_direction(-2, 0));
        assert!(!state.set_direction(0, 0));
        assert_eq!(state.snake().direction(), Down);
    }

    #[test]
    fn restart_only_from_over() {
        let mut state = state(10, 10);
        assert!(!state.restart());

        state.toggle_pause();
        assert!(!state.restart());
        assert_eq!(state.mode(), Mode::Paused);
    }

    #[test]
    fn resize_keeps_entities_in_place() {
        let mut state = state(30, 20);
        state.set_snake(Snake::new(Cell::new(25, 10), Right));
        state.set_food(Cell::new(28, 18));

        state.on_resize(20, 15).unwrap();
        assert_eq!(state.cols(), 20);
        assert_eq!(state.rows(), 15);
        assert_eq!(state.snake().head(), Cell::new(25, 10));
        assert_eq!(state.food(), Cell::new(28, 18));

        assert_eq!(state.tick(), TickOutcome::Collided(Cell::new(26, 10)));
    }

    #[test]
    fn set_snake_takes_the_body_as_given() {
        let mut state = state(10, 10);
        let body = vec![Cell::new(2, 2), Cell::new(7, 7), Cell::new(2, 2)];
        state.set_snake(Snake::from_cells(body.clone(), Right).unwrap());

        assert_eq!(state.snake().body().iter().copied().collect::<Vec<_>>(), body);
    }

    #[test]
    fn resize_below_minimum_is_rejected() {
        let mut state = state(30, 20);
        assert!(state.on_resize(30, 2).is_err());
        assert_eq!((state.cols(), state.rows()), (30, 20));
    }
}
