//! Grid snake: the simulation core plus the pieces a terminal host needs
//! (input mapping, frame composition, tick timer, config and logging).

pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod food;
pub mod host;
pub mod input;
pub mod logger;
pub mod render;
pub mod snake;
pub mod state;
pub mod ticker;

pub use cell::Cell;
pub use direction::{Axis, Direction};
pub use error::GameError;
pub use snake::Snake;
pub use state::{GameState, Mode, TickOutcome};

/// Grid coordinate type. Signed so a head can step past the left/top edge.
pub type GridInt = i32;

/// Terminal coordinate type, as crossterm reports it.
pub type TermInt = u16;
