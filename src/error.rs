use thiserror::Error;

use crate::GridInt;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("grid of {cols}x{rows} cells is too small, need at least {min}x{min}")]
    GridTooSmall { cols: GridInt, rows: GridInt, min: GridInt },
}
