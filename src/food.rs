use rand::Rng;

use crate::{cell::Cell, GridInt};

/// Picks a food cell uniformly from the interior of a `cols` x `rows` grid,
/// skipping the one cell wide border ring. The snake is not consulted, so
/// food may land underneath it.
///
/// The grid must be at least 3x3; `GameState` enforces that.
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, cols: GridInt, rows: GridInt) -> Cell {
    let x = rng.gen_range(1..=cols - 2);
    let y = rng.gen_range(1..=rows - 2);
    Cell::new(x, y)
}
