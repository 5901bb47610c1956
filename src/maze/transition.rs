//! Transition function for the four compass moves.

use super::grid::Grid;
use crate::types::{Action, Position};

/// Position reached by taking `action` from `pos`.
///
/// A move that would leave the grid is a no-op: the position is returned
/// unchanged. Walls are not consulted; landing on one is the caller's concern.
pub fn step(grid: &Grid, pos: Position, action: Action) -> Position {
    let (d_row, d_col) = action.delta();
    let row = shift(pos.row, d_row, grid.rows());
    let col = shift(pos.col, d_col, grid.cols());
    Position::new(row, col)
}

fn shift(value: usize, delta: isize, len: usize) -> usize {
    match value.checked_add_signed(delta) {
        Some(next) if next < len => next,
        _ => value,
    }
}
