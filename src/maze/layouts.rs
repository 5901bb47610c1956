//! Built-in maze layouts.

use super::grid::Grid;
use crate::types::Position;

/// 12x12 training maze; the goal sits in the top wall at (0, 5).
pub const CLASSIC_CODES: [[i64; 12]; 12] = [
    [0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0],
    [0, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 0],
    [0, 0, 0, 0, 1, 1, 0, 1, 0, 1, 1, 0],
    [0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0],
    [0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0],
    [0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 0],
    [0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 1, 0],
    [0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0],
];

/// Entrance of the classic maze, in the bottom wall.
pub const CLASSIC_START: Position = Position::new(11, 5);

/// The classic 12x12 maze.
pub fn classic() -> Grid {
    // The literal above is rectangular and uses only valid codes.
    match Grid::from_codes(&CLASSIC_CODES) {
        Ok(grid) => grid,
        Err(err) => unreachable!("classic layout is invalid: {err}"),
    }
}
