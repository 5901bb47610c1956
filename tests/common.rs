//! Shared fixtures for the qmaze integration tests.

#![allow(dead_code)]

use qmaze::{
    app::{RunConfig, Session},
    maze::{Cell, Grid, layouts},
    types::Position,
};

/// Classic-maze hyperparameters with a fixed seed.
pub fn classic_config(seed: u64) -> RunConfig {
    RunConfig::default().with_seed(seed)
}

/// Train and navigate the classic maze with the default hyperparameters.
pub fn classic_session(seed: u64) -> Session {
    Session::new(layouts::classic(), classic_config(seed)).expect("classic config is valid")
}

/// Vertical corridor with the goal on top and the start at the bottom.
pub fn corridor() -> Grid {
    "#G#\n#.#\n#.#\n#.#".parse().expect("valid layout")
}

/// Assert that no path entry is a wall cell.
pub fn assert_no_walls(grid: &Grid, path: &[Position]) {
    for pos in path {
        assert_ne!(grid.cell(*pos), Cell::Wall, "path enters wall at {pos}");
    }
}

/// Assert that consecutive path entries are equal or orthogonally adjacent.
pub fn assert_contiguous(path: &[Position]) {
    for pair in path.windows(2) {
        let dr = pair[0].row.abs_diff(pair[1].row);
        let dc = pair[0].col.abs_diff(pair[1].col);
        assert!(dr + dc <= 1, "jump from {} to {}", pair[0], pair[1]);
    }
}
