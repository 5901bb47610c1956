//! Subcommands of the `qmaze` binary

pub mod run;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    maze::{Grid, layouts, load_maze},
    types::Position,
};

/// Load the maze at `path`, or the classic layout with its entrance when absent.
pub(crate) fn load_grid(path: Option<&Path>) -> Result<(Grid, Option<Position>)> {
    match path {
        Some(path) => {
            load_maze(path).with_context(|| format!("failed to load maze {}", path.display()))
        }
        None => Ok((layouts::classic(), Some(layouts::CLASSIC_START))),
    }
}
