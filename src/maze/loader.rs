//! Loading maze layouts from disk.
//!
//! Two formats are accepted:
//! - JSON (`.json` extension): `{"cells": [[0, 2, 0], [0, 1, 0]], "start": {"row": 1, "col": 1}}`
//!   with `start` optional
//! - text (anything else): one line per row using `#`, `.` and `G`

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::{Error, Result, types::Position};

/// On-disk JSON representation of a maze.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeFile {
    /// Rows of cell codes (0 = wall, 1 = floor, 2 = goal)
    pub cells: Vec<Vec<i64>>,
    /// Suggested start position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Position>,
}

impl MazeFile {
    pub fn from_grid(grid: &Grid, start: Option<Position>) -> Self {
        Self {
            cells: grid.codes(),
            start,
        }
    }

    /// Validate the cells into a [`Grid`].
    pub fn grid(&self) -> Result<Grid> {
        Grid::from_codes(&self.cells)
    }

    /// Save as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| Error::io(format!("create maze file {}", path.display()), e))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Load a maze and its optional start position.
pub fn load_maze<P: AsRef<Path>>(path: P) -> Result<(Grid, Option<Position>)> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let file = File::open(path)
            .map_err(|e| Error::io(format!("open maze file {}", path.display()), e))?;
        let maze: MazeFile = serde_json::from_reader(BufReader::new(file))?;
        let grid = maze.grid()?;
        Ok((grid, maze.start))
    } else {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("read maze file {}", path.display()), e))?;
        Ok((text.parse()?, None))
    }
}
