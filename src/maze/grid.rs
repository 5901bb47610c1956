//! Maze layout: an immutable rectangular grid of walls, floor and goals.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, types::Position};

/// Contents of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Wall,
    Floor,
    Goal,
}

impl Cell {
    /// Integer code used by numeric layouts.
    pub const fn code(self) -> i64 {
        match self {
            Cell::Wall => 0,
            Cell::Floor => 1,
            Cell::Goal => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Cell::Wall),
            1 => Some(Cell::Floor),
            2 => Some(Cell::Goal),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => '.',
            Cell::Goal => 'G',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Floor),
            'G' | 'g' => Some(Cell::Goal),
            _ => None,
        }
    }
}

/// Rectangular maze layout, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from rows of integer codes (0 = wall, 1 = floor, 2 = goal).
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGrid`] when there are no rows or the first row is empty
    /// - [`Error::RaggedGrid`] when rows differ in length
    /// - [`Error::InvalidCellCode`] for any code outside `{0, 1, 2}`
    pub fn from_codes<R: AsRef<[i64]>>(codes: &[R]) -> Result<Self> {
        let rows = codes.len();
        let cols = codes.first().map_or(0, |r| r.as_ref().len());
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in codes.iter().enumerate() {
            let line = line.as_ref();
            if line.len() != cols {
                return Err(Error::RaggedGrid {
                    row,
                    expected: cols,
                    got: line.len(),
                });
            }
            for (col, &code) in line.iter().enumerate() {
                let cell = Cell::from_code(code).ok_or(Error::InvalidCellCode { code, row, col })?;
                cells.push(cell);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn cell(&self, pos: Position) -> Cell {
        assert!(
            self.contains(pos),
            "position {pos} outside {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[pos.row * self.cols + pos.col]
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos)
            .then(|| self.cells[pos.row * self.cols + pos.col])
    }

    /// Every cell with its position, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(i, &cell)| {
            (Position::new(i / self.cols, i % self.cols), cell)
        })
    }

    /// Positions of all goal cells.
    pub fn goals(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, cell)| *cell == Cell::Goal)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Rows of integer codes, the inverse of [`Grid::from_codes`].
    pub fn codes(&self) -> Vec<Vec<i64>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}

/// Parses a text layout: one line per row, `#` wall, `.` floor, `G` goal.
///
/// Blank lines and whitespace inside a line are ignored.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut codes: Vec<Vec<i64>> = Vec::new();
        for line in s.lines() {
            let cleaned: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cleaned.is_empty() {
                continue;
            }
            let row = codes.len();
            let mut codes_row = Vec::with_capacity(cleaned.len());
            for (col, c) in cleaned.into_iter().enumerate() {
                let cell = Cell::from_char(c).ok_or(Error::InvalidCellCharacter {
                    character: c,
                    row,
                    col,
                })?;
                codes_row.push(cell.code());
            }
            codes.push(codes_row);
        }
        Self::from_codes(&codes)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
