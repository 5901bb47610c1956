//! Maze environment: a grid together with its reward layout.

use super::{
    grid::{Cell, Grid},
    rewards::{RewardConfig, RewardGrid},
    transition,
};
use crate::{
    Error, Result,
    types::{Action, Position},
};

/// Immutable environment the learner trains and navigates in.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    rewards: RewardGrid,
    config: RewardConfig,
}

impl Maze {
    /// Build the environment, deriving the reward layout from `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRewards`] if the reward configuration fails
    /// [`RewardConfig::validate`].
    pub fn new(grid: Grid, config: RewardConfig) -> Result<Self> {
        config.validate()?;
        let rewards = RewardGrid::build(&grid, &config);
        Ok(Self {
            grid,
            rewards,
            config,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rewards(&self) -> &RewardGrid {
        &self.rewards
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.grid.cell(pos)
    }

    pub fn reward(&self, pos: Position) -> f64 {
        self.rewards.get(pos)
    }

    /// Whether `pos` carries the floor reward. Any other cell ends a run.
    pub fn is_floor(&self, pos: Position) -> bool {
        self.rewards.get(pos) == self.config.floor
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.rewards.get(pos) == self.config.wall
    }

    pub fn step(&self, pos: Position, action: Action) -> Position {
        transition::step(&self.grid, pos, action)
    }

    /// Reject a position outside the grid, naming it by `context`.
    pub fn check_position(&self, pos: Position, context: &str) -> Result<()> {
        if self.grid.contains(pos) {
            Ok(())
        } else {
            Err(Error::PositionOutOfBounds {
                context: context.to_string(),
                row: pos.row,
                col: pos.col,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }
}
