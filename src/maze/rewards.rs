//! Reward shaping: the reward layout derived from a maze grid.

use serde::{Deserialize, Serialize};

use super::grid::{Cell, Grid};
use crate::{Error, Result, types::Position};

/// Reward paid for landing on each kind of cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Reward for stepping onto a wall (large negative)
    pub wall: f64,
    /// Per-step cost of moving onto floor (small negative)
    pub floor: f64,
    /// Reward for reaching a goal (large positive)
    pub goal: f64,
}

impl RewardConfig {
    pub fn new(wall: f64, floor: f64, goal: f64) -> Self {
        Self { wall, floor, goal }
    }

    /// Check that the rewards are finite and that floor is distinguishable.
    ///
    /// Episodes end on the first cell whose reward differs from the floor
    /// reward, and wall landings are recognised by the wall reward, so all
    /// three rewards must be distinct.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("wall", self.wall), ("floor", self.floor), ("goal", self.goal)] {
            if !value.is_finite() {
                return Err(Error::InvalidRewards {
                    message: format!("{name} reward {value} is not finite"),
                });
            }
        }
        if self.floor == self.wall || self.floor == self.goal {
            return Err(Error::InvalidRewards {
                message: format!(
                    "floor reward {} must differ from wall ({}) and goal ({}) rewards",
                    self.floor, self.wall, self.goal
                ),
            });
        }
        if self.wall == self.goal {
            return Err(Error::InvalidRewards {
                message: format!(
                    "wall reward {} must differ from goal reward {}",
                    self.wall, self.goal
                ),
            });
        }
        Ok(())
    }

    /// Reward for a single cell kind.
    pub fn reward_for(&self, cell: Cell) -> f64 {
        match cell {
            Cell::Wall => self.wall,
            Cell::Floor => self.floor,
            Cell::Goal => self.goal,
        }
    }
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            wall: -500.0,
            floor: -10.0,
            goal: 500.0,
        }
    }
}

/// Per-cell rewards with the same dimensions as the grid they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardGrid {
    rows: usize,
    cols: usize,
    rewards: Vec<f64>,
}

impl RewardGrid {
    /// Map every grid cell to its configured reward.
    pub fn build(grid: &Grid, config: &RewardConfig) -> Self {
        let rewards = grid.iter().map(|(_, cell)| config.reward_for(cell)).collect();
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            rewards,
        }
    }

    /// `(rows, cols)`
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Reward at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn get(&self, pos: Position) -> f64 {
        assert!(
            pos.row < self.rows && pos.col < self.cols,
            "position {pos} outside {}x{} reward grid",
            self.rows,
            self.cols
        );
        self.rewards[pos.row * self.cols + pos.col]
    }

    /// Rewards as rows, for display.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rewards.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }
}

/// Build the reward layout for `grid` from the three cell rewards.
pub fn build_rewards(grid: &Grid, wall_reward: f64, floor_reward: f64, goal_reward: f64) -> RewardGrid {
    RewardGrid::build(grid, &RewardConfig::new(wall_reward, floor_reward, goal_reward))
}
