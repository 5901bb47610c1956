//! Greedy rollout of a trained agent.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    maze::{Cell, Maze},
    q_learning::{MazeAgent, NAVIGATION_EXPLORATION_THRESHOLD},
    types::Position,
};

/// Default cap on moves in one navigation run
pub const DEFAULT_MAX_NAVIGATION_STEPS: usize = 1_000;

/// Navigation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Cell the rollout starts from
    pub start: Position,
    /// Moves allowed before giving up
    pub max_steps: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            start: crate::maze::layouts::CLASSIC_START,
            max_steps: DEFAULT_MAX_NAVIGATION_STEPS,
        }
    }
}

/// How a navigation run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationOutcome {
    ReachedGoal,
    /// The greedy action led into a wall; the wall is not on the path
    StoppedAtWall,
    /// The start cell is not floor, so there is nothing to navigate
    StartNotFloor,
    /// The policy kept the agent on floor for `max_steps` moves
    StepBudgetExhausted,
}

impl fmt::Display for NavigationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            NavigationOutcome::ReachedGoal => "reached goal",
            NavigationOutcome::StoppedAtWall => "stopped at wall",
            NavigationOutcome::StartNotFloor => "start is not a floor cell",
            NavigationOutcome::StepBudgetExhausted => "step budget exhausted",
        };
        f.write_str(text)
    }
}

/// Path produced by one navigation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationResult {
    /// Start cell followed by every non-wall cell entered, in order
    pub path: Vec<Position>,
    pub outcome: NavigationOutcome,
    /// Moves taken, including those into walls
    pub steps: usize,
}

impl NavigationResult {
    pub fn reached_goal(&self) -> bool {
        self.outcome == NavigationOutcome::ReachedGoal
    }
}

/// Runs the learned policy greedily from a start cell
pub struct Navigator {
    config: NavigationConfig,
}

impl Navigator {
    pub fn new(config: NavigationConfig) -> Self {
        Self { config }
    }

    /// Follow the agent's greedy policy until a non-floor cell or the step budget.
    ///
    /// The agent's table is only read. Its generator still advances once per
    /// move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PositionOutOfBounds`] if the start is outside the maze
    /// and [`Error::InvalidConfiguration`] if the agent's table was sized for
    /// a different maze.
    pub fn navigate(&self, maze: &Maze, agent: &mut MazeAgent) -> Result<NavigationResult> {
        let start = self.config.start;
        maze.check_position(start, "navigation start")?;
        let table = agent.q_table();
        if (table.rows(), table.cols()) != (maze.rows(), maze.cols()) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "Q-table is {}x{} but the maze is {}x{}",
                    table.rows(),
                    table.cols(),
                    maze.rows(),
                    maze.cols()
                ),
            });
        }

        if !maze.is_floor(start) {
            info!(start = %start, "navigation start is not a floor cell");
            return Ok(NavigationResult {
                path: Vec::new(),
                outcome: NavigationOutcome::StartNotFloor,
                steps: 0,
            });
        }

        let mut path = vec![start];
        let mut pos = start;
        let mut steps = 0;
        let mut out_of_budget = false;

        while maze.is_floor(pos) {
            if steps >= self.config.max_steps {
                out_of_budget = true;
                break;
            }

            let action = agent.select_action(pos, NAVIGATION_EXPLORATION_THRESHOLD);
            let next = maze.step(pos, action);
            steps += 1;
            debug!(step = steps, from = %pos, %action, to = %next, "navigation move");

            if !maze.is_wall(next) {
                path.push(next);
            }
            pos = next;
        }

        let outcome = if out_of_budget {
            NavigationOutcome::StepBudgetExhausted
        } else if maze.cell(pos) == Cell::Goal {
            NavigationOutcome::ReachedGoal
        } else {
            NavigationOutcome::StoppedAtWall
        };

        info!(steps, path_len = path.len(), %outcome, "navigation finished");
        Ok(NavigationResult {
            path,
            outcome,
            steps,
        })
    }
}
