//! Q-learning maze agent
//!
//! The agent owns the value table and the single random generator that every
//! action selection draws from, so a seeded agent reproduces an entire
//! training and navigation run.

use rand::{SeedableRng, rngs::StdRng};

use super::{policy, q_table::QTable};
use crate::{
    maze::Maze,
    types::{Action, Position},
};

/// Tabular Q-learning agent for a grid maze
#[derive(Debug, Clone)]
pub struct MazeAgent {
    q_table: QTable,
    rng: StdRng,
}

impl MazeAgent {
    /// Create an agent with a zeroed `rows x cols` table and an unseeded generator
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            q_table: QTable::zeros(rows, cols),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Create an agent sized for `maze`
    pub fn for_maze(maze: &Maze) -> Self {
        Self::new(maze.rows(), maze.cols())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.set_rng_seed(seed);
        self
    }

    /// Replace the generator with one seeded from `seed`
    pub fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Select an action for `pos`; see [`policy::select_action`]
    pub fn select_action(&mut self, pos: Position, exploration_threshold: f64) -> Action {
        policy::select_action(&self.q_table, pos, exploration_threshold, &mut self.rng)
    }

    /// Apply one TD(0) update for the transition `pos --action--> next_pos`
    ///
    /// Returns `(q_before, q_after)` for the updated entry.
    pub fn learn(
        &mut self,
        pos: Position,
        action: Action,
        reward: f64,
        next_pos: Position,
        learning_rate: f64,
        discount_factor: f64,
    ) -> (f64, f64) {
        let before = self.q_table.get(pos, action);
        let after = self.q_table.q_learning_update(
            pos,
            action,
            reward,
            next_pos,
            learning_rate,
            discount_factor,
        );
        (before, after)
    }
}
