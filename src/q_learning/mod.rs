//! Tabular Q-learning
//!
//! This module implements off-policy temporal difference control over a grid
//! maze: a dense value table, the action selector and the agent that ties
//! them to one seeded random generator.
//!
//! ## Update rule
//!
//! ```text
//! Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use qmaze::{
//!     maze::{Maze, RewardConfig},
//!     q_learning::MazeAgent,
//!     types::{Action, Position},
//! };
//!
//! let maze = Maze::new("#G#\n#.#".parse()?, RewardConfig::default())?;
//! let mut agent = MazeAgent::for_maze(&maze).with_seed(42);
//!
//! let start = Position::new(1, 1);
//! let next = maze.step(start, Action::Up);
//! agent.learn(start, Action::Up, maze.reward(next), next, 0.9, 0.8);
//! assert_eq!(agent.q_table().best_action(start).0, Action::Up);
//! # Ok::<(), qmaze::Error>(())
//! ```

pub mod agent;
pub mod policy;
pub mod q_table;

// Public re-exports
pub use agent::MazeAgent;
pub use policy::{NAVIGATION_EXPLORATION_THRESHOLD, TRAINING_EXPLORATION_THRESHOLD, select_action};
pub use q_table::QTable;
