//! Maze model
//!
//! The grid of cell codes, the reward layout derived from it, the transition
//! function, built-in layouts and maze file loading.

pub mod environment;
pub mod grid;
pub mod layouts;
pub mod loader;
pub mod rewards;
pub mod transition;

pub use environment::Maze;
pub use grid::{Cell, Grid};
pub use loader::{MazeFile, load_maze};
pub use rewards::{RewardConfig, RewardGrid, build_rewards};
pub use transition::step;
