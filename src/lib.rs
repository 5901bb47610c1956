//! Tabular Q-learning maze solver
//!
//! This crate provides:
//! - A grid maze model with reward shaping and a boundary-aware transition function
//! - A dense Q-table, an action selector and a seeded Q-learning agent
//! - A training pipeline with a TD(0) episode loop, step budgets and observers
//! - A greedy navigator that extracts a path from the trained table
//! - A session layer and a CLI that run training and navigation in sequence

pub mod app;
pub mod cli;
pub mod error;
pub mod maze;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod types;

pub use error::{Error, Result};
pub use maze::{Grid, Maze, RewardConfig};
pub use q_learning::{MazeAgent, QTable};
pub use types::{Action, Position};
