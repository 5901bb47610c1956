//! CLI infrastructure for the qmaze solver
//!
//! This module provides the command-line interface for training an agent on a
//! maze, navigating it greedily, and inspecting maze layouts.

pub mod commands;
pub mod output;
