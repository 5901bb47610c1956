//! Records produced while running training episodes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Action, Position};

/// How a training episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeOutcome {
    /// Landed on a goal cell
    ReachedGoal,
    /// Landed on a wall cell
    HitWall,
    /// Still on floor when the step budget ran out
    Truncated,
}

impl EpisodeOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            EpisodeOutcome::ReachedGoal => "reached_goal",
            EpisodeOutcome::HitWall => "hit_wall",
            EpisodeOutcome::Truncated => "truncated",
        }
    }
}

impl fmt::Display for EpisodeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One Q-update within an episode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Step number within the episode (0-based)
    pub step: usize,
    pub from: Position,
    pub action: Action,
    pub to: Position,
    /// Reward of the landing cell
    pub reward: f64,
    /// Q(from, action) before the update
    pub q_before: f64,
    /// Q(from, action) after the update
    pub q_after: f64,
}

/// Summary of a finished episode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub episode: usize,
    /// Number of Q-updates performed
    pub steps: usize,
    /// Sum of landing rewards
    pub total_reward: f64,
    pub outcome: EpisodeOutcome,
    pub final_position: Position,
}
