//! Observer pattern for training pipelines
//!
//! Observers allow composable data collection during training without coupling
//! the episode loop to specific output formats.

use std::{fs::File, path::Path};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::episode::{EpisodeOutcome, EpisodeSummary};
use crate::{Error, Result, ports::Observer};

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    goals: usize,
    walls: usize,
    truncated: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            goals: 0,
            walls: 0,
            truncated: 0,
        }
    }

    fn message(&self) -> String {
        format!("goal:{} wall:{} cut:{}", self.goals, self.walls, self.truncated)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) -> Result<()> {
        match summary.outcome {
            EpisodeOutcome::ReachedGoal => self.goals += 1,
            EpisodeOutcome::HitWall => self.walls += 1,
            EpisodeOutcome::Truncated => self.truncated += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(summary.episode as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Logs the start and end of every episode through `tracing`
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl LoggingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl Observer for LoggingObserver {
    fn on_episode_start(&mut self, episode: usize) -> Result<()> {
        debug!(episode, "starting episode");
        Ok(())
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) -> Result<()> {
        debug!(
            episode = summary.episode,
            steps = summary.steps,
            reward = summary.total_reward,
            outcome = %summary.outcome,
            "finished episode"
        );
        Ok(())
    }
}

/// Metrics observer - Tracks training metrics
#[derive(Debug, Default)]
pub struct MetricsObserver {
    episodes: usize,
    goals: usize,
    walls: usize,
    truncated: usize,
    steps: Vec<usize>,
    rewards: Vec<f64>,
    first_goal_episode: Option<usize>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of episodes that reached a goal
    pub fn goal_rate(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.goals as f64 / self.episodes as f64
        }
    }

    /// Average steps per episode
    pub fn avg_steps(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.steps.iter().sum::<usize>() as f64 / self.steps.len() as f64
        }
    }

    /// Average total reward per episode
    pub fn avg_reward(&self) -> f64 {
        if self.rewards.is_empty() {
            0.0
        } else {
            self.rewards.iter().sum::<f64>() / self.rewards.len() as f64
        }
    }

    /// Total reward of each episode, in order
    pub fn episode_rewards(&self) -> &[f64] {
        &self.rewards
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            episodes: self.episodes,
            goals: self.goals,
            walls: self.walls,
            truncated: self.truncated,
            goal_rate: self.goal_rate(),
            avg_steps: self.avg_steps(),
            avg_reward: self.avg_reward(),
            first_goal_episode: self.first_goal_episode,
        }
    }
}

/// Summary of training metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub episodes: usize,
    pub goals: usize,
    pub walls: usize,
    pub truncated: usize,
    pub goal_rate: f64,
    pub avg_steps: f64,
    pub avg_reward: f64,
    pub first_goal_episode: Option<usize>,
}

impl Observer for MetricsObserver {
    fn on_episode_end(&mut self, summary: &EpisodeSummary) -> Result<()> {
        self.episodes += 1;
        match summary.outcome {
            EpisodeOutcome::ReachedGoal => {
                self.goals += 1;
                self.first_goal_episode.get_or_insert(summary.episode);
            }
            EpisodeOutcome::HitWall => self.walls += 1,
            EpisodeOutcome::Truncated => self.truncated += 1,
        }
        self.steps.push(summary.steps);
        self.rewards.push(summary.total_reward);
        Ok(())
    }
}

/// One CSV row per finished episode
#[derive(Debug, Serialize)]
struct EpisodeRow {
    episode: usize,
    steps: usize,
    total_reward: f64,
    outcome: EpisodeOutcome,
    final_row: usize,
    final_col: usize,
}

impl From<&EpisodeSummary> for EpisodeRow {
    fn from(summary: &EpisodeSummary) -> Self {
        Self {
            episode: summary.episode,
            steps: summary.steps,
            total_reward: summary.total_reward,
            outcome: summary.outcome,
            final_row: summary.final_position.row,
            final_col: summary.final_position.col,
        }
    }
}

/// CSV observer - Writes a row per episode for offline analysis
pub struct CsvObserver {
    writer: csv::Writer<File>,
}

impl CsvObserver {
    /// Create a CSV observer writing to `path` (truncates an existing file)
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| Error::io(format!("create episode CSV {}", path.display()), e))?;
        Ok(Self {
            writer: csv::Writer::from_writer(file),
        })
    }
}

impl Observer for CsvObserver {
    fn on_episode_end(&mut self, summary: &EpisodeSummary) -> Result<()> {
        self.writer.serialize(EpisodeRow::from(summary))?;
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
