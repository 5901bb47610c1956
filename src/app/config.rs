//! Run configuration: rewards, hyperparameters, start cells and budgets.

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    maze::{RewardConfig, layouts::CLASSIC_START},
    pipeline::{
        NavigationConfig, TrainingConfig, navigation::DEFAULT_MAX_NAVIGATION_STEPS,
        training::DEFAULT_MAX_STEPS_PER_EPISODE,
    },
    q_learning::TRAINING_EXPLORATION_THRESHOLD,
    types::Position,
};

/// Q-learning hyperparameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperparameters {
    /// Draws below this value exploit during training (0.95 exploits ~95% of the time)
    pub exploration_threshold: f64,
    /// Discount factor γ
    pub discount_factor: f64,
    /// Learning rate α
    pub learning_rate: f64,
    /// Number of training episodes
    pub episodes: usize,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            exploration_threshold: TRAINING_EXPLORATION_THRESHOLD,
            discount_factor: 0.8,
            learning_rate: 0.9,
            episodes: 1500,
        }
    }
}

/// Everything needed for one train-then-navigate run.
///
/// Missing fields in a JSON file fall back to the defaults, which reproduce
/// the classic maze setup.
///
/// # Examples
///
/// ```
/// use qmaze::{app::RunConfig, types::Position};
///
/// let config = RunConfig::default()
///     .with_seed(7)
///     .with_episodes(200)
///     .with_start(Position::new(2, 1));
/// assert_eq!(config.navigation_start, Position::new(2, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub rewards: RewardConfig,
    pub hyperparameters: Hyperparameters,
    /// Cell every training episode starts from
    pub training_start: Position,
    /// Cell the greedy rollout starts from
    pub navigation_start: Position,
    /// Random seed (None = non-deterministic)
    pub seed: Option<u64>,
    pub max_steps_per_episode: usize,
    pub max_navigation_steps: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rewards: RewardConfig::default(),
            hyperparameters: Hyperparameters::default(),
            training_start: CLASSIC_START,
            navigation_start: CLASSIC_START,
            seed: None,
            max_steps_per_episode: DEFAULT_MAX_STEPS_PER_EPISODE,
            max_navigation_steps: DEFAULT_MAX_NAVIGATION_STEPS,
        }
    }
}

impl RunConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_episodes(mut self, episodes: usize) -> Self {
        self.hyperparameters.episodes = episodes;
        self
    }

    pub fn with_rewards(mut self, rewards: RewardConfig) -> Self {
        self.rewards = rewards;
        self
    }

    /// Use `start` for both training and navigation.
    pub fn with_start(mut self, start: Position) -> Self {
        self.training_start = start;
        self.navigation_start = start;
        self
    }

    pub fn with_training_start(mut self, start: Position) -> Self {
        self.training_start = start;
        self
    }

    pub fn with_navigation_start(mut self, start: Position) -> Self {
        self.navigation_start = start;
        self
    }

    pub fn with_step_budgets(mut self, per_episode: usize, navigation: usize) -> Self {
        self.max_steps_per_episode = per_episode;
        self.max_navigation_steps = navigation;
        self
    }

    /// Settings for the training pipeline.
    pub fn training_config(&self) -> TrainingConfig {
        TrainingConfig {
            episodes: self.hyperparameters.episodes,
            start: self.training_start,
            exploration_threshold: self.hyperparameters.exploration_threshold,
            learning_rate: self.hyperparameters.learning_rate,
            discount_factor: self.hyperparameters.discount_factor,
            max_steps_per_episode: self.max_steps_per_episode,
            seed: self.seed,
        }
    }

    /// Settings for the navigator.
    pub fn navigation_config(&self) -> NavigationConfig {
        NavigationConfig {
            start: self.navigation_start,
            max_steps: self.max_navigation_steps,
        }
    }

    /// Check rewards, hyperparameters and budgets. Start cells are checked
    /// against a concrete maze by the session.
    pub fn validate(&self) -> Result<()> {
        self.rewards.validate()?;
        self.training_config().validate()?;
        if self.max_navigation_steps == 0 {
            return Err(Error::InvalidHyperparameter {
                name: "max_navigation_steps".to_string(),
                value: 0.0,
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_start(path, None)
    }

    /// Load a configuration from a JSON file, using `fallback_start` for
    /// whichever of `training_start` / `navigation_start` the file omits.
    pub fn load_with_start<P: AsRef<Path>>(
        path: P,
        fallback_start: Option<Position>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::io(format!("open config {}", path.display()), e))?;
        let value: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
        Self::from_json_value(value, fallback_start)
    }

    fn from_json_value(
        value: serde_json::Value,
        fallback_start: Option<Position>,
    ) -> Result<Self> {
        let has_training_start = value.get("training_start").is_some();
        let has_navigation_start = value.get("navigation_start").is_some();
        let mut config: RunConfig = serde_json::from_value(value)?;

        if let Some(start) = fallback_start {
            if !has_training_start {
                config.training_start = start;
            }
            if !has_navigation_start {
                config.navigation_start = start;
            }
        }
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| Error::io(format!("create config {}", path.display()), e))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
