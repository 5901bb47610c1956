//! Training pipeline: the Q-learning episode loop

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::episode::{EpisodeOutcome, EpisodeSummary, StepRecord};
use crate::{
    Error, Result,
    maze::{Cell, Maze},
    ports::Observer,
    q_learning::{MazeAgent, TRAINING_EXPLORATION_THRESHOLD},
    types::Position,
};

/// Default cap on Q-updates within one episode
pub const DEFAULT_MAX_STEPS_PER_EPISODE: usize = 10_000;

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of episodes to run
    pub episodes: usize,

    /// Cell every episode starts from
    pub start: Position,

    /// Uniform draws below this value exploit, draws at or above it explore
    pub exploration_threshold: f64,

    /// Learning rate α
    pub learning_rate: f64,

    /// Discount factor γ
    pub discount_factor: f64,

    /// Episodes still on floor after this many steps end as truncated
    pub max_steps_per_episode: usize,

    /// Random seed applied to the agent before the first episode
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 1500,
            start: crate::maze::layouts::CLASSIC_START,
            exploration_threshold: TRAINING_EXPLORATION_THRESHOLD,
            learning_rate: 0.9,
            discount_factor: 0.8,
            max_steps_per_episode: DEFAULT_MAX_STEPS_PER_EPISODE,
            seed: None,
        }
    }
}

impl TrainingConfig {
    /// Check hyperparameter ranges
    pub fn validate(&self) -> Result<()> {
        check_unit_interval("exploration_threshold", self.exploration_threshold)?;
        check_unit_interval("learning_rate", self.learning_rate)?;
        check_unit_interval("discount_factor", self.discount_factor)?;
        if self.max_steps_per_episode == 0 {
            return Err(Error::InvalidHyperparameter {
                name: "max_steps_per_episode".to_string(),
                value: 0.0,
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

pub(crate) fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidHyperparameter {
            name: name.to_string(),
            value,
            reason: "must lie in [0, 1]".to_string(),
        })
    }
}

/// Result of a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total episodes run
    pub total_episodes: usize,

    /// Episodes that ended on a goal cell
    pub reached_goal: usize,

    /// Episodes that ended on a wall cell
    pub hit_wall: usize,

    /// Episodes cut off by the step budget
    pub truncated: usize,

    /// Q-updates performed across all episodes
    pub total_steps: usize,

    /// Fraction of episodes that reached a goal
    pub goal_rate: f64,

    /// Mean Q-updates per episode
    pub mean_steps: f64,
}

impl TrainingResult {
    /// Create a new training result
    pub fn new(
        total_episodes: usize,
        reached_goal: usize,
        hit_wall: usize,
        truncated: usize,
        total_steps: usize,
    ) -> Self {
        let (goal_rate, mean_steps) = if total_episodes > 0 {
            (
                reached_goal as f64 / total_episodes as f64,
                total_steps as f64 / total_episodes as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            total_episodes,
            reached_goal,
            hit_wall,
            truncated,
            total_steps,
            goal_rate,
            mean_steps,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .map_err(|e| Error::io(format!("create training result {}", path.display()), e))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| Error::io(format!("open training result {}", path.display()), e))?;
        let result = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(result)
    }
}

/// Training pipeline for a maze agent
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run every configured episode, updating the agent's table in place
    ///
    /// # Errors
    ///
    /// Configuration problems (hyperparameters, a start outside the maze, a
    /// table sized for a different maze) are reported before the first
    /// episode. Observer failures abort the run.
    pub fn run(&mut self, maze: &Maze, agent: &mut MazeAgent) -> Result<TrainingResult> {
        self.config.validate()?;
        maze.check_position(self.config.start, "training start")?;
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

        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed);
        }

        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        let mut reached_goal = 0;
        let mut hit_wall = 0;
        let mut truncated = 0;
        let mut total_steps = 0;

        for episode in 0..self.config.episodes {
            let summary = self.run_episode(episode, maze, agent)?;

            match summary.outcome {
                EpisodeOutcome::ReachedGoal => reached_goal += 1,
                EpisodeOutcome::HitWall => hit_wall += 1,
                EpisodeOutcome::Truncated => {
                    truncated += 1;
                    warn!(
                        episode,
                        steps = summary.steps,
                        position = %summary.final_position,
                        "episode did not terminate within its step budget"
                    );
                }
            }
            total_steps += summary.steps;

            for observer in &mut self.observers {
                observer.on_episode_end(&summary)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        let result = TrainingResult::new(
            self.config.episodes,
            reached_goal,
            hit_wall,
            truncated,
            total_steps,
        );
        info!(
            episodes = result.total_episodes,
            reached_goal = result.reached_goal,
            hit_wall = result.hit_wall,
            truncated = result.truncated,
            "training completed"
        );
        Ok(result)
    }

    fn run_episode(
        &mut self,
        episode: usize,
        maze: &Maze,
        agent: &mut MazeAgent,
    ) -> Result<EpisodeSummary> {
        for observer in &mut self.observers {
            observer.on_episode_start(episode)?;
        }

        let mut pos = self.config.start;
        let mut steps = 0;
        let mut total_reward = 0.0;
        let mut out_of_budget = false;

        while maze.is_floor(pos) {
            if steps >= self.config.max_steps_per_episode {
                out_of_budget = true;
                break;
            }

            let action = agent.select_action(pos, self.config.exploration_threshold);
            let next = maze.step(pos, action);
            let reward = maze.reward(next);
            let (q_before, q_after) = agent.learn(
                pos,
                action,
                reward,
                next,
                self.config.learning_rate,
                self.config.discount_factor,
            );

            let record = StepRecord {
                step: steps,
                from: pos,
                action,
                to: next,
                reward,
                q_before,
                q_after,
            };
            for observer in &mut self.observers {
                observer.on_step(episode, &record)?;
            }

            total_reward += reward;
            steps += 1;
            pos = next;
        }

        let outcome = if out_of_budget {
            EpisodeOutcome::Truncated
        } else if maze.cell(pos) == Cell::Goal {
            EpisodeOutcome::ReachedGoal
        } else {
            EpisodeOutcome::HitWall
        };

        Ok(EpisodeSummary {
            episode,
            steps,
            total_reward,
            outcome,
            final_position: pos,
        })
    }
}
