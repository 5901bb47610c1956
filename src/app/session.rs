//! A training session: one maze, one agent, one configuration.

use serde::{Deserialize, Serialize};

use super::config::RunConfig;
use crate::{
    Result,
    maze::{Grid, Maze},
    pipeline::{NavigationResult, Navigator, TrainingPipeline, TrainingResult},
    ports::Observer,
    q_learning::MazeAgent,
};

/// Outcome of [`Session::run`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub training: TrainingResult,
    pub navigation: NavigationResult,
}

/// Owns the maze, the agent and the configuration for a train-then-navigate run.
///
/// Training mutates the agent's table; navigation only reads it.
///
/// # Examples
///
/// ```
/// use qmaze::{app::{RunConfig, Session}, types::Position};
///
/// let grid = "#G#\n#.#\n#.#".parse()?;
/// let config = RunConfig::default()
///     .with_seed(42)
///     .with_episodes(100)
///     .with_start(Position::new(2, 1));
///
/// let mut session = Session::new(grid, config)?;
/// let report = session.run()?;
/// assert!(report.navigation.reached_goal());
/// # Ok::<(), qmaze::Error>(())
/// ```
pub struct Session {
    maze: Maze,
    agent: MazeAgent,
    config: RunConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl Session {
    /// Validate `config` against `grid` and create a session with a zeroed table.
    ///
    /// # Errors
    ///
    /// Fails before any training if the configuration is invalid or either
    /// start cell lies outside the grid.
    pub fn new(grid: Grid, config: RunConfig) -> Result<Self> {
        config.validate()?;
        let maze = Maze::new(grid, config.rewards)?;
        maze.check_position(config.training_start, "training start")?;
        maze.check_position(config.navigation_start, "navigation start")?;

        let mut agent = MazeAgent::for_maze(&maze);
        if let Some(seed) = config.seed {
            agent.set_rng_seed(seed);
        }

        Ok(Self {
            maze,
            agent,
            config,
            observers: Vec::new(),
        })
    }

    /// Add a training observer
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn agent(&self) -> &MazeAgent {
        &self.agent
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run all training episodes.
    ///
    /// Observers are handed to the pipeline and dropped once it finishes, so
    /// a second call trains without them.
    pub fn train(&mut self) -> Result<TrainingResult> {
        let mut pipeline = TrainingPipeline::new(self.config.training_config());
        for observer in self.observers.drain(..) {
            pipeline = pipeline.with_observer(observer);
        }
        pipeline.run(&self.maze, &mut self.agent)
    }

    /// Greedy rollout from the navigation start.
    pub fn navigate(&mut self) -> Result<NavigationResult> {
        Navigator::new(self.config.navigation_config()).navigate(&self.maze, &mut self.agent)
    }

    /// Train, then navigate.
    pub fn run(&mut self) -> Result<RunReport> {
        let training = self.train()?;
        let navigation = self.navigate()?;
        Ok(RunReport {
            training,
            navigation,
        })
    }
}
