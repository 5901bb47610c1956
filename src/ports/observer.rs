//! Observer port - abstraction for training observation and data collection
//!
//! This port defines the interface for observing training events,
//! allowing composable data collection without coupling the episode loop
//! to specific output formats or metrics.

use crate::{
    Result,
    pipeline::episode::{EpisodeSummary, StepRecord},
};

/// Observer trait for monitoring training
///
/// Observers can be composed to collect different types of data during
/// training, for example a progress bar, per-episode log lines, aggregate
/// metrics or a CSV export.
///
/// # Event Sequence
///
/// The observer methods are called in the following order:
/// 1. `on_training_start(total_episodes)` - Once at the beginning
/// 2. For each episode:
///    - `on_episode_start(episode)`
///    - `on_step(episode, step)` - For each Q-update in the episode
///    - `on_episode_end(summary)`
/// 3. `on_training_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use qmaze::{pipeline::episode::EpisodeSummary, ports::Observer};
///
/// struct StepCounter {
///     steps: usize,
/// }
///
/// impl Observer for StepCounter {
///     fn on_episode_end(&mut self, summary: &EpisodeSummary) -> qmaze::Result<()> {
///         self.steps += summary.steps;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when training starts.
    ///
    /// # Parameters
    ///
    /// * `total_episodes` - Total number of episodes that will be run
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called when an episode starts (0-based index).
    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        Ok(())
    }

    /// Called after every Q-update, with the transition that produced it.
    fn on_step(&mut self, _episode: usize, _step: &StepRecord) -> Result<()> {
        Ok(())
    }

    /// Called when an episode reaches a non-floor cell or exhausts its step budget.
    fn on_episode_end(&mut self, _summary: &EpisodeSummary) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    ///
    /// Use this to flush outputs or display summaries.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
