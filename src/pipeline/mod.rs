//! Training and navigation pipelines
//!
//! This module provides:
//! - The Q-learning episode loop with pluggable observers
//! - The greedy navigator that extracts a path from a trained agent
//! - Observer implementations for progress, logging, metrics and CSV export

pub mod episode;
pub mod navigation;
pub mod observers;
pub mod training;

pub use episode::{EpisodeOutcome, EpisodeSummary, StepRecord};
pub use navigation::{NavigationConfig, NavigationOutcome, NavigationResult, Navigator};
// Re-export observer implementations (adapters)
pub use observers::{CsvObserver, LoggingObserver, MetricsObserver, MetricsSummary, ProgressObserver};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::Observer;
