//! Run command - Train an agent on a maze, then navigate it greedily

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use super::load_grid;
use crate::{
    app::{RunConfig, Session},
    cli::output::{print_field, print_heading, print_path},
    pipeline::{
        CsvObserver, LoggingObserver, NavigationOutcome, NavigationResult, ProgressObserver,
        TrainingResult,
    },
    types::Position,
};

#[derive(Debug, Serialize)]
struct RunSummaryFile<'a> {
    training: &'a TrainingResult,
    navigation: &'a NavigationResult,
    config: &'a RunConfig,
}

const DEFAULT_SUMMARY_FILE: &str = "run_summary.json";

/// Resolve the `--summary` argument to a JSON file.
///
/// Directory targets (trailing separator or no file name) receive
/// `run_summary.json`; any other extension is replaced with `json`.
fn summary_file_path(raw: &Path) -> PathBuf {
    let names_directory = raw
        .as_os_str()
        .to_string_lossy()
        .ends_with(std::path::MAIN_SEPARATOR)
        || raw.file_name().is_none();
    if names_directory {
        return raw.join(DEFAULT_SUMMARY_FILE);
    }

    let is_json = raw
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        raw.to_path_buf()
    } else {
        raw.with_extension("json")
    }
}

#[derive(Parser, Debug)]
#[command(about = "Train on a maze and print the greedy path")]
pub struct RunArgs {
    /// Maze file (`.json` cell codes, otherwise a `#`/`.`/`G` text layout); defaults to the classic 12x12 maze.
    /// Text layouts carry no start cell, so pair them with `--start`
    #[arg(long, short = 'm')]
    pub maze: Option<PathBuf>,

    /// JSON run configuration; flags below override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of training episodes
    #[arg(long, short = 'e')]
    pub episodes: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start cell for training and navigation, as ROW,COL
    #[arg(long)]
    pub start: Option<Position>,

    /// Start cell for navigation only, as ROW,COL
    #[arg(long)]
    pub nav_start: Option<Position>,

    /// Uniform draws below this value exploit during training
    #[arg(long)]
    pub exploration_threshold: Option<f64>,

    /// Discount factor γ
    #[arg(long)]
    pub discount_factor: Option<f64>,

    /// Learning rate α
    #[arg(long)]
    pub learning_rate: Option<f64>,

    /// Step budget per training episode
    #[arg(long)]
    pub max_episode_steps: Option<usize>,

    /// Step budget for navigation
    #[arg(long)]
    pub max_navigation_steps: Option<usize>,

    /// Hide the training progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// Optional CSV file with one row per training episode
    #[arg(long)]
    pub episodes_csv: Option<PathBuf>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

impl RunArgs {
    /// Merge the configuration file, the maze's own start cell and the flags.
    ///
    /// Precedence: flags, then the configuration file, then the maze file's
    /// start, then the defaults. A start field the configuration file leaves
    /// out falls through to the maze file's start.
    fn resolve_config(&self, maze_start: Option<Position>) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load_with_start(path, maze_start)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => match maze_start {
                Some(start) => RunConfig::default().with_start(start),
                None => RunConfig::default(),
            },
        };

        if let Some(episodes) = self.episodes {
            config.hyperparameters.episodes = episodes;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(start) = self.start {
            config = config.with_start(start);
        }
        if let Some(start) = self.nav_start {
            config.navigation_start = start;
        }
        if let Some(value) = self.exploration_threshold {
            config.hyperparameters.exploration_threshold = value;
        }
        if let Some(value) = self.discount_factor {
            config.hyperparameters.discount_factor = value;
        }
        if let Some(value) = self.learning_rate {
            config.hyperparameters.learning_rate = value;
        }
        if let Some(steps) = self.max_episode_steps {
            config.max_steps_per_episode = steps;
        }
        if let Some(steps) = self.max_navigation_steps {
            config.max_navigation_steps = steps;
        }
        Ok(config)
    }
}

pub fn execute(args: RunArgs) -> Result<()> {
    let (grid, maze_start) = load_grid(args.maze.as_deref())?;
    let config = args.resolve_config(maze_start)?;

    let mut session = Session::new(grid, config.clone())
        .context("invalid run configuration")?
        .with_observer(Box::new(LoggingObserver::new()));
    if !args.no_progress {
        session = session.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.episodes_csv {
        session = session.with_observer(Box::new(CsvObserver::new(path)?));
    }

    print_heading("Training");
    print_field("Maze", format!("{}x{}", session.maze().rows(), session.maze().cols()));
    print_field("Episodes", config.hyperparameters.episodes);
    print_field("Start", config.training_start);
    print_field(
        "Seed",
        &config
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string()),
    );

    let training = session.train()?;

    print_field("Reached goal", training.reached_goal);
    print_field("Hit wall", training.hit_wall);
    print_field("Truncated", training.truncated);
    print_field("Mean steps", format!("{:.2}", training.mean_steps));
    println!("Training completed");

    print_heading("Navigation");
    let navigation = session.navigate()?;
    print_path(&navigation.path);
    print_field("Outcome", navigation.outcome);
    print_field("Moves", navigation.steps);

    if let Some(raw) = &args.summary {
        let path = summary_file_path(raw);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let file = std::fs::File::create(&path)
            .with_context(|| format!("failed to create summary {}", path.display()))?;
        serde_json::to_writer_pretty(
            file,
            &RunSummaryFile {
                training: &training,
                navigation: &navigation,
                config: &config,
            },
        )?;
        print_field("Summary", path.display());
    }

    if navigation.outcome == NavigationOutcome::StepBudgetExhausted {
        bail!(
            "navigation did not terminate within {} steps",
            config.max_navigation_steps
        );
    }

    Ok(())
}
