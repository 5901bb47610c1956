//! qmaze CLI - Train a Q-learning agent on a grid maze and extract its path
//!
//! This CLI provides:
//! - `run`: train for a number of episodes, then navigate greedily
//! - `show`: print a maze layout and its reward grid

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qmaze")]
#[command(version, about = "Tabular Q-learning maze solver", long_about = None)]
struct Cli {
    /// Log per-episode and per-move events
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on a maze, then navigate it greedily
    Run(Box<qmaze::cli::commands::run::RunArgs>),

    /// Print a maze and its reward grid
    Show(qmaze::cli::commands::show::ShowArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run(args) => qmaze::cli::commands::run::execute(*args),
        Commands::Show(args) => qmaze::cli::commands::show::execute(args),
    }
}
