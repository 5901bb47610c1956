//! Show command - Print a maze layout and its reward grid

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::load_grid;
use crate::{
    cli::output::{format_reward_grid, print_field, print_heading, print_subheading},
    maze::{Maze, RewardConfig},
};

#[derive(Parser, Debug)]
#[command(about = "Print a maze and its rewards")]
pub struct ShowArgs {
    /// Maze file; defaults to the classic 12x12 maze
    #[arg(long, short = 'm')]
    pub maze: Option<PathBuf>,

    /// Wall reward
    #[arg(long, default_value_t = -500.0, allow_negative_numbers = true)]
    pub wall_reward: f64,

    /// Floor reward (per-step cost)
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    pub floor_reward: f64,

    /// Goal reward
    #[arg(long, default_value_t = 500.0, allow_negative_numbers = true)]
    pub goal_reward: f64,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    let (grid, start) = load_grid(args.maze.as_deref())?;
    let rewards = RewardConfig::new(args.wall_reward, args.floor_reward, args.goal_reward);
    let maze = Maze::new(grid, rewards).context("invalid reward configuration")?;

    print_heading("Maze");
    print_field("Size", format!("{}x{}", maze.rows(), maze.cols()));
    if let Some(start) = start {
        print_field("Start", start);
    }
    let goals: Vec<String> = maze.grid().goals().iter().map(|g| g.to_string()).collect();
    print_field("Goals", goals.join(" "));

    print_subheading("Layout");
    println!("{}", maze.grid());

    print_subheading("Rewards");
    println!("{}", format_reward_grid(maze.rewards()));

    Ok(())
}
