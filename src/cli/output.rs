//! Output formatting for CLI

use std::fmt::Display;

use crate::{maze::RewardGrid, types::Position};

const HEADING_WIDTH: usize = 48;
const LABEL_WIDTH: usize = 16;

/// Title framed by `=` rules, preceded by a blank line
pub fn format_heading(title: &str) -> String {
    let rule = "=".repeat(HEADING_WIDTH);
    format!("\n{rule}\n{title}\n{rule}")
}

/// Title underlined with `-` to its own width
pub fn format_subheading(title: &str) -> String {
    format!("\n{title}\n{}", "-".repeat(title.chars().count()))
}

/// Indented `label: value` line with aligned values
pub fn format_field(label: &str, value: impl Display) -> String {
    let label = format!("{label}:");
    format!("  {label:<width$}{value}", width = LABEL_WIDTH)
}

pub fn print_heading(title: &str) {
    println!("{}", format_heading(title));
}

pub fn print_subheading(title: &str) {
    println!("{}", format_subheading(title));
}

pub fn print_field(label: &str, value: impl Display) {
    println!("{}", format_field(label, value));
}

/// One line per path entry: `Move 1: (11, 5)`
pub fn format_path(path: &[Position]) -> Vec<String> {
    path.iter()
        .enumerate()
        .map(|(i, pos)| format!("Move {}: {pos}", i + 1))
        .collect()
}

/// Print every move of a path
pub fn print_path(path: &[Position]) {
    for line in format_path(path) {
        println!("{line}");
    }
}

/// Render rewards as right-aligned columns
pub fn format_reward_grid(rewards: &RewardGrid) -> String {
    let rows = rewards.to_rows();
    let width = rows
        .iter()
        .flatten()
        .map(|r| format!("{r}").len())
        .max()
        .unwrap_or(1);
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|r| format!("{r:>width$}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Grid, build_rewards};

    #[test]
    fn test_headings() {
        assert_eq!(format_subheading("Rewards"), "\nRewards\n-------");
        let heading = format_heading("Training");
        assert_eq!(heading.lines().nth(2), Some("Training"));
        assert_eq!(heading.lines().nth(1).map(str::len), Some(HEADING_WIDTH));
    }

    #[test]
    fn test_format_field_aligns_values() {
        assert_eq!(format_field("Moves", 12), "  Moves:          12");
        assert_eq!(
            format_field("Start", Position::new(11, 5)),
            "  Start:          (11, 5)"
        );
    }

    #[test]
    fn test_format_path() {
        let lines = format_path(&[Position::new(11, 5), Position::new(10, 5)]);
        assert_eq!(lines, vec!["Move 1: (11, 5)", "Move 2: (10, 5)"]);
    }

    #[test]
    fn test_format_reward_grid() {
        let grid: Grid = "#G\n..".parse().unwrap();
        let rewards = build_rewards(&grid, -500.0, -10.0, 500.0);
        assert_eq!(format_reward_grid(&rewards), "-500  500\n -10  -10");
    }
}
