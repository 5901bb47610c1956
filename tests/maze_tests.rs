//! Properties of the maze model that hold for any layout

use qmaze::{
    Action, Position,
    maze::{Cell, Grid, Maze, MazeFile, RewardConfig, build_rewards, layouts, load_maze, step},
};
use tempfile::tempdir;

#[test]
fn test_classic_layout() {
    let grid = layouts::classic();
    assert_eq!(grid.dims(), (12, 12));
    assert_eq!(grid.goals(), vec![Position::new(0, 5)]);
    assert_eq!(grid.cell(layouts::CLASSIC_START), Cell::Floor);
}

#[test]
fn test_rewards_mirror_every_cell() {
    let grid = layouts::classic();
    let rewards = build_rewards(&grid, -500.0, -10.0, 500.0);
    assert_eq!(rewards.dims(), grid.dims());

    for (pos, cell) in grid.iter() {
        let expected = match cell {
            Cell::Wall => -500.0,
            Cell::Floor => -10.0,
            Cell::Goal => 500.0,
        };
        assert_eq!(rewards.get(pos), expected, "reward at {pos}");
    }
}

#[test]
fn test_step_stays_in_bounds_everywhere() {
    let grid = layouts::classic();
    for (pos, _) in grid.iter() {
        for action in Action::ALL {
            let next = step(&grid, pos, action);
            assert!(grid.contains(next), "{pos} {action} left the grid");
            let distance = pos.row.abs_diff(next.row) + pos.col.abs_diff(next.col);
            assert!(distance <= 1);
        }
    }
}

#[test]
fn test_custom_rewards_classify_cells() {
    let grid: Grid = "#.G".parse().unwrap();
    let maze = Maze::new(grid, RewardConfig::new(-1.0, 0.0, 1.0)).unwrap();
    assert!(maze.is_wall(Position::new(0, 0)));
    assert!(maze.is_floor(Position::new(0, 1)));
    assert!(!maze.is_floor(Position::new(0, 2)));
    assert!(!maze.is_wall(Position::new(0, 2)));
}

#[test]
fn test_floor_reward_must_be_distinct() {
    let grid: Grid = ".G".parse().unwrap();
    assert!(Maze::new(grid.clone(), RewardConfig::new(-10.0, -10.0, 500.0)).is_err());
    assert!(Maze::new(grid, RewardConfig::new(-500.0, 500.0, 500.0)).is_err());
}

#[test]
fn test_maze_file_keeps_start() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("classic.json");
    MazeFile::from_grid(&layouts::classic(), Some(layouts::CLASSIC_START))
        .save(&path)
        .unwrap();

    let (grid, start) = load_maze(&path).unwrap();
    assert_eq!(grid, layouts::classic());
    assert_eq!(start, Some(layouts::CLASSIC_START));
}

#[test]
fn test_goal_reward_must_differ_from_wall() {
    let grid: Grid = "#G\n..".parse().unwrap();
    assert!(matches!(
        Maze::new(grid, RewardConfig::new(500.0, -10.0, 500.0)),
        Err(qmaze::Error::InvalidRewards { .. })
    ));
}
