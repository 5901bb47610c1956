use clap::Parser;
use qmaze::cli::commands::run::{RunArgs, execute};
use tempfile::tempdir;

fn parse_args<I, T>(args: I) -> RunArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    RunArgs::parse_from(args)
}

#[test]
fn summary_records_training_and_path() {
    let tmp = tempdir().unwrap();
    let maze_path = tmp.path().join("corridor.txt");
    std::fs::write(&maze_path, "#G#\n#.#\n#.#\n").unwrap();
    let summary_stem = tmp.path().join("run_overview");

    let args = parse_args([
        "qmaze-run",
        "--maze",
        maze_path.to_str().unwrap(),
        "--start",
        "2,1",
        "--episodes",
        "100",
        "--seed",
        "42",
        "--no-progress",
        "--summary",
        summary_stem.to_str().unwrap(),
    ]);

    execute(args).expect("run with summary should succeed");

    let expected_path = summary_stem.with_extension("json");
    assert!(
        expected_path.exists(),
        "expected summary at {}",
        expected_path.display()
    );

    let contents = std::fs::read_to_string(&expected_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["training"]["total_episodes"], 100);
    assert_eq!(parsed["navigation"]["outcome"], "reached_goal");
    assert_eq!(parsed["navigation"]["path"][0]["row"], 2);
    assert_eq!(parsed["config"]["seed"], 42);
}

#[test]
fn json_maze_start_is_used() {
    let tmp = tempdir().unwrap();
    let maze_path = tmp.path().join("maze.json");
    std::fs::write(
        &maze_path,
        r#"{"cells": [[0, 2, 0], [0, 1, 0], [0, 1, 0]], "start": {"row": 2, "col": 1}}"#,
    )
    .unwrap();
    let summary_dir = tmp.path().join("summaries");
    let summary_arg = format!("{}{}", summary_dir.display(), std::path::MAIN_SEPARATOR);

    let args = parse_args([
        "qmaze-run",
        "--maze",
        maze_path.to_str().unwrap(),
        "--episodes",
        "50",
        "--seed",
        "1",
        "--no-progress",
        "--summary",
        &summary_arg,
    ]);

    execute(args).expect("run from json maze should succeed");

    let contents = std::fs::read_to_string(summary_dir.join("run_summary.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["config"]["training_start"]["row"], 2);
    assert_eq!(parsed["config"]["training_start"]["col"], 1);
}

#[test]
fn config_without_start_keeps_json_maze_start() {
    let tmp = tempdir().unwrap();
    let maze_path = tmp.path().join("maze.json");
    std::fs::write(
        &maze_path,
        r#"{"cells": [[0, 2, 0], [0, 1, 0], [0, 1, 0]], "start": {"row": 2, "col": 1}}"#,
    )
    .unwrap();
    let config_path = tmp.path().join("config.json");
    std::fs::write(&config_path, r#"{"seed": 1, "hyperparameters": {"episodes": 30}}"#).unwrap();
    let summary_path = tmp.path().join("summary.json");

    let args = parse_args([
        "qmaze-run",
        "--maze",
        maze_path.to_str().unwrap(),
        "--config",
        config_path.to_str().unwrap(),
        "--no-progress",
        "--summary",
        summary_path.to_str().unwrap(),
    ]);

    execute(args).expect("config without start should fall back to the maze start");

    let contents = std::fs::read_to_string(&summary_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["config"]["training_start"]["row"], 2);
    assert_eq!(parsed["config"]["navigation_start"]["col"], 1);
    assert_eq!(parsed["training"]["total_episodes"], 30);
}

#[test]
fn episodes_csv_has_one_row_per_episode() {
    let tmp = tempdir().unwrap();
    let maze_path = tmp.path().join("corridor.txt");
    std::fs::write(&maze_path, "#G#\n#.#\n").unwrap();
    let csv_path = tmp.path().join("episodes.csv");

    let args = parse_args([
        "qmaze-run",
        "--maze",
        maze_path.to_str().unwrap(),
        "--start",
        "1,1",
        "--episodes",
        "20",
        "--seed",
        "3",
        "--no-progress",
        "--episodes-csv",
        csv_path.to_str().unwrap(),
    ]);

    execute(args).expect("run with csv export should succeed");

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(contents.lines().count(), 21);
}

#[test]
fn unterminated_navigation_is_an_error() {
    let tmp = tempdir().unwrap();
    let maze_path = tmp.path().join("single.txt");
    std::fs::write(&maze_path, ".\n").unwrap();

    let args = parse_args([
        "qmaze-run",
        "--maze",
        maze_path.to_str().unwrap(),
        "--start",
        "0,0",
        "--episodes",
        "2",
        "--max-episode-steps",
        "10",
        "--max-navigation-steps",
        "5",
        "--no-progress",
    ]);

    let err = execute(args).unwrap_err();
    assert!(err.to_string().contains("did not terminate"));
}

#[test]
fn start_outside_maze_fails_fast() {
    let tmp = tempdir().unwrap();
    let maze_path = tmp.path().join("corridor.txt");
    std::fs::write(&maze_path, "#G#\n#.#\n").unwrap();

    let args = parse_args([
        "qmaze-run",
        "--maze",
        maze_path.to_str().unwrap(),
        "--start",
        "5,5",
        "--no-progress",
    ]);

    let err = execute(args).unwrap_err();
    assert!(format!("{err:#}").contains("outside the 2x3 maze"));
}
