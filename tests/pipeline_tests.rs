//! End-to-end tests for training and navigation

mod common;

use common::{assert_contiguous, assert_no_walls, classic_session, corridor};
use qmaze::{
    app::{RunConfig, Session},
    maze::{Grid, Maze, RewardConfig, layouts},
    pipeline::{
        EpisodeOutcome, MetricsObserver, NavigationConfig, NavigationOutcome, Navigator,
        TrainingConfig, TrainingPipeline,
    },
    q_learning::MazeAgent,
    types::Position,
};

/// The classic 12x12 maze is solved from its entrance after 1500 episodes
#[test]
fn test_classic_maze_reaches_goal() {
    let mut session = classic_session(42);
    let report = session.run().unwrap();

    assert_eq!(report.training.total_episodes, 1500);
    assert!(report.training.reached_goal > 0);

    let path = &report.navigation.path;
    assert_eq!(report.navigation.outcome, NavigationOutcome::ReachedGoal);
    assert_eq!(path.first(), Some(&layouts::CLASSIC_START));
    assert_eq!(path.last(), Some(&Position::new(0, 5)));
    assert_no_walls(session.maze().grid(), path);
    assert_contiguous(path);
}

/// Identical seeds give bit-identical tables and identical paths
#[test]
fn test_same_seed_is_reproducible() {
    let config = RunConfig::default().with_seed(7).with_episodes(300);

    let mut first = Session::new(layouts::classic(), config.clone()).unwrap();
    let mut second = Session::new(layouts::classic(), config).unwrap();
    let first_report = first.run().unwrap();
    let second_report = second.run().unwrap();

    assert_eq!(first_report, second_report);
    for ((pos_a, action_a, a), (pos_b, action_b, b)) in
        first.agent().q_table().iter().zip(second.agent().q_table().iter())
    {
        assert_eq!((pos_a, action_a), (pos_b, action_b));
        assert_eq!(a.to_bits(), b.to_bits(), "Q{pos_a}/{action_a} differs");
    }
}

/// Different seeds explore differently
#[test]
fn test_different_seeds_diverge() {
    let run = |seed| {
        let mut session = Session::new(
            layouts::classic(),
            RunConfig::default().with_seed(seed).with_episodes(50),
        )
        .unwrap();
        session.train().unwrap();
        session.agent().q_table().clone()
    };
    assert_ne!(run(1), run(2));
}

/// A corridor is learned quickly and navigated straight up
#[test]
fn test_corridor_path_is_straight() {
    let config = RunConfig::default()
        .with_seed(3)
        .with_episodes(200)
        .with_start(Position::new(3, 1));
    let mut session = Session::new(corridor(), config).unwrap();
    let report = session.run().unwrap();

    assert_eq!(
        report.navigation.path,
        vec![
            Position::new(3, 1),
            Position::new(2, 1),
            Position::new(1, 1),
            Position::new(0, 1),
        ]
    );
    assert_eq!(report.navigation.steps, 3);
}

/// A single floor cell never terminates; every episode is cut off at the budget
#[test]
fn test_single_floor_cell_truncates_episodes() {
    let maze = Maze::new(".".parse().unwrap(), RewardConfig::default()).unwrap();
    let config = TrainingConfig {
        episodes: 4,
        start: Position::new(0, 0),
        max_steps_per_episode: 25,
        seed: Some(0),
        ..TrainingConfig::default()
    };

    let mut agent = MazeAgent::for_maze(&maze);
    let result = TrainingPipeline::new(config).run(&maze, &mut agent).unwrap();

    assert_eq!(result.truncated, 4);
    assert_eq!(result.total_steps, 100);
    assert_eq!(result.reached_goal + result.hit_wall, 0);
}

/// Training from a goal cell performs no updates
#[test]
fn test_training_from_goal_is_empty() {
    let maze = Maze::new(corridor(), RewardConfig::default()).unwrap();
    let config = TrainingConfig {
        episodes: 3,
        start: Position::new(0, 1),
        seed: Some(0),
        ..TrainingConfig::default()
    };

    let mut agent = MazeAgent::for_maze(&maze);
    let result = TrainingPipeline::new(config).run(&maze, &mut agent).unwrap();

    assert_eq!(result.reached_goal, 3);
    assert_eq!(result.total_steps, 0);
}

/// Metrics observer agrees with the pipeline's own tally
#[test]
fn test_metrics_observer_matches_result() {
    use std::sync::{Arc, Mutex};

    struct Shared(Arc<Mutex<MetricsObserver>>);

    impl qmaze::pipeline::Observer for Shared {
        fn on_episode_end(&mut self, summary: &qmaze::pipeline::EpisodeSummary) -> qmaze::Result<()> {
            self.0.lock().unwrap().on_episode_end(summary)
        }
    }

    let metrics = Arc::new(Mutex::new(MetricsObserver::new()));
    let maze = Maze::new(layouts::classic(), RewardConfig::default()).unwrap();
    let config = TrainingConfig {
        episodes: 100,
        seed: Some(21),
        ..TrainingConfig::default()
    };

    let mut pipeline =
        TrainingPipeline::new(config).with_observer(Box::new(Shared(Arc::clone(&metrics))));
    let mut agent = MazeAgent::for_maze(&maze);
    let result = pipeline.run(&maze, &mut agent).unwrap();

    let summary = metrics.lock().unwrap().summary();
    assert_eq!(summary.episodes, result.total_episodes);
    assert_eq!(summary.goals, result.reached_goal);
    assert_eq!(summary.walls, result.hit_wall);
    assert_eq!(summary.truncated, result.truncated);
    assert_eq!(summary.avg_steps, result.mean_steps);
}

/// Every step notification precedes the episode end and counts match
#[test]
fn test_step_events_match_episode_lengths() {
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Counts {
        steps: usize,
        reported: usize,
        starts: usize,
        ends: usize,
    }

    struct Counter(Arc<Mutex<Counts>>);

    impl qmaze::pipeline::Observer for Counter {
        fn on_episode_start(&mut self, _episode: usize) -> qmaze::Result<()> {
            self.0.lock().unwrap().starts += 1;
            Ok(())
        }

        fn on_step(&mut self, _episode: usize, step: &qmaze::pipeline::StepRecord) -> qmaze::Result<()> {
            let mut counts = self.0.lock().unwrap();
            counts.steps += 1;
            assert!((step.q_after - step.q_before).is_finite());
            Ok(())
        }

        fn on_episode_end(&mut self, summary: &qmaze::pipeline::EpisodeSummary) -> qmaze::Result<()> {
            let mut counts = self.0.lock().unwrap();
            counts.reported += summary.steps;
            counts.ends += 1;
            assert_ne!(summary.outcome, EpisodeOutcome::Truncated);
            Ok(())
        }
    }

    let counts = Arc::new(Mutex::new(Counts::default()));
    let config = RunConfig::default()
        .with_seed(5)
        .with_episodes(40)
        .with_start(Position::new(3, 1));
    let mut session = Session::new(corridor(), config)
        .unwrap()
        .with_observer(Box::new(Counter(Arc::clone(&counts))));
    let result = session.train().unwrap();

    let counts = counts.lock().unwrap();
    assert_eq!(counts.starts, 40);
    assert_eq!(counts.ends, 40);
    assert_eq!(counts.steps, counts.reported);
    assert_eq!(counts.steps, result.total_steps);
}

/// A navigator started on a wall returns an empty path
#[test]
fn test_navigation_from_wall_is_empty() {
    let maze = Maze::new(corridor(), RewardConfig::default()).unwrap();
    let mut agent = MazeAgent::for_maze(&maze).with_seed(1);
    let result = Navigator::new(NavigationConfig {
        start: Position::new(0, 0),
        max_steps: 100,
    })
    .navigate(&maze, &mut agent)
    .unwrap();

    assert!(result.path.is_empty());
    assert_eq!(result.outcome, NavigationOutcome::StartNotFloor);
}

/// Navigation start outside the grid is a configuration error
#[test]
fn test_navigation_start_out_of_bounds() {
    let grid: Grid = "G.".parse().unwrap();
    let config = RunConfig::default()
        .with_training_start(Position::new(0, 1))
        .with_navigation_start(Position::new(0, 2));
    assert!(matches!(
        Session::new(grid, config),
        Err(qmaze::Error::PositionOutOfBounds { col: 2, .. })
    ));
}
