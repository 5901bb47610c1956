//! Application layer: run configuration and the session that wires the maze,
//! the agent, the training pipeline and the navigator together.
//!
//! # Usage
//!
//! ```no_run
//! use qmaze::{
//!     app::{RunConfig, Session},
//!     maze::layouts,
//!     pipeline::ProgressObserver,
//! };
//!
//! let config = RunConfig::default().with_seed(42);
//! let mut session = Session::new(layouts::classic(), config)?
//!     .with_observer(Box::new(ProgressObserver::new()));
//! let report = session.run()?;
//! println!("{:?}", report.navigation.path);
//! # Ok::<(), qmaze::Error>(())
//! ```

pub mod config;
pub mod session;

pub use config::{Hyperparameters, RunConfig};
pub use session::{RunReport, Session};
