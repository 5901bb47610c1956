//! Error types for the qmaze crate

use thiserror::Error;

/// Main error type for the qmaze crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("maze must have at least one row and one column")]
    EmptyGrid,

    #[error("ragged maze: row {row} has {got} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid cell code {code} at ({row}, {col}) (expected 0=wall, 1=floor, 2=goal)")]
    InvalidCellCode { code: i64, row: usize, col: usize },

    #[error("invalid character '{character}' at ({row}, {col}) in maze layout")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
    },

    #[error("{context} position ({row}, {col}) is outside the {rows}x{cols} maze")]
    PositionOutOfBounds {
        context: String,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid position '{input}' (expected 'ROW,COL')")]
    ParsePosition { input: String },

    #[error("invalid reward configuration: {message}")]
    InvalidRewards { message: String },

    #[error("invalid hyperparameter {name} = {value}: {reason}")]
    InvalidHyperparameter {
        name: String,
        value: f64,
        reason: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

impl Error {
    /// Wrap an I/O error with the operation that failed.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}
