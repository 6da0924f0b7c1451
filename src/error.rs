//! Error types for the gridcab crate

use thiserror::Error;

use crate::types::{GridSize, Position};

/// Main error type for the gridcab crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position {position} is outside the {grid} grid")]
    PositionOutOfBounds { position: Position, grid: GridSize },

    #[error("observation has no suggested waypoint but the agent is not at its destination")]
    MissingWaypoint,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("unsupported save format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
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
