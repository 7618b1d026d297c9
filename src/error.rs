use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Failures that stop the service from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("failed to read seed file {}: {source}", .path.display())]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed data: {0}")]
    SeedParse(#[from] serde_json::Error),

    #[error("invalid seed entry {activity:?}: {reason}")]
    InvalidSeed {
        activity: String,
        reason: &'static str,
    },
}
