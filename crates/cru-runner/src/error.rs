//! Runner error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    /// `run_all` was called before any discovery completed.
    #[error("run_all called before discover_all; nothing to run against")]
    NotDiscovered,
}

#[derive(Debug, Error)]
pub enum ReportError {
    /// An outcome failed to serialize.
    #[error("failed to render result table: {0}")]
    Serialize(#[from] serde_json::Error),
}
