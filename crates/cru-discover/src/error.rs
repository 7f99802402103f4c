//! Artifact loading error types.

use std::path::PathBuf;
use std::time::Duration;

use cru_script::ScriptError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The artifact could not be read from disk.
    #[error("failed to read artifact '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact failed to compile or raised while its body evaluated.
    #[error("artifact '{}' failed to load: {source}", path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: ScriptError,
    },

    /// The artifact loaded but declared no author.
    #[error("artifact '{}' has no declared {}", path.display(), cru_script::AUTHOR_IDENT)]
    NoAuthor { path: PathBuf },

    /// The load did not complete within its budget. The worker is asked to
    /// stop via the interrupt flag but is no longer awaited.
    #[error("loading artifact '{}' exceeded its {budget:?} budget", path.display())]
    Timeout { path: PathBuf, budget: Duration },

    /// The isolated load worker panicked.
    #[error("load worker for '{}' panicked: {message}", path.display())]
    Worker { path: PathBuf, message: String },
}

impl LoadError {
    /// The artifact this failure belongs to.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. }
            | Self::Script { path, .. }
            | Self::NoAuthor { path }
            | Self::Timeout { path, .. }
            | Self::Worker { path, .. } => path,
        }
    }
}
