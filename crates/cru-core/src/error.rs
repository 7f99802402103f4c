//! Construction error types.
//!
//! Domain-specific errors (`ScriptError`, `LoadError`, `RunnerError`) live in
//! their respective crates; this module only carries the errors that can be
//! raised while building the core value objects.

use thiserror::Error;

/// Errors raised while constructing a [`crate::TestSpec`].
#[derive(Debug, Error)]
pub enum SpecError {
    /// Exactly one of expected value or predicate must be supplied.
    #[error("test spec '{target}' needs exactly one judging mode: {detail}")]
    JudgingMode {
        target: String,
        detail: &'static str,
    },
}
