//! Script engine error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    /// The source failed to compile (syntax error).
    #[error("compile error: {0}")]
    Compile(String),

    /// The script raised while evaluating (load body or function call).
    #[error("evaluation error: {0}")]
    Eval(String),

    /// The engine halted at the interrupt flag after the controller stopped
    /// waiting.
    #[error("execution interrupted after its budget expired")]
    Interrupted,

    /// A value could not cross the JSON ↔ script boundary.
    #[error("value conversion error: {0}")]
    Convert(String),
}

impl ScriptError {
    /// Fold a Rhai evaluation error into our taxonomy, keeping the
    /// interrupt case distinguishable from ordinary script failures.
    pub(crate) fn from_eval(err: &rhai::EvalAltResult) -> Self {
        if matches!(err, rhai::EvalAltResult::ErrorTerminated(..)) {
            Self::Interrupted
        } else {
            Self::Eval(err.to_string())
        }
    }
}
