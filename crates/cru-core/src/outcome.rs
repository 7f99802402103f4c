//! Invocation outcomes.
//!
//! An [`Outcome`] is the immutable record of one bounded invocation (or of
//! the synthetic failure recorded when a spec's target was never discovered
//! for an author). Failures carry an [`OutcomeError`] that serializes to its
//! textual description, never to a live error object.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::ser::Serializer;
use serde::Serialize;
use serde_json::Value;

use crate::spec::TestSpec;

/// Classification of a non-passing outcome's error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The spec's target name was not discovered for this author.
    UnitNotFound,
    /// The unit raised while executing.
    Script,
    /// The unit did not complete within the invocation budget.
    Timeout,
    /// The isolated worker panicked.
    Panic,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::UnitNotFound => "unit not found",
            Self::Script => "script error",
            Self::Timeout => "timeout",
            Self::Panic => "panic",
        };
        f.write_str(label)
    }
}

/// Human-readable description of why an invocation did not pass cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeError {
    pub kind: FailureKind,
    pub message: String,
}

impl OutcomeError {
    #[must_use]
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

// Rendered reports carry the textual description only.
impl Serialize for OutcomeError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The structured result of evaluating one (author, spec) pair.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    /// Whether the invocation completed and satisfied the spec's criterion.
    pub passed: bool,
    /// Wall-clock time from just before dispatch to completion or budget expiry.
    #[serde(rename = "runtime_secs", serialize_with = "as_secs")]
    pub elapsed: Duration,
    /// Positional arguments the spec supplied, for traceability.
    pub args: Vec<Value>,
    /// Keyword arguments the spec supplied, for traceability.
    pub kwargs: BTreeMap<String, Value>,
    /// Failure description, or `None` for a clean completion.
    pub error: Option<OutcomeError>,
    /// The returned value, kept whether or not the criterion held; `None`
    /// when the invocation never produced one.
    pub result: Option<Value>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn as_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

impl Outcome {
    /// Outcome for an invocation that returned a value within budget.
    /// `passed` reflects the spec's criterion; the value is kept either way.
    #[must_use]
    pub fn completed(spec: &TestSpec, result: Value, elapsed: Duration) -> Self {
        Self {
            passed: spec.judge(&result),
            elapsed,
            args: spec.args().to_vec(),
            kwargs: spec.kwargs().clone(),
            error: None,
            result: Some(result),
        }
    }

    /// Outcome for an invocation that failed to produce a value.
    #[must_use]
    pub fn failed(spec: &TestSpec, error: OutcomeError, elapsed: Duration) -> Self {
        Self {
            passed: false,
            elapsed,
            args: spec.args().to_vec(),
            kwargs: spec.kwargs().clone(),
            error: Some(error),
            result: None,
        }
    }

    /// Synthetic outcome recorded when an author has no unit matching the
    /// spec's target. Elapsed is zero: nothing ran.
    #[must_use]
    pub fn not_found(spec: &TestSpec, author: &str) -> Self {
        Self::failed(
            spec,
            OutcomeError::new(
                FailureKind::UnitNotFound,
                format!("no unit named '{}' for author '{author}'", spec.target()),
            ),
            Duration::ZERO,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sum3_spec(expected: i64) -> TestSpec {
        TestSpec::expecting(
            "sum3",
            vec![json!(1), json!(2), json!(3)],
            BTreeMap::new(),
            json!(expected),
        )
    }

    #[test]
    fn completed_outcome_keeps_result_on_pass_and_fail() {
        let pass = Outcome::completed(&sum3_spec(6), json!(6), Duration::from_millis(3));
        assert!(pass.passed);
        assert_eq!(pass.result, Some(json!(6)));
        assert_eq!(pass.error, None);

        let fail = Outcome::completed(&sum3_spec(7), json!(6), Duration::from_millis(3));
        assert!(!fail.passed);
        assert_eq!(fail.result, Some(json!(6)));
        assert_eq!(fail.error, None);
    }

    #[test]
    fn not_found_outcome_has_zero_elapsed() {
        let outcome = Outcome::not_found(&sum3_spec(6), "alice");
        assert!(!outcome.passed);
        assert_eq!(outcome.elapsed, Duration::ZERO);
        let error = outcome.error.expect("not-found outcome carries an error");
        assert_eq!(error.kind, FailureKind::UnitNotFound);
        assert!(error.message.contains("sum3"));
        assert!(error.message.contains("alice"));
    }

    #[test]
    fn serializes_error_as_text_and_elapsed_as_secs() {
        let outcome = Outcome::failed(
            &sum3_spec(6),
            OutcomeError::new(FailureKind::Timeout, "exceeded 1s budget"),
            Duration::from_secs(1),
        );
        let rendered = serde_json::to_value(&outcome).expect("outcome serializes");
        assert_eq!(rendered["passed"], json!(false));
        assert_eq!(rendered["runtime_secs"], json!(1.0));
        assert_eq!(rendered["error"], json!("timeout: exceeded 1s budget"));
        assert_eq!(rendered["result"], Value::Null);
        assert_eq!(rendered["args"], json!([1, 2, 3]));
    }
}
