//! Test specifications.
//!
//! A [`TestSpec`] is an immutable description of one call to make against a
//! discovered unit: the target name, positional arguments, keyword arguments,
//! and exactly one way of judging the returned value. The exactly-one rule is
//! enforced at construction; everything else (arity, argument types) is left
//! to the script engine at invocation time.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::SpecError;

/// A result-judging closure for predicate-mode specs.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

enum Judge {
    /// Pass when the returned value equals this one (JSON structural equality).
    Expected(Value),
    /// Pass when the closure returns true for the returned value.
    Checked(Predicate),
}

impl fmt::Debug for Judge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expected(value) => f.debug_tuple("Expected").field(value).finish(),
            Self::Checked(_) => f.write_str("Checked(..)"),
        }
    }
}

/// One named call against a discovered unit plus its pass criterion.
#[derive(Debug, Clone)]
pub struct TestSpec {
    target: String,
    args: Vec<Value>,
    kwargs: BTreeMap<String, Value>,
    judge: Arc<Judge>,
}

impl TestSpec {
    /// Build a spec from optional judging modes, enforcing the exactly-one
    /// invariant. Prefer [`TestSpec::expecting`] or [`TestSpec::checked_by`]
    /// when the mode is known at the call site.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::JudgingMode`] when both or neither of `expected`
    /// and `predicate` are supplied.
    pub fn new(
        target: impl Into<String>,
        args: Vec<Value>,
        kwargs: BTreeMap<String, Value>,
        expected: Option<Value>,
        predicate: Option<Predicate>,
    ) -> Result<Self, SpecError> {
        let target = target.into();
        let judge = match (expected, predicate) {
            (Some(value), None) => Judge::Expected(value),
            (None, Some(check)) => Judge::Checked(check),
            (Some(_), Some(_)) => {
                return Err(SpecError::JudgingMode {
                    target,
                    detail: "both expected value and predicate given",
                });
            }
            (None, None) => {
                return Err(SpecError::JudgingMode {
                    target,
                    detail: "neither expected value nor predicate given",
                });
            }
        };
        Ok(Self {
            target,
            args,
            kwargs,
            judge: Arc::new(judge),
        })
    }

    /// Spec that passes when the result equals `expected`.
    #[must_use]
    pub fn expecting(
        target: impl Into<String>,
        args: Vec<Value>,
        kwargs: BTreeMap<String, Value>,
        expected: Value,
    ) -> Self {
        Self {
            target: target.into(),
            args,
            kwargs,
            judge: Arc::new(Judge::Expected(expected)),
        }
    }

    /// Spec that passes when `predicate` returns true for the result.
    #[must_use]
    pub fn checked_by(
        target: impl Into<String>,
        args: Vec<Value>,
        kwargs: BTreeMap<String, Value>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            target: target.into(),
            args,
            kwargs,
            judge: Arc::new(Judge::Checked(Arc::new(predicate))),
        }
    }

    /// Name of the unit this spec targets.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Positional arguments, in call order.
    #[must_use]
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Keyword arguments; keys are unique by construction of the map.
    #[must_use]
    pub const fn kwargs(&self) -> &BTreeMap<String, Value> {
        &self.kwargs
    }

    /// Apply this spec's success criterion to a returned value.
    #[must_use]
    pub fn judge(&self, result: &Value) -> bool {
        match self.judge.as_ref() {
            Judge::Expected(expected) => result == expected,
            Judge::Checked(check) => check(result),
        }
    }
}
