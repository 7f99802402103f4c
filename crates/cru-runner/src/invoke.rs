//! Bounded invocation of one callable unit.
//!
//! Every invocation runs in its own blocking worker so that a raising or
//! stalling unit cannot propagate into the controller. The controller
//! suspends exactly once, waiting up to the budget; at expiry it flips the
//! script interrupt flag, records a timeout outcome, and moves on without
//! awaiting the worker further.

use std::sync::Arc;
use std::time::{Duration, Instant};

use cru_core::{FailureKind, Outcome, OutcomeError, TestSpec};
use cru_discover::CallableUnit;
use cru_script::{call_function, InterruptFlag};

/// Default wall-clock budget for one invocation.
pub const DEFAULT_INVOKE_TIMEOUT: Duration = Duration::from_secs(15);

/// Invoke `unit` with `spec`'s arguments, bounded by `budget`.
///
/// Never returns an error: every failure mode is folded into a non-passing
/// [`Outcome`] with a textual description. Elapsed time is wall-clock from
/// just before dispatch; a timeout reports exactly the budget.
pub async fn invoke(unit: &CallableUnit, spec: &TestSpec, budget: Duration) -> Outcome {
    let flag = InterruptFlag::new();
    let worker_flag = flag.clone();
    let script = Arc::clone(unit.script());
    let name = unit.name().to_owned();
    let args = spec.args().to_vec();
    let kwargs = spec.kwargs().clone();

    let started = Instant::now();
    let worker = tokio::task::spawn_blocking(move || {
        call_function(&script, &name, &args, &kwargs, &worker_flag)
    });

    match tokio::time::timeout(budget, worker).await {
        Ok(Ok(Ok(value))) => Outcome::completed(spec, value, started.elapsed()),
        Ok(Ok(Err(error))) => Outcome::failed(
            spec,
            OutcomeError::new(FailureKind::Script, error.to_string()),
            started.elapsed(),
        ),
        Ok(Err(join_error)) => Outcome::failed(
            spec,
            OutcomeError::new(FailureKind::Panic, join_error.to_string()),
            started.elapsed(),
        ),
        Err(_elapsed) => {
            flag.interrupt();
            tracing::warn!(
                unit = unit.name(),
                ?budget,
                "invocation exceeded its budget; worker interrupted"
            );
            Outcome::failed(
                spec,
                OutcomeError::new(
                    FailureKind::Timeout,
                    format!("did not complete within {budget:?}"),
                ),
                budget,
            )
        }
    }
}
