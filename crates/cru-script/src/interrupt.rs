//! Cooperative interruption for script execution.
//!
//! Every engine built by this crate checks an [`InterruptFlag`] from its
//! progress hook, which Rhai fires at operation granularity. When the
//! controller's wait budget expires it flips the flag instead of merely
//! abandoning the worker; the script then halts at its next operation. A
//! script blocked inside a single native call can still outlive its budget —
//! that residual gap is inherent to in-process isolation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rhai::{Dynamic, Engine};

/// Shared one-way flag asking a running script to stop.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the script to stop at its next operation boundary.
    pub fn interrupt(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_interrupted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Build an engine whose progress hook observes `flag`.
pub(crate) fn build_engine(flag: &InterruptFlag) -> Engine {
    let mut engine = Engine::new();
    let flag = flag.clone();
    engine.on_progress(move |_ops| flag.is_interrupted().then(|| Dynamic::UNIT));
    engine
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pre_set_flag_terminates_a_spinning_script() {
        let flag = InterruptFlag::new();
        flag.interrupt();
        let engine = build_engine(&flag);
        let result = engine.eval::<i64>("while true {}; 1");
        let err = result.expect_err("interrupted script must not complete");
        assert!(matches!(*err, rhai::EvalAltResult::ErrorTerminated(..)));
    }

    #[test]
    fn unset_flag_leaves_scripts_alone() {
        let flag = InterruptFlag::new();
        let engine = build_engine(&flag);
        let result = engine.eval::<i64>("40 + 2").expect("script should run");
        assert_eq!(result, 42);
    }
}
