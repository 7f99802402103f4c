//! Discovery merging and the author × spec sweep.
//!
//! The [`Runner`] owns the whole sequence: for every (strategy, artifact)
//! pair it merges discovered units into per-author sets, then for every
//! known author and spec it either invokes the matching unit or records a
//! synthetic not-found outcome. One controller context does all table
//! writes, so the table needs no locking.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use cru_core::{Outcome, RecordPolicy, ResultTable, TestSpec};
use cru_discover::{CallableUnit, DiscoveryStrategy};

use crate::error::RunnerError;
use crate::invoke::{invoke, DEFAULT_INVOKE_TIMEOUT};

type UnitMap = BTreeMap<String, CallableUnit>;
type AuthorUnits = BTreeMap<String, UnitMap>;

/// Orchestrates discovery and bounded invocation into a result table.
pub struct Runner {
    invoke_budget: Duration,
    policy: RecordPolicy,
    discovered: Option<AuthorUnits>,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            invoke_budget: DEFAULT_INVOKE_TIMEOUT,
            policy: RecordPolicy::default(),
            discovered: None,
        }
    }

    /// Override the per-invocation wall-clock budget.
    #[must_use]
    pub const fn invoke_budget(mut self, budget: Duration) -> Self {
        self.invoke_budget = budget;
        self
    }

    /// Choose how repeated (author, unit) cells are recorded.
    #[must_use]
    pub const fn record_policy(mut self, policy: RecordPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run every strategy over every artifact and merge the results.
    ///
    /// Units from artifacts declaring the same author merge into one set;
    /// a duplicate unit name for an author keeps the earlier unit. Pairs
    /// yielding no author or no units are skipped with a diagnostic — an
    /// unusable artifact never aborts the run. May be called again to
    /// extend the discovered set.
    pub async fn discover_all(
        &mut self,
        artifacts: &[PathBuf],
        strategies: &[Box<dyn DiscoveryStrategy>],
    ) {
        let discovered = self.discovered.get_or_insert_with(AuthorUnits::new);

        for strategy in strategies {
            for artifact in artifacts {
                let (author, units) = strategy.discover(artifact).await;
                let Some(author) = author else {
                    tracing::warn!(
                        artifact = %artifact.display(),
                        strategy = strategy.name(),
                        "no author discovered; skipping artifact"
                    );
                    continue;
                };
                if units.is_empty() {
                    tracing::warn!(
                        artifact = %artifact.display(),
                        strategy = strategy.name(),
                        author = author.as_str(),
                        "no units discovered; skipping artifact"
                    );
                    continue;
                }

                let set = discovered.entry(author.clone()).or_default();
                for unit in units {
                    if set.contains_key(unit.name()) {
                        tracing::warn!(
                            author = author.as_str(),
                            unit = unit.name(),
                            artifact = %artifact.display(),
                            "duplicate unit name; keeping the earlier one"
                        );
                        continue;
                    }
                    tracing::debug!(author = author.as_str(), unit = unit.name(), "unit discovered");
                    set.insert(unit.name().to_owned(), unit);
                }
            }
        }
    }

    /// The merged author → unit map, if discovery has run.
    #[must_use]
    pub const fn discovered(&self) -> Option<&AuthorUnits> {
        self.discovered.as_ref()
    }

    /// Evaluate every spec against every known author.
    ///
    /// Authors without a unit matching a spec's target get a synthetic
    /// not-found outcome, so the table always covers every attempted
    /// author × spec pair.
    ///
    /// # Errors
    ///
    /// [`RunnerError::NotDiscovered`] when called before [`Runner::discover_all`].
    pub async fn run_all(&self, specs: &[TestSpec]) -> Result<ResultTable, RunnerError> {
        let discovered = self.discovered.as_ref().ok_or(RunnerError::NotDiscovered)?;

        let mut table = ResultTable::new(self.policy);
        for (author, units) in discovered {
            tracing::debug!(author = author.as_str(), specs = specs.len(), "evaluating author");
            for spec in specs {
                let outcome = match units.get(spec.target()) {
                    Some(unit) => invoke(unit, spec, self.invoke_budget).await,
                    None => Outcome::not_found(spec, author),
                };
                table.record(author, spec.target(), outcome);
            }
        }
        Ok(table)
    }
}
