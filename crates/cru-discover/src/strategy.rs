//! Discovery strategies.
//!
//! A [`DiscoveryStrategy`] turns one artifact path into an author identity
//! and a set of callable units. The trait is dyn-compatible so the runner
//! can drive a list of heterogeneous policies; [`FunctionDiscovery`] is the
//! baseline policy accepting every discoverable top-level function.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cru_script::LoadedScript;

use crate::loader::{self, DEFAULT_LOAD_TIMEOUT};

/// One named, invocable unit discovered inside a loaded artifact.
///
/// Units keep their compiled script alive via `Arc`; units from different
/// artifacts never share an AST, so discoveries cannot alias each other.
#[derive(Debug, Clone)]
pub struct CallableUnit {
    name: String,
    arity: usize,
    script: Arc<LoadedScript>,
}

impl CallableUnit {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// The compiled script this unit belongs to.
    #[must_use]
    pub const fn script(&self) -> &Arc<LoadedScript> {
        &self.script
    }
}

/// Policy for extracting (author, units) from one artifact.
#[async_trait]
pub trait DiscoveryStrategy: Send + Sync {
    /// Short policy name for diagnostics.
    fn name(&self) -> &'static str;

    /// Discover the author and callable units of `artifact`.
    ///
    /// Returns `(None, vec![])` when the artifact cannot be used under this
    /// policy (load failure, no author); that is an artifact-local condition,
    /// never a run-level error.
    async fn discover(&self, artifact: &Path) -> (Option<String>, Vec<CallableUnit>);
}

/// Baseline strategy: every discoverable top-level function is a unit.
#[derive(Debug, Clone)]
pub struct FunctionDiscovery {
    load_budget: Duration,
}

impl FunctionDiscovery {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            load_budget: DEFAULT_LOAD_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_budget(load_budget: Duration) -> Self {
        Self { load_budget }
    }
}

impl Default for FunctionDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DiscoveryStrategy for FunctionDiscovery {
    fn name(&self) -> &'static str {
        "functions"
    }

    async fn discover(&self, artifact: &Path) -> (Option<String>, Vec<CallableUnit>) {
        let script = match loader::load(artifact, self.load_budget).await {
            Ok(script) => script,
            Err(error) => {
                tracing::warn!(%error, strategy = self.name(), "skipping artifact");
                return (None, Vec::new());
            }
        };

        let author = script.author().map(ToOwned::to_owned);
        let units = script
            .functions()
            .iter()
            .map(|info| CallableUnit {
                name: info.name.clone(),
                arity: info.arity,
                script: Arc::clone(&script),
            })
            .collect();
        (author, units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn write_artifact(dir: &tempfile::TempDir, name: &str, source: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, source).expect("artifact should write");
        path
    }

    #[tokio::test]
    async fn discovers_author_and_all_functions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_artifact(
            &dir,
            "alice.rhai",
            r#"
                const AUTHOR = "alice";
                fn sum3(a, b, c) { a + b + c }
                fn shout(s) { s.to_upper() }
                fn __meta__() { 0 }
            "#,
        );

        let (author, units) = FunctionDiscovery::new().discover(&path).await;
        assert_eq!(author.as_deref(), Some("alice"));
        let names: Vec<&str> = units.iter().map(CallableUnit::name).collect();
        assert_eq!(names, vec!["shout", "sum3"]);
        assert!(units.iter().all(|u| u.script().author() == Some("alice")));
    }

    #[tokio::test]
    async fn authorless_artifact_yields_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_artifact(&dir, "anon.rhai", "fn f() { 1 }");

        let (author, units) = FunctionDiscovery::new().discover(&path).await;
        assert_eq!(author, None);
        assert!(units.is_empty());
    }

    #[tokio::test]
    async fn broken_artifact_yields_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_artifact(&dir, "broken.rhai", "fn broken( {");

        let (author, units) = FunctionDiscovery::new().discover(&path).await;
        assert_eq!(author, None);
        assert!(units.is_empty());
    }
}
