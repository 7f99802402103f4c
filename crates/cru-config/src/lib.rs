//! # cru-config
//!
//! Layered configuration loading for Crucible using figment, plus the TOML
//! suite-file format that assembles test specifications declaratively.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CRUCIBLE_*` prefix, `__` as separator)
//! 2. `crucible.toml` in the working directory
//! 3. Built-in defaults
//!
//! Figment maps `CRUCIBLE_TIMEOUTS__INVOKE_SECS` → `timeouts.invoke_secs`,
//! `CRUCIBLE_SUBMISSIONS_DIR` → `submissions_dir`, and so on.

mod error;
mod suite;

pub use error::ConfigError;
pub use suite::{SuiteCase, SuiteFile};

use std::path::PathBuf;
use std::time::Duration;

use cru_core::RecordPolicy;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Per-operation wall-clock budgets, in whole seconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimeoutConfig {
    /// Budget for loading one artifact.
    #[serde(default = "default_timeout_secs")]
    pub load_secs: u64,
    /// Budget for one invocation.
    #[serde(default = "default_timeout_secs")]
    pub invoke_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    15
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            load_secs: default_timeout_secs(),
            invoke_secs: default_timeout_secs(),
        }
    }
}

impl TimeoutConfig {
    #[must_use]
    pub const fn load_budget(&self) -> Duration {
        Duration::from_secs(self.load_secs)
    }

    #[must_use]
    pub const fn invoke_budget(&self) -> Duration {
        Duration::from_secs(self.invoke_secs)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrucibleConfig {
    /// Directory holding the submission artifacts.
    #[serde(default = "default_submissions_dir")]
    pub submissions_dir: PathBuf,

    #[serde(default)]
    pub timeouts: TimeoutConfig,

    /// How repeated (author, unit) cells are recorded.
    #[serde(default)]
    pub record_policy: RecordPolicy,
}

fn default_submissions_dir() -> PathBuf {
    PathBuf::from("submissions")
}

impl Default for CrucibleConfig {
    fn default() -> Self {
        Self {
            submissions_dir: default_submissions_dir(),
            timeouts: TimeoutConfig::default(),
            record_policy: RecordPolicy::default(),
        }
    }
}

impl CrucibleConfig {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Figment`] when a source fails to merge or extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or stack additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file("crucible.toml"))
            .merge(Env::prefixed("CRUCIBLE_").split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = CrucibleConfig::default();
        assert_eq!(config.submissions_dir, PathBuf::from("submissions"));
        assert_eq!(config.timeouts.load_budget(), Duration::from_secs(15));
        assert_eq!(config.timeouts.invoke_budget(), Duration::from_secs(15));
        assert_eq!(config.record_policy, RecordPolicy::Overwrite);
    }

    #[test]
    fn toml_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "crucible.toml",
                r#"
                    submissions_dir = "week3"

                    [timeouts]
                    invoke_secs = 2
                "#,
            )?;
            let config: CrucibleConfig = CrucibleConfig::figment().extract()?;
            assert_eq!(config.submissions_dir, PathBuf::from("week3"));
            assert_eq!(config.timeouts.invoke_secs, 2);
            // Untouched sections keep their defaults.
            assert_eq!(config.timeouts.load_secs, 15);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_toml() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("crucible.toml", r#"submissions_dir = "from-toml""#)?;
            jail.set_env("CRUCIBLE_SUBMISSIONS_DIR", "from-env");
            jail.set_env("CRUCIBLE_TIMEOUTS__LOAD_SECS", "3");
            let config: CrucibleConfig = CrucibleConfig::figment().extract()?;
            assert_eq!(config.submissions_dir, PathBuf::from("from-env"));
            assert_eq!(config.timeouts.load_secs, 3);
            Ok(())
        });
    }

    #[test]
    fn record_policy_parses_from_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("CRUCIBLE_RECORD_POLICY", "append");
            let config: CrucibleConfig = CrucibleConfig::figment().extract()?;
            assert_eq!(config.record_policy, RecordPolicy::Append);
            Ok(())
        });
    }
}
