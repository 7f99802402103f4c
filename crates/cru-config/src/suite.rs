//! Suite files: declarative test specifications.
//!
//! A suite is a TOML document listing the cases to evaluate against every
//! discovered author:
//!
//! ```toml
//! [[case]]
//! function = "sum3"
//! args = [1, 2, 3]
//! expected = 6
//!
//! [[case]]
//! function = "scale"
//! args = [[1, 2, 3]]
//! kwargs = { factor = 10 }
//! expected = [10, 20, 30]
//! ```
//!
//! Suite files carry expected-value cases only; predicate-mode specs hold
//! closures, which do not deserialize, and are assembled through the
//! [`cru_core::TestSpec`] API instead.

use std::collections::BTreeMap;
use std::path::Path;

use cru_core::TestSpec;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigError;

/// One declarative case: target, arguments, and the expected value.
#[derive(Debug, Clone, Deserialize)]
pub struct SuiteCase {
    /// Name of the unit to invoke.
    pub function: String,
    /// Positional arguments, in call order.
    #[serde(default)]
    pub args: Vec<Value>,
    /// Keyword arguments.
    #[serde(default)]
    pub kwargs: BTreeMap<String, Value>,
    /// Value the invocation must return to pass.
    pub expected: Value,
}

impl SuiteCase {
    #[must_use]
    pub fn into_spec(self) -> TestSpec {
        TestSpec::expecting(self.function, self.args, self.kwargs, self.expected)
    }
}

/// A parsed suite file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuiteFile {
    #[serde(default, rename = "case")]
    pub cases: Vec<SuiteCase>,
}

impl SuiteFile {
    /// Read and parse a suite file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read, [`ConfigError::Parse`]
    /// when it is not a valid suite document.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Compile every case into a [`TestSpec`].
    #[must_use]
    pub fn into_specs(self) -> Vec<TestSpec> {
        self.cases.into_iter().map(SuiteCase::into_spec).collect()
    }
}
