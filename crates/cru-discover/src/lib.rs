//! # cru-discover
//!
//! Finds submissions on disk and turns them into callable units:
//! - [`walk::collect_artifacts`] — recursive walk for `.rhai` submissions
//! - [`loader::load`] — one bounded, failure-isolated load per artifact
//! - [`strategy::DiscoveryStrategy`] — pluggable policy for extracting an
//!   author and callable units from an artifact; [`strategy::FunctionDiscovery`]
//!   is the baseline all-top-level-functions policy
//!
//! Load failures are local to their artifact: the walk/discovery pipeline
//! never aborts a whole run because one submission is broken.

pub mod error;
pub mod loader;
pub mod strategy;
pub mod walk;

pub use error::LoadError;
pub use loader::{load, DEFAULT_LOAD_TIMEOUT};
pub use strategy::{CallableUnit, DiscoveryStrategy, FunctionDiscovery};
pub use walk::{collect_artifacts, ARTIFACT_EXTENSION};
