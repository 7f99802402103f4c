//! # cru-runner
//!
//! The controlling side of Crucible: one sequential controller drives
//! discovery, invokes matched units inside bounded blocking workers, and
//! aggregates outcomes into the result table.
//!
//! - [`invoke::invoke`] — one callable unit × one spec, within a budget
//! - [`runner::Runner`] — discovery merging plus the author × spec sweep
//! - [`report::render_json`] — plain-data JSON rendering of a result table

pub mod error;
pub mod invoke;
pub mod report;
pub mod runner;

pub use error::{ReportError, RunnerError};
pub use invoke::{invoke, DEFAULT_INVOKE_TIMEOUT};
pub use report::render_json;
pub use runner::Runner;
