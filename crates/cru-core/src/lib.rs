//! # cru-core
//!
//! Core types shared across all Crucible crates:
//! - Test specifications with their judging-mode invariant
//! - Invocation outcomes and their failure descriptions
//! - The per-author result table with its record policy
//!
//! Nothing in this crate touches the script engine or the filesystem; it is
//! the plain-data vocabulary the rest of the workspace speaks.

pub mod error;
pub mod outcome;
pub mod spec;
pub mod table;

pub use error::SpecError;
pub use outcome::{FailureKind, Outcome, OutcomeError};
pub use spec::{Predicate, TestSpec};
pub use table::{RecordPolicy, ResultTable};
