//! # cru-script
//!
//! Everything that touches the Rhai interpreter, in one crate:
//! - compiling a submission source into a [`LoadedScript`] (AST + declared
//!   author + top-level function metadata)
//! - calling one script function with JSON arguments and getting a JSON
//!   value back
//! - the [`InterruptFlag`] wired into every engine's progress hook, so a
//!   controller that stops waiting can also stop the script
//!
//! This crate isolates the `rhai` dependency from the rest of the workspace,
//! so compile time impact is limited to this crate only. Callers upstream
//! (loader, invoker) speak paths, strings, and `serde_json::Value`.

mod call;
mod error;
mod interrupt;
mod load;

pub use call::call_function;
pub use error::ScriptError;
pub use interrupt::InterruptFlag;
pub use load::{load_source, source_id, FunctionInfo, LoadedScript, AUTHOR_IDENT};
