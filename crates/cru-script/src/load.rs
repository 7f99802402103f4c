//! Compiling submissions and extracting their metadata.
//!
//! A submission is one Rhai source: a script body that may declare
//! `const AUTHOR = "...";` plus top-level functions. [`load_source`] compiles
//! it, runs the body once to surface the author constant (and any load-time
//! errors), and records metadata for every discoverable function.

use std::collections::BTreeMap;
use std::path::Path;

use rhai::{Dynamic, FnAccess, Scope, AST};
use sha2::{Digest, Sha256};

use crate::error::ScriptError;
use crate::interrupt::{build_engine, InterruptFlag};

/// The identifier a submission must bind to its author name.
pub const AUTHOR_IDENT: &str = "AUTHOR";

/// Prefix Rhai gives compiled closures; never a candidate unit.
const ANON_PREFIX: &str = "anon$";

/// Name and arity of one top-level script function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionInfo {
    pub name: String,
    pub arity: usize,
}

/// A compiled submission: AST, declared author, and function metadata.
///
/// The AST is immutable after loading and is shared (via `Arc` upstream)
/// between the callable units discovered from it. Each `LoadedScript` is
/// tagged with a path-derived source id, so no two submissions ever alias
/// one namespace.
#[derive(Debug)]
pub struct LoadedScript {
    ast: AST,
    source_id: String,
    author: Option<String>,
    functions: Vec<FunctionInfo>,
}

impl LoadedScript {
    pub(crate) const fn ast(&self) -> &AST {
        &self.ast
    }

    /// The author the submission declared, if any.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Discoverable top-level functions, in name order.
    #[must_use]
    pub fn functions(&self) -> &[FunctionInfo] {
        &self.functions
    }
}

/// Stable, collision-free identity for a submission path.
#[must_use]
pub fn source_id(path: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.to_string_lossy().as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Compile `source` and evaluate its body once.
///
/// The body evaluation is what surfaces the `AUTHOR` constant and any
/// load-time runtime error; it runs under the same engine limits as calls,
/// so `flag` can interrupt a script that stalls while loading.
///
/// # Errors
///
/// [`ScriptError::Compile`] for syntax errors, [`ScriptError::Eval`] when
/// the body raises, [`ScriptError::Interrupted`] when `flag` was flipped.
pub fn load_source(
    source: &str,
    source_id: &str,
    flag: &InterruptFlag,
) -> Result<LoadedScript, ScriptError> {
    let engine = build_engine(flag);
    let mut ast = engine
        .compile(source)
        .map_err(|e| ScriptError::Compile(e.to_string()))?;
    ast.set_source(source_id);

    let mut scope = Scope::new();
    engine
        .eval_ast_with_scope::<Dynamic>(&mut scope, &ast)
        .map_err(|e| ScriptError::from_eval(&e))?;

    // A non-string AUTHOR binding reads as absent.
    let author = scope.get_value::<String>(AUTHOR_IDENT);

    let mut functions: BTreeMap<String, FunctionInfo> = BTreeMap::new();
    for meta in ast.iter_functions() {
        if meta.access != FnAccess::Public || !is_candidate_name(meta.name) {
            continue;
        }
        functions
            .entry(meta.name.to_owned())
            .or_insert_with(|| FunctionInfo {
                name: meta.name.to_owned(),
                arity: meta.params.len(),
            });
    }

    Ok(LoadedScript {
        ast,
        source_id: source_id.to_owned(),
        author,
        functions: functions.into_values().collect(),
    })
}

/// Reserved dunder-style identifiers are metadata, never candidate units;
/// compiler-generated closure names are not callable by users.
fn is_candidate_name(name: &str) -> bool {
    let reserved = name.starts_with("__") && name.ends_with("__");
    !reserved && !name.starts_with(ANON_PREFIX)
}
