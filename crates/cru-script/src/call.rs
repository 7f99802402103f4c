//! Calling one script function with JSON arguments.

use std::collections::BTreeMap;

use rhai::serde::{from_dynamic, to_dynamic};
use rhai::{CallFnOptions, Dynamic, Scope};
use serde_json::Value;

use crate::error::ScriptError;
use crate::interrupt::{build_engine, InterruptFlag};
use crate::load::LoadedScript;

/// Call `name` inside `script` with positional `args` and keyword `kwargs`.
///
/// Rhai functions take positional parameters only, so a non-empty kwargs
/// mapping is passed as one trailing object-map argument. The function body
/// cannot see the script's global scope (Rhai functions are pure), so no
/// per-call state leaks between invocations; a fresh engine observing `flag`
/// is built for every call.
///
/// The script body already ran once at load time; calls evaluate the target
/// function only, so load-time work and side effects are never repeated.
///
/// # Errors
///
/// [`ScriptError::Eval`] when the function raises (including arity and type
/// mismatches), [`ScriptError::Interrupted`] when `flag` was flipped,
/// [`ScriptError::Convert`] when a value cannot cross the JSON boundary.
pub fn call_function(
    script: &LoadedScript,
    name: &str,
    args: &[Value],
    kwargs: &BTreeMap<String, Value>,
    flag: &InterruptFlag,
) -> Result<Value, ScriptError> {
    let engine = build_engine(flag);

    let mut call_args: Vec<Dynamic> = Vec::with_capacity(args.len() + 1);
    for arg in args {
        call_args.push(to_dynamic(arg).map_err(|e| ScriptError::Convert(e.to_string()))?);
    }
    if !kwargs.is_empty() {
        let map = Value::Object(kwargs.clone().into_iter().collect());
        call_args.push(to_dynamic(&map).map_err(|e| ScriptError::Convert(e.to_string()))?);
    }

    let options = CallFnOptions::new().eval_ast(false);
    let result = engine
        .call_fn_with_options::<Dynamic>(options, &mut Scope::new(), script.ast(), name, call_args)
        .map_err(|e| ScriptError::from_eval(&e))?;

    from_dynamic::<Value>(&result).map_err(|e| ScriptError::Convert(e.to_string()))
}
