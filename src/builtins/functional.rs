//! Higher-order built-ins: `apply`, `map`, `filter`. Each calls back into the evaluator.

use crate::env::Environment;
use crate::error::{EvalError, ARITY_TWO};
use crate::eval::call;
use crate::value::Value;
use std::rc::Rc;

fn require_fun<'a>(function: &str, v: &'a Value) -> Result<&'a crate::value::Fun, EvalError> {
    match v {
        Value::Fun(f) => Ok(f),
        other => Err(EvalError::type_error(function, "Fun", other.type_name())),
    }
}

fn require_list(function: &str, v: &Value) -> Result<Vec<Value>, EvalError> {
    match v {
        Value::List(items) => Ok(items.borrow().clone()),
        other => Err(EvalError::type_error(function, "List", other.type_name())),
    }
}

pub fn builtin_apply(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity("apply", ARITY_TWO, args.len()));
    }
    let fun = require_fun("apply", &args[0])?;
    let list = require_list("apply", &args[1])?;
    call(fun, &list)
}

pub fn builtin_map(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity("map", ARITY_TWO, args.len()));
    }
    let fun = require_fun("map", &args[0])?;
    let list = require_list("map", &args[1])?;
    let mapped = list
        .iter()
        .map(|x| call(fun, std::slice::from_ref(x)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::list(mapped))
}

pub fn builtin_filter(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity("filter", ARITY_TWO, args.len()));
    }
    let fun = require_fun("filter", &args[0])?;
    let list = require_list("filter", &args[1])?;
    let mut kept = Vec::new();
    for x in list {
        if call(fun, std::slice::from_ref(&x))?.is_truthy() {
            kept.push(x);
        }
    }
    Ok(Value::list(kept))
}

pub fn register(env: &Rc<Environment>) {
    use super::define_builtin;
    define_builtin(env, "apply", builtin_apply);
    define_builtin(env, "map", builtin_map);
    define_builtin(env, "filter", builtin_filter);
}
