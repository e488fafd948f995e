//! Logic built-ins: `=`, `and`, `or`, `not`.
//!
//! `and`/`or` receive an already-evaluated argument list (no special-form short-circuit
//! of side effects) and return `Bool`, not the last value.

use crate::env::Environment;
use crate::error::{EvalError, ARITY_AT_LEAST_TWO, ARITY_ONE, ARITY_TWO};
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_eq(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity("=", ARITY_TWO, args.len()));
    }
    Ok(Value::Bool(args[0] == args[1]))
}

pub fn builtin_and(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() < 2 {
        return Err(EvalError::arity("and", ARITY_AT_LEAST_TWO, args.len()));
    }
    Ok(Value::Bool(args.iter().all(Value::is_truthy)))
}

pub fn builtin_or(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() < 2 {
        return Err(EvalError::arity("or", ARITY_AT_LEAST_TWO, args.len()));
    }
    Ok(Value::Bool(args.iter().any(Value::is_truthy)))
}

pub fn builtin_not(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("not", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::Bool(b) => Ok(Value::Bool(!b)),
        other => Err(EvalError::type_error("not", "Bool", other.type_name())),
    }
}

pub fn register(env: &Rc<Environment>) {
    use super::define_builtin;
    define_builtin(env, "=", builtin_eq);
    define_builtin(env, "and", builtin_and);
    define_builtin(env, "or", builtin_or);
    define_builtin(env, "not", builtin_not);
}
