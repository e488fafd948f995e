//! Coercion built-ins: `bool`, `double`, `int`, `string`, `cat`.

use crate::env::Environment;
use crate::error::{EvalError, ARITY_AT_LEAST_ONE, ARITY_ONE};
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_bool(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("bool", ARITY_ONE, args.len()));
    }
    Ok(Value::Bool(args[0].is_truthy()))
}

pub fn builtin_double(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("double", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::Int(i) => Ok(Value::Double(*i as f64)),
        Value::Double(d) => Ok(Value::Double(*d)),
        Value::Str(s) => s
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|_| EvalError::argument("double", format!("cannot parse {:?} as Double", s))),
        other => Err(EvalError::type_error(
            "double",
            "Int, Double, or Str",
            other.type_name(),
        )),
    }
}

pub fn builtin_int(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("int", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::Int(i) => Ok(Value::Int(*i)),
        Value::Double(d) => Ok(Value::Int(*d as i64)),
        Value::Str(s) => s
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| EvalError::argument("int", format!("cannot parse {:?} as Int", s))),
        other => Err(EvalError::type_error(
            "int",
            "Int, Double, or Str",
            other.type_name(),
        )),
    }
}

pub fn builtin_string(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("string", ARITY_ONE, args.len()));
    }
    Ok(Value::str(args[0].to_string()))
}

pub fn builtin_cat(args: &[Value]) -> Result<Value, EvalError> {
    if args.is_empty() {
        return Err(EvalError::arity("cat", ARITY_AT_LEAST_ONE, 0));
    }
    let mut result = String::new();
    for arg in args {
        match arg {
            Value::Str(s) => result.push_str(s),
            other => return Err(EvalError::type_error("cat", "Str", other.type_name())),
        }
    }
    Ok(Value::str(result))
}

pub fn register(env: &Rc<Environment>) {
    use super::define_builtin;
    define_builtin(env, "bool", builtin_bool);
    define_builtin(env, "double", builtin_double);
    define_builtin(env, "int", builtin_int);
    define_builtin(env, "string", builtin_string);
    define_builtin(env, "cat", builtin_cat);
}
