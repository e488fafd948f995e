//! Table built-ins: `table`, `get`, `set!`, `keys`, `values`.

use crate::env::Environment;
use crate::error::{EvalError, ARITY_ONE, ARITY_THREE, ARITY_TWO};
use crate::value::{value_to_key, Value};
use std::collections::HashMap;
use std::rc::Rc;

pub fn builtin_table(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() % 2 != 0 {
        return Err(EvalError::arity(
            "table",
            "an even number of",
            args.len(),
        ));
    }
    let mut map = HashMap::new();
    for pair in args.chunks(2) {
        let key = value_to_key(&pair[0]).ok_or_else(|| {
            EvalError::type_error("table", "Bool/Double/Int/Str/Sym key", pair[0].type_name())
        })?;
        map.insert(key, pair[1].clone());
    }
    Ok(Value::table(map))
}

pub fn builtin_get(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity("get", ARITY_TWO, args.len()));
    }
    let map = match &args[0] {
        Value::Table(map) => map,
        other => return Err(EvalError::type_error("get", "Table", other.type_name())),
    };
    let key = value_to_key(&args[1])
        .ok_or_else(|| EvalError::type_error("get", "hashable key", args[1].type_name()))?;
    Ok(map.borrow().get(&key).cloned().unwrap_or(Value::Null))
}

pub fn builtin_set_bang(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 3 {
        return Err(EvalError::arity("set!", ARITY_THREE, args.len()));
    }
    let map = match &args[0] {
        Value::Table(map) => map,
        other => return Err(EvalError::type_error("set!", "Table", other.type_name())),
    };
    let key = value_to_key(&args[1])
        .ok_or_else(|| EvalError::type_error("set!", "hashable key", args[1].type_name()))?;
    map.borrow_mut().insert(key, args[2].clone());
    Ok(args[2].clone())
}

pub fn builtin_keys(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("keys", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::Table(map) => Ok(Value::list(
            map.borrow()
                .keys()
                .map(crate::value::key_to_value)
                .collect(),
        )),
        other => Err(EvalError::type_error("keys", "Table", other.type_name())),
    }
}

pub fn builtin_values(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("values", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::Table(map) => Ok(Value::list(map.borrow().values().cloned().collect())),
        other => Err(EvalError::type_error("values", "Table", other.type_name())),
    }
}

pub fn register(env: &Rc<Environment>) {
    use super::define_builtin;
    define_builtin(env, "table", builtin_table);
    define_builtin(env, "get", builtin_get);
    define_builtin(env, "set!", builtin_set_bang);
    define_builtin(env, "keys", builtin_keys);
    define_builtin(env, "values", builtin_values);
}
