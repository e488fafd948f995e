//! List built-ins: `list`, `length`, `append`, `cons`, `car`, `cdr`.
//!
//! `length` also accepts a `Table`. `cons` here returns a 2-element pair `[a, b]`,
//! not a classical head/tail cons cell.

use crate::env::Environment;
use crate::error::{EvalError, ARITY_ONE, ARITY_TWO};
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_list(args: &[Value]) -> Result<Value, EvalError> {
    Ok(Value::list(args.to_vec()))
}

pub fn builtin_length(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("length", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::List(items) => Ok(Value::Int(items.borrow().len() as i64)),
        Value::Table(map) => Ok(Value::Int(map.borrow().len() as i64)),
        other => Err(EvalError::type_error(
            "length",
            "List or Table",
            other.type_name(),
        )),
    }
}

pub fn builtin_append(args: &[Value]) -> Result<Value, EvalError> {
    if args.is_empty() {
        return Err(EvalError::arity("append", "at least 1", 0));
    }
    let mut items = match &args[0] {
        Value::List(items) => items.borrow().clone(),
        other => {
            return Err(EvalError::type_error(
                "append",
                "List",
                other.type_name(),
            ))
        }
    };
    items.extend(args[1..].iter().cloned());
    Ok(Value::list(items))
}

pub fn builtin_cons(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity("cons", ARITY_TWO, args.len()));
    }
    Ok(Value::list(vec![args[0].clone(), args[1].clone()]))
}

pub fn builtin_car(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("car", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::List(items) => items
            .borrow()
            .first()
            .cloned()
            .ok_or_else(|| EvalError::argument("car", "car of empty list")),
        other => Err(EvalError::type_error("car", "List", other.type_name())),
    }
}

pub fn builtin_cdr(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("cdr", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::List(items) => {
            let items = items.borrow();
            if items.is_empty() {
                return Err(EvalError::argument("cdr", "cdr of empty list"));
            }
            Ok(Value::list(items[1..].to_vec()))
        }
        other => Err(EvalError::type_error("cdr", "List", other.type_name())),
    }
}

pub fn register(env: &Rc<Environment>) {
    use super::define_builtin;
    define_builtin(env, "list", builtin_list);
    define_builtin(env, "length", builtin_length);
    define_builtin(env, "append", builtin_append);
    define_builtin(env, "cons", builtin_cons);
    define_builtin(env, "car", builtin_car);
    define_builtin(env, "cdr", builtin_cdr);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_splats_args() {
        assert_eq!(
            builtin_list(&[Value::Int(1), Value::Int(2)]),
            Ok(Value::list(vec![Value::Int(1), Value::Int(2)]))
        );
    }

    #[test]
    fn length_of_list_and_table() {
        assert_eq!(
            builtin_length(&[Value::list(vec![Value::Int(1), Value::Int(2)])]).unwrap(),
            Value::Int(2)
        );
        assert_eq!(
            builtin_length(&[Value::table(Default::default())]).unwrap(),
            Value::Int(0)
        );
    }

    #[test]
    fn append_returns_new_list() {
        let base = Value::list(vec![Value::Int(1)]);
        let appended = builtin_append(&[base.clone(), Value::Int(2), Value::Int(3)]).unwrap();
        assert_eq!(
            appended,
            Value::list(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn cons_builds_a_pair_not_a_cell() {
        assert_eq!(
            builtin_cons(&[Value::Int(1), Value::Int(2)]).unwrap(),
            Value::list(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn car_and_cdr() {
        let list = Value::list(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert_eq!(builtin_car(&[list.clone()]).unwrap(), Value::Int(1));
        assert_eq!(
            builtin_cdr(&[list]).unwrap(),
            Value::list(vec![Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn car_of_empty_list_is_fatal() {
        assert!(builtin_car(&[Value::list(vec![])]).is_err());
    }
}
