//! Arithmetic built-ins: `+`, `-`, `*`, `/`, `<`, `>`, `min`, `max`.
//!
//! `+`, `-`, `*`, `/` require at least two arguments and fold numerically; `+`/`*` fold
//! from their identity (0/1), `-`/`/` fold from the first argument. A result that is
//! mathematically integral is returned as `Int`, otherwise `Double`.

use crate::env::Environment;
use crate::error::{EvalError, ARITY_AT_LEAST_TWO, ARITY_TWO};
use crate::value::Value;
use std::rc::Rc;

fn numeric(function: &str, v: &Value) -> Result<f64, EvalError> {
    v.as_f64()
        .ok_or_else(|| EvalError::type_error(function, "Int or Double", v.type_name()))
}

fn result_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.is_finite() {
        Value::Int(n as i64)
    } else {
        Value::Double(n)
    }
}

pub fn builtin_add(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() < 2 {
        return Err(EvalError::arity("+", ARITY_AT_LEAST_TWO, args.len()));
    }
    let mut sum = 0.0;
    for arg in args {
        sum += numeric("+", arg)?;
    }
    Ok(result_value(sum))
}

pub fn builtin_sub(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() < 2 {
        return Err(EvalError::arity("-", ARITY_AT_LEAST_TWO, args.len()));
    }
    let mut result = numeric("-", &args[0])?;
    for arg in &args[1..] {
        result -= numeric("-", arg)?;
    }
    Ok(result_value(result))
}

pub fn builtin_mul(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() < 2 {
        return Err(EvalError::arity("*", ARITY_AT_LEAST_TWO, args.len()));
    }
    let mut product = 1.0;
    for arg in args {
        product *= numeric("*", arg)?;
    }
    Ok(result_value(product))
}

pub fn builtin_div(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() < 2 {
        return Err(EvalError::arity("/", ARITY_AT_LEAST_TWO, args.len()));
    }
    let mut result = numeric("/", &args[0])?;
    for arg in &args[1..] {
        let n = numeric("/", arg)?;
        if n == 0.0 {
            return Err(EvalError::argument("/", "division by zero"));
        }
        result /= n;
    }
    Ok(result_value(result))
}

pub fn builtin_lt(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity("<", ARITY_TWO, args.len()));
    }
    Ok(Value::Bool(numeric("<", &args[0])? < numeric("<", &args[1])?))
}

pub fn builtin_gt(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity(">", ARITY_TWO, args.len()));
    }
    Ok(Value::Bool(numeric(">", &args[0])? > numeric(">", &args[1])?))
}

fn numeric_list(function: &str, args: &[Value]) -> Result<Vec<f64>, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity(function, "1", args.len()));
    }
    let items = match &args[0] {
        Value::List(items) => items.borrow().clone(),
        other => return Err(EvalError::type_error(function, "List", other.type_name())),
    };
    if items.is_empty() {
        return Err(EvalError::argument(function, "list must not be empty"));
    }
    items.iter().map(|v| numeric(function, v)).collect()
}

pub fn builtin_min(args: &[Value]) -> Result<Value, EvalError> {
    let nums = numeric_list("min", args)?;
    Ok(result_value(nums.into_iter().fold(f64::INFINITY, f64::min)))
}

pub fn builtin_max(args: &[Value]) -> Result<Value, EvalError> {
    let nums = numeric_list("max", args)?;
    Ok(result_value(
        nums.into_iter().fold(f64::NEG_INFINITY, f64::max),
    ))
}

pub fn register(env: &Rc<Environment>) {
    use super::define_builtin;
    define_builtin(env, "+", builtin_add);
    define_builtin(env, "-", builtin_sub);
    define_builtin(env, "*", builtin_mul);
    define_builtin(env, "/", builtin_div);
    define_builtin(env, "<", builtin_lt);
    define_builtin(env, ">", builtin_gt);
    define_builtin(env, "min", builtin_min);
    define_builtin(env, "max", builtin_max);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_folds_and_returns_int_when_integral() {
        assert_eq!(
            builtin_add(&[Value::Int(1), Value::Int(2), Value::Int(3)]).unwrap(),
            Value::Int(6)
        );
    }

    #[test]
    fn add_promotes_to_double_when_fractional() {
        assert_eq!(
            builtin_add(&[Value::Int(1), Value::Double(0.5)]).unwrap(),
            Value::Double(1.5)
        );
    }

    #[test]
    fn sub_folds_from_first_arg() {
        assert_eq!(
            builtin_sub(&[Value::Int(10), Value::Int(3), Value::Int(2)]).unwrap(),
            Value::Int(5)
        );
    }

    #[test]
    fn single_argument_arithmetic_is_arity_error() {
        assert!(builtin_add(&[Value::Int(1)]).is_err());
        assert!(builtin_sub(&[Value::Int(1)]).is_err());
    }

    #[test]
    fn div_by_zero_is_fatal() {
        assert!(builtin_div(&[Value::Int(1), Value::Int(0)]).is_err());
    }

    #[test]
    fn div_non_numeric_operand_is_fatal() {
        assert!(builtin_div(&[Value::Int(1), Value::str("a")]).is_err());
    }

    #[test]
    fn lt_and_gt_cross_numeric_types() {
        assert_eq!(
            builtin_lt(&[Value::Int(1), Value::Double(1.5)]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            builtin_gt(&[Value::Double(2.0), Value::Int(1)]).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn min_and_max_over_a_list() {
        let list = Value::list(vec![Value::Int(3), Value::Int(1), Value::Int(2)]);
        assert_eq!(builtin_min(&[list.clone()]).unwrap(), Value::Int(1));
        assert_eq!(builtin_max(&[list]).unwrap(), Value::Int(3));
    }
}
