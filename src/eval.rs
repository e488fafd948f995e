// ABOUTME: The tree-walking evaluator: special forms, application, and the tail-call
// trampoline that keeps self-tail-recursive user code in constant host-stack depth.

use crate::env::Environment;
use crate::error::{EvalError, ARITY_ONE, ARITY_THREE, ARITY_TWO};
use crate::value::{Fun, LambdaData, Value};
use std::rc::Rc;

/// Evaluates `expr` in `env`, looping in place for every tail-positional continuation
/// (`if` branches, the last form of `begin`, and a user lambda's body under application)
/// instead of recursing, so those positions cost no additional host-stack depth.
pub fn eval(mut expr: Value, mut env: Rc<Environment>) -> Result<Value, EvalError> {
    loop {
        match expr {
            Value::Null
            | Value::Bool(_)
            | Value::Double(_)
            | Value::Int(_)
            | Value::Str(_)
            | Value::Table(_) => return Ok(expr),

            Value::Sym(ref name) => {
                return env
                    .get(name)
                    .ok_or_else(|| EvalError::undefined(name.to_string()));
            }

            Value::Fun(_) => return Ok(expr),

            Value::List(ref items) => {
                let items = items.borrow().clone();
                if items.is_empty() {
                    return Ok(Value::list(items));
                }

                if let Value::Sym(ref head) = items[0] {
                    match head.as_ref() {
                        "quote" => {
                            check_arity("quote", ARITY_ONE, items.len() - 1, 1)?;
                            return Ok(items[1].clone());
                        }
                        "if" => {
                            check_arity("if", ARITY_THREE, items.len() - 1, 3)?;
                            let cond = eval(items[1].clone(), env.clone())?;
                            expr = if cond.is_truthy() {
                                items[2].clone()
                            } else {
                                items[3].clone()
                            };
                            continue;
                        }
                        "define" => {
                            check_arity("define", ARITY_TWO, items.len() - 1, 2)?;
                            let name = match &items[1] {
                                Value::Sym(s) => s.clone(),
                                other => {
                                    return Err(EvalError::type_error(
                                        "define",
                                        "Sym",
                                        other.type_name(),
                                    ))
                                }
                            };
                            let value = eval(items[2].clone(), env.clone())?;
                            env.define(name.to_string(), value.clone());
                            return Ok(value);
                        }
                        "lambda" => {
                            check_arity("lambda", ARITY_TWO, items.len() - 1, 2)?;
                            let params = match &items[1] {
                                Value::List(p) => p
                                    .borrow()
                                    .iter()
                                    .map(|v| match v {
                                        Value::Sym(s) => Ok(s.clone()),
                                        other => Err(EvalError::type_error(
                                            "lambda",
                                            "Sym parameter",
                                            other.type_name(),
                                        )),
                                    })
                                    .collect::<Result<Vec<_>, _>>()?,
                                other => {
                                    return Err(EvalError::type_error(
                                        "lambda",
                                        "List",
                                        other.type_name(),
                                    ))
                                }
                            };
                            return Ok(Value::Fun(Fun::Lambda(Rc::new(LambdaData {
                                params,
                                body: items[2].clone(),
                                env: env.clone(),
                            }))));
                        }
                        "begin" => {
                            if items.len() < 2 {
                                return Err(EvalError::arity("begin", ARITY_ONE, items.len() - 1));
                            }
                            for form in &items[1..items.len() - 1] {
                                eval(form.clone(), env.clone())?;
                            }
                            expr = items[items.len() - 1].clone();
                            continue;
                        }
                        _ => {}
                    }
                }

                // Ordinary application: evaluate the head, require a Fun, evaluate args
                // left to right, then dispatch.
                let head = eval(items[0].clone(), env.clone())?;
                let fun = match head {
                    Value::Fun(f) => f,
                    other => {
                        return Err(EvalError::type_error("apply", "Fun", other.type_name()))
                    }
                };
                let args = items[1..]
                    .iter()
                    .map(|a| eval(a.clone(), env.clone()))
                    .collect::<Result<Vec<_>, _>>()?;

                match fun {
                    Fun::BuiltIn { func, .. } => return func(&args),
                    Fun::Lambda(data) => {
                        if data.params.len() != args.len() {
                            return Err(EvalError::arity(
                                "lambda",
                                data.params.len().to_string(),
                                args.len(),
                            ));
                        }
                        let call_env = Environment::with_parent(data.env.clone());
                        for (param, arg) in data.params.iter().zip(args.into_iter()) {
                            call_env.define(param.to_string(), arg);
                        }
                        expr = data.body.clone();
                        env = call_env;
                        continue;
                    }
                }
            }
        }
    }
}

fn check_arity(
    name: &str,
    expected_label: &str,
    actual: usize,
    expected: usize,
) -> Result<(), EvalError> {
    if actual != expected {
        return Err(EvalError::arity(name, expected_label, actual));
    }
    Ok(())
}

/// Calls `fun` with an already-evaluated argument list; used by higher-order built-ins
/// (`apply`, `map`, `filter`) that need to call back into the evaluator.
pub fn call(fun: &Fun, args: &[Value]) -> Result<Value, EvalError> {
    match fun {
        Fun::BuiltIn { func, .. } => func(args),
        Fun::Lambda(data) => {
            if data.params.len() != args.len() {
                return Err(EvalError::arity(
                    "lambda",
                    data.params.len().to_string(),
                    args.len(),
                ));
            }
            let call_env = Environment::with_parent(data.env.clone());
            for (param, arg) in data.params.iter().zip(args.iter()) {
                call_env.define(param.to_string(), arg.clone());
            }
            eval(data.body.clone(), call_env)
        }
    }
}
