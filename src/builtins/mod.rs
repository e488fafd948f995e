//! # Built-in Functions Module
//!
//! The prelude: the curated built-in registry from which a fresh evaluation environment
//! is populated. Organized into one sub-module per category, each with its own
//! `register` function, aggregated here by [`register_builtins`].
//!
//! ## Categories
//!
//! - [arithmetic]: `+ - * / < > min max`
//! - [logic]: `= and or not`
//! - [lists]: `list length append cons car cdr`
//! - [structures]: `table get set! keys values`
//! - [coercion]: `bool double int string cat`
//! - [functional]: `apply map filter`
//! - [io]: `print getenv rand`

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{Fun, Value};
use std::rc::Rc;

pub mod arithmetic;
pub mod coercion;
pub mod functional;
pub mod io;
pub mod lists;
pub mod logic;
pub mod structures;

pub use arithmetic::register as register_arithmetic;
pub use coercion::register as register_coercion;
pub use functional::register as register_functional;
pub use io::register as register_io;
pub use lists::register as register_lists;
pub use logic::register as register_logic;
pub use structures::register as register_structures;

/// Binds a native function pointer under `name` in `env`.
fn define_builtin(
    env: &Rc<Environment>,
    name: &'static str,
    func: fn(&[Value]) -> Result<Value, EvalError>,
) {
    env.define(name.to_string(), Value::Fun(Fun::BuiltIn { name, func }));
}

/// Register all built-in functions in the environment — the prelude of §4.5.
pub fn register_builtins(env: &Rc<Environment>) {
    register_arithmetic(env);
    register_logic(env);
    register_lists(env);
    register_structures(env);
    register_coercion(env);
    register_functional(env);
    register_io(env);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::eval;
    use crate::reader::parse;

    #[test]
    fn prelude_has_no_outer_and_binds_every_category() {
        let env = Environment::new();
        register_builtins(&env);
        for name in [
            "+", "-", "*", "/", "<", ">", "min", "max", "=", "and", "or", "not", "list", "length",
            "append", "cons", "car", "cdr", "table", "get", "set!", "keys", "values", "bool",
            "double", "int", "string", "cat", "apply", "map", "filter", "print", "getenv", "rand",
        ] {
            assert!(env.get(name).is_some(), "missing builtin: {name}");
        }
    }

    #[test]
    fn scenario_apply_over_a_conditional_lambda() {
        let env = Environment::new();
        register_builtins(&env);
        let src =
            "(begin (define f (lambda (x) (if (= x 2) (+ x 10) x))) (apply f '(2)))";
        assert_eq!(eval(parse(src).unwrap(), env).unwrap(), Value::Int(12));
    }
}
