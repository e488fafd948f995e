//! I/O built-ins: `print`, `getenv`, `rand`.

use crate::env::Environment;
use crate::error::{EvalError, ARITY_ONE, ARITY_TWO};
use crate::value::Value;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn builtin_print(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("print", ARITY_ONE, args.len()));
    }
    match &args[0] {
        Value::Str(s) => println!("{}", s),
        other => println!("{}", other),
    }
    Ok(Value::Null)
}

pub fn builtin_getenv(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 1 {
        return Err(EvalError::arity("getenv", ARITY_ONE, args.len()));
    }
    let name = match &args[0] {
        Value::Str(s) => s,
        other => return Err(EvalError::type_error("getenv", "Str", other.type_name())),
    };
    Ok(Value::str(std::env::var(name.as_ref()).unwrap_or_default()))
}

thread_local! {
    static RNG_STATE: Cell<u64> = Cell::new(seed());
}

fn seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    nanos ^ 0x9E3779B97F4A7C15
}

/// A small xorshift64* generator; this interpreter has no dependency on a dedicated
/// random-number crate, so the prelude's `rand` is seeded from the clock and advanced
/// in-process rather than pulling in an external source of randomness for one builtin.
fn next_u64() -> u64 {
    RNG_STATE.with(|state| {
        let mut x = state.get();
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        state.set(x);
        x.wrapping_mul(0x2545F4914F6CDD1D)
    })
}

pub fn builtin_rand(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() != 2 {
        return Err(EvalError::arity("rand", ARITY_TWO, args.len()));
    }
    let lo = match &args[0] {
        Value::Int(i) => *i,
        other => return Err(EvalError::type_error("rand", "Int", other.type_name())),
    };
    let hi = match &args[1] {
        Value::Int(i) => *i,
        other => return Err(EvalError::type_error("rand", "Int", other.type_name())),
    };
    if lo > hi {
        return Err(EvalError::argument(
            "rand",
            format!("lower bound {} exceeds upper bound {}", lo, hi),
        ));
    }
    let span = (hi - lo) as u64 + 1;
    Ok(Value::Int(lo + (next_u64() % span) as i64))
}

pub fn register(env: &Rc<Environment>) {
    use super::define_builtin;
    define_builtin(env, "print", builtin_print);
    define_builtin(env, "getenv", builtin_getenv);
    define_builtin(env, "rand", builtin_rand);
}
