// ABOUTME: Recursive-descent reader: turns a token queue from the lexer into a Value tree.

use crate::error::EvalError;
use crate::lexer::tokenize;
use crate::value::{value_to_key, Value};
use std::collections::{HashMap, VecDeque};

/// Parses `source` as a single top-level form. Errors if tokens remain afterward.
pub fn parse(source: &str) -> Result<Value, EvalError> {
    let tokens = tokenize(source)?;
    let mut queue: VecDeque<String> = tokens.into_iter().collect();
    let value = read(&mut queue)?;
    if !queue.is_empty() {
        return Err(EvalError::read(format!(
            "unexpected tokens after form: {:?}",
            queue
        )));
    }
    Ok(value)
}

/// Reads one Value off the front of `tokens`, consuming whatever it needs.
fn read(tokens: &mut VecDeque<String>) -> Result<Value, EvalError> {
    let Some(token) = tokens.pop_front() else {
        return Ok(Value::Null);
    };

    match token.as_str() {
        "'" => {
            if tokens.is_empty() {
                return Err(EvalError::read("dangling quote: expected a form after '"));
            }
            let inner = read(tokens)?;
            Ok(Value::list(vec![Value::sym("quote"), inner]))
        }
        "#(" => {
            tokens.push_front("(".to_string());
            let list = read_list(tokens)?;
            let items = match list {
                Value::List(items) => items.borrow().clone(),
                _ => unreachable!("read_list always returns a List"),
            };
            if items.len() % 2 != 0 {
                return Err(EvalError::read(format!(
                    "table literal requires an even number of elements, got {}",
                    items.len()
                )));
            }
            let mut map = HashMap::new();
            for pair in items.chunks(2) {
                let key = value_to_key(&pair[0]).ok_or_else(|| {
                    EvalError::read(format!(
                        "table literal key must be Bool/Double/Int/Str/Sym, got {}",
                        pair[0].type_name()
                    ))
                })?;
                map.insert(key, pair[1].clone());
            }
            Ok(Value::table(map))
        }
        "(" => {
            tokens.push_front("(".to_string());
            read_list(tokens)
        }
        ")" => Err(EvalError::read("unexpected ')'")),
        atom => Ok(read_atom(atom)),
    }
}

fn read_list(tokens: &mut VecDeque<String>) -> Result<Value, EvalError> {
    // Consume the opening '('.
    tokens.pop_front();
    let mut items = Vec::new();
    loop {
        match tokens.front() {
            None => return Err(EvalError::read("unterminated list")),
            Some(t) if t == ")" => {
                tokens.pop_front();
                return Ok(Value::list(items));
            }
            _ => items.push(read(tokens)?),
        }
    }
}

fn read_atom(token: &str) -> Value {
    match token {
        "null" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if token.contains('.') {
        if let Ok(d) = token.parse::<f64>() {
            return Value::Double(d);
        }
    } else if let Ok(i) = token.parse::<i64>() {
        return Value::Int(i);
    }

    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        return Value::str(&token[1..token.len() - 1]);
    }

    Value::sym(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_empty_input_as_null() {
        assert_eq!(parse("").unwrap(), Value::Null);
    }

    #[test]
    fn reads_atoms() {
        assert_eq!(parse("null").unwrap(), Value::Null);
        assert_eq!(parse("true").unwrap(), Value::Bool(true));
        assert_eq!(parse("false").unwrap(), Value::Bool(false));
        assert_eq!(parse("42").unwrap(), Value::Int(42));
        assert_eq!(parse("3.5").unwrap(), Value::Double(3.5));
        assert_eq!(parse("\"hi\"").unwrap(), Value::str("hi"));
        assert_eq!(parse("foo").unwrap(), Value::sym("foo"));
    }

    #[test]
    fn reads_nested_list() {
        let v = parse("(+ 1 (- 2 3))").unwrap();
        assert_eq!(v.to_string(), "(+ 1 (- 2 3))");
    }

    #[test]
    fn reads_quote_sugar() {
        let v = parse("'(1 2)").unwrap();
        assert_eq!(v.to_string(), "'(1 2)");
    }

    #[test]
    fn reads_table_literal_with_atomic_keys() {
        let v = parse("#(1 \"a\" 2 \"b\")").unwrap();
        match v {
            Value::Table(t) => assert_eq!(t.borrow().len(), 2),
            _ => panic!("expected table"),
        }
    }

    #[test]
    fn rejects_compound_table_key() {
        assert!(parse("#((+ 1 1) 2)").is_err());
    }

    #[test]
    fn rejects_odd_table_literal() {
        assert!(parse("#(1)").is_err());
    }

    #[test]
    fn rejects_unterminated_list() {
        assert!(parse("(1 2").is_err());
    }

    #[test]
    fn rejects_trailing_tokens() {
        assert!(parse("1 2").is_err());
    }

    #[test]
    fn rejects_dangling_quote() {
        assert!(parse("'").is_err());
    }
}
