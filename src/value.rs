// ABOUTME: The runtime Value model: a tagged sum of atoms, functions, and shared mutable
// aggregates (List, Table), plus equality, truthiness, hashing of table keys, and rendering.

use crate::env::Environment;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A user lambda's captured state: its parameter names, its body, and the environment in
/// force at the `lambda` expression's evaluation site.
#[derive(Debug)]
pub struct LambdaData {
    pub params: Vec<Rc<str>>,
    pub body: Value,
    pub env: Rc<Environment>,
}

/// A callable value: either a closure over user code, or a native function pointer.
#[derive(Clone)]
pub enum Fun {
    Lambda(Rc<LambdaData>),
    BuiltIn {
        name: &'static str,
        func: fn(&[Value]) -> Result<Value, crate::error::EvalError>,
    },
}

impl Fun {
    pub fn name(&self) -> &str {
        match self {
            Fun::Lambda(_) => "lambda",
            Fun::BuiltIn { name, .. } => name,
        }
    }
}

impl fmt::Debug for Fun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.name())
    }
}

impl PartialEq for Fun {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Fun::Lambda(a), Fun::Lambda(b)) => Rc::ptr_eq(a, b),
            (Fun::BuiltIn { name: a, .. }, Fun::BuiltIn { name: b, .. }) => a == b,
            _ => false,
        }
    }
}

/// A table key: the restricted subset of atomic Values permitted as keys (invariant 1).
/// Hashed directly rather than through `Value` so compound values cannot reach a table
/// as a key even accidentally.
#[derive(Debug, Clone)]
pub enum TableKey {
    Bool(bool),
    Double(f64),
    Int(i64),
    Str(Rc<str>),
    Sym(Rc<str>),
}

impl PartialEq for TableKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TableKey::Bool(a), TableKey::Bool(b)) => a == b,
            (TableKey::Double(a), TableKey::Double(b)) => a.to_bits() == b.to_bits(),
            (TableKey::Int(a), TableKey::Int(b)) => a == b,
            (TableKey::Str(a), TableKey::Str(b)) => a == b,
            (TableKey::Sym(a), TableKey::Sym(b)) => a == b,
            _ => false,
        }
    }
}
impl Eq for TableKey {}

impl std::hash::Hash for TableKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            TableKey::Bool(b) => {
                0u8.hash(state);
                b.hash(state);
            }
            // Hashed via its bit pattern, not normalized against Int: a Double key and an
            // Int key holding the same mathematical value are not guaranteed to collide.
            TableKey::Double(d) => {
                1u8.hash(state);
                d.to_bits().hash(state);
            }
            TableKey::Int(i) => {
                2u8.hash(state);
                i.hash(state);
            }
            TableKey::Str(s) => {
                3u8.hash(state);
                s.hash(state);
            }
            TableKey::Sym(s) => {
                4u8.hash(state);
                s.hash(state);
            }
        }
    }
}

/// Converts a raw Value into a table key, or signals that it's not a legal key
/// (invariant 1: only Bool/Double/Int/Str/Sym may key a Table).
pub fn value_to_key(v: &Value) -> Option<TableKey> {
    match v {
        Value::Bool(b) => Some(TableKey::Bool(*b)),
        Value::Double(d) => Some(TableKey::Double(*d)),
        Value::Int(i) => Some(TableKey::Int(*i)),
        Value::Str(s) => Some(TableKey::Str(s.clone())),
        Value::Sym(s) => Some(TableKey::Sym(s.clone())),
        _ => None,
    }
}

pub fn key_to_value(k: &TableKey) -> Value {
    match k {
        TableKey::Bool(b) => Value::Bool(*b),
        TableKey::Double(d) => Value::Double(*d),
        TableKey::Int(i) => Value::Int(*i),
        TableKey::Str(s) => Value::Str(s.clone()),
        TableKey::Sym(s) => Value::Sym(s.clone()),
    }
}

#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Double(f64),
    Int(i64),
    Str(Rc<str>),
    Sym(Rc<str>),
    Fun(Fun),
    List(Rc<RefCell<Vec<Value>>>),
    Table(Rc<RefCell<HashMap<TableKey, Value>>>),
}

impl Value {
    pub fn str(s: impl Into<Rc<str>>) -> Value {
        Value::Str(s.into())
    }

    pub fn sym(s: impl Into<Rc<str>>) -> Value {
        Value::Sym(s.into())
    }

    pub fn list(items: Vec<Value>) -> Value {
        Value::List(Rc::new(RefCell::new(items)))
    }

    pub fn table(pairs: HashMap<TableKey, Value>) -> Value {
        Value::Table(Rc::new(RefCell::new(pairs)))
    }

    /// A human-readable variant name, used only in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Double(_) => "Double",
            Value::Int(_) => "Int",
            Value::Str(_) => "Str",
            Value::Sym(_) => "Sym",
            Value::Fun(_) => "Fun",
            Value::List(_) => "List",
            Value::Table(_) => "Table",
        }
    }

    /// The numeric payload of an Int or Double, for cross-type arithmetic/comparison.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Double(d) => *d != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Sym(s) => !s.is_empty(),
            Value::List(l) => !l.borrow().is_empty(),
            Value::Table(t) => !t.borrow().is_empty(),
            Value::Fun(_) => true,
        }
    }

    /// True for the heads `quote` and the reader's `'` sugar expansion, used by the renderer
    /// to print `(quote x)` back out as `'x`.
    fn is_quote_sugar(&self) -> bool {
        matches!(self, Value::Sym(s) if s.as_ref() == "quote")
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Null, _) | (_, Value::Null) => false,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Sym(a), Value::Sym(b)) => a == b,
            (Value::Fun(a), Value::Fun(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            (Value::Table(a), Value::Table(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(true) => write!(f, "true"),
            Value::Bool(false) => write!(f, "false"),
            Value::Double(d) => write!(f, "{}", d),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Sym(s) => write!(f, "{}", s),
            Value::Fun(fun) => write!(f, "<function {}>", fun.name()),
            Value::List(items) => {
                let items = items.borrow();
                if items.is_empty() {
                    return write!(f, "()");
                }
                if items.len() >= 2 && items[0].is_quote_sugar() {
                    return write!(f, "'{}", items[1]);
                }
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
            Value::Table(map) => {
                let map = map.borrow();
                if map.is_empty() {
                    return write!(f, "#()");
                }
                write!(f, "#(")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{} {}", key_to_value(k), v)?;
                }
                write!(f, ")")
            }
        }
    }
}
