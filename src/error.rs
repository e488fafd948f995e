// ABOUTME: Error types for lexing, reading, and evaluation failures in the Lisp interpreter

use thiserror::Error;

// ===== Arity constant strings (eliminates allocations in error paths) =====
pub const ARITY_ONE: &str = "1";
pub const ARITY_TWO: &str = "2";
pub const ARITY_THREE: &str = "3";
pub const ARITY_AT_LEAST_ONE: &str = "at least 1";
pub const ARITY_AT_LEAST_TWO: &str = "at least 2";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Malformed token stream: unterminated string, malformed `#(`.
    #[error("lex error: {0}")]
    LexError(String),

    /// Malformed token tree: unterminated list, stray quote, bad table literal, trailing tokens.
    #[error("read error: {0}")]
    ReadError(String),

    /// Reference to a name with no binding in any enclosing frame.
    #[error("undefined identifier: {0}")]
    UndefinedIdentifier(String),

    /// Wrong-variant access: non-list to car/cdr, non-numeric to arithmetic, non-hashable key, etc.
    #[error("{function}: expected {expected}, got {actual}")]
    TypeError {
        function: String,
        expected: String,
        actual: String,
    },

    /// Wrong argument count to a special form or built-in.
    #[error("{function}: expected {expected} argument(s), got {actual}")]
    ArityError {
        function: String,
        expected: String,
        actual: usize,
    },

    /// A value out of domain: car of empty list, unparseable string in int/double, etc.
    #[error("{function}: {message}")]
    ArgumentError { function: String, message: String },
}

impl EvalError {
    pub fn lex(message: impl Into<String>) -> Self {
        EvalError::LexError(message.into())
    }

    pub fn read(message: impl Into<String>) -> Self {
        EvalError::ReadError(message.into())
    }

    pub fn undefined(name: impl Into<String>) -> Self {
        EvalError::UndefinedIdentifier(name.into())
    }

    pub fn type_error(function: &str, expected: &str, actual: impl Into<String>) -> Self {
        EvalError::TypeError {
            function: function.to_string(),
            expected: expected.to_string(),
            actual: actual.into(),
        }
    }

    pub fn arity(function: &str, expected: impl Into<String>, actual: usize) -> Self {
        EvalError::ArityError {
            function: function.to_string(),
            expected: expected.into(),
            actual,
        }
    }

    pub fn argument(function: &str, message: impl Into<String>) -> Self {
        EvalError::ArgumentError {
            function: function.to_string(),
            message: message.into(),
        }
    }
}
