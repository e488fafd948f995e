// ABOUTME: Configuration and constants for the Lisp interpreter
// This module centralizes version info and REPL banner text.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const WELCOME_MESSAGE: &str = "Lisp Interpreter";
pub const WELCOME_SUBTITLE: &str = "A small Scheme-flavored Lisp in Rust";
