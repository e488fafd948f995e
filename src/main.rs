mod builtins;
mod config;
mod env;
mod error;
mod eval;
mod lexer;
mod reader;
mod value;

use builtins::register_builtins;
use clap::Parser;
use config::{VERSION, WELCOME_MESSAGE, WELCOME_SUBTITLE};
use env::Environment;
use eval::eval;
use reader::parse;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// A small Scheme-flavored Lisp interpreter
#[derive(Parser, Debug)]
#[command(name = "tinylisp")]
#[command(version = config::VERSION)]
#[command(about = "A small Scheme-flavored Lisp interpreter")]
struct CliArgs {
    /// Script file to execute (optional - if not provided, starts REPL)
    #[arg(value_name = "FILE", num_args = 0..)]
    script: Vec<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    match args.script.as_slice() {
        [] => run_repl(),
        [path] => run_script(path),
        many => {
            eprintln!("usage: tinylisp [FILE]");
            Err(format!("expected at most 1 argument, got {}", many.len()).into())
        }
    }
}

/// Execute a Lisp script file: parse and evaluate its single top-level form.
fn run_script(path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read script file {}: {}", path.display(), e))?;

    let env = Environment::new();
    register_builtins(&env);

    let value = parse(&source).and_then(|expr| eval(expr, env))?;
    println!("{}", value);
    Ok(())
}

/// Interactive read-eval-print loop: one form per line, printed via the standard renderer.
fn run_repl() -> Result<(), Box<dyn std::error::Error>> {
    let env = Environment::new();
    register_builtins(&env);

    let mut rl = DefaultEditor::new()?;

    println!("{}", WELCOME_MESSAGE);
    println!("{} (v{})", WELCOME_SUBTITLE, VERSION);

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                match parse(&line).and_then(|expr| eval(expr, env.clone())) {
                    Ok(value) => println!("{}", value),
                    Err(e) => eprintln!("error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("error: {}", err);
                break;
            }
        }
    }

    Ok(())
}
