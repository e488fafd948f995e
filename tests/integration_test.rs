// ABOUTME: Black-box integration tests exercising parse+eval end to end through the public API

use std::rc::Rc;
use tinylisp::builtins::register_builtins;
use tinylisp::env::Environment;
use tinylisp::error::EvalError;
use tinylisp::eval::eval;
use tinylisp::reader::parse;
use tinylisp::value::Value;

fn setup() -> Rc<Environment> {
    let env = Environment::new();
    register_builtins(&env);
    env
}

fn eval_code(code: &str, env: Rc<Environment>) -> Result<Value, EvalError> {
    eval(parse(code)?, env)
}

#[test]
fn factorial_via_self_recursion() {
    let env = setup();
    let code = "(begin \
                 (define fact (lambda (n) (if (= n 0) 1 (* n (fact (- n 1)))))) \
                 (fact 10))";
    assert_eq!(eval_code(code, env).unwrap(), Value::Int(3628800));
}

#[test]
fn fibonacci_scenario() {
    let env = setup();
    let code = "(begin \
                 (define fib (lambda (n) (if (< n 2) n (+ (fib (- n 1)) (fib (- n 2)))))) \
                 (fib 15))";
    assert_eq!(eval_code(code, env).unwrap(), Value::Int(610));
}

#[test]
fn apply_over_a_conditional_lambda() {
    let env = setup();
    let code = "(begin \
                 (define f (lambda (x) (if (= x 2) (+ x 10) x))) \
                 (apply f '(2)))";
    assert_eq!(eval_code(code, env).unwrap(), Value::Int(12));
}

#[test]
fn map_doubles_each_element() {
    let env = setup();
    let code = "(map (lambda (x) (* x 2)) '(1 2 3))";
    assert_eq!(
        eval_code(code, env).unwrap(),
        Value::list(vec![Value::Int(2), Value::Int(4), Value::Int(6)])
    );
}

#[test]
fn filter_keeps_matching_elements() {
    let env = setup();
    let code = "(filter (lambda (x) (= x 2)) '(1 2 3))";
    assert_eq!(
        eval_code(code, env).unwrap(),
        Value::list(vec![Value::Int(2)])
    );
}

#[test]
fn lexical_capture_sees_the_binding_at_closure_creation_time() {
    let env = setup();
    let code = "(begin \
                 (define mk (lambda () (begin (define a 1) (lambda () a)))) \
                 (define g (mk)) \
                 (define a 2) \
                 (g))";
    assert_eq!(eval_code(code, env).unwrap(), Value::Int(1));
}

#[test]
fn tail_recursive_sum_runs_ten_thousand_deep_without_overflow() {
    let env = setup();
    let code = "(begin \
                 (define sum (lambda (x a) (if (= x 0) a (sum (- x 1) (+ a 1))))) \
                 (sum 10000 0))";
    assert_eq!(eval_code(code, env).unwrap(), Value::Int(10000));
}

#[test]
fn tail_recursive_loop_runs_one_hundred_thousand_deep() {
    let env = setup();
    let code = "(begin \
                 (define loop (lambda (n a) (if (= n 0) a (loop (- n 1) (+ a 1))))) \
                 (loop 100000 0))";
    assert_eq!(eval_code(code, env).unwrap(), Value::Int(100000));
}

#[test]
fn closures_over_adders() {
    let env = setup();
    let code = "(begin \
                 (define make-adder (lambda (n) (lambda (x) (+ x n)))) \
                 (define add5 (make-adder 5)) \
                 (add5 10))";
    assert_eq!(eval_code(code, env).unwrap(), Value::Int(15));
}

#[test]
fn list_operations_cons_car_cdr_append() {
    let env = setup();
    assert_eq!(
        eval_code("(car (cons 1 2))", env.clone()).unwrap(),
        Value::Int(1)
    );
    assert_eq!(
        eval_code("(cdr '(1 2 3))", env.clone()).unwrap(),
        Value::list(vec![Value::Int(2), Value::Int(3)])
    );
    assert_eq!(
        eval_code("(append '(1 2) 3 4)", env).unwrap(),
        Value::list(vec![
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
            Value::Int(4)
        ])
    );
}

#[test]
fn quoting_returns_the_unevaluated_form() {
    let env = setup();
    let got = eval_code("'(1 2 3)", env).unwrap();
    assert_eq!(
        got,
        Value::list(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
    );
}

#[test]
fn arithmetic_left_folds_and_picks_int_or_double() {
    let env = setup();
    assert_eq!(eval_code("(+ 1 2 3)", env.clone()).unwrap(), Value::Int(6));
    assert_eq!(eval_code("(- 10 1 2)", env.clone()).unwrap(), Value::Int(7));
    assert_eq!(
        eval_code("(/ 1 2)", env.clone()).unwrap(),
        Value::Double(0.5)
    );
    assert_eq!(eval_code("(* 2 3.0)", env).unwrap(), Value::Double(6.0));
}

#[test]
fn numeric_cross_type_equality_and_ordering() {
    let env = setup();
    assert_eq!(
        eval_code("(= 2 2.0)", env.clone()).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(eval_code("(< 1 1.5)", env).unwrap(), Value::Bool(true));
}

#[test]
fn truthiness_boundary_scenarios() {
    let env = setup();
    assert_eq!(
        eval_code("(if 0 \"y\" \"n\")", env.clone()).unwrap(),
        Value::str("n")
    );
    assert_eq!(
        eval_code("(if \"\" \"y\" \"n\")", env.clone()).unwrap(),
        Value::str("n")
    );
    assert_eq!(
        eval_code("(if '() \"y\" \"n\")", env).unwrap(),
        Value::str("n")
    );
}

#[test]
fn reference_semantics_set_bang_is_visible_through_an_alias() {
    let env = setup();
    let code = "(begin \
                 (define t (table 1 2)) \
                 (define u t) \
                 (set! u 1 99) \
                 (get t 1))";
    assert_eq!(eval_code(code, env).unwrap(), Value::Int(99));
}

#[test]
fn begin_sequences_side_effects_and_yields_the_last_form() {
    let env = setup();
    let code = "(begin (define a 1) (define a (+ a 1)) (define a (+ a 1)) a)";
    assert_eq!(eval_code(code, env).unwrap(), Value::Int(3));
}

#[test]
fn multiple_definitions_in_the_same_frame_overwrite() {
    let env = setup();
    eval_code("(define x 1)", env.clone()).unwrap();
    eval_code("(define x 2)", env.clone()).unwrap();
    assert_eq!(eval_code("x", env).unwrap(), Value::Int(2));
}

#[test]
fn atom_round_trip_through_render_and_parse() {
    let env = setup();
    for atom in [
        Value::Null,
        Value::Bool(true),
        Value::Int(42),
        Value::Double(1.5),
        Value::str("hi"),
    ] {
        let rendered = atom.to_string();
        let round_tripped = eval_code(&rendered, env.clone()).unwrap();
        assert_eq!(round_tripped, atom);
    }
}

#[test]
fn error_car_of_empty_list() {
    let env = setup();
    assert!(matches!(
        eval_code("(car '())", env).unwrap_err(),
        EvalError::ArgumentError { .. }
    ));
}

#[test]
fn error_division_with_a_non_numeric_operand() {
    let env = setup();
    assert!(matches!(
        eval_code("(/ 1 \"a\")", env).unwrap_err(),
        EvalError::TypeError { .. }
    ));
}

#[test]
fn error_undefined_identifier() {
    let env = setup();
    assert!(matches!(
        eval_code("(foo)", env).unwrap_err(),
        EvalError::UndefinedIdentifier(_)
    ));
}

#[test]
fn error_compound_key_in_table_literal_is_a_parse_time_error() {
    let env = setup();
    assert!(matches!(
        eval_code("#((+ 1 1) 2)", env).unwrap_err(),
        EvalError::ReadError(_)
    ));
}

#[test]
fn error_unterminated_string_is_a_lex_error() {
    assert!(matches!(
        parse("\"unterminated").unwrap_err(),
        EvalError::LexError(_)
    ));
}

#[test]
fn error_dangling_quote_is_a_read_error() {
    assert!(matches!(parse("'").unwrap_err(), EvalError::ReadError(_)));
}

#[test]
fn error_odd_length_table_literal() {
    let env = setup();
    assert!(matches!(
        eval_code("#(1)", env).unwrap_err(),
        EvalError::ReadError(_)
    ));
}

#[test]
fn error_lambda_params_not_a_list() {
    let env = setup();
    assert!(matches!(
        eval_code("(lambda 1 1)", env).unwrap_err(),
        EvalError::TypeError { .. }
    ));
}
