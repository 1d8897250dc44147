use lambd::{
    ast::BinaryOperator,
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::core::{
            DEFAULT_MAX_CALL_DEPTH, DEFAULT_MAX_NESTING_DEPTH, Interpreter, InterpreterConfig,
        },
        value::{core::Value, environment::Binding},
    },
    run,
};

fn runtime_error(src: &str, interpreter: &mut Interpreter) -> RuntimeError {
    match run(src, interpreter) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expected a runtime error from {src:?}, got {other:?}"),
    }
}

#[test]
fn default_config() {
    let interpreter = Interpreter::new();

    assert_eq!(interpreter.config().max_call_depth, DEFAULT_MAX_CALL_DEPTH);
    assert_eq!(interpreter.config().max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
    assert!(interpreter.environment().is_empty());
}

#[test]
fn definitions_are_registered_not_evaluated() {
    let mut interpreter = Interpreter::new();

    // The body refers to a name that does not exist yet.
    run("Defun { later, () } missing + 1", &mut interpreter).unwrap();

    let env = interpreter.environment();
    assert_eq!(env.len(), 1);
    assert!(matches!(env.get("later"), Some(Binding::Function(def)) if def.params.is_empty()));
    assert_eq!(env.to_string(), "{later: (Defun { later, () } (missing + 1))}");
}

#[test]
fn parameters_do_not_leak_out_of_calls() {
    let mut interpreter = Interpreter::new();

    run("Defun { id, (x) } x", &mut interpreter).unwrap();
    assert_eq!(run("id(3)", &mut interpreter).unwrap(), Some(Value::Integer(3)));
    assert_eq!(run("Lambd y.(y)(4)", &mut interpreter).unwrap(), Some(Value::Integer(4)));

    assert_eq!(interpreter.environment().len(), 1);
    assert!(matches!(runtime_error("x", &mut interpreter),
                     RuntimeError::UnknownVariable { ref name, line: 1 } if name == "x"));
    assert!(matches!(runtime_error("y", &mut interpreter),
                     RuntimeError::UnknownVariable { .. }));
}

#[test]
fn environment_is_restored_after_errors() {
    let mut interpreter = Interpreter::new();
    run("Defun { bad, (n) } n + undefined", &mut interpreter).unwrap();
    let before = interpreter.environment().clone();

    assert!(matches!(runtime_error("bad(1)", &mut interpreter),
                     RuntimeError::UnknownVariable { ref name, .. } if name == "undefined"));
    assert!(matches!(runtime_error("Lambd a.(a / 0)(1)", &mut interpreter),
                     RuntimeError::DivisionByZero { .. }));

    assert_eq!(interpreter.environment(), &before);
}

#[test]
fn callee_sees_the_callers_bindings() {
    let mut interpreter = Interpreter::new();

    run("Defun { scaled, (n) } n * factor", &mut interpreter).unwrap();
    run("Defun { with_factor, (factor) } scaled(5)", &mut interpreter).unwrap();

    assert_eq!(run("with_factor(3)", &mut interpreter).unwrap(), Some(Value::Integer(15)));
    assert!(matches!(runtime_error("scaled(5)", &mut interpreter),
                     RuntimeError::UnknownVariable { ref name, .. } if name == "factor"));
}

#[test]
fn parameters_shadow_functions() {
    let mut interpreter = Interpreter::new();

    run("Defun { f, () } 1", &mut interpreter).unwrap();
    run("Defun { g, (f) } f(2)", &mut interpreter).unwrap();

    assert!(matches!(runtime_error("g(5)", &mut interpreter),
                     RuntimeError::NotAFunction { ref name, .. } if name == "f"));
    assert_eq!(run("f()", &mut interpreter).unwrap(), Some(Value::Integer(1)));
}

#[test]
fn call_errors() {
    let mut interpreter = Interpreter::new();
    run("Defun { add, (x, y) } x + y", &mut interpreter).unwrap();

    assert_eq!(runtime_error("add(1)", &mut interpreter),
               RuntimeError::ArgumentCountMismatch { name:     "add".to_string(),
                                                     expected: 2,
                                                     found:    1,
                                                     line:     1, });
    assert_eq!(runtime_error("Lambd x.(x)(1, 2)", &mut interpreter),
               RuntimeError::ArgumentCountMismatch { name:     "Lambd".to_string(),
                                                     expected: 1,
                                                     found:    2,
                                                     line:     1, });
    assert_eq!(runtime_error("sub(1, 2)", &mut interpreter),
               RuntimeError::UnknownFunction { name: "sub".to_string(),
                                               line: 1, });
    assert_eq!(runtime_error("add + 1", &mut interpreter),
               RuntimeError::FunctionUsedAsValue { name: "add".to_string(),
                                                   line: 1, });
}

#[test]
fn runtime_errors_report_their_line() {
    let mut interpreter = Interpreter::new();

    let err = runtime_error("Defun { f, (x) } x\n\n1 + f(True, 2)", &mut interpreter);
    assert!(matches!(err, RuntimeError::ArgumentCountMismatch { line: 3, .. }));
    assert_eq!(err.to_string(),
               "Error on line 3: 'f' expects 1 argument(s), but 2 were given.");
}

#[test]
fn recursion_limit_is_enforced() {
    let mut interpreter = Interpreter::with_config(InterpreterConfig { max_call_depth: 8,
                                                                       ..InterpreterConfig::default() });
    run("Defun { down, (n) } if (n == 0) { 0 } else { down(n - 1) }", &mut interpreter).unwrap();

    assert_eq!(run("down(7)", &mut interpreter).unwrap(), Some(Value::Integer(0)));
    assert!(matches!(runtime_error("down(8)", &mut interpreter),
                     RuntimeError::RecursionLimitExceeded { limit: 8, .. }));

    // Depth is released after the failure.
    assert_eq!(run("down(7)", &mut interpreter).unwrap(), Some(Value::Integer(0)));
    assert_eq!(interpreter.environment().len(), 1);
}

#[test]
fn lambdas_count_towards_depth() {
    let mut interpreter = Interpreter::with_config(InterpreterConfig { max_call_depth: 2,
                                                                       ..InterpreterConfig::default() });

    assert_eq!(run("Lambd a.(Lambd b.(a + b)(2))(1)", &mut interpreter).unwrap(),
               Some(Value::Integer(3)));
    assert!(matches!(runtime_error("Lambd a.(Lambd b.(Lambd c.(c)(3))(2))(1)", &mut interpreter),
                     RuntimeError::RecursionLimitExceeded { limit: 2, .. }));
}

#[test]
fn arithmetic_errors() {
    let mut interpreter = Interpreter::new();

    assert!(matches!(runtime_error("9223372036854775807 * 2", &mut interpreter),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("(-9223372036854775807 - 1) / -1", &mut interpreter),
                     RuntimeError::Overflow { .. }));
    assert_eq!(run("(-9223372036854775807 - 1) % -1", &mut interpreter).unwrap(),
               Some(Value::Integer(0)));
    assert!(matches!(runtime_error("5 % 0", &mut interpreter),
                     RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("!(1 == 1) * 3", &mut interpreter),
                     RuntimeError::TypeError { .. }));
}

#[test]
fn expression_nesting_is_limited_across_calls() {
    let config = InterpreterConfig { max_nesting_depth: 40,
                                     ..InterpreterConfig::default() };
    let mut interpreter = Interpreter::with_config(config);
    run("Defun { down, (n) } if (n == 0) { 0 } else { down(n - 1) }", &mut interpreter).unwrap();

    assert_eq!(run("down(5)", &mut interpreter).unwrap(), Some(Value::Integer(0)));
    assert!(matches!(runtime_error("down(100)", &mut interpreter),
                     RuntimeError::NestingLimitExceeded { limit: 40, .. }));

    // The counters unwind after the failure.
    assert_eq!(run("down(5)", &mut interpreter).unwrap(), Some(Value::Integer(0)));
    assert_eq!(interpreter.environment().len(), 1);
}

#[test]
fn logical_operators_need_unevaluated_operands() {
    for op in [BinaryOperator::And, BinaryOperator::Or] {
        let result = Interpreter::eval_binary(op, &Value::Bool(true), &Value::Integer(1), 4);
        assert!(matches!(result, Err(RuntimeError::TypeError { line: 4, .. })), "{op}: {result:?}");
    }
}
