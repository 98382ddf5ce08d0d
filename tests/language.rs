use tally::{
    error::{EvalError, Halt, Interrupt, SessionError},
    get_transcript,
    interpreter::{
        evaluator::core::Context, lexer::BinaryOperator, session::Session, tokenizer::Tokenizer,
    },
};

fn evaluate(src: &str) -> Result<f64, Interrupt> {
    let mut out = Vec::new();
    let mut tokens = Tokenizer::new(src.as_bytes(), &mut out);
    Context::new().evaluate_line(&mut tokens)
}

/// Evaluates every line of `src` in one context and returns the context.
fn evaluate_lines(src: &str) -> (Context, Vec<f64>) {
    let mut out = Vec::new();
    let mut tokens = Tokenizer::new(src.as_bytes(), &mut out);
    let mut context = Context::new();
    let mut values = Vec::new();

    for _ in src.lines() {
        match context.evaluate_line(&mut tokens) {
            Ok(v) => values.push(v),
            Err(e) => panic!("Script {src:?} failed: {e:?}"),
        }
    }
    (context, values)
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(v) => assert_eq!(v, expected, "line {src:?}"),
        Err(e) => panic!("Line {src:?} failed: {e:?}"),
    }
}

fn assert_failure(src: &str, expected: EvalError) {
    match evaluate(src) {
        Err(Interrupt::Failed(e)) => assert_eq!(e, expected, "line {src:?}"),
        other => panic!("Line {src:?} should fail with {expected:?}, got {other:?}"),
    }
}

#[test]
fn binary_operators_apply_to_the_two_topmost_values() {
    assert_value("3 4 +", 7.0);
    assert_value("10 3 -", 7.0);
    assert_value("6 7 *", 42.0);
    assert_value("7 2 /", 3.5);
    assert_value("3 4 5 + +", 12.0);
    assert_value("8 2 1 - /", 8.0);
}

#[test]
fn unary_minus_negates_the_top_value() {
    assert_value("3 ~", -3.0);
    assert_value("3 ~ ~", 3.0);
    assert_value("2 3 ~ *", -6.0);
    assert!(evaluate("0 ~").unwrap().is_sign_negative());
}

#[test]
fn decimal_literals() {
    assert_value("2.5", 2.5);
    assert_value("1.", 1.0);
    assert_value("0.1 0.2 +", 0.1 + 0.2);
}

#[test]
fn operand_after_operator_is_rejected() {
    assert_failure("3 4 + 2 *", EvalError::OperandAfterOperator { column: 7 });
    assert_failure("1 ~ x", EvalError::OperandAfterOperator { column: 5 });
}

#[test]
fn operators_without_enough_operands() {
    assert_failure("~", EvalError::MissingOperand { column: 1 });
    assert_failure("3 +", EvalError::InsufficientOperands { column: 3 });
    assert_failure("*", EvalError::InsufficientOperands { column: 1 });
}

#[test]
fn division_by_zero() {
    assert_failure("6 0 /", EvalError::DivisionByZero { column: 5 });
    assert_failure("6 0 ~ /", EvalError::DivisionByZero { column: 7 });
}

#[test]
fn assignment_errors() {
    assert_failure("= 3", EvalError::NoValueToAssign { column: 1 });
    assert_failure("3 = +", EvalError::ExpectedVariableAfterAssign { column: 5 });
    assert_failure("3 =", EvalError::ExpectedVariableAfterAssign { column: 4 });
}

#[test]
fn bad_tokens_report_the_character() {
    assert_failure("3 & 4", EvalError::BadToken { token: '&', column: 3 });
    assert_failure("1 λ", EvalError::BadToken { token: 'λ', column: 3 });
    assert_failure(".5", EvalError::BadToken { token: '.', column: 1 });
}

#[test]
fn line_must_leave_exactly_one_value() {
    assert_failure("3 4", EvalError::MalformedExpression { column: 4 });
    assert_failure("\n", EvalError::MalformedExpression { column: 1 });
    assert_failure("   ", EvalError::MalformedExpression { column: 4 });
}

#[test]
fn unknown_variables_default_to_zero() {
    let (context, values) = evaluate_lines("x\n");
    assert_eq!(values, [0.0]);
    assert_eq!(context.get("x"), Some(0.0));
    assert_eq!(context.get("it"), Some(0.0));
    assert_eq!(context.symbols().len(), 2);
}

#[test]
fn it_holds_the_last_result() {
    let (context, values) = evaluate_lines("2 3 *\nit\nit 1 +\n");
    assert_eq!(values, [6.0, 6.0, 7.0]);
    assert_eq!(context.get("it"), Some(7.0));
}

#[test]
fn assigned_variables_persist_across_lines() {
    let (context, values) = evaluate_lines("x = 5\nx\nx 2 *\n");
    assert_eq!(values, [5.0, 5.0, 10.0]);
    assert_eq!(context.get("x"), Some(5.0));
}

// `=` takes its value from the text of the following token, and that text
// also becomes the line's target. The result of `x = 5` therefore lands in a
// variable literally named `5`, and `it` is left untouched.
#[test]
fn assignment_targets_the_following_token_text() {
    let (context, _) = evaluate_lines("x = 5\n");
    assert_eq!(context.get("5"), Some(5.0));
    assert_eq!(context.get("it"), None);

    // Without any identifier on the line, the value is stored under "".
    let (context, _) = evaluate_lines("1 = 2\n");
    assert_eq!(context.get(""), Some(2.0));
}

#[test]
fn assigning_an_identifier_is_fatal() {
    match evaluate("x = y") {
        Err(Interrupt::Fatal(SessionError::InvalidNumber { text, column })) => {
            assert_eq!(text, "y");
            assert_eq!(column, 5);
        },
        other => panic!("Expected an invalid number, got {other:?}"),
    }
}

#[test]
fn malformed_numbers_are_fatal() {
    assert!(matches!(evaluate("1.2.3"),
                     Err(Interrupt::Fatal(SessionError::InvalidNumber { column: 1, .. }))));
    assert!(matches!(get_transcript("1..\n"), Err(SessionError::InvalidNumber { .. })));
}

#[test]
fn failed_lines_keep_lazily_created_variables() {
    let mut out = Vec::new();
    let mut tokens = Tokenizer::new("y 0 /\n".as_bytes(), &mut out);
    let mut context = Context::new();

    assert!(matches!(context.evaluate_line(&mut tokens),
                     Err(Interrupt::Failed(EvalError::DivisionByZero { .. }))));
    assert_eq!(context.get("y"), Some(0.0));
    assert_eq!(context.get("it"), None);
}

#[test]
fn exit_ends_the_session() {
    assert!(matches!(evaluate("exit"), Err(Interrupt::Halt(Halt::Exit))));
    assert!(matches!(evaluate("3 4 exit"), Err(Interrupt::Halt(Halt::Exit))));
    assert_failure("3 ~ exit", EvalError::OperandAfterOperator { column: 5 });

    assert_eq!(get_transcript("exit\n3 4 +\n").unwrap(), ">> Bye\n");
}

#[test]
fn end_of_input_ends_the_session() {
    assert!(matches!(evaluate(""), Err(Interrupt::Halt(Halt::EndOfInput))));
    assert_eq!(get_transcript("").unwrap(), ">> \nBye\n");
}

#[test]
fn failures_discard_the_rest_of_the_line() {
    assert_eq!(get_transcript("3 & 4 +\n5\n").unwrap(),
               ">> Bad token: &\n3 & 4 +\n  ^\nno value\n>> 5.0\n>> \nBye\n");
}

#[test]
fn values_use_the_debug_float_rendering() {
    assert_eq!(get_transcript("0 ~\n1 4 /\n").unwrap(),
               ">> -0.0\n>> 0.25\n>> \nBye\n");
}

#[test]
fn session_steps_one_line_at_a_time() {
    let mut out = Vec::new();
    let mut session = Session::new(Tokenizer::new("x = 4\nexit\n".as_bytes(), &mut out));

    assert_eq!(session.step().unwrap(), None);
    assert_eq!(session.context().get("x"), Some(4.0));
    assert_eq!(session.step().unwrap(), Some(Halt::Exit));
    drop(session);
    assert_eq!(String::from_utf8(out).unwrap(), ">> 4.0\n>> Bye\n");
}

#[test]
fn eval_binary_applies_each_operator() {
    assert_eq!(Context::eval_binary(BinaryOperator::Add, 1.0, 2.0, 1), Ok(3.0));
    assert_eq!(Context::eval_binary(BinaryOperator::Subtract, 1.0, 2.0, 1), Ok(-1.0));
    assert_eq!(Context::eval_binary(BinaryOperator::Multiply, 3.0, 2.0, 1), Ok(6.0));
    assert_eq!(Context::eval_binary(BinaryOperator::Divide, 3.0, 2.0, 1), Ok(1.5));
    assert_eq!(Context::eval_binary(BinaryOperator::Divide, 3.0, -0.0, 9),
               Err(EvalError::DivisionByZero { column: 9 }));
}

#[test]
fn invalid_utf8_is_a_bad_token() {
    let mut out = Vec::new();
    let mut tokens = Tokenizer::new(&b"3 \xff 4\n5\n"[..], &mut out);
    let mut context = Context::new();

    match context.evaluate_line(&mut tokens) {
        Err(Interrupt::Failed(e)) => {
            assert_eq!(e, EvalError::BadToken { token: char::REPLACEMENT_CHARACTER,
                                                column: 3 });
        },
        other => panic!("Expected a bad token, got {other:?}"),
    }
    tokens.flush();
    assert_eq!(context.evaluate_line(&mut tokens).unwrap(), 5.0);
}

#[test]
fn invalid_utf8_does_not_end_the_session() {
    let mut out = Vec::new();
    let halt = Session::new(Tokenizer::new(&b"3 \xff 4\n5\n"[..], &mut out)).run()
                                                                         .unwrap();

    assert_eq!(halt, Halt::EndOfInput);
    assert_eq!(String::from_utf8(out).unwrap(),
               ">> Bad token: \u{fffd}\n3 \u{fffd} 4\n  ^\nno value\n>> 5.0\n>> \nBye\n");
}
