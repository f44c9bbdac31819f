// Integration tests for the line-numbered interpreter

use lineterp::display::{RenderCall, ScreenBuffer, Transcript};
use lineterp::interpreter::engine::{ExecState, Halt, Interpreter};
use lineterp::interpreter::errors::RuntimeError;
use lineterp::parser::parse::{ParseError, Parser};

fn run_program(source: &str) -> (Interpreter, Transcript, Result<(), RuntimeError>) {
    let program = Parser::new(source)
        .parse_program()
        .expect("Parsing failed");
    let mut interpreter = Interpreter::new(program).with_step_limit(100_000);
    let mut transcript = Transcript::new();
    let result = interpreter.run(&mut transcript);
    (interpreter, transcript, result)
}

fn parse_error(source: &str) -> ParseError {
    Parser::new(source)
        .parse_program()
        .expect_err("Parsing should have failed")
}

#[test]
fn test_print_at_variable_position() {
    let source = "1 begin\n2 int x\n3 set x 5\n4 print x x hi\n5 end";

    let (interpreter, transcript, result) = run_program(source);

    assert!(result.is_ok(), "Execution failed: {:?}", result);
    assert_eq!(
        transcript.calls,
        vec![RenderCall {
            row: 5,
            col: 5,
            text: "hi".to_string(),
        }]
    );
    assert_eq!(interpreter.state(), &ExecState::Halted(Halt::Normal));
}

#[test]
fn test_if_operator_must_be_middle_token() {
    let err = parse_error("1 begin\n2 int x\n3 set x 0\n4 if x 0 eq\n5 end");
    match err {
        ParseError::InvalidOperator { op, line_number, .. } => {
            assert_eq!(op, "0");
            assert_eq!(line_number, 4);
        }
        other => panic!("Expected InvalidOperator, got {:?}", other),
    }

    // A second comparison makes the line too long before operators are checked
    let err = parse_error("1 begin\n2 int x\n3 set x 0\n4 if x eq 0 gt 1\n5 end");
    assert!(matches!(err, ParseError::WrongArity { got: 5, .. }));
}

#[test]
fn test_if_runs_or_skips_next_command() {
    let program = |a: i32| {
        format!(
            "1 begin\n2 int a\n3 int y\n4 set a {}\n5 set y 0\n6 if a eq 3\n7 set y 1\n8 end",
            a
        )
    };

    let (interpreter, _, result) = run_program(&program(3));
    assert!(result.is_ok());
    assert_eq!(interpreter.value_of("y"), Some(1));

    let (interpreter, _, result) = run_program(&program(4));
    assert!(result.is_ok());
    assert_eq!(interpreter.value_of("y"), Some(0));
}

#[test]
fn test_fallthrough_follows_declaration_order() {
    let source = "1 begin\n5 int x\n3 set x 1\n4 add x 2\n2 print x x hi\n10 end";

    let (interpreter, transcript, result) = run_program(source);

    assert!(result.is_ok(), "Execution failed: {:?}", result);
    assert_eq!(transcript.get_output(), vec!["3 3 hi"]);
    assert_eq!(interpreter.steps_taken(), 5);
}

#[test]
fn test_counting_loop() {
    let source = "\
10 begin
20 int i
30 int row
40 set i 0
50 set row 0
60 print row i *
70 add i 1
80 add row 2
90 if i lt 3
100 goto 60
110 end";

    let (interpreter, transcript, result) = run_program(source);

    assert!(result.is_ok(), "Execution failed: {:?}", result);
    assert_eq!(transcript.get_output(), vec!["0 0 *", "2 1 *", "4 2 *"]);
    assert_eq!(interpreter.value_of("i"), Some(3));
}

#[test]
fn test_missing_begin_and_end() {
    assert_eq!(parse_error("2 int x\n3 end"), ParseError::MissingBegin);
    assert_eq!(parse_error("1 begin\n2 int x"), ParseError::MissingEnd);
}

#[test]
fn test_duplicate_declaration() {
    let err = parse_error("1 begin\n2 int x\n3 int x\n4 end");
    assert!(
        matches!(err, ParseError::DuplicateVariable { ref name, line_number: 3, .. } if name == "x"),
        "got {:?}",
        err
    );
}

#[test]
fn test_arithmetic_on_unset_variable() {
    let (interpreter, transcript, result) = run_program("1 begin\n2 int x\n3 add x 1\n4 end");

    assert_eq!(
        result,
        Err(RuntimeError::UnsetVariable {
            name: "x".to_string(),
            line: 3,
        })
    );
    assert!(transcript.is_empty());
    assert!(!interpreter.is_running());
}

#[test]
fn test_division_by_zero_keeps_value() {
    let (interpreter, _, result) = run_program("1 begin\n2 int x\n3 set x 8\n4 div x 0\n5 end");

    assert_eq!(
        result,
        Err(RuntimeError::DivisionByZero {
            name: "x".to_string(),
            line: 4,
        })
    );
    assert_eq!(interpreter.value_of("x"), Some(8));
}

#[test]
fn test_goto_targets() {
    let (_, _, result) = run_program("1 begin\n2 goto 9\n3 end");
    assert!(matches!(
        result,
        Err(RuntimeError::InvalidGotoTarget {
            target: 9,
            begin: 1,
            end: 3,
            line: 2,
        })
    ));

    let (_, _, result) = run_program("1 begin\n2 goto 4\n5 end");
    assert_eq!(
        result,
        Err(RuntimeError::UnknownLineNumber { target: 4, line: 2 })
    );
}

#[test]
fn test_output_before_error_is_kept() {
    let source = "1 begin\n2 int x\n3 int y\n4 set x 1\n5 print x x a\n6 add y 1\n7 end";

    let (_, transcript, result) = run_program(source);

    assert!(matches!(result, Err(RuntimeError::UnsetVariable { line: 6, .. })));
    assert_eq!(transcript.get_output(), vec!["1 1 a"]);
}

#[test]
fn test_infinite_loop_hits_step_limit() {
    let program = Parser::new("1 begin\n2 goto 2\n3 end")
        .parse_program()
        .expect("Parsing failed");
    let mut interpreter = Interpreter::new(program).with_step_limit(50);
    let result = interpreter.run(&mut Transcript::new());

    assert_eq!(
        result,
        Err(RuntimeError::StepLimitExceeded { limit: 50, line: 2 })
    );
    assert_eq!(interpreter.steps_taken(), 50);
}

#[test]
fn test_screen_buffer_sink() {
    let source = "\
1 begin
2 int r
3 int c
4 set r 1
5 set c 0
6 print r c hello
7 add c 1
8 print r c EY
9 end";
    let program = Parser::new(source)
        .parse_program()
        .expect("Parsing failed");
    let mut screen = ScreenBuffer::new();
    Interpreter::new(program)
        .run(&mut screen)
        .expect("Execution failed");

    assert_eq!(screen.lines(), vec!["".to_string(), "hEYlo".to_string()]);
}

#[test]
fn test_program_listing() {
    let program = Parser::new("1 begin\n2 int x\n3 if x gte -2\n4 end")
        .parse_program()
        .expect("Parsing failed");

    let listing = program.to_string();
    let lines: Vec<&str> = listing.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Index"));
    assert!(lines[3].contains("if"));
    assert!(lines[3].ends_with("x gte -2"));
}

#[test]
fn test_print_outside_screen_is_dropped() {
    let source = "\
1 begin
2 int r
3 int c
4 set r 0
5 set c 2000000000
6 print r c x
7 set r 2000000000
8 set c 0
9 print r c x
10 print c c ok
11 end";
    let program = Parser::new(source)
        .parse_program()
        .expect("Parsing failed");
    let mut screen = ScreenBuffer::new();
    Interpreter::new(program)
        .run(&mut screen)
        .expect("Execution failed");

    assert_eq!(screen.lines(), vec!["ok".to_string()]);
}
