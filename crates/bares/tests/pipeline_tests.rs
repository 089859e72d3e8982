use anyhow::Result;
use bares::prelude::*;
use bares::{EvalErrorKind, SyntaxError, SyntaxErrorKind};

fn syntax_error(expression: &str) -> SyntaxError {
    match solve(expression) {
        Err(SolveError::Syntax(err)) => err,
        other => panic!("expected a syntax error for {expression:?}, got {other:?}"),
    }
}

#[test]
fn test_solve_examples() -> Result<()> {
    assert_eq!(solve("(10 + (2+3))")?, 15);
    assert_eq!(solve("  123 +  548")?, 671);
    assert_eq!(solve("2+3*4")?, 14);
    assert_eq!(solve("2^3^2")?, 512);
    assert_eq!(solve("-3+-5+-6")?, -14);
    Ok(())
}

#[test]
fn test_syntax_errors() {
    assert_eq!(
        syntax_error(""),
        SyntaxError::new(SyntaxErrorKind::UnexpectedEndOfInput, 0)
    );
    assert_eq!(
        syntax_error("   "),
        SyntaxError::new(SyntaxErrorKind::UnexpectedEndOfInput, 3)
    );
    assert_eq!(
        syntax_error("32768"),
        SyntaxError::new(SyntaxErrorKind::IntegerOutOfRange, 0)
    );
    assert_eq!(syntax_error("1+"), SyntaxError::new(SyntaxErrorKind::MissingTerm, 2));
    assert_eq!(syntax_error("(1+2").kind, SyntaxErrorKind::MissingClosingParen);
    assert_eq!(
        syntax_error("1 2"),
        SyntaxError::new(SyntaxErrorKind::ExtraneousSymbol, 2)
    );
}

#[test]
fn test_runtime_error_is_not_fatal() {
    let mut solver = Solver::new();
    match solver.solve("5/0") {
        Err(SolveError::Eval(err)) => assert_eq!(err.kind, EvalErrorKind::DivisionByZero),
        other => panic!("expected division by zero, got {other:?}"),
    }
    assert_eq!(solver.solve("6/3"), Ok(2));
}

#[test]
fn test_solve_all_preserves_order() {
    let expressions: Vec<String> = (1..=200).map(|n| format!("{n} * 2 - 1")).collect();
    let results = solve_all(&expressions);

    assert_eq!(results.len(), 200);
    for (n, result) in (1..=200).zip(results) {
        assert_eq!(result, Ok(n * 2 - 1));
    }
}

#[test]
fn test_solve_all_mixed_outcomes() {
    let results = solve_all(&["1 + 1", "1 +", "4 % 0", "2 ^ 10"]);

    assert_eq!(results[0], Ok(2));
    assert!(matches!(results[1], Err(SolveError::Syntax(_))));
    assert!(matches!(results[2], Err(SolveError::Eval(_))));
    assert_eq!(results[3], Ok(1024));
}

#[test]
fn test_evaluate_all_keeps_details() {
    let evaluations = bares::evaluate_all(&["(1 + 2) * 3", "7 7"]);

    assert!(evaluations[0].is_ok());
    assert_eq!(evaluations[0].expression, "(1 + 2) * 3");
    assert_eq!(
        evaluations[0].postfix.as_ref().map(ToString::to_string).as_deref(),
        Some("1 2 + 3 *")
    );
    assert!(!evaluations[1].is_ok());
    assert_eq!(evaluations[1].tokens.len(), 1);
}
