//! The full pipeline: parse, convert to postfix, evaluate.

use bares_eval::{ConvertError, EvalError, Postfix, Value, evaluate, to_postfix};
use bares_syntax::{Parser, SyntaxError, Token};
use rayon::prelude::*;
use std::fmt;
use tracing::debug;

/// Failure of any pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    Syntax(SyntaxError),
    Convert(ConvertError),
    Eval(EvalError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Syntax(e) => write!(f, "{}", e),
            SolveError::Convert(e) => write!(f, "{}", e),
            SolveError::Eval(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Syntax(e) => Some(e),
            SolveError::Convert(e) => Some(e),
            SolveError::Eval(e) => Some(e),
        }
    }
}

impl From<SyntaxError> for SolveError {
    fn from(err: SyntaxError) -> Self {
        SolveError::Syntax(err)
    }
}

impl From<ConvertError> for SolveError {
    fn from(err: ConvertError) -> Self {
        SolveError::Convert(err)
    }
}

impl From<EvalError> for SolveError {
    fn from(err: EvalError) -> Self {
        SolveError::Eval(err)
    }
}

/// Everything the pipeline produced for one expression.
///
/// `tokens` holds whatever the parser recognized, even when parsing failed.
/// `postfix` is present once conversion succeeded.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub expression: String,
    pub tokens: Vec<Token>,
    pub postfix: Option<Postfix>,
    pub result: Result<Value, SolveError>,
}

impl Evaluation {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs expressions through the pipeline, reusing one [`Parser`].
#[derive(Debug, Default)]
pub struct Solver {
    parser: Parser,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solve(&mut self, expression: &str) -> Result<Value, SolveError> {
        self.parser.parse(expression)?;
        let postfix = to_postfix(self.parser.tokens())?;
        Ok(evaluate(&postfix)?)
    }

    /// Like [`Solver::solve`], but keeps the intermediate results.
    pub fn run(&mut self, expression: &str) -> Evaluation {
        let parsed = self.parser.parse(expression);
        let tokens = self.parser.take_tokens();

        let (postfix, result) = match parsed {
            Err(err) => (None, Err(SolveError::from(err))),
            Ok(()) => match to_postfix(&tokens) {
                Err(err) => (None, Err(SolveError::from(err))),
                Ok(postfix) => {
                    let result = evaluate(&postfix).map_err(SolveError::from);
                    (Some(postfix), result)
                }
            },
        };
        debug!(expression, ok = result.is_ok(), "pipeline finished");

        Evaluation {
            expression: expression.to_string(),
            tokens,
            postfix,
            result,
        }
    }
}

/// Solves a single expression with a throwaway [`Solver`].
pub fn solve(expression: &str) -> Result<Value, SolveError> {
    Solver::new().solve(expression)
}

/// Solves independent expressions in parallel, one [`Solver`] per worker.
/// Results come back in input order.
pub fn solve_all<S: AsRef<str> + Sync>(expressions: &[S]) -> Vec<Result<Value, SolveError>> {
    expressions
        .par_iter()
        .map_init(Solver::new, |solver, expr| solver.solve(expr.as_ref()))
        .collect()
}

/// Parallel form of [`Solver::run`]. Results come back in input order.
pub fn evaluate_all<S: AsRef<str> + Sync>(expressions: &[S]) -> Vec<Evaluation> {
    expressions
        .par_iter()
        .map_init(Solver::new, |solver, expr| solver.run(expr.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bares_eval::EvalErrorKind;
    use bares_syntax::SyntaxErrorKind;

    #[test]
    fn test_solver_reuse() {
        let mut solver = Solver::new();
        assert_eq!(solver.solve("1 + 1"), Ok(2));
        assert!(solver.solve("5 / 0").is_err());
        assert!(solver.solve("(1").is_err());
        assert_eq!(solver.solve("1 + 1"), Ok(2));
    }

    #[test]
    fn test_run_keeps_prefix_tokens() {
        let evaluation = Solver::new().run("12 + 3 +");
        assert_eq!(evaluation.tokens.len(), 4);
        assert!(evaluation.postfix.is_none());
        assert!(matches!(
            evaluation.result,
            Err(SolveError::Syntax(SyntaxError { kind: SyntaxErrorKind::MissingTerm, column: 8 }))
        ));
    }

    #[test]
    fn test_run_tokens_belong_to_each_call() {
        let mut solver = Solver::new();
        let first = solver.run("(1 + 2)");
        let second = solver.run("7");
        assert_eq!(first.tokens.len(), 5);
        assert_eq!(second.tokens, vec![Token::operand("7", 0)]);
        assert_eq!(second.result, Ok(7));
        assert_eq!(solver.run("1 + 1").tokens.len(), 3);
    }

    #[test]
    fn test_run_keeps_postfix_on_runtime_error() {
        let evaluation = Solver::new().run("5/0");
        assert_eq!(evaluation.postfix.as_ref().map(|p| p.to_string()).as_deref(), Some("5 0 /"));
        assert!(matches!(
            evaluation.result,
            Err(SolveError::Eval(EvalError { kind: EvalErrorKind::DivisionByZero, .. }))
        ));
    }

    #[test]
    fn test_error_source_chain() {
        let err = solve("5/0").unwrap_err();
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "division by zero");
    }
}
