//! # Bares
//!
//! Validates, tokenizes and evaluates short integer arithmetic expressions.
//!
//! ```rust
//! use bares::{solve, SolveError, SyntaxErrorKind};
//!
//! assert_eq!(solve("(10 + (2+3))").unwrap(), 15);
//! assert_eq!(solve("2^3^2").unwrap(), 512);
//!
//! match solve("1 2") {
//!     Err(SolveError::Syntax(err)) => {
//!         assert_eq!(err.kind, SyntaxErrorKind::ExtraneousSymbol);
//!         assert_eq!(err.column, 2);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! Every stage is exported for callers that want the intermediate results:
//! [`Parser`] / [`tokenize`] for tokens, [`to_postfix`] for the postfix
//! sequence and [`evaluate`] for the value.

mod solver;

pub use bares_eval::{
    Associativity, ConvertError, EvalError, EvalErrorKind, Operator, Postfix, PostfixTerm, Value,
    evaluate, to_postfix,
};
pub use bares_syntax::{
    Diagnostic, Parser, SymbolCategory, SyntaxError, SyntaxErrorKind, Token, TokenKind,
    render_diagnostic, tokenize,
};
pub use solver::{Evaluation, SolveError, Solver, evaluate_all, solve, solve_all};

pub mod prelude {
    pub use crate::{Evaluation, SolveError, Solver, Value, solve, solve_all};
}
