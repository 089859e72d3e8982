//! Error types for postfix conversion and evaluation.
//!
//! [`ConvertError`] reports a token sequence that is not balanced, which a
//! successful parse never produces. [`EvalError`] is the runtime failure of
//! the stack machine and carries the index of the postfix term being
//! processed when it happened.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A `)` with no pending `(` to its left.
    UnmatchedCloseScope { column: usize },
    /// A `(` still pending once every token was consumed.
    UnmatchedOpenScope { column: usize },
    /// An operator token whose text is not in the operator table.
    UnknownOperator { symbol: String, column: usize },
}

impl ConvertError {
    pub fn column(&self) -> usize {
        match self {
            ConvertError::UnmatchedCloseScope { column } => *column,
            ConvertError::UnmatchedOpenScope { column } => *column,
            ConvertError::UnknownOperator { column, .. } => *column,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnmatchedCloseScope { column } => {
                write!(f, "unmatched ')' at column {}", column)
            }
            ConvertError::UnmatchedOpenScope { column } => {
                write!(f, "unmatched '(' at column {}", column)
            }
            ConvertError::UnknownOperator { symbol, column } => {
                write!(f, "unknown operator '{}' at column {}", symbol, column)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalErrorKind {
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow,
    NegativeExponent,
    StackUnderflow,
    MalformedPostfix,
}

impl EvalErrorKind {
    pub fn description(&self) -> &'static str {
        match self {
            EvalErrorKind::DivisionByZero => "division by zero",
            EvalErrorKind::ModuloByZero => "modulo by zero",
            EvalErrorKind::IntegerOverflow => "integer overflow",
            EvalErrorKind::NegativeExponent => "negative exponent",
            EvalErrorKind::StackUnderflow => "operator is missing an operand",
            EvalErrorKind::MalformedPostfix => "malformed postfix expression",
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A runtime evaluation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Index of the postfix term that failed, or the sequence length when
    /// the final stack check failed.
    pub position: usize,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for EvalError {}
