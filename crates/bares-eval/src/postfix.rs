//! Infix token sequence to postfix (Reverse Polish) conversion.
//!
//! Classic shunting-yard over the tokens of a successful parse. Parentheses
//! only steer the conversion and never reach the output, so a postfix
//! sequence is as long as its token sequence minus the scope tokens.

use crate::error::ConvertError;
use crate::operator::{Associativity, Operator};
use bares_syntax::{Token, TokenKind};
use smallvec::SmallVec;
use std::convert::Infallible;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostfixTerm {
    /// Decimal literal text, possibly with a leading `-`.
    Operand(String),
    Operator(Operator),
}

impl fmt::Display for PostfixTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostfixTerm::Operand(text) => f.write_str(text),
            PostfixTerm::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// An ordered postfix sequence. Displays as its terms separated by spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix(Vec<PostfixTerm>);

impl Postfix {
    pub fn new(terms: Vec<PostfixTerm>) -> Self {
        Self(terms)
    }

    pub fn into_terms(self) -> Vec<PostfixTerm> {
        self.0
    }
}

impl Deref for Postfix {
    type Target = [PostfixTerm];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<PostfixTerm>> for Postfix {
    fn from(terms: Vec<PostfixTerm>) -> Self {
        Self(terms)
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

/// Reads whitespace-separated postfix text such as `"2 3 4 * +"`.
///
/// Words that name an operator become [`PostfixTerm::Operator`]; everything
/// else is kept as operand text and checked by the evaluator.
impl FromStr for Postfix {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let terms = s
            .split_whitespace()
            .map(|word| match Operator::from_symbol(word) {
                Some(op) => PostfixTerm::Operator(op),
                None => PostfixTerm::Operand(word.to_string()),
            })
            .collect();
        Ok(Self(terms))
    }
}

/// Entry on the pending stack of the shunting-yard.
#[derive(Debug, Clone, Copy)]
enum Pending {
    OpenScope { column: usize },
    Operator(Operator),
}

/// Converts a validated token sequence into postfix order.
///
/// Structure is not re-validated, but an unbalanced `)` or `(` and an
/// unknown operator are reported instead of being dropped.
pub fn to_postfix(tokens: &[Token]) -> Result<Postfix, ConvertError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut pending: SmallVec<[Pending; 16]> = SmallVec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Operand => output.push(PostfixTerm::Operand(token.value.clone())),
            TokenKind::OpenScope => pending.push(Pending::OpenScope {
                column: token.column,
            }),
            TokenKind::CloseScope => loop {
                match pending.pop() {
                    Some(Pending::Operator(op)) => output.push(PostfixTerm::Operator(op)),
                    Some(Pending::OpenScope { .. }) => break,
                    None => {
                        return Err(ConvertError::UnmatchedCloseScope {
                            column: token.column,
                        });
                    }
                }
            },
            TokenKind::Operator => {
                let op = Operator::from_symbol(&token.value).ok_or_else(|| {
                    ConvertError::UnknownOperator {
                        symbol: token.value.clone(),
                        column: token.column,
                    }
                })?;
                // an open scope stops the popping
                while let Some(&Pending::Operator(top_op)) = pending.last() {
                    let pops = top_op.precedence() > op.precedence()
                        || (top_op.precedence() == op.precedence()
                            && op.associativity() == Associativity::Left);
                    if !pops {
                        break;
                    }
                    pending.pop();
                    output.push(PostfixTerm::Operator(top_op));
                }
                pending.push(Pending::Operator(op));
            }
        }
    }

    while let Some(entry) = pending.pop() {
        match entry {
            Pending::Operator(op) => output.push(PostfixTerm::Operator(op)),
            Pending::OpenScope { column } => {
                return Err(ConvertError::UnmatchedOpenScope { column });
            }
        }
    }

    let postfix = Postfix(output);
    debug!(%postfix, "converted to postfix");
    Ok(postfix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bares_syntax::tokenize;

    fn postfix_of(text: &str) -> String {
        let tokens = tokenize(text).unwrap();
        to_postfix(&tokens).unwrap().to_string()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(postfix_of("2+3*4"), "2 3 4 * +");
        assert_eq!(postfix_of("2*3+4"), "2 3 * 4 +");
        assert_eq!(postfix_of("1 + 2 ^ 3 * 4"), "1 2 3 ^ 4 * +");
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(postfix_of("10 - 4 - 3"), "10 4 - 3 -");
        assert_eq!(postfix_of("100 / 10 % 7 * 2"), "100 10 / 7 % 2 *");
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(postfix_of("2^3^2"), "2 3 2 ^ ^");
    }

    #[test]
    fn test_parentheses_never_reach_output() {
        assert_eq!(postfix_of("(10 + (2+3))"), "10 2 3 + +");
        assert_eq!(postfix_of("(2+3)*4"), "2 3 + 4 *");
        assert_eq!(postfix_of("((((7))))"), "7");
    }

    #[test]
    fn test_open_scope_stops_popping() {
        assert_eq!(postfix_of("2 ^ (3 * 4 - 1)"), "2 3 4 * 1 - ^");
        assert_eq!(postfix_of("8 * (1 + 2 ^ 2) / 5"), "8 1 2 2 ^ + * 5 /");
    }

    #[test]
    fn test_signed_operands_pass_through() {
        assert_eq!(postfix_of("-3 - -5"), "-3 -5 -");
    }

    #[test]
    fn test_postfix_length() {
        let tokens = tokenize("(1 + 2) * (3 - 4)").unwrap();
        let scopes = tokens.iter().filter(|t| t.is_scope()).count();
        let postfix = to_postfix(&tokens).unwrap();
        assert_eq!(postfix.len(), tokens.len() - scopes);
    }

    #[test]
    fn test_unmatched_close_scope() {
        let tokens = vec![Token::operand("1", 0), Token::close_scope(1)];
        assert_eq!(
            to_postfix(&tokens),
            Err(ConvertError::UnmatchedCloseScope { column: 1 })
        );
    }

    #[test]
    fn test_unmatched_open_scope() {
        let tokens = vec![Token::open_scope(0), Token::operand("1", 1)];
        assert_eq!(
            to_postfix(&tokens),
            Err(ConvertError::UnmatchedOpenScope { column: 0 })
        );
    }

    #[test]
    fn test_unknown_operator() {
        let tokens = vec![
            Token::operand("1", 0),
            Token::operator("&", 1),
            Token::operand("2", 2),
        ];
        assert!(matches!(
            to_postfix(&tokens),
            Err(ConvertError::UnknownOperator { column: 1, .. })
        ));
    }

    #[test]
    fn test_from_str() {
        let postfix: Postfix = "2 3   4 * +".parse().unwrap();
        assert_eq!(postfix.len(), 5);
        assert_eq!(postfix[3], PostfixTerm::Operator(Operator::Mul));
        assert_eq!(postfix[0], PostfixTerm::Operand("2".to_string()));
        assert_eq!(postfix.to_string(), "2 3 4 * +");
    }
}
