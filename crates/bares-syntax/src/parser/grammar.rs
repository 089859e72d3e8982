//! Non-terminal rules of the expression grammar.
//!
//! ```text
//! expression       := term , { (operator | "-") , term } ;
//! term             := "(" , expression , ")" | integer ;
//! integer          := "0" | ["-"] , natural_number ;
//! natural_number   := digit_excl_zero , { digit } ;
//! ```
//!
//! Each rule consumes input on success and records the tokens it recognized.
//! Precedence is not encoded here; operators are emitted in source order.

use super::{Parser, TargetInt, WideInt};
use crate::classifier::SymbolCategory;
use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::token::{Token, TokenKind};

impl Parser {
    pub(super) fn expression(&mut self) -> Result<(), SyntaxError> {
        self.term()?;

        loop {
            self.skip_ws();
            let start = self.pos;
            if !(self.accept(SymbolCategory::GenericOperator) || self.accept(SymbolCategory::Minus)) {
                return Ok(());
            }
            self.push_token(start, TokenKind::Operator);

            self.skip_ws();
            if self.at_end() {
                return Err(self.error(SyntaxErrorKind::MissingTerm));
            }
            if self.peek(SymbolCategory::GenericOperator) {
                return Err(self.error(SyntaxErrorKind::IllFormedInteger));
            }

            self.term()?;
        }
    }

    fn term(&mut self) -> Result<(), SyntaxError> {
        self.skip_ws();
        let start = self.pos;

        if self.accept(SymbolCategory::OpenParen) {
            self.tokens.push(Token::open_scope(start));
            self.expression()?;

            self.skip_ws();
            let close = self.pos;
            if !self.expect(SymbolCategory::CloseParen) {
                return Err(self.error(SyntaxErrorKind::MissingClosingParen));
            }
            self.tokens.push(Token::close_scope(close));
            return Ok(());
        }

        if self.peek(SymbolCategory::GenericOperator) {
            return Err(self.error(SyntaxErrorKind::IllFormedInteger));
        }

        self.integer()?;

        let literal = &self.source[start..self.pos];
        let value: WideInt = literal
            .parse()
            .map_err(|_| SyntaxError::new(SyntaxErrorKind::IllFormedInteger, start))?;
        if TargetInt::try_from(value).is_err() {
            return Err(SyntaxError::new(SyntaxErrorKind::IntegerOutOfRange, start));
        }

        self.push_token(start, TokenKind::Operand);
        Ok(())
    }

    fn integer(&mut self) -> Result<(), SyntaxError> {
        if self.accept(SymbolCategory::ZeroDigit) {
            return Ok(());
        }
        self.accept(SymbolCategory::Minus);
        self.natural_number()
    }

    fn natural_number(&mut self) -> Result<(), SyntaxError> {
        if !self.accept(SymbolCategory::NonzeroDigit) {
            return Err(self.error(SyntaxErrorKind::IllFormedInteger));
        }
        while self.accept(SymbolCategory::ZeroDigit) || self.accept(SymbolCategory::NonzeroDigit) {}
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_err(text: &str) -> SyntaxError {
        Parser::new().parse(text).unwrap_err()
    }

    #[test]
    fn test_zero_is_a_complete_integer() {
        let err = parse_err("012");
        assert_eq!(err, SyntaxError::new(SyntaxErrorKind::ExtraneousSymbol, 1));
    }

    #[test]
    fn test_negative_zero_is_ill_formed() {
        let err = parse_err("-0");
        assert_eq!(err, SyntaxError::new(SyntaxErrorKind::IllFormedInteger, 1));
    }

    #[test]
    fn test_term_cannot_start_with_operator() {
        let err = parse_err("+12");
        assert_eq!(err, SyntaxError::new(SyntaxErrorKind::IllFormedInteger, 0));
    }

    #[test]
    fn test_two_operators_in_a_row() {
        let err = parse_err("1 + * 2");
        assert_eq!(err, SyntaxError::new(SyntaxErrorKind::IllFormedInteger, 4));
    }

    #[test]
    fn test_minus_after_operator_is_a_sign() {
        let mut parser = Parser::new();
        parser.parse("5 * -2").unwrap();
        assert_eq!(parser.tokens()[2], Token::operand("-2", 4));
    }

    #[test]
    fn test_detached_sign_is_ill_formed() {
        let err = parse_err("1 - - 2");
        assert_eq!(err, SyntaxError::new(SyntaxErrorKind::IllFormedInteger, 5));
    }

    #[test]
    fn test_literal_too_wide_to_convert_is_ill_formed() {
        let err = parse_err("1 + 99999999999999999999");
        assert_eq!(err, SyntaxError::new(SyntaxErrorKind::IllFormedInteger, 4));
        let err = parse_err("(-99999999999999999999)");
        assert_eq!(err, SyntaxError::new(SyntaxErrorKind::IllFormedInteger, 1));
    }

    #[test]
    fn test_literal_outside_target_range() {
        let err = parse_err("1 + 32768");
        assert_eq!(err, SyntaxError::new(SyntaxErrorKind::IntegerOutOfRange, 4));
        let err = parse_err("9223372036854775807");
        assert_eq!(err, SyntaxError::new(SyntaxErrorKind::IntegerOutOfRange, 0));
    }

    #[test]
    fn test_empty_parentheses() {
        let err = parse_err("()");
        assert_eq!(err, SyntaxError::new(SyntaxErrorKind::IllFormedInteger, 1));
    }

    #[test]
    fn test_error_inside_parentheses_propagates() {
        let err = parse_err("(1 + )");
        assert_eq!(err, SyntaxError::new(SyntaxErrorKind::IllFormedInteger, 5));
    }
}
