mod grammar;

use crate::classifier::SymbolCategory;
use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::token::{Token, TokenKind};
use tracing::{debug, trace};

/// Narrow integer type every literal must fit into.
pub type TargetInt = i16;
/// Wide type literals are converted through before the range check.
pub type WideInt = i64;

/// Recursive-descent validator and tokenizer.
///
/// One instance can be reused for any number of expressions: every call to
/// [`Parser::parse`] resets the cursor and the token list before it starts,
/// so nothing from a previous call leaks into the next one.
///
/// ```rust
/// use bares_syntax::{Parser, TokenKind};
///
/// let mut parser = Parser::new();
/// parser.parse("(10 + (2+3))").expect("valid expression");
/// assert_eq!(parser.tokens().len(), 9);
/// assert_eq!(parser.tokens()[0].kind, TokenKind::OpenScope);
/// ```
#[derive(Debug, Default)]
pub struct Parser {
    pub(super) source: String,
    pub(super) pos: usize,
    pub(super) tokens: Vec<Token>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `text` and rebuilds the token list as a side product.
    ///
    /// Parsing stops at the first error. The tokens recognized before the
    /// error stay available through [`Parser::tokens`].
    pub fn parse(&mut self, text: &str) -> Result<(), SyntaxError> {
        self.reset(text);
        debug!(expression = text, "parsing expression");

        let outcome = self.parse_input();
        match &outcome {
            Ok(()) => debug!(tokens = self.tokens.len(), "expression accepted"),
            Err(err) => debug!(kind = ?err.kind, column = err.column, "expression rejected"),
        }
        outcome
    }

    /// Tokens produced by the most recent [`Parser::parse`] call.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Moves the tokens of the most recent call out of the parser.
    pub fn take_tokens(&mut self) -> Vec<Token> {
        std::mem::take(&mut self.tokens)
    }

    fn reset(&mut self, text: &str) {
        self.source.clear();
        self.source.push_str(text);
        self.pos = 0;
        self.tokens.clear();
    }

    fn parse_input(&mut self) -> Result<(), SyntaxError> {
        self.skip_ws();
        if self.at_end() {
            return Err(self.error(SyntaxErrorKind::UnexpectedEndOfInput));
        }

        self.expression()?;

        self.skip_ws();
        if !self.at_end() {
            return Err(self.error(SyntaxErrorKind::ExtraneousSymbol));
        }
        Ok(())
    }

    #[inline]
    pub(super) fn current(&self) -> SymbolCategory {
        SymbolCategory::of_opt(self.source.as_bytes().get(self.pos).copied())
    }

    #[inline]
    pub(super) fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// True if the unconsumed character is in `category`. Never consumes.
    #[inline]
    pub(super) fn peek(&self, category: SymbolCategory) -> bool {
        self.current() == category
    }

    /// Consumes the current character if it is in `category`.
    pub(super) fn accept(&mut self, category: SymbolCategory) -> bool {
        if self.at_end() || !self.peek(category) {
            return false;
        }
        trace!(pos = self.pos, %category, "accept");
        self.pos += 1;
        true
    }

    /// Skips blanks, then [`accept`](Self::accept)s.
    pub(super) fn expect(&mut self, category: SymbolCategory) -> bool {
        self.skip_ws();
        self.accept(category)
    }

    #[inline]
    pub(super) fn skip_ws(&mut self) {
        while !self.at_end() && self.current().is_blank() {
            self.pos += 1;
        }
    }

    #[inline]
    pub(super) fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(kind, self.pos)
    }

    pub(super) fn push_token(&mut self, start: usize, kind: TokenKind) {
        let value = &self.source[start..self.pos];
        self.tokens.push(Token::new(value, kind, start));
    }
}

/// Parses `text` with a fresh [`Parser`] and returns its tokens.
pub fn tokenize(text: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut parser = Parser::new();
    parser.parse(text)?;
    Ok(parser.take_tokens())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_does_not_consume_on_mismatch() {
        let mut parser = Parser::new();
        parser.reset("7");
        assert!(!parser.accept(SymbolCategory::ZeroDigit));
        assert_eq!(parser.pos, 0);
        assert!(parser.accept(SymbolCategory::NonzeroDigit));
        assert_eq!(parser.pos, 1);
        assert!(parser.peek(SymbolCategory::EndOfInput));
        assert!(!parser.accept(SymbolCategory::EndOfInput));
    }

    #[test]
    fn test_expect_skips_blanks() {
        let mut parser = Parser::new();
        parser.reset(" \t (");
        assert!(parser.expect(SymbolCategory::OpenParen));
        assert!(parser.at_end());
    }

    #[test]
    fn test_take_tokens_leaves_parser_empty() {
        let mut parser = Parser::new();
        parser.parse("1 + 2").unwrap();
        let tokens = parser.take_tokens();
        assert_eq!(tokens.len(), 3);
        assert!(parser.tokens().is_empty());
    }

    #[test]
    fn test_tokenize_convenience() {
        let tokens = tokenize("-3+-5").unwrap();
        let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["-3", "+", "-5"]);
    }

    #[test]
    fn test_tokens_kept_on_error() {
        let mut parser = Parser::new();
        let err = parser.parse("12 + 3 +").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::MissingTerm);
        assert_eq!(parser.tokens().len(), 4);
    }
}
