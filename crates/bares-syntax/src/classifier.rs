//! Single-character classification.
//!
//! The grammar engine never looks at raw bytes directly. Every character is
//! first mapped to a [`SymbolCategory`], and the grammar rules match on
//! categories only.

use std::fmt;

/// Lexical class of one input character.
///
/// `-` gets its own category because it is either the sign of a literal or a
/// binary operator, and only the grammar engine can tell which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    Minus,
    GenericOperator,
    OpenParen,
    CloseParen,
    ZeroDigit,
    NonzeroDigit,
    Whitespace,
    Tab,
    EndOfInput,
    Invalid,
}

impl SymbolCategory {
    /// Classifies one byte of input. Total: anything unknown is `Invalid`.
    pub fn of(byte: u8) -> Self {
        match byte {
            b'-' => SymbolCategory::Minus,
            b'+' | b'^' | b'*' | b'%' | b'/' => SymbolCategory::GenericOperator,
            b'(' => SymbolCategory::OpenParen,
            b')' => SymbolCategory::CloseParen,
            b' ' => SymbolCategory::Whitespace,
            b'\t' => SymbolCategory::Tab,
            b'0' => SymbolCategory::ZeroDigit,
            b'1'..=b'9' => SymbolCategory::NonzeroDigit,
            _ => SymbolCategory::Invalid,
        }
    }

    /// Classifies an optional byte, treating `None` (cursor past the last
    /// character) as end of input.
    #[inline]
    pub fn of_opt(byte: Option<u8>) -> Self {
        byte.map_or(SymbolCategory::EndOfInput, Self::of)
    }

    #[inline]
    pub fn is_blank(self) -> bool {
        matches!(self, SymbolCategory::Whitespace | SymbolCategory::Tab)
    }

    #[inline]
    pub fn is_digit(self) -> bool {
        matches!(self, SymbolCategory::ZeroDigit | SymbolCategory::NonzeroDigit)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SymbolCategory::Minus => "'-'",
            SymbolCategory::GenericOperator => "operator",
            SymbolCategory::OpenParen => "'('",
            SymbolCategory::CloseParen => "')'",
            SymbolCategory::ZeroDigit => "'0'",
            SymbolCategory::NonzeroDigit => "digit",
            SymbolCategory::Whitespace => "whitespace",
            SymbolCategory::Tab => "tab",
            SymbolCategory::EndOfInput => "end of input",
            SymbolCategory::Invalid => "invalid character",
        }
    }
}

impl fmt::Display for SymbolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Free-function form of [`SymbolCategory::of`].
#[inline]
pub fn classify(byte: u8) -> SymbolCategory {
    SymbolCategory::of(byte)
}
