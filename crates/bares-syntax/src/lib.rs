//! # Bares Syntax
//!
//! Character classifier, recursive-descent validator and tokenizer for bares
//! integer expressions.
//!
//! ## Overview
//!
//! - **Classifier**: maps every input byte to a [`SymbolCategory`]
//! - **Parser**: validates the whole expression and emits a flat list of
//!   [`Token`]s while doing so
//! - **Error Handling**: every rejection is a [`SyntaxError`] carrying the
//!   0-based column of the first offending character
//!
//! ## Architecture
//!
//! ```text
//! &str
//!     ↓
//! Classifier (per character)
//!     ↓
//! Parser (validate + tokenize)
//!     ↓
//! Vec<Token> | SyntaxError
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bares_syntax::{tokenize, TokenKind};
//!
//! let tokens = tokenize("  123 +  548").expect("valid expression");
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].value, "123");
//! assert_eq!(tokens[1].kind, TokenKind::Operator);
//! ```
//!
//! ## Grammar
//!
//! ```text
//! expression       := term , { (operator | "-") , term } ;
//! term             := "(" , expression , ")" | integer ;
//! integer          := "0" | ["-"] , natural_number ;
//! natural_number   := digit_excl_zero , { digit } ;
//! digit_excl_zero  := "1".."9" ;
//! digit            := "0" | digit_excl_zero ;
//! ```
//!
//! Literals must fit in an `i16`; anything outside `-32768..=32767` is
//! rejected with [`SyntaxErrorKind::IntegerOutOfRange`]. Digit runs too long
//! to convert to an `i64` at all are [`SyntaxErrorKind::IllFormedInteger`].
//!
//! ## Error Handling
//!
//! ```rust
//! use bares_syntax::{render_diagnostic, tokenize, SyntaxErrorKind};
//!
//! let source = "1 2";
//! let err = tokenize(source).unwrap_err();
//! assert_eq!(err.kind, SyntaxErrorKind::ExtraneousSymbol);
//! assert_eq!(err.column, 2);
//!
//! println!("{}", render_diagnostic(source, &err));
//! ```

pub mod classifier;
pub mod error;
pub mod parser;
pub mod token;

pub use classifier::{SymbolCategory, classify};
pub use error::{Diagnostic, SyntaxError, SyntaxErrorKind, render_diagnostic};
pub use parser::{Parser, TargetInt, WideInt, tokenize};
pub use token::{Token, TokenKind};
