use std::fmt;

/// Why an expression was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    UnexpectedEndOfInput,
    IllFormedInteger,
    MissingTerm,
    ExtraneousSymbol,
    IntegerOutOfRange,
    MissingClosingParen,
}

impl SyntaxErrorKind {
    pub fn description(&self) -> &'static str {
        match self {
            SyntaxErrorKind::UnexpectedEndOfInput => "Unexpected end of input",
            SyntaxErrorKind::IllFormedInteger => "Ill formed integer",
            SyntaxErrorKind::MissingTerm => "Missing <term>",
            SyntaxErrorKind::ExtraneousSymbol => "Extraneous symbol after valid expression found",
            SyntaxErrorKind::IntegerOutOfRange => "Integer constant out of range beginning",
            SyntaxErrorKind::MissingClosingParen => "Missing closing \")\"",
        }
    }
}

/// A syntax error and the 0-based column where it was detected.
///
/// The column always indexes into the exact string handed to the
/// [`Parser::parse`](crate::Parser::parse) call that produced it, and points
/// at the first offending character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub column: usize,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, column: usize) -> Self {
        Self { kind, column }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at column ({})!", self.kind.description(), self.column)
    }
}

impl std::error::Error for SyntaxError {}

/// Pairs a [`SyntaxError`] with the text it refers to, for display.
///
/// Rendering produces the message, the input text, and a marker line of
/// the same width with a single `^` under the offending column:
///
/// ```text
/// >>> Missing <term> at column (2)!
/// "1+"
///    ^
/// ```
pub struct Diagnostic<'a> {
    source: &'a str,
    error: SyntaxError,
}

impl<'a> Diagnostic<'a> {
    pub fn new(source: &'a str, error: SyntaxError) -> Self {
        Self { source, error }
    }

    pub fn error(&self) -> SyntaxError {
        self.error
    }

    /// The marker line: spaces everywhere except a `^` at the error column.
    ///
    /// One cell wider than the source so that end-of-input errors still get
    /// a visible caret.
    pub fn marker_line(&self) -> String {
        let width = self.source.len() + 1;
        let col = self.error.column.min(self.source.len());
        let mut marker = " ".repeat(width);
        marker.replace_range(col..col + 1, "^");
        marker
    }

    pub fn format_error(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(">>> {}\n", self.error));
        output.push_str(&format!("\"{}\"\n", self.source));
        output.push_str(&format!(" {}", self.marker_line()));
        output
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_error())
    }
}

/// Renders the three-line diagnostic for `error` against `source`.
pub fn render_diagnostic(source: &str, error: &SyntaxError) -> String {
    Diagnostic::new(source, *error).format_error()
}
