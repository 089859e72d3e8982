use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An integer literal, possibly with a leading `-`.
    Operand,
    /// One of `+ - * / % ^`.
    Operator,
    /// `(`
    OpenScope,
    /// `)`
    CloseScope,
}

impl TokenKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Operand => "OPERAND",
            TokenKind::Operator => "OPERATOR",
            TokenKind::OpenScope => "OP_SCOPE",
            TokenKind::CloseScope => "CL_SCOPE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A piece of validated surface text.
///
/// `value` is the exact substring matched by the grammar, so an operand keeps
/// its sign (`"-12"`) and an operator is always one character long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
    /// Byte offset of the first character of `value` in the parsed text.
    pub column: usize,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind, column: usize) -> Self {
        Self {
            value: value.into(),
            kind,
            column,
        }
    }

    pub fn operand(value: impl Into<String>, column: usize) -> Self {
        Self::new(value, TokenKind::Operand, column)
    }

    pub fn operator(value: impl Into<String>, column: usize) -> Self {
        Self::new(value, TokenKind::Operator, column)
    }

    pub fn open_scope(column: usize) -> Self {
        Self::new("(", TokenKind::OpenScope, column)
    }

    pub fn close_scope(column: usize) -> Self {
        Self::new(")", TokenKind::CloseScope, column)
    }

    #[inline]
    pub fn is_scope(&self) -> bool {
        matches!(self.kind, TokenKind::OpenScope | TokenKind::CloseScope)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.value, self.kind)
    }
}
