//! Token types for the Stepwise equation language.
//!
//! Tokens are the output of the lexer and input to the token stream and parser.
//! A token is a `(kind, literal)` pair compared by value; synthetic tokens the
//! token stream inserts are indistinguishable from lexed ones.

use std::fmt;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// The type of this token.
    pub kind: TokenKind,
    /// The source text of this token.
    pub literal: String,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token.
    #[must_use]
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "EOF")
    }

    /// A multiplication operator, used for implicit multiplication.
    #[must_use]
    pub fn asterisk() -> Self {
        Self::new(TokenKind::Asterisk, "*")
    }

    /// A division operator, used for the implicit operator of `/2`-style lines.
    #[must_use]
    pub fn slash() -> Self {
        Self::new(TokenKind::Slash, "/")
    }

    /// Returns true if this token is a single-character identifier.
    #[must_use]
    pub fn is_symbol(&self) -> bool {
        self.kind == TokenKind::Ident && self.literal.chars().count() == 1
    }

    /// Returns true if this token terminates a logical line.
    #[must_use]
    pub const fn is_line_end(&self) -> bool {
        matches!(self.kind, TokenKind::NewLine | TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident | TokenKind::Number | TokenKind::Illegal => {
                write!(f, "{}({})", self.kind.name(), self.literal)
            }
            _ => f.write_str(self.kind.name()),
        }
    }
}

/// Token types for the Stepwise equation language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Arithmetic
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `^`
    Caret,

    // Comparators
    /// `=`
    Equals,
    /// `!=`
    NotEquals,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,

    /// `!`, the formula marker
    Bang,

    // Delimiters
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,

    // Literals
    /// A run of letters or `_`
    Ident,
    /// A run of digits with at most one decimal point
    Number,

    // Meta
    /// `\n`
    NewLine,
    /// End of input
    Eof,
    /// A character the lexer could not classify
    Illegal,
}

impl TokenKind {
    /// Returns a stable human-readable name for this token kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Bang => "!",
            Self::Comma => ",",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Ident => "IDENT",
            Self::Number => "NUMBER",
            Self::NewLine => "NEW_LINE",
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
