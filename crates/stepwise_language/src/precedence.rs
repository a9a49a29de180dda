//! Operator binding strengths.

use crate::token::TokenKind;

/// Binding strength of an operator, weakest first.
///
/// The derived ordering is the binding order used by the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Anything that does not bind as an infix operator.
    Lowest,
    /// `=`, `<`, `>`
    Equals,
    /// `+`, `-`
    PlusMinus,
    /// `*`, `/`
    MulDiv,
    /// Unary minus
    Prefix,
    /// `^`
    Power,
}

impl Precedence {
    /// Returns the infix binding strength of a token kind.
    ///
    /// `!=`, `<=` and `>=` are lexed but have no infix production, so they
    /// bind like any other unlisted token.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Equals | TokenKind::Lt | TokenKind::Gt => Self::Equals,
            TokenKind::Plus | TokenKind::Minus => Self::PlusMinus,
            TokenKind::Asterisk | TokenKind::Slash => Self::MulDiv,
            TokenKind::Caret => Self::Power,
            _ => Self::Lowest,
        }
    }
}
