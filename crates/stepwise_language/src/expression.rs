//! Expression trees.

use std::fmt;

use crate::precedence::Precedence;
use crate::pretty::{Style, render_expression};
use crate::token::{Token, TokenKind};

/// An expression node. Every node owns its children.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    /// A numeric literal.
    Number(f64),
    /// A single-character symbol.
    Identifier(Token),
    /// A unary operator applied to an operand.
    Prefix {
        /// The operator token (only `-` is produced by the parser).
        operator: Token,
        /// The operand.
        operand: Box<Expression>,
    },
    /// A binary operator applied to two operands.
    Infix {
        /// The operator token.
        operator: Token,
        /// Left operand.
        left: Box<Expression>,
        /// Right operand.
        right: Box<Expression>,
    },
}

impl Expression {
    /// Creates an identifier node for a single symbol.
    #[must_use]
    pub fn symbol(symbol: char) -> Self {
        Self::Identifier(Token::new(TokenKind::Ident, symbol.to_string()))
    }

    /// Creates a unary node.
    #[must_use]
    pub fn prefix(operator: Token, operand: Expression) -> Self {
        Self::Prefix {
            operator,
            operand: Box::new(operand),
        }
    }

    /// Creates a binary node.
    #[must_use]
    pub fn infix(operator: Token, left: Expression, right: Expression) -> Self {
        Self::Infix {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Binding strength of this node's root, for deciding where parentheses go.
    ///
    /// Leaves never need parentheses, so they report the strongest binding.
    #[must_use]
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Number(_) | Self::Identifier(_) => Precedence::Power,
            Self::Prefix { .. } => Precedence::Prefix,
            Self::Infix { operator, .. } => Precedence::of(operator.kind),
        }
    }

    /// Renders the fully tagged form, e.g. `INFIX(* IDENT(x) NUMBER(2))`.
    #[must_use]
    pub fn debug_string(&self) -> String {
        render_expression(self, Style::Debug)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_expression(self, Style::Pretty))
    }
}
