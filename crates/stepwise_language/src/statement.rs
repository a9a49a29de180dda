//! Statements, one per source line.

use std::fmt;

use crate::expression::Expression;
use crate::pretty::{Style, render_statement};
use crate::token::Token;

/// Width each stack frame is right-aligned to in [`Statement::stack_trace`].
pub const STACK_FRAME_WIDTH: usize = 40;

/// The parse result for one line.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    /// A bare equation or expression.
    Subject(Expression),
    /// An operation applied to both sides of the working equation, written `/...`.
    AtomTransform {
        /// The operation; `/` when the line starts with an operand.
        operator: Token,
        /// The operand of the operation.
        expr: Expression,
    },
    /// A named formula invocation, written `!name a, b`.
    Formula {
        /// The formula name, never split into symbols.
        name: Token,
        /// Comma-separated arguments, possibly none.
        params: Vec<Expression>,
    },
    /// A line that failed to parse.
    LineError {
        /// Human-readable message.
        message: String,
        /// Rendered productions the error passed through, innermost first.
        stack: Vec<String>,
    },
}

impl Statement {
    /// Returns true for [`Statement::LineError`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::LineError { .. })
    }

    /// Stable lowercase name of the variant.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Subject(_) => "subject",
            Self::AtomTransform { .. } => "atom_transform",
            Self::Formula { .. } => "formula",
            Self::LineError { .. } => "error",
        }
    }

    /// Renders the fully tagged form, e.g. `SUBJECT(IDENT(x))`.
    #[must_use]
    pub fn debug_string(&self) -> String {
        render_statement(self, Style::Debug)
    }

    /// Renders the error trace, one frame per line.
    ///
    /// Returns an empty string for statements that parsed.
    #[must_use]
    pub fn stack_trace(&self) -> String {
        let Self::LineError { stack, .. } = self else {
            return String::new();
        };
        stack
            .iter()
            .map(|frame| format!("|{frame:>STACK_FRAME_WIDTH$}   |"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_statement(self, Style::Pretty))
    }
}
