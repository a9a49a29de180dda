//! Parse errors with a call trace.
//!
//! A [`ParseError`] is created where a production fails. Each enclosing
//! production adds one [`StackFrame`] while the error travels back up, so the
//! statement loop receives the trace innermost first.

use std::fmt;

use thiserror::Error;

use crate::statement::Statement;
use crate::token::Token;

/// A failure to parse one line.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message}")]
pub struct ParseError {
    /// Human-readable message.
    pub message: String,
    /// Productions the error passed through, innermost first.
    pub stack: Vec<StackFrame>,
}

impl ParseError {
    /// Creates an error with an empty trace.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: Vec::new(),
        }
    }

    /// Appends a frame for the production the error is leaving.
    #[must_use]
    pub fn frame(mut self, name: &'static str, args: Vec<Token>) -> Self {
        self.stack.push(StackFrame { name, args });
        self
    }

    /// `Illegal character: <literal>`
    #[must_use]
    pub fn illegal_character(token: &Token) -> Self {
        Self::new(format!("Illegal character: {}", token.literal))
    }

    /// ``Error near: `<literal>` ``
    #[must_use]
    pub fn error_near(token: &Token) -> Self {
        Self::new(format!("Error near: `{}`", token.literal))
    }

    /// Raised when a `/` line has nothing after the marker.
    #[must_use]
    pub fn empty_line() -> Self {
        Self::new("Empty line")
    }

    /// Raised when an expression nests past the parser's depth limit.
    #[must_use]
    pub fn nested_too_deeply() -> Self {
        Self::new("Expression nested too deeply")
    }

    /// Raised when a group is not closed.
    #[must_use]
    pub fn unclosed_group() -> Self {
        Self::new("Parentheses should close, write: `)`")
    }

    /// Raised when a number literal does not parse as a float.
    #[must_use]
    pub fn bad_number(token: &Token) -> Self {
        Self::new(format!("Parsing number error for: {}", token.literal))
    }

    /// Raised when a complete expression is followed by more input on its line.
    #[must_use]
    pub fn extra_character(token: &Token) -> Self {
        Self::new(format!(
            "Extra character: `{}` after the expression. Maybe move to next line?",
            token.literal
        ))
    }

    /// Raised when `!` is not followed by a name.
    #[must_use]
    pub fn missing_formula_name() -> Self {
        Self::new("Formula name expected after `!`")
    }

    /// Raised when a formula argument list ends with `,`.
    #[must_use]
    pub fn trailing_comma() -> Self {
        Self::new("Expected expression after `,`")
    }

    /// Converts the error into the statement recorded for its line.
    #[must_use]
    pub fn into_statement(self) -> Statement {
        Statement::LineError {
            message: self.message,
            stack: self.stack.iter().map(ToString::to_string).collect(),
        }
    }
}

/// One production in a [`ParseError`] trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackFrame {
    /// Name of the production.
    pub name: &'static str,
    /// Tokens the production was looking at.
    pub args: Vec<Token>,
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}
