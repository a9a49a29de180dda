//! Lexer, token-stream rewriter, and statement parser for Stepwise.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of equation text
//! - [`TokenStream`] - Identifier splitting and implicit multiplication
//! - [`Parser`] - Precedence climbing into [`Statement`]s, one per line
//! - [`pretty`] - Natural and tagged renderings of the tree
//!
//! # Example
//!
//! ```
//! use stepwise_language::{Statement, parse};
//!
//! let program = parse("2x = 4\n/2\n!formula x, y");
//! assert_eq!(program.len(), 3);
//! assert_eq!(program.to_string(), "2*x=4\n/2\nformula x, y");
//! assert!(matches!(program.statements()[1], Statement::AtomTransform { .. }));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod expression;
pub mod lexer;
pub mod parser;
pub mod precedence;
pub mod pretty;
pub mod program;
pub mod statement;
pub mod token;
pub mod token_stream;


pub use error::{ParseError, StackFrame};
pub use expression::Expression;
pub use lexer::Lexer;
pub use parser::{MAX_NESTING_DEPTH, Parser};
pub use precedence::Precedence;
pub use pretty::Style;
pub use program::Program;
pub use statement::{STACK_FRAME_WIDTH, Statement};
pub use token::{Token, TokenKind};
pub use token_stream::TokenStream;

/// Parses a document in one call.
///
/// Runs the lexer, the token-stream rewrite and the parser in turn.
#[must_use]
pub fn parse(source: &str) -> Program {
    Parser::new(TokenStream::from_source(source)).parse()
}
