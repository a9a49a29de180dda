//! Integration tests for Layer 1: Language
//!
//! Tests for the lexer, token-stream rewrite, parser, and printers.

mod lexer;
mod parser;
mod token_stream;

/// Renders tokens as a space-separated line for compact golden vectors.
pub fn render_tokens(tokens: &[stepwise_language::Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
