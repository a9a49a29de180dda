//! Integration tests for the token-stream rewrite

use stepwise_language::{Lexer, Token, TokenKind, TokenStream};

use crate::render_tokens;

fn rewrite(source: &str) -> String {
    render_tokens(TokenStream::from_source(source).peek_all())
}

// =============================================================================
// Implicit multiplication
// =============================================================================

#[test]
fn number_then_identifier() {
    assert_eq!(rewrite("2x"), "NUMBER(2) * IDENT(x) EOF");
}

#[test]
fn identifier_run_is_split() {
    assert_eq!(rewrite("yx"), "IDENT(y) * IDENT(x) EOF");
}

#[test]
fn every_run_and_boundary_expands() {
    assert_eq!(
        rewrite("a(bcd*4)ef"),
        "IDENT(a) * ( IDENT(b) * IDENT(c) * IDENT(d) * NUMBER(4) ) * IDENT(e) * IDENT(f) EOF"
    );
}

#[test]
fn groups_and_trailing_numbers() {
    assert_eq!(
        rewrite("(x+1)(y-2)3"),
        "( IDENT(x) + NUMBER(1) ) * ( IDENT(y) - NUMBER(2) ) * NUMBER(3) EOF"
    );
}

#[test]
fn identifier_then_number_and_group() {
    assert_eq!(rewrite("x2"), "IDENT(x) * NUMBER(2) EOF");
    assert_eq!(rewrite("x(1)"), "IDENT(x) * ( NUMBER(1) ) EOF");
    assert_eq!(rewrite("2(1)"), "NUMBER(2) * ( NUMBER(1) ) EOF");
}

#[test]
fn explicit_operators_are_untouched() {
    assert_eq!(rewrite("2*x"), "NUMBER(2) * IDENT(x) EOF");
    assert_eq!(rewrite("x - 1"), "IDENT(x) - NUMBER(1) EOF");
}

// =============================================================================
// Formula names
// =============================================================================

#[test]
fn formula_name_survives_but_arguments_split() {
    assert_eq!(rewrite("!formula xy"), "! IDENT(formula) IDENT(x) * IDENT(y) EOF");
}

#[test]
fn not_equals_is_not_a_formula_marker() {
    assert_eq!(rewrite("ab != cd"), "IDENT(a) * IDENT(b) != IDENT(c) * IDENT(d) EOF");
}

// =============================================================================
// Cursor
// =============================================================================

#[test]
fn output_is_never_shorter() {
    for source in ["", "x", "abc(de)2f", "!name ab, 2c", "1 + 2\n3x"] {
        let lexed = Lexer::tokenize_all(source);
        let rewritten = TokenStream::from_source(source);
        assert!(rewritten.peek_all().len() >= lexed.len(), "source: {source}");
    }
}

#[test]
fn cursor_returns_eof_forever() {
    let mut stream = TokenStream::from_source("2x");
    assert_eq!(stream.next_token(), Token::new(TokenKind::Number, "2"));
    assert_eq!(stream.next_token(), Token::asterisk());
    assert_eq!(stream.next_token(), Token::new(TokenKind::Ident, "x"));
    for _ in 0..3 {
        assert_eq!(stream.next_token(), Token::eof());
    }
}
