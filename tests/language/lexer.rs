//! Integration tests for the lexer

use stepwise_language::{Lexer, Token, TokenKind};

use crate::render_tokens;

fn lex(source: &str) -> String {
    render_tokens(&Lexer::tokenize_all(source))
}

#[test]
fn equation_line() {
    assert_eq!(
        lex("2x + 3.5 = 11"),
        "NUMBER(2) IDENT(x) + NUMBER(3.5) = NUMBER(11) EOF"
    );
}

#[test]
fn comparators_use_lookahead() {
    assert_eq!(lex("a!=b<=c>=d"), "IDENT(a) != IDENT(b) <= IDENT(c) >= IDENT(d) EOF");
    assert_eq!(lex("! < >"), "! < > EOF");
}

#[test]
fn identifier_runs_are_greedy() {
    assert_eq!(lex("power_of_a_power"), "IDENT(power_of_a_power) EOF");
}

#[test]
fn second_dot_ends_a_number() {
    let tokens = Lexer::tokenize_all("1.2.3");
    assert_eq!(tokens[0], Token::new(TokenKind::Number, "1.2"));
    assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "."));
    assert_eq!(tokens[2], Token::new(TokenKind::Number, "3"));
}

#[test]
fn newlines_are_tokens_and_blanks_are_not() {
    assert_eq!(lex(" x\t\r\n y "), "IDENT(x) NEW_LINE IDENT(y) EOF");
}

#[test]
fn unknown_characters_are_illegal() {
    assert_eq!(lex("x@#"), "IDENT(x) ILLEGAL(@) ILLEGAL(#) EOF");
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(Lexer::tokenize_all(""), vec![Token::eof()]);
}
