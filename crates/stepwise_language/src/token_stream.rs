//! Token stream rewriting for implicit multiplication.
//!
//! The token stream takes the lexer's output and rewrites it in one forward
//! pass before the parser sees it:
//!
//! - identifier runs longer than one character are split into one symbol per
//!   character, joined by `*` (`xyz` becomes `x * y * z`)
//! - a `*` is inserted between adjacent tokens that denote a product, such as
//!   `2x`, `x(` or `)(`
//! - the token right after the formula marker `!` is the formula's name and is
//!   passed through untouched
//!
//! The adjacency test looks at the original, unsplit tokens, so it fires once
//! per boundary no matter how many symbols an identifier became.

use tracing::trace;

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// A cursor over the rewritten token sequence.
#[derive(Clone, Debug)]
pub struct TokenStream {
    /// Rewritten tokens; always ends with EOF.
    tokens: Vec<Token>,
    /// Index of the next token to hand out.
    position: usize,
}

impl TokenStream {
    /// Creates a token stream from lexed tokens, applying the rewrite pass.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: preprocess(tokens),
            position: 0,
        }
    }

    /// Lexes the source and wraps the result in a token stream.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::tokenize_all(source))
    }

    /// Returns the next token and advances.
    ///
    /// Once EOF is reached it is returned forever without advancing.
    pub fn next_token(&mut self) -> Token {
        let Some(token) = self.tokens.get(self.position) else {
            return Token::eof();
        };
        if token.kind != TokenKind::Eof {
            self.position += 1;
        }
        token.clone()
    }

    /// Returns the whole rewritten sequence, including tokens already handed out.
    #[must_use]
    pub fn peek_all(&self) -> &[Token] {
        &self.tokens
    }
}

/// Returns true if a `*` belongs between two adjacent original tokens.
const fn implies_multiplication(left: TokenKind, right: TokenKind) -> bool {
    matches!(
        (left, right),
        (TokenKind::Ident, TokenKind::Number | TokenKind::LParen)
            | (TokenKind::Number, TokenKind::Ident | TokenKind::LParen)
            | (
                TokenKind::RParen,
                TokenKind::Ident | TokenKind::Number | TokenKind::LParen
            )
    )
}

/// Runs the single forward rewrite pass.
fn preprocess(tokens: Vec<Token>) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len() * 2);
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        if token.kind == TokenKind::Eof {
            break;
        }

        if token.kind == TokenKind::Bang {
            output.push(token);
            if let Some(name) = iter.next_if(|next| next.kind != TokenKind::Eof) {
                output.push(name);
            }
            continue;
        }

        let kind = token.kind;
        if kind == TokenKind::Ident && token.literal.chars().count() > 1 {
            trace!(identifier = %token.literal, "splitting identifier into symbols");
            split_symbols(&token.literal, &mut output);
        } else {
            output.push(token);
        }

        if iter
            .peek()
            .is_some_and(|next| implies_multiplication(kind, next.kind))
        {
            trace!(after = %kind, "inserting implicit multiplication");
            output.push(Token::asterisk());
        }
    }

    output.push(Token::eof());
    output
}

/// Expands `xyz` into `x * y * z`.
fn split_symbols(run: &str, output: &mut Vec<Token>) {
    for (i, symbol) in run.chars().enumerate() {
        if i > 0 {
            output.push(Token::asterisk());
        }
        output.push(Token::new(TokenKind::Ident, symbol.to_string()));
    }
}
