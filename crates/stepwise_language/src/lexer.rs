//! Lexer for the Stepwise equation language.
//!
//! The lexer converts source text into a flat sequence of tokens. It never
//! fails: characters it cannot classify become [`TokenKind::Illegal`] tokens
//! and are reported later by the parser, one line at a time.

use crate::token::{Token, TokenKind};

/// Lexer for Stepwise source text.
///
/// The lexer iterates through source text and produces tokens. Letters are
/// consumed greedily into one identifier here; splitting them into
/// single-character symbols is the token stream's job.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Once the input is exhausted every call returns an EOF token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(c) = self.peek_char() else {
            return Token::eof();
        };

        match c {
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Asterisk),
            '/' => self.single(TokenKind::Slash),
            '^' => self.single(TokenKind::Caret),
            '=' => self.single(TokenKind::Equals),
            ',' => self.single(TokenKind::Comma),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '!' => self.with_equals(TokenKind::Bang, TokenKind::NotEquals),
            '<' => self.with_equals(TokenKind::Lt, TokenKind::Le),
            '>' => self.with_equals(TokenKind::Gt, TokenKind::Ge),
            '\n' => {
                self.advance();
                Token::new(TokenKind::NewLine, "\\n")
            }
            c if is_letter(c) => self.scan_ident(),
            c if c.is_ascii_digit() => self.scan_number(),
            c => {
                self.advance();
                Token::new(TokenKind::Illegal, c.to_string())
            }
        }
    }

    /// Tokenizes all source and returns a vector of tokens.
    ///
    /// The last token is always the synthetic EOF.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks at the character after the next one.
    fn peek_second(&self) -> Option<char> {
        self.rest.chars().nth(1)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
        }
    }

    /// Skips insignificant whitespace. Newlines are significant.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if matches!(c, ' ' | '\t' | '\r') {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Consumes one character as a token of the given kind.
    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        self.advance();
        Token::new(kind, &self.source[start..self.position])
    }

    /// Consumes a one-character operator, or its two-character form when `=` follows.
    fn with_equals(&mut self, short: TokenKind, long: TokenKind) -> Token {
        if self.peek_second() == Some('=') {
            let start = self.position;
            self.advance();
            self.advance();
            Token::new(long, &self.source[start..self.position])
        } else {
            self.single(short)
        }
    }

    /// Scans a maximal run of letters and underscores.
    fn scan_ident(&mut self) -> Token {
        let start = self.position;
        while self.peek_char().is_some_and(is_letter) {
            self.advance();
        }
        Token::new(TokenKind::Ident, &self.source[start..self.position])
    }

    /// Scans a maximal run of digits containing at most one decimal point.
    fn scan_number(&mut self) -> Token {
        let start = self.position;
        let mut seen_dot = false;
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                self.advance();
            } else {
                break;
            }
        }
        Token::new(TokenKind::Number, &self.source[start..self.position])
    }
}

/// Returns true if `c` can appear in an identifier run.
fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}
