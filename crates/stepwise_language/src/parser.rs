//! Parser for the Stepwise equation language.
//!
//! The parser pulls tokens from a [`TokenStream`] and produces one
//! [`Statement`] per source line. Expressions are parsed by precedence
//! climbing over two token slots, `current` and `peek`.
//!
//! A production that fails returns a [`ParseError`]; the statement loop skips
//! the rest of the line and records a [`Statement::LineError`] in its place,
//! so one bad line never affects its neighbours.
//!
//! Cursor rules:
//! - an expression production leaves `current` on its last token
//! - a statement production leaves `current` on the line terminator
//! - the statement loop steps over a `NEW_LINE` after every statement

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::expression::Expression;
use crate::precedence::Precedence;
use crate::program::Program;
use crate::statement::Statement;
use crate::token::{Token, TokenKind};
use crate::token_stream::TokenStream;

type ParseResult<T> = std::result::Result<T, ParseError>;

/// Deepest expression nesting a line may use before it is rejected.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser for one document.
pub struct Parser {
    /// Source of rewritten tokens.
    stream: TokenStream,
    /// Token under the cursor.
    current: Token,
    /// Token after `current`.
    peek: Token,
    /// Zero-based index of the line being parsed.
    line: usize,
    /// Expressions currently open on the call stack.
    depth: usize,
}

impl Parser {
    /// Creates a parser with both token slots loaded.
    #[must_use]
    pub fn new(mut stream: TokenStream) -> Self {
        let current = stream.next_token();
        let peek = stream.next_token();
        Self {
            stream,
            current,
            peek,
            line: 0,
            depth: 0,
        }
    }

    /// Parses the whole document.
    ///
    /// Never fails: lines that do not parse become [`Statement::LineError`].
    #[must_use]
    pub fn parse(mut self) -> Program {
        let mut program = Program::new();

        while self.current.kind != TokenKind::Eof {
            let statement = match self.parse_statement() {
                Ok(statement) => {
                    trace!(line = self.line, kind = statement.kind_name(), "parsed statement");
                    statement
                }
                Err(err) => {
                    debug!(line = self.line, message = %err, "recovering from parse error");
                    self.skip_rest_of_line();
                    err.into_statement()
                }
            };
            program.push(statement);

            if self.current.kind == TokenKind::NewLine {
                self.advance();
            }
            self.line += 1;
        }

        program
    }

    /// Advances both token slots by one.
    fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.stream.next_token());
    }

    /// Moves `current` onto the line terminator.
    fn skip_rest_of_line(&mut self) {
        while !self.current.is_line_end() {
            self.advance();
        }
    }

    /// Requires the token after a complete expression to end the line, then steps onto it.
    fn expect_line_end(&mut self) -> ParseResult<()> {
        if self.peek.is_line_end() {
            self.advance();
            return Ok(());
        }
        let err = if self.peek.kind == TokenKind::Illegal {
            ParseError::illegal_character(&self.peek)
        } else {
            ParseError::extra_character(&self.peek)
        };
        Err(err.frame("expect_line_end", vec![self.peek.clone()]))
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        let start = self.current.clone();
        let result = match start.kind {
            TokenKind::Illegal => Err(ParseError::illegal_character(&start)),
            TokenKind::Slash => self.parse_atom_transform(),
            TokenKind::Bang => self.parse_formula(),
            _ => self.parse_subject(),
        };
        result.map_err(|err| err.frame("parse_statement", vec![start]))
    }

    /// `expr`
    fn parse_subject(&mut self) -> ParseResult<Statement> {
        let expr = self
            .parse_expression(Precedence::Lowest)
            .and_then(|expr| self.expect_line_end().map(|()| expr))
            .map_err(|err| err.frame("parse_subject", vec![]))?;
        Ok(Statement::Subject(expr))
    }

    /// `/op expr` or `/expr`
    fn parse_atom_transform(&mut self) -> ParseResult<Statement> {
        self.advance();
        if self.current.is_line_end() {
            return Err(ParseError::empty_line().frame("parse_atom_transform", vec![]));
        }

        let result = match self.current.kind {
            TokenKind::Plus | TokenKind::Minus | TokenKind::Asterisk | TokenKind::Caret => {
                self.parse_prefix_atom()
            }
            TokenKind::Number | TokenKind::Ident => self.parse_prefix_atom_div(),
            _ => Err(ParseError::error_near(&self.current)),
        };
        result.map_err(|err| err.frame("parse_atom_transform", vec![]))
    }

    /// `/+ expr`: the operator is written out.
    fn parse_prefix_atom(&mut self) -> ParseResult<Statement> {
        let operator = self.current.clone();
        self.advance();
        let expr = self
            .parse_expression(Precedence::Lowest)
            .and_then(|expr| self.expect_line_end().map(|()| expr))
            .map_err(|err| err.frame("parse_prefix_atom", vec![operator.clone()]))?;
        Ok(Statement::AtomTransform { operator, expr })
    }

    /// `/2`: an operand alone means division.
    fn parse_prefix_atom_div(&mut self) -> ParseResult<Statement> {
        let expr = self
            .parse_expression(Precedence::Lowest)
            .and_then(|expr| self.expect_line_end().map(|()| expr))
            .map_err(|err| err.frame("parse_prefix_atom_div", vec![]))?;
        Ok(Statement::AtomTransform {
            operator: Token::slash(),
            expr,
        })
    }

    /// `!name expr, expr, ...`
    fn parse_formula(&mut self) -> ParseResult<Statement> {
        self.advance();
        if self.current.is_line_end() {
            return Err(ParseError::missing_formula_name().frame("parse_formula", vec![]));
        }
        let name = self.current.clone();
        self.advance();

        let mut params = Vec::new();
        while !self.current.is_line_end() {
            let param = self
                .parse_expression(Precedence::Lowest)
                .map_err(|err| err.frame("parse_formula", vec![name.clone()]))?;
            params.push(param);

            if self.peek.kind == TokenKind::Comma {
                self.advance();
                self.advance();
                if self.current.is_line_end() {
                    return Err(ParseError::trailing_comma()
                        .frame("parse_formula", vec![name.clone()]));
                }
            } else {
                self.expect_line_end()
                    .map_err(|err| err.frame("parse_formula", vec![name.clone()]))?;
            }
        }

        Ok(Statement::Formula { name, params })
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// Parses an expression whose operators all bind tighter than `precedence`.
    ///
    /// Every nested group, negation and right operand passes through here, so
    /// the depth check bounds the recursion of the whole expression grammar.
    fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::nested_too_deeply()
                .frame("parse_expression", vec![self.current.clone()]));
        }
        self.depth += 1;
        let result = self.parse_expression_at_depth(precedence);
        self.depth -= 1;
        result
    }

    fn parse_expression_at_depth(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        let mut left = self
            .parse_prefix()
            .map_err(|err| err.frame("parse_expression", vec![self.current.clone()]))?;

        while !self.peek.is_line_end() && precedence < Precedence::of(self.peek.kind) {
            self.advance();
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    fn parse_prefix(&mut self) -> ParseResult<Expression> {
        match self.current.kind {
            TokenKind::Ident => self.parse_identifier(),
            TokenKind::Number => self.parse_number(),
            TokenKind::Minus => self.parse_negation(),
            TokenKind::LParen => self.parse_group(),
            TokenKind::Illegal => Err(ParseError::illegal_character(&self.current)),
            _ => Err(ParseError::error_near(&self.current)),
        }
    }

    fn parse_identifier(&self) -> ParseResult<Expression> {
        if !self.current.is_symbol() {
            return Err(ParseError::error_near(&self.current)
                .frame("parse_identifier", vec![self.current.clone()]));
        }
        Ok(Expression::Identifier(self.current.clone()))
    }

    fn parse_number(&self) -> ParseResult<Expression> {
        self.current
            .literal
            .parse::<f64>()
            .map(Expression::Number)
            .map_err(|_| {
                ParseError::bad_number(&self.current)
                    .frame("parse_number", vec![self.current.clone()])
            })
    }

    /// `-expr`, binding looser than `^` only.
    fn parse_negation(&mut self) -> ParseResult<Expression> {
        let operator = self.current.clone();
        self.advance();
        let operand = self
            .parse_expression(Precedence::Prefix)
            .map_err(|err| err.frame("parse_negation", vec![operator.clone()]))?;
        Ok(Expression::prefix(operator, operand))
    }

    /// `( expr )`
    fn parse_group(&mut self) -> ParseResult<Expression> {
        self.advance();
        let inner = self
            .parse_expression(Precedence::Lowest)
            .map_err(|err| err.frame("parse_group", vec![]))?;
        if self.peek.kind != TokenKind::RParen {
            return Err(ParseError::unclosed_group().frame("parse_group", vec![self.peek.clone()]));
        }
        self.advance();
        Ok(inner)
    }

    /// Folds `left op right`; `current` is the operator.
    fn parse_infix(&mut self, left: Expression) -> ParseResult<Expression> {
        let operator = self.current.clone();
        let precedence = Precedence::of(operator.kind);
        self.advance();
        let right = self
            .parse_expression(precedence)
            .map_err(|err| err.frame("parse_infix", vec![operator.clone()]))?;
        Ok(Expression::infix(operator, left, right))
    }
}
