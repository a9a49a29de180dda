//! Rendering of expressions and statements.
//!
//! Two styles are supported. The pretty style is natural notation with the
//! fewest parentheses that keep the tree shape, so its output parses back to
//! the same tree. The debug style tags every node and is unambiguous.
//!
//! # Example
//!
//! ```
//! use stepwise_language::{parse, pretty::{Style, render_program}};
//!
//! let program = parse("x*2=3");
//! assert_eq!(render_program(&program, Style::Pretty), "x*2=3");
//! assert_eq!(
//!     render_program(&program, Style::Debug),
//!     "SUBJECT(INFIX(= INFIX(* IDENT(x) NUMBER(2)) NUMBER(3)))"
//! );
//! ```

use stepwise_foundation::format_number;

use crate::expression::Expression;
use crate::precedence::Precedence;
use crate::program::Program;
use crate::statement::Statement;

/// Rendering style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    /// Natural notation, e.g. `x*2=3`.
    #[default]
    Pretty,
    /// Tagged notation, e.g. `INFIX(* IDENT(x) NUMBER(2))`.
    Debug,
}

/// Renders an expression.
#[must_use]
pub fn render_expression(expr: &Expression, style: Style) -> String {
    let mut printer = PrettyPrinter::new(style);
    printer.print_expression(expr);
    printer.output
}

/// Renders a statement.
#[must_use]
pub fn render_statement(statement: &Statement, style: Style) -> String {
    let mut printer = PrettyPrinter::new(style);
    printer.print_statement(statement);
    printer.output
}

/// Renders every statement of a program, one per line.
#[must_use]
pub fn render_program(program: &Program, style: Style) -> String {
    program
        .iter()
        .map(|statement| render_statement(statement, style))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Which side of its parent an operand sits on.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Printer state.
struct PrettyPrinter {
    style: Style,
    output: String,
}

impl PrettyPrinter {
    fn new(style: Style) -> Self {
        Self {
            style,
            output: String::new(),
        }
    }

    fn print_statement(&mut self, statement: &Statement) {
        match self.style {
            Style::Pretty => self.print_statement_pretty(statement),
            Style::Debug => self.print_statement_debug(statement),
        }
    }

    fn print_expression(&mut self, expr: &Expression) {
        match self.style {
            Style::Pretty => self.print_pretty(expr),
            Style::Debug => self.print_debug(expr),
        }
    }

    fn print_statement_pretty(&mut self, statement: &Statement) {
        match statement {
            Statement::Subject(expr) => self.print_pretty(expr),
            Statement::AtomTransform { operator, expr } => {
                self.output.push_str(&operator.literal);
                self.print_pretty(expr);
            }
            Statement::Formula { name, params } => {
                self.output.push_str(&name.literal);
                if !params.is_empty() {
                    self.output.push(' ');
                    self.print_params(params);
                }
            }
            Statement::LineError { message, .. } => {
                self.output.push_str("error: `");
                self.output.push_str(message);
                self.output.push('`');
            }
        }
    }

    fn print_statement_debug(&mut self, statement: &Statement) {
        match statement {
            Statement::Subject(expr) => {
                self.output.push_str("SUBJECT(");
                self.print_debug(expr);
                self.output.push(')');
            }
            Statement::AtomTransform { operator, expr } => {
                self.output.push_str("ATOM_TRANSFORM(");
                self.output.push_str(&operator.literal);
                self.output.push(' ');
                self.print_debug(expr);
                self.output.push(')');
            }
            Statement::Formula { name, params } => {
                self.output.push_str("FORMULA(");
                self.output.push_str(&name.literal);
                self.output.push_str(" [");
                self.print_params(params);
                self.output.push_str("])");
            }
            Statement::LineError { message, .. } => {
                self.output.push_str("LINE_ERROR(");
                self.output.push_str(message);
                self.output.push(')');
            }
        }
    }

    fn print_params(&mut self, params: &[Expression]) {
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.print_expression(param);
        }
    }

    fn print_debug(&mut self, expr: &Expression) {
        match expr {
            Expression::Number(value) => {
                self.output.push_str("NUMBER(");
                self.output.push_str(&format_number(*value));
                self.output.push(')');
            }
            Expression::Identifier(token) => {
                self.output.push_str("IDENT(");
                self.output.push_str(&token.literal);
                self.output.push(')');
            }
            Expression::Prefix { operator, operand } => {
                self.output.push_str("PREFIX(");
                self.output.push_str(&operator.literal);
                self.output.push(' ');
                self.print_debug(operand);
                self.output.push(')');
            }
            Expression::Infix {
                operator,
                left,
                right,
            } => {
                self.output.push_str("INFIX(");
                self.output.push_str(&operator.literal);
                self.output.push(' ');
                self.print_debug(left);
                self.output.push(' ');
                self.print_debug(right);
                self.output.push(')');
            }
        }
    }

    fn print_pretty(&mut self, expr: &Expression) {
        match expr {
            Expression::Number(value) => self.output.push_str(&format_number(*value)),
            Expression::Identifier(token) => self.output.push_str(&token.literal),
            Expression::Prefix { operator, operand } => {
                self.output.push_str(&operator.literal);
                // The operand was parsed at prefix strength: only `^` binds tighter.
                self.print_grouped(operand, operand.precedence() < Precedence::Power);
            }
            Expression::Infix {
                operator,
                left,
                right,
            } => {
                let parent = Precedence::of(operator.kind);
                self.print_grouped(left, needs_parens(left, parent, Side::Left));
                self.output.push_str(&operator.literal);
                self.print_grouped(right, needs_parens(right, parent, Side::Right));
            }
        }
    }

    fn print_grouped(&mut self, expr: &Expression, grouped: bool) {
        if grouped {
            self.output.push('(');
            self.print_pretty(expr);
            self.output.push(')');
        } else {
            self.print_pretty(expr);
        }
    }
}

/// Decides whether an infix operand must be parenthesized.
///
/// Operators of equal strength associate to the left, so an equal-strength
/// child needs parentheses only on the right.
fn needs_parens(child: &Expression, parent: Precedence, side: Side) -> bool {
    match child {
        Expression::Number(_) | Expression::Identifier(_) => false,
        // `-x^2` reads as `-(x^2)`.
        Expression::Prefix { .. } => side == Side::Left && parent > Precedence::Prefix,
        Expression::Infix {
            operator, right, ..
        } => {
            let strength = Precedence::of(operator.kind);
            strength < parent
                || (strength == parent && side == Side::Right)
                // `x^-a^b` reads as `x^-(a^b)`.
                || (side == Side::Left
                    && parent > Precedence::Prefix
                    && matches!(**right, Expression::Prefix { .. }))
        }
    }
}
