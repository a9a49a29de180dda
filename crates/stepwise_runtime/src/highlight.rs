//! Syntax highlighting for the REPL.

use std::borrow::Cow;
use std::iter::Peekable;
use std::str::Chars;

const RESET: &str = "\x1b[0m";
const NUMBER: &str = "\x1b[35m";
const OPERATOR: &str = "\x1b[1m";
const COMPARATOR: &str = "\x1b[33m";
const ATOM_MARKER: &str = "\x1b[1;36m";
const FORMULA: &str = "\x1b[1;32m";
const COMMAND: &str = "\x1b[34m";
const ILLEGAL: &str = "\x1b[1;31m";

/// Highlighter for equation syntax.
pub struct EquationHighlighter;

impl EquationHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlights a line of input.
    ///
    /// A leading `/` is the atom-transform marker, `!name` is a formula name,
    /// and anything the lexer would reject is shown in red.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.is_empty() {
            return Cow::Borrowed(line);
        }
        if line.trim_start().starts_with(':') {
            return Cow::Owned(paint(COMMAND, line));
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.chars().peekable();
        let mut at_line_start = true;

        while let Some(c) = chars.next() {
            match c {
                ' ' | '\t' | '\r' => result.push(c),

                '/' if at_line_start => push_painted(&mut result, ATOM_MARKER, "/"),

                '!' if chars.peek() == Some(&'=') => {
                    chars.next();
                    push_painted(&mut result, COMPARATOR, "!=");
                }

                '!' => {
                    let mut name = String::from("!");
                    take_while(&mut chars, &mut name, |n| n.is_ascii_alphabetic() || n == '_');
                    push_painted(&mut result, FORMULA, &name);
                }

                '<' | '>' => {
                    let mut op = c.to_string();
                    if let Some(eq) = chars.next_if_eq(&'=') {
                        op.push(eq);
                    }
                    push_painted(&mut result, COMPARATOR, &op);
                }

                '=' => push_painted(&mut result, COMPARATOR, "="),

                '+' | '-' | '*' | '/' | '^' | '(' | ')' | ',' => {
                    push_painted(&mut result, OPERATOR, c.encode_utf8(&mut [0; 4]));
                }

                c if c.is_ascii_digit() => {
                    let mut number = c.to_string();
                    let mut seen_dot = false;
                    take_while(&mut chars, &mut number, |n| {
                        n.is_ascii_digit() || (n == '.' && !std::mem::replace(&mut seen_dot, true))
                    });
                    push_painted(&mut result, NUMBER, &number);
                }

                c if c.is_ascii_alphabetic() || c == '_' => result.push(c),

                c => push_painted(&mut result, ILLEGAL, c.encode_utf8(&mut [0; 4])),
            }

            if !matches!(c, ' ' | '\t' | '\r') {
                at_line_start = false;
            }
        }

        Cow::Owned(result)
    }
}

impl Default for EquationHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

fn paint(color: &str, text: &str) -> String {
    format!("{color}{text}{RESET}")
}

fn push_painted(out: &mut String, color: &str, text: &str) {
    out.push_str(color);
    out.push_str(text);
    out.push_str(RESET);
}

fn take_while(
    chars: &mut Peekable<Chars<'_>>,
    out: &mut String,
    mut pred: impl FnMut(char) -> bool,
) {
    while let Some(c) = chars.next_if(|&c| pred(c)) {
        out.push(c);
    }
}
