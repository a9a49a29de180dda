//! Session state for the REPL and batch runs.
//!
//! A session holds one growing document. Each submission appends lines and
//! re-parses the whole document, the way an editor re-checks a file on every
//! change. Because parsing is line-local, the statements of earlier lines
//! never change and the new lines' statements are the tail of the program.

use stepwise_language::pretty::render_statement;
use stepwise_language::{Program, Statement, Style, parse};
use tracing::debug;

use crate::report::Report;

/// How statements are rendered as text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Use the tagged debug form instead of natural notation.
    pub debug: bool,
    /// Print the parser trace under each line error.
    pub show_stack: bool,
}

impl RenderOptions {
    /// The rendering style selected by these options.
    #[must_use]
    pub const fn style(&self) -> Style {
        if self.debug { Style::Debug } else { Style::Pretty }
    }

    /// Renders one statement, with its trace if requested.
    #[must_use]
    pub fn render(&self, statement: &Statement) -> String {
        let mut text = render_statement(statement, self.style());
        if self.show_stack {
            let trace = statement.stack_trace();
            if !trace.is_empty() {
                text.push('\n');
                text.push_str(&trace);
            }
        }
        text
    }

    /// Renders a sequence of statements, one per line.
    #[must_use]
    pub fn render_all(&self, statements: &[Statement]) -> String {
        statements
            .iter()
            .map(|statement| self.render(statement))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// An accumulated document and its parse.
#[derive(Debug, Default)]
pub struct Session {
    /// Lines entered so far.
    lines: Vec<String>,
    /// Parse of `lines`.
    program: Program,
    /// Current rendering options.
    options: RenderOptions,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session with the given rendering options.
    #[must_use]
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Appends input to the document and returns the statements it produced.
    ///
    /// Trailing blank lines of the input are dropped so they cannot turn into
    /// empty-line errors once more text follows.
    pub fn submit(&mut self, input: &str) -> &[Statement] {
        let mut new_lines: Vec<&str> = input.lines().collect();
        while new_lines.last().is_some_and(|line| line.trim().is_empty()) {
            new_lines.pop();
        }
        if new_lines.is_empty() {
            return &[];
        }

        let before = self.program.len();
        self.lines.extend(new_lines.iter().map(ToString::to_string));
        self.program = parse(&self.document());
        debug!(
            added = new_lines.len(),
            statements = self.program.len() - before,
            "re-parsed document"
        );

        &self.program.statements()[before..]
    }

    /// The whole document as one text.
    #[must_use]
    pub fn document(&self) -> String {
        self.lines.join("\n")
    }

    /// The parse of the whole document.
    #[must_use]
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Forgets the document.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.program = Program::new();
    }

    /// Current rendering options.
    #[must_use]
    pub const fn options(&self) -> RenderOptions {
        self.options
    }

    /// Mutable access to the rendering options.
    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    /// Renders the whole document with the current options.
    #[must_use]
    pub fn render_program(&self) -> String {
        self.options.render_all(self.program.statements())
    }

    /// Builds the transport report of the whole document.
    #[must_use]
    pub fn report(&self) -> Report {
        Report::from_program(&self.program)
    }
}
