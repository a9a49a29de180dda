//! JSON report of a parsed document.
//!
//! The report is the transport shape handed to a front end: one entry per
//! source line with both renderings and, for failed lines, the error.

use serde::Serialize;
use stepwise_foundation::{Error, Result};
use stepwise_language::{Program, Statement};

/// Per-line report of a program.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    /// One entry per source line.
    pub lines: Vec<LineReport>,
    /// Number of lines that failed to parse.
    pub errors: usize,
}

/// Report entry for one line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineReport {
    /// One-based line number.
    pub line: usize,
    /// `subject`, `atom_transform`, `formula` or `error`.
    pub kind: &'static str,
    /// Natural rendering.
    pub rendered: String,
    /// Tagged rendering.
    pub debug: String,
    /// The failure, for lines that did not parse.
    pub error: Option<ErrorReport>,
}

/// A line failure.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorReport {
    /// Human-readable message.
    pub message: String,
    /// Parser trace, innermost first.
    pub stack: Vec<String>,
}

impl Report {
    /// Builds the report of a program.
    #[must_use]
    pub fn from_program(program: &Program) -> Self {
        let lines: Vec<LineReport> = program
            .iter()
            .enumerate()
            .map(|(index, statement)| LineReport::new(index + 1, statement))
            .collect();
        let errors = lines.iter().filter(|line| line.error.is_some()).count();
        Self { lines, errors }
    }

    /// Returns true if any line failed to parse.
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Encodes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::serialization(e.to_string()))
    }
}

impl From<&Program> for Report {
    fn from(program: &Program) -> Self {
        Self::from_program(program)
    }
}

impl LineReport {
    fn new(line: usize, statement: &Statement) -> Self {
        let error = match statement {
            Statement::LineError { message, stack } => Some(ErrorReport {
                message: message.clone(),
                stack: stack.clone(),
            }),
            _ => None,
        };
        Self {
            line,
            kind: statement.kind_name(),
            rendered: statement.to_string(),
            debug: statement.debug_string(),
            error,
        }
    }
}
