//! REPL, CLI, and reporting for Stepwise.
//!
//! This crate provides:
//! - [`Repl`] - Interactive loop over an accumulated document
//! - [`Session`] - The document, its parse, and rendering options
//! - [`Report`] - The per-line JSON report of a document
//! - [`CliConfig`] - Command-line configuration for the `stepwise` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod editor;
pub mod highlight;
pub mod repl;
pub mod report;
pub mod session;

pub use cli::CliConfig;
pub use editor::{FORMULA_NAMES, LineEditor, ReadResult, RustylineEditor, formula_keywords};
pub use highlight::EquationHighlighter;
pub use repl::{COMMANDS, Outcome, Repl, print_error, read_source};
pub use report::{ErrorReport, LineReport, Report};
pub use session::{RenderOptions, Session};
