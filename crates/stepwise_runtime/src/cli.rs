//! Command-line configuration.

use std::path::PathBuf;

use stepwise_foundation::{Error, Result};

use crate::session::RenderOptions;

/// CLI configuration parsed from arguments.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Documents to parse, in order; `-` is stdin.
    pub files: Vec<PathBuf>,
    /// Exit after the files instead of starting the REPL.
    pub batch_mode: bool,
    /// Print the JSON report instead of rendered lines.
    pub json: bool,
    /// Use the tagged debug rendering.
    pub debug: bool,
    /// Print parser traces under line errors.
    pub trace: bool,
    /// Log filter overriding `RUST_LOG`.
    pub log_filter: Option<String>,
    /// `-h` / `--help` was given.
    pub show_help: bool,
    /// `-V` / `--version` was given.
    pub show_version: bool,
}

impl CliConfig {
    /// Parses arguments, skipping the program name.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error for unknown options or a missing
    /// `--log` value.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut config = Self::default();

        let mut args = args.iter().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-V" | "--version" => config.show_version = true,
                "-b" | "--batch" => config.batch_mode = true,
                "--json" => config.json = true,
                "--debug" => config.debug = true,
                "--trace" => config.trace = true,
                "--log" => {
                    let filter = args
                        .next()
                        .ok_or_else(|| Error::invalid_argument("--log requires a filter"))?;
                    config.log_filter = Some(filter.clone());
                }
                "-" => config.files.push(PathBuf::from("-")),
                option if option.starts_with('-') => {
                    return Err(Error::invalid_argument(format!("unknown option: {option}")));
                }
                path => config.files.push(PathBuf::from(path)),
            }
        }

        Ok(config)
    }

    /// Rendering options selected by the flags.
    #[must_use]
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            debug: self.debug,
            show_stack: self.trace,
        }
    }

    /// Returns true if the REPL should not start.
    ///
    /// A JSON report is a batch artifact, so `--json` implies `--batch`.
    #[must_use]
    pub const fn is_batch(&self) -> bool {
        self.batch_mode || self.json
    }
}
