//! The interactive REPL.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use stepwise_foundation::{Error, Result};
use stepwise_language::Statement;
use tracing::{debug, info};

use crate::editor::{LineEditor, ReadResult, RustylineEditor, formula_keywords};
use crate::session::Session;

/// REPL commands, offered as completions.
pub const COMMANDS: &[&str] = &[
    ":help", ":program", ":clear", ":debug", ":trace", ":json", ":quit",
];

/// What a single input produced.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Statements parsed from the input.
    Statements(Vec<Statement>),
    /// Text produced by a command.
    Message(String),
    /// The user asked to leave.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The accumulated document.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E) -> Self {
        let mut keywords = formula_keywords();
        keywords.extend(COMMANDS.iter().map(ToString::to_string));
        editor.set_keywords(keywords);

        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "= ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Outcome::Quit) => return Ok(false),
            Ok(outcome) => self.print_outcome(&outcome),
            Err(e) => print_error(&e),
        }
        Ok(true)
    }

    /// Evaluates one input: a command or document lines.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands or when a report cannot be encoded.
    pub fn eval(&mut self, input: &str) -> Result<Outcome> {
        let trimmed = input.trim();
        if trimmed.starts_with(':') {
            return self.command(trimmed);
        }

        debug!(input, "evaluating input");
        Ok(Outcome::Statements(self.session.submit(input).to_vec()))
    }

    /// Parses a file or stdin (`-`) into the session.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the source cannot be read.
    pub fn eval_file(&mut self, path: &Path) -> Result<Vec<Statement>> {
        let source = read_source(path)?;
        info!(path = %path.display(), bytes = source.len(), "loaded document");
        Ok(self.session.submit(&source).to_vec())
    }

    fn command(&mut self, command: &str) -> Result<Outcome> {
        let outcome = match command {
            ":help" | ":h" => Outcome::Message(help_text()),
            ":program" | ":p" => Outcome::Message(self.session.render_program()),
            ":clear" => {
                self.session.clear();
                Outcome::Message("Document cleared.".to_string())
            }
            ":debug" => {
                let options = self.session.options_mut();
                options.debug = !options.debug;
                Outcome::Message(format!("Debug rendering {}.", on_off(options.debug)))
            }
            ":trace" => {
                let options = self.session.options_mut();
                options.show_stack = !options.show_stack;
                Outcome::Message(format!("Stack traces {}.", on_off(options.show_stack)))
            }
            ":json" => Outcome::Message(self.session.report().to_json()?),
            ":quit" | ":q" => Outcome::Quit,
            other => {
                return Err(Error::invalid_argument(format!(
                    "unknown command: {other} (try :help)"
                )));
            }
        };
        Ok(outcome)
    }

    fn print_outcome(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Statements(statements) => {
                let options = self.session.options();
                for statement in statements {
                    let text = options.render(statement);
                    if statement.is_error() {
                        println!("\x1b[31m{text}\x1b[0m");
                    } else {
                        println!("\x1b[1m{text}\x1b[0m");
                    }
                }
            }
            Outcome::Message(text) if !text.is_empty() => println!("{text}"),
            Outcome::Message(_) | Outcome::Quit => {}
        }
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mStepwise\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Enter equations, `/op` steps and `!formula` lines. Type :help for commands.\n");
        let _ = io::stdout().flush();
    }
}

/// Reads a document from a path, or from stdin for `-`.
///
/// # Errors
///
/// Returns an I/O error naming the path.
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| Error::io(path, &e))?;
        return Ok(source);
    }
    fs::read_to_string(path).map_err(|e| Error::io(path, &e))
}

/// Prints an error to stderr.
pub fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

const fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

fn help_text() -> String {
    "\
Lines:
  2x + 3 = 11        an equation or expression
  /-3  /*2  /2       apply an operation to both sides (a bare operand divides)
  !name a, b         invoke a formula with arguments

Commands:
  :help              show this help
  :program           re-render the whole document
  :clear             forget the document
  :debug             toggle tagged rendering
  :trace             toggle parser traces under errors
  :json              print the document report as JSON
  :quit              leave (or Ctrl+D)"
        .to_string()
}
