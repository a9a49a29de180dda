//! Integration tests for the REPL

use std::borrow::Cow;

use stepwise_foundation::Result;
use stepwise_runtime::{EquationHighlighter, LineEditor, Outcome, ReadResult, Repl};

/// Scripted editor that replays inputs, then reports EOF.
struct ScriptedEditor {
    inputs: std::vec::IntoIter<ReadResult>,
}

impl ScriptedEditor {
    fn new(inputs: Vec<ReadResult>) -> Self {
        Self {
            inputs: inputs.into_iter(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.inputs.next().unwrap_or(ReadResult::Eof))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn line(text: &str) -> ReadResult {
    ReadResult::Line(text.to_string())
}

#[test]
fn run_survives_interrupts_and_bad_commands() {
    let editor = ScriptedEditor::new(vec![
        line("2x = 4"),
        ReadResult::Interrupted,
        line(":nope"),
        line("/2"),
    ]);
    let mut repl = Repl::with_editor(editor).without_banner().with_prompt("> ");
    repl.run().unwrap();
    assert_eq!(repl.session().program().to_string(), "2*x=4\n/2");
}

#[test]
fn eval_multi_line_input() {
    let mut repl = Repl::with_editor(ScriptedEditor::new(vec![])).without_banner();
    let Outcome::Statements(statements) = repl.eval("x = 1\n@\ny = 2").unwrap() else {
        panic!("expected statements");
    };
    assert_eq!(statements.len(), 3);
    assert!(statements[1].is_error());
}

#[test]
fn help_lists_commands() {
    let mut repl = Repl::with_editor(ScriptedEditor::new(vec![])).without_banner();
    let Outcome::Message(help) = repl.eval(":help").unwrap() else {
        panic!("expected a message");
    };
    for command in stepwise_runtime::COMMANDS {
        assert!(help.contains(command), "missing {command}");
    }
}

#[test]
fn highlighter_paints_equations() {
    let highlighter = EquationHighlighter::new();
    assert!(matches!(highlighter.highlight("", 0), Cow::Borrowed("")));
    let painted = highlighter.highlight("2x + 3 = 11", 0);
    assert!(painted.contains("\x1b["));
}
