//! Integration tests for sessions

use stepwise_runtime::{RenderOptions, Session};

#[test]
fn statements_accumulate_across_submissions() {
    let mut session = Session::new();
    let steps = ["2x + 3 = 11", "/-3", "/2", "x = 4"];
    let rendered: Vec<String> = steps
        .iter()
        .flat_map(|step| {
            session
                .submit(step)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
        })
        .collect();
    assert_eq!(rendered, vec!["2*x+3=11", "-3", "/2", "x=4"]);
    assert_eq!(session.program().len(), 4);
}

#[test]
fn an_error_does_not_poison_later_lines() {
    let mut session = Session::new();
    assert!(session.submit("/")[0].is_error());
    let added = session.submit("y = 2");
    assert_eq!(added.len(), 1);
    assert!(!added[0].is_error());
    assert_eq!(session.program().errors().count(), 1);
}

#[test]
fn options_select_rendering() {
    let options = RenderOptions {
        debug: true,
        show_stack: false,
    };
    let mut session = Session::with_options(options);
    session.submit("/2");
    assert_eq!(session.render_program(), "ATOM_TRANSFORM(/ NUMBER(2))");
}

#[test]
fn traces_follow_errors() {
    let mut session = Session::with_options(RenderOptions {
        debug: false,
        show_stack: true,
    });
    session.submit("x\n(y");
    let rendered = session.render_program();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "x");
    assert_eq!(lines[1], "error: `Parentheses should close, write: `)``");
    assert!(lines[2..].iter().all(|line| line.starts_with('|')));
}
