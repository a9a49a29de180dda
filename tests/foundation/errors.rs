//! Integration tests for Error types

use std::io;
use std::path::Path;

use stepwise_foundation::{Error, ErrorKind, Result};

#[test]
fn io_error_names_the_path() {
    let source = io::Error::new(io::ErrorKind::NotFound, "no such file");
    let err = Error::io(Path::new("steps.eq"), &source);
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
    let msg = err.to_string();
    assert!(msg.contains("steps.eq"));
    assert!(msg.contains("no such file"));
}

#[test]
fn invalid_argument_display() {
    let err = Error::invalid_argument("unknown option: --nope");
    assert_eq!(err.to_string(), "invalid argument: unknown option: --nope");
}

#[test]
fn editor_and_serialization_kinds() {
    assert!(matches!(Error::editor("tty gone").kind, ErrorKind::Editor(_)));
    assert!(matches!(
        Error::serialization("bad float").kind,
        ErrorKind::Serialization(_)
    ));
}

#[test]
fn question_mark_propagates() {
    fn read(path: &str) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| Error::io(Path::new(path), &e))
    }

    let err = read("/nonexistent/stepwise.eq").unwrap_err();
    assert!(err.to_string().starts_with("failed to read /nonexistent/stepwise.eq"));
}
