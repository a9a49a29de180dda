//! Integration tests for the JSON report

use serde_json::Value;
use stepwise_language::parse;
use stepwise_runtime::Report;

#[test]
fn report_transports_every_line() {
    let program = parse("2x + 3 = 11\n/+\n!formula a, b");
    let json = Report::from(&program).to_json().unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    let lines = value["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(value["errors"], 1);

    assert_eq!(lines[0]["line"], 1);
    assert_eq!(lines[0]["rendered"], "2*x+3=11");
    assert_eq!(lines[1]["kind"], "error");
    assert_eq!(lines[1]["error"]["message"], "Error near: `\\n`");
    assert_eq!(lines[2]["rendered"], "formula a, b");
    assert_eq!(lines[2]["debug"], "FORMULA(formula [IDENT(a), IDENT(b)])");
}

#[test]
fn error_stack_is_innermost_first() {
    let report = Report::from_program(&parse("(x"));
    let stack = &report.lines[0].error.as_ref().unwrap().stack;
    assert_eq!(stack.first().map(String::as_str), Some("parse_group(EOF)"));
    assert_eq!(stack.last().map(String::as_str), Some("parse_statement(()"));
}
