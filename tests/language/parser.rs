//! Integration tests for the parser
//!
//! Tests parsing of equation documents into statements.

use stepwise_language::pretty::{Style, render_program};
use stepwise_language::{Expression, MAX_NESTING_DEPTH, STACK_FRAME_WIDTH, Statement, parse};

fn debug(source: &str) -> String {
    render_program(&parse(source), Style::Debug)
}

fn message(statement: &Statement) -> &str {
    match statement {
        Statement::LineError { message, .. } => message,
        other => panic!("expected a line error, got {other:?}"),
    }
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn precedence_golden() {
    let source = "a = x*3 + y/2 - z^2.5 + 7.0";
    assert_eq!(
        debug(source),
        "SUBJECT(INFIX(= IDENT(a) INFIX(+ INFIX(- INFIX(+ INFIX(* IDENT(x) NUMBER(3)) \
         INFIX(/ IDENT(y) NUMBER(2))) INFIX(^ IDENT(z) NUMBER(2.5))) NUMBER(7))))"
    );
    assert_eq!(parse(source).to_string(), "a=x*3+y/2-z^2.5+7");
}

#[test]
fn power_is_left_associative() {
    assert_eq!(
        debug("2^3^4"),
        "SUBJECT(INFIX(^ INFIX(^ NUMBER(2) NUMBER(3)) NUMBER(4)))"
    );
    assert_eq!(parse("2^3^4").to_string(), "2^3^4");
    assert_eq!(parse("2^(3^4)").to_string(), "2^(3^4)");
}

#[test]
fn negation_is_looser_than_power() {
    assert_eq!(debug("-2^2"), "SUBJECT(PREFIX(- INFIX(^ NUMBER(2) NUMBER(2))))");
    assert_eq!(debug("-2*3"), "SUBJECT(INFIX(* PREFIX(- NUMBER(2)) NUMBER(3)))");
}

#[test]
fn comparators_bind_loosest() {
    assert_eq!(
        debug("x + 1 < 2y"),
        "SUBJECT(INFIX(< INFIX(+ IDENT(x) NUMBER(1)) INFIX(* NUMBER(2) IDENT(y))))"
    );
}

#[test]
fn implicit_multiplication_parses_as_product() {
    assert_eq!(parse("2x(y+1)").to_string(), "2*x*(y+1)");
}

// =============================================================================
// Atom transforms and formulas
// =============================================================================

#[test]
fn atom_transform_operand_forms() {
    assert_eq!(debug("/2"), "ATOM_TRANSFORM(/ NUMBER(2))");
    assert_eq!(debug("/*2"), "ATOM_TRANSFORM(* NUMBER(2))");
    assert_eq!(
        debug("/+(3*(x+y))"),
        "ATOM_TRANSFORM(+ INFIX(* NUMBER(3) INFIX(+ IDENT(x) IDENT(y))))"
    );
}

#[test]
fn formula_keeps_its_name() {
    assert_eq!(
        debug("!formula xy"),
        "FORMULA(formula [INFIX(* IDENT(x) IDENT(y))])"
    );
    assert_eq!(parse("!formula x, y").to_string(), "formula x, y");
}

// =============================================================================
// Error isolation
// =============================================================================

#[test]
fn lone_bad_transform() {
    let program = parse("/+");
    assert_eq!(program.len(), 1);
    assert!(program.statements()[0].is_error());
}

#[test]
fn one_bad_line_among_good_ones() {
    let program = parse("2x + 3 = 11\n/+\n/-3\n!formula x, y");
    assert_eq!(program.len(), 4);

    let errors: Vec<usize> = program.errors().map(|(index, _)| index).collect();
    assert_eq!(errors, vec![1]);
    assert_eq!(message(&program.statements()[1]), "Error near: `\\n`");

    assert_eq!(program.statements()[0].to_string(), "2*x+3=11");
    assert_eq!(program.statements()[2].to_string(), "-3");
    assert_eq!(program.statements()[3].to_string(), "formula x, y");
}

#[test]
fn every_line_can_fail() {
    let program = parse("@\n(x\n/\n*");
    assert_eq!(program.len(), 4);
    assert!(program.iter().all(Statement::is_error));
}

#[test]
fn blank_line_is_reported_near_the_newline() {
    let program = parse("x\n\ny");
    assert_eq!(program.len(), 3);
    assert_eq!(message(&program.statements()[1]), "Error near: `\\n`");
    assert_eq!(message(&parse("/").statements()[0]), "Empty line");
}

#[test]
fn deep_nesting_becomes_a_line_error() {
    let groups = format!("{}x{}", "(".repeat(10_000), ")".repeat(10_000));
    let negations = format!("{}x", "-".repeat(10_000));
    for source in [groups, negations] {
        let program = parse(&source);
        assert!(program.len() == 1 && program.has_errors());
        assert_eq!(message(&program.statements()[0]), "Expression nested too deeply");
    }

    let nested = format!("{}x", "-".repeat(MAX_NESTING_DEPTH - 1));
    assert!(!parse(&nested).has_errors());
}

#[test]
fn stack_trace_is_framed() {
    let program = parse("(x");
    let statement = &program.statements()[0];
    assert_eq!(message(statement), "Parentheses should close, write: `)`");

    let trace = statement.stack_trace();
    let lines: Vec<&str> = trace.lines().collect();
    assert_eq!(lines.len(), 4);
    for line in &lines {
        assert_eq!(line.chars().count(), STACK_FRAME_WIDTH + 5);
        assert!(line.starts_with('|') && line.ends_with("   |"));
    }
    assert!(lines[0].ends_with("parse_group(EOF)   |"));
    assert!(lines[3].ends_with("parse_statement(()   |"));
}

#[test]
fn successful_statements_have_no_trace() {
    assert_eq!(parse("x").statements()[0].stack_trace(), "");
}

// =============================================================================
// Round trip
// =============================================================================

#[test]
fn pretty_output_reparses_to_the_same_tree() {
    for source in [
        "x*2=3",
        "a = x*3 + y/2 - z^2.5 + 7.0",
        "(x+1)*(y-1) > 2",
        "x-(y-z)",
        "(-x)^2",
        "-(x+1)",
        "2^(3^4)",
    ] {
        let first = parse(source);
        let second = parse(&first.to_string());
        assert_eq!(first, second, "source: {source}");
    }
}

#[test]
fn rounding_limits_round_trip() {
    // Numbers render with at most three fraction digits.
    let first = parse("x = 0.0001");
    assert_eq!(first.to_string(), "x=0");
    let Statement::Subject(Expression::Infix { right, .. }) = &first.statements()[0] else {
        panic!("expected an equation");
    };
    assert_eq!(**right, Expression::Number(0.0001));
    assert_ne!(parse(&first.to_string()), first);
}
