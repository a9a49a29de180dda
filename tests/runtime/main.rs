//! Integration tests for Layer 2: Runtime
//!
//! Tests for sessions, reports, the REPL, and the highlighter.

mod repl;
mod report;
mod session;
