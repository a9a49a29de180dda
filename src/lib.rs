//! Stepwise - Line-oriented equation front end
//!
//! This crate re-exports all layers of the Stepwise system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: stepwise_runtime    - REPL, CLI, JSON report
//! Layer 1: stepwise_language   - Lexer, token-stream rewrite, parser, printers
//! Layer 0: stepwise_foundation - Error type, numeric rendering
//! ```

pub use stepwise_foundation as foundation;
pub use stepwise_language as language;
pub use stepwise_runtime as runtime;

pub use stepwise_language::parse;
