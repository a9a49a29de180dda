//! Integration tests for Layer 0: Foundation
//!
//! Tests for the error type and numeric rendering.

mod errors;
