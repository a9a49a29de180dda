//! Core error types and numeric rendering for Stepwise.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context for the runtime layer
//! - [`format_number`] - The numeric rendering policy shared by every renderer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod number;

pub use error::{Error, ErrorKind, Result};
pub use number::format_number;
