//! Error types and error handling for the analyzer.
//!
//! This module defines the two disjoint failure kinds of an analysis run:
//!
//! - `LexError` for failures of the lexical scan
//! - `ParseError` for the first grammar violation
//! - `Error`, the union returned by `parse`, which keeps the two apart
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
