//! Lexical analysis module for the analyzer.
//!
//! This module contains the lexer (tokenizer) that converts toy language
//! source text into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using an ordered regex pattern table
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line and column tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
