//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a stream of tokens into
//! a `Program`. It uses binding powers for expressions with proper operator
//! precedence and handles:
//!
//! - Statement parsing (declarations, assignments, calls, control flow, print)
//! - Expression parsing (binary and prefix operators, calls, literals)
//! - Type name parsing for declarations and parameters
//! - First-error reporting with the set of acceptable tokens
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
