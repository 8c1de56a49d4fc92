//! Type name parsing.
//!
//! The toy language only has the three built-in type keywords, so a type is
//! a single token. `var` is handled by the declaration parser, not here.

use crate::{
    ast::types::TypeName,
    errors::errors::{ParseError, ParseErrorKind},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub const TYPE_NAMES: [TokenKind; 3] = [TokenKind::Int, TokenKind::String, TokenKind::Bool];

pub fn parse_type(parser: &mut Parser) -> Result<TypeName, ParseError> {
    match TypeName::from_token_kind(parser.current_token_kind()) {
        Some(type_name) => {
            parser.advance();
            Ok(type_name)
        }
        None => Err(parser.error(ParseErrorKind::UnexpectedToken, TYPE_NAMES.to_vec())),
    }
}
