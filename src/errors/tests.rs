//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorTip, LexError, LexErrorKind, ParseError, ParseErrorKind};
use crate::lexer::tokens::TokenKind;
use crate::Position;

fn pos(line: usize, column: usize) -> Position {
    Position {
        offset: 0,
        line,
        column,
    }
}

#[test]
fn test_lex_error_creation() {
    let error = LexError::new(LexErrorKind::UnrecognisedCharacter, "@", pos(1, 10));

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_position().column, 10);
    assert_eq!(error.text, "@");
}

#[test]
fn test_lex_error_message() {
    let error = LexError::new(LexErrorKind::UnterminatedString, "\"abc", pos(2, 5));

    assert_eq!(error.message(), "unterminated string `\"abc` at line 2, column 5");
}

#[test]
fn test_parse_error_message() {
    let error = ParseError::new(
        ParseErrorKind::ExpectedExpression,
        TokenKind::Semicolon,
        ";",
        vec![TokenKind::IntLiteral],
        pos(1, 9),
    );

    assert_eq!(
        error.message(),
        "expected expression at line 1, column 9, found Semicolon `;`"
    );
    assert_eq!(error.get_error_name(), "ExpectedExpression");
}

#[test]
fn test_error_from_conversions() {
    let lex: Error = LexError::new(LexErrorKind::IntegerOverflow, "99999999999999999999", pos(1, 1)).into();
    let parse: Error = ParseError::new(
        ParseErrorKind::UnexpectedToken,
        TokenKind::EOF,
        "",
        vec![TokenKind::CloseCurly],
        pos(3, 1),
    )
    .into();

    assert!(lex.is_lexical());
    assert!(!parse.is_lexical());
    assert_eq!(lex.get_error_name(), "IntegerOverflow");
    assert_eq!(parse.get_position().line, 3);
}

#[test]
fn test_error_tip_none() {
    let error = LexError::new(LexErrorKind::UnrecognisedCharacter, "@", pos(1, 1));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_missing_semicolon() {
    let error = ParseError::new(
        ParseErrorKind::UnexpectedToken,
        TokenKind::Identifier,
        "y",
        vec![TokenKind::Semicolon],
        pos(1, 1),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected token: `y`, did you miss a semicolon?"
    );
}

#[test]
fn test_error_tip_lists_expected_spellings() {
    let error = ParseError::new(
        ParseErrorKind::UnexpectedToken,
        TokenKind::Semicolon,
        ";",
        vec![TokenKind::Comma, TokenKind::CloseParen],
        pos(1, 1),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected token: `;`, expected one of `,`, `)`"
    );
}

#[test]
fn test_error_tip_end_of_input() {
    let error = ParseError::new(
        ParseErrorKind::UnexpectedToken,
        TokenKind::EOF,
        "",
        vec![TokenKind::CloseCurly],
        pos(4, 1),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected end of input, expected `}`"
    );
}

#[test]
fn test_error_tip_bare_identifier() {
    let error = ParseError::new(
        ParseErrorKind::BareIdentifierStatement,
        TokenKind::Semicolon,
        ";",
        vec![TokenKind::Assignment, TokenKind::OpenParen],
        pos(1, 1),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected token: `;`, an identifier statement must continue with `=` or `(`"
    );
}

#[test]
fn test_error_tip_nesting_too_deep() {
    let error = ParseError::new(ParseErrorKind::NestingTooDeep, TokenKind::OpenParen, "(", vec![], pos(1, 265));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(
        error.get_tip().to_string(),
        "Expressions and blocks can be nested at most 256 levels deep"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
