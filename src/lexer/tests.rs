//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer, string and boolean literals
//! - Operators and punctuation
//! - Comments and position tracking
//! - Error cases

use super::{
    lexer::tokenize,
    tokens::{LiteralValue, TokenKind},
};
use crate::errors::errors::LexErrorKind;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|t| t.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("function if else while var int string bool return print").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::If);
    assert_eq!(tokens[2].kind, TokenKind::Else);
    assert_eq!(tokens[3].kind, TokenKind::While);
    assert_eq!(tokens[4].kind, TokenKind::Var);
    assert_eq!(tokens[5].kind, TokenKind::Int);
    assert_eq!(tokens[6].kind, TokenKind::String);
    assert_eq!(tokens[7].kind, TokenKind::Bool);
    assert_eq!(tokens[8].kind, TokenKind::Return);
    assert_eq!(tokens[9].kind, TokenKind::Print);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text, "foo");
    assert_eq!(tokens[1].text, "bar");
    assert_eq!(tokens[2].text, "baz_123");
    assert_eq!(tokens[3].text, "_underscore");
    assert_eq!(tokens[4].text, "CamelCase");
    assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = tokenize("intvalue printer iffy truely var_").unwrap();

    assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[0].text, "intvalue");
    assert_eq!(tokens[3].text, "truely");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 007 9223372036854775807").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[0].value, Some(LiteralValue::Int(42)));
    assert_eq!(tokens[1].value, Some(LiteralValue::Int(0)));
    assert_eq!(tokens[2].text, "007");
    assert_eq!(tokens[2].value, Some(LiteralValue::Int(7)));
    assert_eq!(tokens[3].value, Some(LiteralValue::Int(i64::MAX)));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_integer_overflow() {
    let error = tokenize("int x = 9223372036854775808;").unwrap_err();

    assert_eq!(error.kind, LexErrorKind::IntegerOverflow);
    assert_eq!(error.text, "9223372036854775808");
    assert_eq!(error.position.line, 1);
    assert_eq!(error.position.column, 9);
}

#[test]
fn test_number_followed_by_identifier() {
    let tokens = tokenize("123abc").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text, "abc");
}

#[test]
fn test_tokenize_booleans() {
    let tokens = tokenize("true false").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::BoolLiteral);
    assert_eq!(tokens[0].value, Some(LiteralValue::Bool(true)));
    assert_eq!(tokens[1].kind, TokenKind::BoolLiteral);
    assert_eq!(tokens[1].value, Some(LiteralValue::Bool(false)));
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].text, "\"hello\"");
    assert_eq!(tokens[0].value, Some(LiteralValue::Str("hello".to_string())));
    assert_eq!(tokens[1].value, Some(LiteralValue::Str("multiple words".to_string())));
    assert_eq!(tokens[2].text, "\"\"");
    assert_eq!(tokens[2].value, Some(LiteralValue::Str(String::new())));
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = tokenize(r#""hello\nworld" "quote\"test" "backslash\\""#).unwrap();

    assert_eq!(tokens[0].value, Some(LiteralValue::Str("hello\nworld".to_string())));
    assert_eq!(tokens[1].value, Some(LiteralValue::Str("quote\"test".to_string())));
    assert_eq!(tokens[1].text, r#""quote\"test""#);
    assert_eq!(tokens[2].value, Some(LiteralValue::Str("backslash\\".to_string())));
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_invalid_escape() {
    let error = tokenize(r#"print("tab\there");"#).unwrap_err();

    assert_eq!(error.kind, LexErrorKind::InvalidEscape);
    assert_eq!(error.text, "\\t");
    assert_eq!(error.position.column, 11);
}

#[test]
fn test_unterminated_string_at_end_of_input() {
    let error = tokenize("string s = \"abc").unwrap_err();

    assert_eq!(error.kind, LexErrorKind::UnterminatedString);
    assert_eq!(error.text, "\"abc");
    assert_eq!(error.position.line, 1);
    assert_eq!(error.position.column, 12);
}

#[test]
fn test_unterminated_string_at_end_of_line() {
    let error = tokenize("string s = \"abc\r\nprint(s);").unwrap_err();

    assert_eq!(error.kind, LexErrorKind::UnterminatedString);
    assert_eq!(error.text, "\"abc");
}

#[test]
fn test_unterminated_string_after_backslash() {
    let error = tokenize("\"abc\\").unwrap_err();

    assert_eq!(error.kind, LexErrorKind::UnterminatedString);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / == != < > <= >= = !"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::Not,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_compound_operators_without_spaces() {
    assert_eq!(
        kinds("a<=b==c!=!d>=e"),
        vec![
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::Identifier,
            TokenKind::GreaterEquals,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } ; ,"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("int x = 5; // this is a comment\nint y = 10 / 2;").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[5].kind, TokenKind::Int);
    assert_eq!(tokens[5].span.start.line, 2);
    assert_eq!(tokens[9].kind, TokenKind::Slash);
    assert_eq!(tokens.len(), 13);
}

#[test]
fn test_comment_only_source() {
    let tokens = tokenize("// nothing here").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[0].span.start.column, 1);
}

#[test]
fn test_positions() {
    let tokens = tokenize("int x = 1;\n  print(x);").unwrap();

    assert_eq!((tokens[0].span.start.line, tokens[0].span.start.column), (1, 1));
    assert_eq!((tokens[1].span.start.line, tokens[1].span.start.column), (1, 5));
    assert_eq!((tokens[4].span.start.line, tokens[4].span.start.column), (1, 10));
    assert_eq!(tokens[5].kind, TokenKind::Print);
    assert_eq!((tokens[5].span.start.line, tokens[5].span.start.column), (2, 3));
    assert_eq!(tokens[5].span.start.offset, 13);
    assert_eq!(tokens[5].span.end.offset, 18);

    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!((eof.span.start.line, eof.span.start.column), (2, 12));
    assert_eq!(eof.span.start.offset, 22);
}

#[test]
fn test_position_after_string_with_escape() {
    let tokens = tokenize(r#""a\"b" x"#).unwrap();

    assert_eq!(tokens[1].span.start.column, 8);
}

#[test]
fn test_tokenize_unrecognized_character() {
    let error = tokenize("int x = @;").unwrap_err();

    assert_eq!(error.kind, LexErrorKind::UnrecognisedCharacter);
    assert_eq!(error.text, "@");
    assert_eq!(error.position.column, 9);
}

#[test]
fn test_tokenize_unrecognized_multibyte_character() {
    let error = tokenize("x = é;").unwrap_err();

    assert_eq!(error.kind, LexErrorKind::UnrecognisedCharacter);
    assert_eq!(error.text, "é");
    assert_eq!(error.position.column, 5);
}

#[test]
fn test_multibyte_characters_in_strings_count_as_one_column() {
    let tokens = tokenize("\"héllo\" x").unwrap();

    assert_eq!(tokens[0].value, Some(LiteralValue::Str("héllo".to_string())));
    assert_eq!(tokens[1].span.start.column, 9);
}

#[test]
fn test_tokenize_function_declaration() {
    let tokens = tokenize("function add(int a, int b) { return a + b; }").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text, "add");
    assert_eq!(tokens[2].kind, TokenKind::OpenParen);
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].kind, TokenKind::Comma);
}

#[test]
fn test_display_value() {
    let tokens = tokenize("x \"a\\nb\" 12 true ==").unwrap();

    assert_eq!(tokens[0].display_value(), "x");
    assert_eq!(tokens[1].display_value(), "a\nb");
    assert_eq!(tokens[2].display_value(), "12");
    assert_eq!(tokens[3].display_value(), "true");
    assert_eq!(tokens[4].display_value(), "==");
    assert_eq!(tokens[5].display_value(), "EOF");
}

#[test]
fn test_token_display() {
    let tokens = tokenize("x \"a\\nb\"").unwrap();

    assert_eq!(tokens[0].to_string(), "Identifier `x`");
    assert_eq!(tokens[1].to_string(), "StringLiteral `\"a\\nb\"`");
    assert_eq!(tokens[1].debug(), "StringLiteral (\"a\\nb\")");
    assert_eq!(tokens[2].to_string(), "EOF ``");
}
