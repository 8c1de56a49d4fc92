use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, parser::parser::MAX_NESTING_DEPTH, Position};

/// Failure of the lexical scan. Always terminal for the request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} `{text}` at {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// The offending character or sequence.
    pub text: String,
    pub position: Position,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unterminated string")]
    UnterminatedString,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("unrecognised character")]
    UnrecognisedCharacter,
    #[error("integer overflow")]
    IntegerOverflow,
}

impl LexError {
    pub fn new(kind: LexErrorKind, text: impl Into<String>, position: Position) -> Self {
        LexError {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match self.kind {
            LexErrorKind::UnterminatedString => "UnterminatedString",
            LexErrorKind::InvalidEscape => "InvalidEscape",
            LexErrorKind::UnrecognisedCharacter => "UnrecognisedCharacter",
            LexErrorKind::IntegerOverflow => "IntegerOverflow",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorTip::Suggestion(String::from(
                "Strings must be closed with `\"` on the same line",
            )),
            LexErrorKind::InvalidEscape => ErrorTip::Suggestion(format!(
                "Unknown escape `{}`, supported escapes are `\\\"`, `\\\\` and `\\n`",
                self.text
            )),
            LexErrorKind::UnrecognisedCharacter => ErrorTip::None,
            LexErrorKind::IntegerOverflow => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, it is above the integer limit of {}",
                self.text,
                i64::MAX
            )),
        }
    }
}

/// First grammar violation found by the parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {position}, found {found} `{text}`")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub found: TokenKind,
    /// Lexeme of the offending token.
    pub text: String,
    /// Token kinds that would have been accepted. May be empty.
    pub expected: Vec<TokenKind>,
    pub position: Position,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("unexpected token")]
    UnexpectedToken,
    #[error("expected expression")]
    ExpectedExpression,
    #[error("invalid start of statement")]
    InvalidStatementStart,
    #[error("identifier statement must be an assignment or a call")]
    BareIdentifierStatement,
    #[error("expected initializer in `var` declaration")]
    MissingInitializer,
    #[error("nesting too deep")]
    NestingTooDeep,
}

impl ParseError {
    pub fn new(
        kind: ParseErrorKind,
        found: TokenKind,
        text: impl Into<String>,
        expected: Vec<TokenKind>,
        position: Position,
    ) -> Self {
        ParseError {
            kind,
            found,
            text: text.into(),
            expected,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match self.kind {
            ParseErrorKind::UnexpectedToken => "UnexpectedToken",
            ParseErrorKind::ExpectedExpression => "ExpectedExpression",
            ParseErrorKind::InvalidStatementStart => "InvalidStatementStart",
            ParseErrorKind::BareIdentifierStatement => "BareIdentifierStatement",
            ParseErrorKind::MissingInitializer => "MissingInitializer",
            ParseErrorKind::NestingTooDeep => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        let expected = self
            .expected
            .iter()
            .map(|kind| match kind.spelling() {
                Some(spelling) => format!("`{}`", spelling),
                None => kind.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ");

        match self.kind {
            ParseErrorKind::BareIdentifierStatement => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, an identifier statement must continue with `=` or `(`",
                self.text
            )),
            ParseErrorKind::MissingInitializer => ErrorTip::Suggestion(String::from(
                "Expected explicit value when no type is given",
            )),
            ParseErrorKind::NestingTooDeep => ErrorTip::Suggestion(format!(
                "Expressions and blocks can be nested at most {} levels deep",
                MAX_NESTING_DEPTH
            )),
            _ if self.found == TokenKind::EOF => {
                ErrorTip::Suggestion(format!("Unexpected end of input, expected {}", expected))
            }
            ParseErrorKind::UnexpectedToken if self.expected == [TokenKind::Semicolon] => {
                ErrorTip::Suggestion(format!(
                    "Unexpected token: `{}`, did you miss a semicolon?",
                    self.text
                ))
            }
            _ if self.expected.is_empty() => ErrorTip::None,
            _ => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected one of {}",
                self.text, expected
            )),
        }
    }
}

/// Any failure of a `parse` request. Lexical failures are kept distinct from
/// syntax failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn get_position(&self) -> &Position {
        match self {
            Error::Lex(error) => error.get_position(),
            Error::Parse(error) => error.get_position(),
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            Error::Lex(error) => error.get_error_name(),
            Error::Parse(error) => error.get_error_name(),
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::Lex(error) => error.get_tip(),
            Error::Parse(error) => error.get_tip(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Error::Lex(error) => error.message(),
            Error::Parse(error) => error.message(),
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, Error::Lex(_))
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
