use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{
    errors::errors::{LexError, LexErrorKind},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{LiteralValue, Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), LexError>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Anchored at the start of the remaining input. Compound operators come
    // before their single-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
    ];
}

/// Scanner state for a single `tokenize` call.
pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: String::from(source),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Consumes `n` bytes, which must end on a character boundary.
    pub fn advance_n(&mut self, n: usize) {
        for c in self.source[self.pos..self.pos + n].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(target: "lexer", "{} at {}", token.debug(), token.span.start);
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn matched_len(&self, regex: &Regex) -> usize {
        regex.find(self.remainder()).map_or(0, |m| m.end())
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), LexError> {
    let start = lexer.position();
    let len = lexer.matched_len(regex);
    let text = String::from(&lexer.remainder()[..len]);

    let value = text
        .parse::<i64>()
        .map_err(|_| LexError::new(LexErrorKind::IntegerOverflow, text.clone(), start))?;

    lexer.advance_n(len);
    lexer.push(MK_TOKEN!(
        TokenKind::IntLiteral,
        text,
        Some(LiteralValue::Int(value)),
        Span::new(start, lexer.position())
    ));
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), LexError> {
    let len = lexer.matched_len(regex);
    lexer.advance_n(len);
    Ok(())
}

fn string_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), LexError> {
    let start = lexer.position();
    let rest = lexer.remainder();

    let unterminated = |end: usize| {
        let text = rest[..end].trim_end_matches('\r');
        LexError::new(LexErrorKind::UnterminatedString, text, start)
    };

    let mut value = String::new();
    let mut column = start.column + 1;
    let mut chars = rest.char_indices().skip(1);

    let end = loop {
        match chars.next() {
            None => return Err(unterminated(rest.len())),
            Some((idx, '\n')) => return Err(unterminated(idx)),
            Some((idx, '"')) => break idx + 1,
            Some((idx, '\\')) => {
                match chars.next() {
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, '"')) => value.push('"'),
                    Some((_, '\\')) => value.push('\\'),
                    Some((newline, '\n')) => return Err(unterminated(newline)),
                    None => return Err(unterminated(rest.len())),
                    Some((_, other)) => {
                        return Err(LexError::new(
                            LexErrorKind::InvalidEscape,
                            format!("\\{}", other),
                            Position {
                                offset: start.offset + idx,
                                line: start.line,
                                column,
                            },
                        ))
                    }
                }
                column += 2;
            }
            Some((_, ch)) => {
                value.push(ch);
                column += 1;
            }
        }
    };

    let text = String::from(&rest[..end]);
    lexer.advance_n(end);
    lexer.push(MK_TOKEN!(
        TokenKind::StringLiteral,
        text,
        Some(LiteralValue::Str(value)),
        Span::new(start, lexer.position())
    ));
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), LexError> {
    let start = lexer.position();
    let len = lexer.matched_len(regex);
    let text = String::from(&lexer.remainder()[..len]);
    lexer.advance_n(len);

    let span = Span::new(start, lexer.position());
    let token = match RESERVED_LOOKUP.get(text.as_str()) {
        Some(TokenKind::BoolLiteral) => {
            let value = text == "true";
            MK_TOKEN!(TokenKind::BoolLiteral, text, Some(LiteralValue::Bool(value)), span)
        }
        Some(kind) => MK_TOKEN!(*kind, text, span),
        None => MK_TOKEN!(TokenKind::Identifier, text, span),
    };

    lexer.push(token);
    Ok(())
}

/// Scans `source` into tokens, ending with a single EOF token.
///
/// Fails at the first character sequence that no pattern accepts, or at the
/// first malformed literal.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            if pattern.regex.is_match(lex.remainder()) {
                (pattern.handler)(&mut lex, &pattern.regex)?;
                matched = true;
                break;
            }
        }

        if !matched {
            let text = lex.at().map(String::from).unwrap_or_default();
            return Err(LexError::new(
                LexErrorKind::UnrecognisedCharacter,
                text,
                lex.position(),
            ));
        }
    }

    let end = lex.position();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), Span::new(end, end)));
    debug!(target: "lexer", "scanned {} tokens", lex.tokens.len());

    Ok(lex.tokens)
}
