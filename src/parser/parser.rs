//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser uses a binding-power approach with NUD/LED handlers for
//! expression parsing and a statement handler table keyed by the first token
//! of each statement form.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for primary and prefix expressions
//! - LED (left denotation) handlers for binary operators
//! - Binding powers for operator precedence

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ParseError, ParseErrorKind},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_declaration,
};

/// Deepest nesting of expressions and blocks the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// The mutable state is the cursor into the token stream and the current
/// nesting depth; the lookup tables are filled once before parsing starts.
pub struct Parser {
    /// The list of tokens to parse, always terminated by EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (primary and prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (binary operator) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Number of expressions and blocks currently being parsed
    depth: usize,
}

impl Parser {
    /// Creates a parser with empty lookup tables. An EOF token is appended
    /// if `tokens` does not already end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::EOF) {
            let end = tokens.last().map_or(Position::start(), |t| t.span.end);
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), Span::new(end, end)));
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// Returns the kind of the token after the current one.
    pub fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::EOF, |t| t.kind)
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past the EOF token.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if self.tokens[index].kind != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// Otherwise fails with `UnexpectedToken`, listing `expected_kind` as the
    /// only acceptable token.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, ParseError> {
        if self.current_token_kind() == expected_kind {
            return Ok(self.advance().clone());
        }

        Err(self.error(ParseErrorKind::UnexpectedToken, vec![expected_kind]))
    }

    /// Builds an error reporting the current token.
    pub fn error(&self, kind: ParseErrorKind, expected: Vec<TokenKind>) -> ParseError {
        let token = self.current_token();
        ParseError::new(kind, token.kind, token.text.clone(), expected, token.span.start)
    }

    /// Enters one level of expression or block nesting.
    ///
    /// Fails with `NestingTooDeep` at the current token once more than
    /// `MAX_NESTING_DEPTH` levels are open. Every successful call must be
    /// paired with `leave`.
    pub fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(ParseErrorKind::NestingTooDeep, vec![]));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns true while the current token is not EOF.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (binary operator) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation handler for a token that can start an
    /// expression.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token that can start a statement.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the start position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start
    }
}

/// Parses a stream of tokens into a Program.
///
/// This is the main entry point for parsing a prebuilt token list. It creates
/// a parser instance, initializes the lookup tables, and parses declarations
/// until EOF. The first grammar violation ends the parse.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Program, ParseError> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut body = vec![];

    while parser.has_tokens() {
        match parse_declaration(&mut parser) {
            Ok(stmt) => {
                debug!(target: "parser", "parsed declaration at {}", stmt.get_span().start);
                body.push(stmt);
            }
            Err(error) => {
                debug!(target: "parser", "parse failed: {}", error);
                return Err(error);
            }
        }
    }

    Ok(Program {
        body,
        span: Span::new(Position::start(), parser.get_position()),
    })
}

/// Tokenizes and parses `source`.
///
/// Lexical failures are returned as `Error::Lex`, unchanged.
pub fn parse(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    Ok(parse_tokens(tokens)?)
}
