use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::CallExpr,
        statements::{
            AssignmentStmt, BlockStmt, ExpressionStmt, FnDeclStmt, IfStmt, Parameter, PrintStmt,
            ReturnStmt, VarDeclStmt, WhileStmt,
        },
        types::TypeName,
    },
    errors::errors::{ParseError, ParseErrorKind},
    lexer::tokens::TokenKind,
    parser::{
        expr::{parse_call_args, parse_expr},
        lookups::{BindingPower, STATEMENT_START},
    },
    Span,
};

use super::{parser::Parser, types::parse_type};

/// Top-level entry: a function declaration or a statement.
pub fn parse_declaration(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let kind = parser.current_token_kind();

    if kind == TokenKind::Function {
        return parse_fn_decl_stmt(parser);
    }

    if !parser.get_stmt_lookup().contains_key(&kind) {
        let mut expected = vec![TokenKind::Function];
        expected.extend(STATEMENT_START);
        return Err(parser.error(ParseErrorKind::InvalidStatementStart, expected));
    }

    parse_stmt(parser)
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    match parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        Some(handler) => handler(parser),
        None => Err(parser.error(
            ParseErrorKind::InvalidStatementStart,
            STATEMENT_START.to_vec(),
        )),
    }
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let start_token = parser.advance().clone();
    let declared_type = TypeName::from_token_kind(start_token.kind);

    let identifier = parser.expect(TokenKind::Identifier)?.text;

    let initializer = match parser.current_token_kind() {
        TokenKind::Assignment => {
            parser.advance();
            Some(parse_expr(parser, BindingPower::Default)?)
        }
        TokenKind::Semicolon if declared_type.is_some() => None,
        TokenKind::Semicolon => {
            return Err(parser.error(
                ParseErrorKind::MissingInitializer,
                vec![TokenKind::Assignment],
            ))
        }
        _ => {
            let expected = if declared_type.is_some() {
                vec![TokenKind::Assignment, TokenKind::Semicolon]
            } else {
                vec![TokenKind::Assignment]
            };
            return Err(parser.error(ParseErrorKind::UnexpectedToken, expected));
        }
    };

    let end = parser.expect(TokenKind::Semicolon)?.span;

    Ok(Stmt::VarDecl(VarDeclStmt {
        declared_type,
        identifier,
        initializer,
        span: start_token.span.to(&end),
    }))
}

/// An identifier at statement position is an assignment when followed by
/// `=`, a call when followed by `(`, and an error otherwise.
pub fn parse_assign_or_call_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    match parser.peek_kind() {
        TokenKind::Assignment => {
            let target = parser.advance().clone();
            parser.advance();

            let value = parse_expr(parser, BindingPower::Default)?;
            let end = parser.expect(TokenKind::Semicolon)?.span;

            Ok(Stmt::Assignment(AssignmentStmt {
                target: target.text,
                value,
                span: target.span.to(&end),
            }))
        }
        TokenKind::OpenParen => {
            let callee = parser.advance().clone();
            let (arguments, call_end) = parse_call_args(parser)?;
            let end = parser.expect(TokenKind::Semicolon)?.span;

            Ok(Stmt::Expression(ExpressionStmt {
                expression: Expr::Call(CallExpr {
                    callee: callee.text,
                    arguments,
                    span: callee.span.to(&call_end),
                }),
                span: callee.span.to(&end),
            }))
        }
        _ => {
            parser.advance();
            Err(parser.error(
                ParseErrorKind::BareIdentifierStatement,
                vec![TokenKind::Assignment, TokenKind::OpenParen],
            ))
        }
    }
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let start = parser.advance().span;

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_body = parse_block(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block(parser)?)
    } else {
        None
    };

    let end = else_body.as_ref().unwrap_or(&then_body).span;

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        span: start.to(&end),
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let start = parser.advance().span;

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        span: start.to(&body.span),
        body,
    }))
}

pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, ParseError> {
    let start = parser.expect(TokenKind::OpenCurly)?.span;

    parser.enter()?;
    let body = parse_block_body(parser);
    parser.leave();
    let body = body?;

    let end = parser.expect(TokenKind::CloseCurly)?.span;

    Ok(BlockStmt {
        body,
        span: start.to(&end),
    })
}

/// Statements up to, not including, the closing `}`.
fn parse_block_body(parser: &mut Parser) -> Result<Vec<Stmt>, ParseError> {
    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::EOF {
            return Err(parser.error(ParseErrorKind::UnexpectedToken, vec![TokenKind::CloseCurly]));
        }

        if !parser.get_stmt_lookup().contains_key(&parser.current_token_kind()) {
            let mut expected = STATEMENT_START.to_vec();
            expected.push(TokenKind::CloseCurly);
            return Err(parser.error(ParseErrorKind::InvalidStatementStart, expected));
        }

        statements.push(parse_stmt(parser)?);
    }

    Ok(statements)
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let start = parser.advance().span;

    let identifier = parser.expect(TokenKind::Identifier)?.text;

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let type_start = parser.get_position();
            let param_type = parse_type(parser)?;
            let name = parser.expect(TokenKind::Identifier)?;
            parameters.push(Parameter {
                param_type,
                name: name.text,
                span: Span::new(type_start, name.span.end),
            });

            match parser.current_token_kind() {
                TokenKind::Comma => {
                    parser.advance();
                }
                TokenKind::CloseParen => break,
                _ => {
                    return Err(parser.error(
                        ParseErrorKind::UnexpectedToken,
                        vec![TokenKind::Comma, TokenKind::CloseParen],
                    ))
                }
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok(Stmt::FnDecl(FnDeclStmt {
        identifier,
        parameters,
        span: start.to(&body.span),
        body,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let start = parser.advance().span;

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    let end = parser.expect(TokenKind::Semicolon)?.span;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: start.to(&end),
    }))
}

/// `print` is a statement form with exactly one parenthesised argument.
pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let start = parser.advance().span;

    parser.expect(TokenKind::OpenParen)?;
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;
    let end = parser.expect(TokenKind::Semicolon)?.span;

    Ok(Stmt::Print(PrintStmt {
        expression,
        span: start.to(&end),
    }))
}
