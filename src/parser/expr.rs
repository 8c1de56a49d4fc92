use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BinaryExpr, BoolLiteralExpr, CallExpr, GroupingExpr, IdentifierExpr, IntLiteralExpr,
            StringLiteralExpr, UnaryExpr,
        },
        types::{BinaryOperator, UnaryOperator},
    },
    errors::errors::{ParseError, ParseErrorKind},
    lexer::tokens::{LiteralValue, TokenKind},
    Span,
};

use super::{
    lookups::{BindingPower, EXPRESSION_START, PRIMARY_START},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, ParseError> {
    parser.enter()?;
    let expr = parse_expr_bp(parser, bp);
    parser.leave();
    expr
}

fn parse_expr_bp(parser: &mut Parser, bp: BindingPower) -> Result<Expr, ParseError> {
    // First parse NUD
    let mut left = parse_nud(parser)?;

    // While the next operator binds tighter than `bp`, fold it into lhs
    while let Some(next_bp) = parser.get_bp_lookup().get(&parser.current_token_kind()).copied() {
        if next_bp <= bp {
            break;
        }

        let led = match parser.get_led_lookup().get(&parser.current_token_kind()).copied() {
            Some(led) => led,
            None => break,
        };

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

fn parse_nud(parser: &mut Parser) -> Result<Expr, ParseError> {
    match parser.get_nud_lookup().get(&parser.current_token_kind()).copied() {
        Some(nud) => nud(parser),
        None => Err(parser.error(ParseErrorKind::ExpectedExpression, EXPRESSION_START.to_vec())),
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let token = parser.current_token().clone();

    let expr = match (token.kind, token.value) {
        (TokenKind::IntLiteral, Some(LiteralValue::Int(value))) => {
            Expr::IntLiteral(IntLiteralExpr { value, span: token.span })
        }
        (TokenKind::StringLiteral, Some(LiteralValue::Str(value))) => {
            Expr::StringLiteral(StringLiteralExpr { value, span: token.span })
        }
        (TokenKind::BoolLiteral, Some(LiteralValue::Bool(value))) => {
            Expr::BoolLiteral(BoolLiteralExpr { value, span: token.span })
        }
        (TokenKind::Identifier, _) if parser.peek_kind() == TokenKind::OpenParen => {
            return parse_call_expr(parser);
        }
        (TokenKind::Identifier, _) => Expr::Identifier(IdentifierExpr {
            name: token.text,
            span: token.span,
        }),
        _ => {
            return Err(parser.error(ParseErrorKind::UnexpectedToken, PRIMARY_START.to_vec()));
        }
    };

    parser.advance();
    Ok(expr)
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, ParseError> {
    let operator_token = parser.advance().clone();
    let operator = match BinaryOperator::from_token_kind(operator_token.kind) {
        Some(operator) => operator,
        None => {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken,
                operator_token.kind,
                operator_token.text,
                vec![],
                operator_token.span.start,
            ))
        }
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: left.get_span().to(right.get_span()),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

/// A prefix operator applies to a single primary expression; `--x` is
/// rejected and must be written `-(-x)`.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let operator_token = parser.advance().clone();
    let operator = match UnaryOperator::from_token_kind(operator_token.kind) {
        Some(operator) => operator,
        None => {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken,
                operator_token.kind,
                operator_token.text,
                vec![],
                operator_token.span.start,
            ))
        }
    };

    let operand = match parser.current_token_kind() {
        TokenKind::Dash | TokenKind::Not => {
            return Err(parser.error(ParseErrorKind::ExpectedExpression, PRIMARY_START.to_vec()))
        }
        _ => parse_nud(parser)?,
    };

    Ok(Expr::Unary(UnaryExpr {
        span: operator_token.span.to(operand.get_span()),
        operator,
        operand: Box::new(operand),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let start = parser.advance().span;
    let inner = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::CloseParen)?.span;

    Ok(Expr::Grouping(GroupingExpr {
        inner: Box::new(inner),
        span: start.to(&end),
    }))
}

/// `name(args)`, with the cursor on `name`.
pub fn parse_call_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let callee = parser.expect(TokenKind::Identifier)?;
    let (arguments, end) = parse_call_args(parser)?;

    Ok(Expr::Call(CallExpr {
        callee: callee.text,
        arguments,
        span: callee.span.to(&end),
    }))
}

/// Parses `'(' [ Expression { ',' Expression } ] ')'` and returns the
/// arguments with the span of the closing parenthesis.
pub fn parse_call_args(parser: &mut Parser) -> Result<(Vec<Expr>, Span), ParseError> {
    parser.expect(TokenKind::OpenParen)?;

    let mut args = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            args.push(parse_expr(parser, BindingPower::Default)?);

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

    let end = parser.expect(TokenKind::CloseParen)?.span;
    Ok((args, end))
}
