use crate::Span;

use super::{
    ast::Expr,
    types::{BinaryOperator, UnaryOperator},
};

// LITERALS

/// Integer Expression
/// Represents a decoded integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct IntLiteralExpr {
    pub value: i64,
    pub span: Span,
}

/// String Expression
/// Represents a string literal with its escapes resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteralExpr {
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoolLiteralExpr {
    pub value: bool,
    pub span: Span,
}

/// Identifier Expression
/// Represents a reference to a named variable or parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub name: String,
    pub span: Span,
}

// COMPLEX

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Unary Expression
/// Represents a prefix operator applied to a primary expression.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOperator,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// Call Expression
/// Represents a call of a named function in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

/// A parenthesised expression, kept so the source shape survives in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    pub inner: Box<Expr>,
    pub span: Span,
}
