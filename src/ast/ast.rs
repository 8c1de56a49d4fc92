use std::fmt::{self, Display};

use crate::Span;

use super::{
    expressions::{
        BinaryExpr, BoolLiteralExpr, CallExpr, GroupingExpr, IdentifierExpr, IntLiteralExpr,
        StringLiteralExpr, UnaryExpr,
    },
    statements::{
        AssignmentStmt, ExpressionStmt, FnDeclStmt, IfStmt, PrintStmt, ReturnStmt, VarDeclStmt,
        WhileStmt,
    },
};

/// Root of a parsed document: top-level declarations in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    /// Function declarations at the top level, in source order.
    pub fn functions(&self) -> impl Iterator<Item = &FnDeclStmt> {
        self.body.iter().filter_map(|stmt| match stmt {
            Stmt::FnDecl(decl) => Some(decl),
            _ => None,
        })
    }
}

/// Statements
///
/// One variant per statement production. `FnDecl` only appears directly in
/// `Program::body`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    FnDecl(FnDeclStmt),
    VarDecl(VarDeclStmt),
    Assignment(AssignmentStmt),
    If(IfStmt),
    While(WhileStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Print(PrintStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::FnDecl(stmt) => &stmt.span,
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::Assignment(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::Print(stmt) => &stmt.span,
        }
    }
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntLiteral(IntLiteralExpr),
    StringLiteral(StringLiteralExpr),
    BoolLiteral(BoolLiteralExpr),
    Identifier(IdentifierExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Call(CallExpr),
    Grouping(GroupingExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::IntLiteral(expr) => &expr.span,
            Expr::StringLiteral(expr) => &expr.span,
            Expr::BoolLiteral(expr) => &expr.span,
            Expr::Identifier(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Unary(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Grouping(expr) => &expr.span,
        }
    }
}

/// Fully parenthesised rendering: `1 + 2 * 3` displays as `(1 + (2 * 3))`.
impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::IntLiteral(expr) => write!(f, "{}", expr.value),
            Expr::StringLiteral(expr) => {
                write!(f, "\"")?;
                for ch in expr.value.chars() {
                    match ch {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\n' => write!(f, "\\n")?,
                        _ => write!(f, "{}", ch)?,
                    }
                }
                write!(f, "\"")
            }
            Expr::BoolLiteral(expr) => write!(f, "{}", expr.value),
            Expr::Identifier(expr) => write!(f, "{}", expr.name),
            Expr::Binary(expr) => write!(f, "({} {} {})", expr.left, expr.operator, expr.right),
            Expr::Unary(expr) => write!(f, "({}{})", expr.operator, expr.operand),
            Expr::Call(expr) => {
                write!(f, "{}(", expr.callee)?;
                for (i, argument) in expr.arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ")")
            }
            // Binary children already carry their own parentheses.
            Expr::Grouping(expr) => match expr.inner.as_ref() {
                Expr::Binary(_) | Expr::Unary(_) => write!(f, "{}", expr.inner),
                inner => write!(f, "({})", inner),
            },
        }
    }
}
