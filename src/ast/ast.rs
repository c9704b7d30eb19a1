//! The closed statement and expression sums.
//!
//! Every node is built once, when its parse completes, and never mutated
//! afterwards. `Display` renders a compact s-expression which the CLI prints
//! and the tests compare against.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::Span;

use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, CallExpr, ClosureExpr, MemberExpr, NumberExpr, PrefixExpr,
        StringExpr, SymbolExpr, UnassignedExpr,
    },
    statements::{
        BlockStmt, ClassDeclStmt, ExpressionStmt, FnDeclStmt, ForStmt, IfStmt, Parameter,
        ReturnStmt, VarDeclStmt,
    },
};

/// Statement Types
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Block(BlockStmt),
    If(IfStmt),
    Return(ReturnStmt),
    For(ForStmt),
    VarDecl(VarDeclStmt),
    FnDecl(FnDeclStmt),
    ClassDecl(ClassDeclStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::Block(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::For(stmt) => &stmt.span,
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::FnDecl(stmt) => &stmt.span,
            Stmt::ClassDecl(stmt) => &stmt.span,
        }
    }
}

/// Expression Types
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    String(StringExpr),
    Symbol(SymbolExpr),
    Unassigned(UnassignedExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
    Assignment(AssignmentExpr),
    Call(CallExpr),
    Member(MemberExpr),
    Closure(ClosureExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
            Expr::Unassigned(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Prefix(expr) => &expr.span,
            Expr::Assignment(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Member(expr) => &expr.span,
            Expr::Closure(expr) => &expr.span,
        }
    }

    /// Gives a closure literal the name it is bound to. Any other
    /// expression is returned untouched.
    pub fn named(self, name: &str) -> Expr {
        match self {
            Expr::Closure(closure) => Expr::Closure(closure.with_name(name)),
            other => other,
        }
    }
}

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> FmtResult {
    for item in items {
        write!(f, " {}", item)?;
    }
    Ok(())
}

fn write_parameters(f: &mut Formatter<'_>, parameters: &[Parameter]) -> FmtResult {
    let rendered = parameters
        .iter()
        .map(|parameter| format!("{}:{}", parameter.name, parameter.declared_type))
        .collect::<Vec<_>>();
    write!(f, "({})", rendered.join(" "))
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "(block")?;
        write_list(f, &self.body)?;
        write!(f, ")")
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Stmt::Expression(stmt) => write!(f, "{}", stmt.expression),
            Stmt::Block(block) => write!(f, "{}", block),
            Stmt::If(stmt) => {
                write!(f, "(if {} {}", stmt.condition, stmt.then_body)?;
                if let Some(else_body) = &stmt.else_body {
                    write!(f, " {}", else_body)?;
                }
                write!(f, ")")
            }
            Stmt::Return(stmt) => write!(f, "(return {})", stmt.value),
            Stmt::For(stmt) => write!(
                f,
                "(for {} [{}] {})",
                stmt.iterable,
                stmt.variables.join(" "),
                stmt.body
            ),
            Stmt::VarDecl(stmt) => write!(
                f,
                "({} {} {} {})",
                if stmt.is_mutable { "var" } else { "let" },
                stmt.identifier,
                stmt.declared_type,
                stmt.assigned_value
            ),
            Stmt::FnDecl(stmt) => {
                write!(f, "(function {} ", stmt.identifier)?;
                write_parameters(f, &stmt.parameters)?;
                write!(f, " {} {})", stmt.return_type, stmt.body)
            }
            Stmt::ClassDecl(stmt) => match &stmt.superclass {
                Some(superclass) => write!(f, "(class {}:{} {})", stmt.name, superclass, stmt.body),
                None => write!(f, "(class {} {})", stmt.name, stmt.body),
            },
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Expr::Number(expr) => write!(f, "{}", expr.value),
            Expr::String(expr) => write!(f, "{:?}", expr.value),
            Expr::Symbol(expr) => write!(f, "{}", expr.value),
            Expr::Unassigned(_) => write!(f, "<unassigned>"),
            Expr::Binary(expr) => write!(f, "({} {} {})", expr.operator, expr.left, expr.right),
            Expr::Prefix(expr) => write!(f, "({} {})", expr.operator, expr.right_expr),
            Expr::Assignment(expr) => {
                write!(f, "({} {} {})", expr.operator, expr.assignee, expr.value)
            }
            Expr::Call(expr) => {
                write!(f, "(call {}", expr.callee)?;
                write_list(f, &expr.arguments)?;
                write!(f, ")")
            }
            Expr::Member(expr) => write!(f, "(. {} {})", expr.object, expr.property),
            Expr::Closure(expr) => {
                write!(
                    f,
                    "(closure {} ",
                    expr.name.as_deref().unwrap_or("<anonymous>")
                )?;
                write_parameters(f, &expr.parameters)?;
                write!(f, " {} {})", expr.return_type, expr.body)
            }
        }
    }
}
