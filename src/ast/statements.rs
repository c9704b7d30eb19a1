use std::slice::Iter;

use crate::Span;

use super::{
    ast::{Expr, Stmt},
    types::Type,
};

/// An ordered list of statements between `{` and `}`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

/// `let` / `var` declaration.
///
/// `declared_type` is [`Type::Any`] and `assigned_value` is
/// [`Expr::Unassigned`] when the source omits them, so neither is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub is_mutable: bool,
    pub declared_type: Type,
    pub assigned_value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: BlockStmt,
    pub else_body: Option<BlockStmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Expr,
    pub span: Span,
}

/// `for iterable { as a, b ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub iterable: Expr,
    /// Names bound by the `as` clause, in source order and not deduplicated.
    pub variables: Vec<String>,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub declared_type: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclStmt {
    pub name: String,
    pub superclass: Option<String>,
    pub body: BlockStmt,
    pub span: Span,
}
