use crate::Span;

use super::{
    ast::Expr,
    statements::{BlockStmt, Parameter},
    types::Type,
};

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

/// String Expression
/// Represents a string literal, escapes already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub span: Span,
}

/// Symbol Expression
/// Represents a bare name.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

/// Stands in for the initializer of a declaration that was written
/// without one. Source text cannot produce it.
#[derive(Debug, Clone, PartialEq)]
pub struct UnassignedExpr {
    pub span: Span,
}

// COMPOUND

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: String,
    pub right_expr: Box<Expr>,
    pub span: Span,
}

/// `assignee = value`, also covering the compound `+=` and `-=` forms.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub assignee: Box<Expr>,
    pub operator: String,
    pub value: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

/// `object.property`
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub property: String,
    pub span: Span,
}

/// Closure Expression
///
/// `function (a, b) { ... }` used as a value. Closures are parsed
/// anonymous; a `let`/`var` declaration gives them the declared name.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosureExpr {
    pub name: Option<String>,
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    pub body: BlockStmt,
    pub span: Span,
}

impl ClosureExpr {
    pub fn with_name(self, name: &str) -> ClosureExpr {
        ClosureExpr {
            name: Some(name.to_string()),
            ..self
        }
    }
}
