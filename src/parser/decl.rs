//! Function and class declarations.
//!
//! Both hand their bodies to the block parser, so the usual one statement
//! per line rule applies inside them.

use crate::{
    ast::{
        ast::Stmt,
        statements::{ClassDeclStmt, FnDeclStmt, Parameter},
        types::Type,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block, types::parse_type};

/// `(` [name [`:` type] {`,` name [`:` type]}] `)`
///
/// Newlines are allowed anywhere between the parentheses, as is a trailing
/// comma.
pub fn parse_parameters(parser: &mut Parser) -> Result<Vec<Parameter>, Error> {
    parser.expect_symbol("(")?;
    parser.skip(TokenKind::NewLine);

    let mut parameters = Vec::new();
    while !parser.check_symbol(")") {
        let name = parser.expect_identifier("expected parameter name")?.value;
        let declared_type = if parser.peek_symbol(":", true) {
            parse_type(parser, BindingPower::Default)?
        } else {
            Type::Any
        };
        parameters.push(Parameter {
            name,
            declared_type,
        });

        parser.skip(TokenKind::NewLine);
        if !parser.match_symbol(",") {
            break;
        }
        parser.skip(TokenKind::NewLine);
    }

    parser.expect_symbol(")")?;

    Ok(parameters)
}

/// Optional `-> type`, defaulting to `any`.
pub fn parse_return_type(parser: &mut Parser) -> Result<Type, Error> {
    if parser.peek_symbol("->", true) {
        parse_type(parser, BindingPower::Default)
    } else {
        Ok(Type::Any)
    }
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance(false).span.start.clone();

    let identifier = parser.expect_identifier("expected function name")?.value;
    let parameters = parse_parameters(parser)?;
    let return_type = parse_return_type(parser)?;
    let body = parse_block(parser)?;

    Ok(Stmt::FnDecl(FnDeclStmt {
        span: Span {
            start,
            end: parser.last_end(),
        },
        identifier,
        parameters,
        return_type,
        body,
    }))
}

pub fn parse_class_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance(false).span.start.clone();

    let name = parser.expect_identifier("expected class name")?.value;

    let superclass = if parser.peek_symbol(":", true) {
        Some(parser.expect_identifier("expected superclass name")?.value)
    } else {
        None
    };

    let body = parse_block(parser)?;

    Ok(Stmt::ClassDecl(ClassDeclStmt {
        name,
        superclass,
        body,
        span: Span {
            start,
            end: parser.last_end(),
        },
    }))
}
