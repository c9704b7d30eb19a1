use tracing::trace;

use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::UnassignedExpr,
        statements::{BlockStmt, ExpressionStmt, ForStmt, IfStmt, ReturnStmt, VarDeclStmt},
        types::Type,
    },
    errors::errors::Error,
    lexer::tokens::{Keyword, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{parser::Parser, types::parse_type};

/// Parses exactly one statement, leaving the cursor right after it.
///
/// Any trailing separator is left for the caller.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token();
    let rule = parser
        .get_stmt_lookup()
        .iter()
        .find(|rule| (rule.matches)(token))
        .map(|rule| (rule.name, rule.handler));

    if let Some((name, handler)) = rule {
        trace!(rule = name, "dispatching statement");
        return handler(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Expression(ExpressionStmt {
        span: expression.get_span().clone(),
        expression,
    }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

/// Parses `{`, newline separated statements, then `}`.
///
/// Blank lines are ignored. Each statement must be followed by a newline or
/// by the closing brace.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect_symbol("{")?.span.start;

    let mut body = Vec::new();
    loop {
        match parser.current_token_kind() {
            TokenKind::EOF => return Err(parser.error("unterminated block")),
            TokenKind::Symbol if parser.check_symbol("}") => {
                parser.advance(false);
                break;
            }
            TokenKind::NewLine => {
                parser.advance(false);
            }
            _ => {
                body.push(parse_stmt(parser)?);

                if !parser.match_kind(TokenKind::NewLine) && !parser.check_symbol("}") {
                    return Err(parser.error("expected newline or '}' after statement"));
                }
            }
        }
    }

    Ok(BlockStmt {
        body,
        span: Span {
            start,
            end: parser.last_end(),
        },
    })
}

/// `let`/`var` name [`:` type] [`=` initializer]
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance(false).clone();
    let is_mutable = start_token.is_keyword(Keyword::Var);

    let identifier = parser.expect_identifier("expected variable name")?.value;

    let declared_type = if parser.peek_symbol(":", true) {
        parse_type(parser, BindingPower::Default)?
    } else {
        Type::Any
    };

    let assigned_value = if parser.check_symbol("=") {
        // The initializer may start on the next line.
        parser.advance(true);
        parse_expr(parser, BindingPower::Default)?.named(&identifier)
    } else {
        let end = parser.last_end();
        Expr::Unassigned(UnassignedExpr {
            span: Span {
                start: end.clone(),
                end,
            },
        })
    };

    Ok(Stmt::VarDecl(VarDeclStmt {
        span: Span {
            start: start_token.span.start,
            end: parser.last_end(),
        },
        is_mutable,
        identifier,
        declared_type,
        assigned_value,
    }))
}

/// `if` condition block [`else` block]
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance(false).span.start.clone();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let then_body = parse_block(parser)?;

    let else_body = if parser.match_keyword(Keyword::Else) {
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        span: Span {
            start,
            end: parser.last_end(),
        },
    }))
}

/// `return` expression. There is no value-less form.
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance(false).span.start.clone();

    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: Span {
            start,
            end: parser.last_end(),
        },
    }))
}

/// `for` iterable `{` [`as` name {`,` name}] statements `}`
///
/// Unlike an ordinary block, statements in the loop body need no newline
/// between them.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance(false).span.start.clone();

    let iterable = parse_expr(parser, BindingPower::Default)?;
    let body_start = parser.expect_symbol("{")?.span.start;
    parser.skip(TokenKind::NewLine);

    let mut variables = Vec::new();
    if parser.match_keyword(Keyword::As) {
        loop {
            let name = parser.expect_identifier("expected variable name after 'as'")?;
            variables.push(name.value);

            if !parser.match_symbol(",") {
                break;
            }
        }
    }

    let mut statements = Vec::new();
    loop {
        parser.skip(TokenKind::NewLine);
        if parser.check_symbol("}") || !parser.has_tokens() {
            break;
        }
        statements.push(parse_stmt(parser)?);
    }

    parser.expect_symbol("}")?;
    let end = parser.last_end();

    Ok(Stmt::For(ForStmt {
        iterable,
        variables,
        body: BlockStmt {
            body: statements,
            span: Span {
                start: body_start,
                end: end.clone(),
            },
        },
        span: Span { start, end },
    }))
}
