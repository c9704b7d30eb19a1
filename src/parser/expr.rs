use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AssignmentExpr, BinaryExpr, CallExpr, ClosureExpr, MemberExpr, NumberExpr, PrefixExpr,
            StringExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    decl::{parse_parameters, parse_return_type},
    lookups::BindingPower,
    parser::Parser,
    stmt::parse_block,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let nud = parser
        .get_nud_lookup()
        .get(parser.current_token().lookup_key())
        .copied();
    let Some(nud) = nud else {
        return Err(parser.error("expected expression"));
    };

    let mut left = nud(parser)?;

    // While the current token binds tighter than `bp`, keep extending lhs
    loop {
        let key = parser.current_token().lookup_key();
        let next_bp = parser
            .get_bp_lookup()
            .get(key)
            .copied()
            .unwrap_or(BindingPower::Default);
        if next_bp <= bp {
            break;
        }

        let Some(led) = parser.get_led_lookup().get(key).copied() else {
            return Err(parser.error("unexpected token in expression"));
        };
        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Number => {
            // Overflowing literals parse as infinity rather than failing
            let value = token
                .value
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| {
                    Error::new(
                        ErrorImpl::NumberParseError {
                            token: token.value.clone(),
                        },
                        token.span.start.clone(),
                    )
                })?;
            parser.advance(false);
            Ok(Expr::Number(NumberExpr {
                value,
                span: token.span,
            }))
        }
        TokenKind::Identifier(None) => {
            parser.advance(false);
            Ok(Expr::Symbol(SymbolExpr {
                value: token.value,
                span: token.span,
            }))
        }
        TokenKind::String => {
            parser.advance(false);
            Ok(Expr::String(StringExpr {
                value: token.value,
                span: token.span,
            }))
        }
        _ => Err(parser.error("expected expression")),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance(true).value.clone();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance(false).clone();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator_token.span.start,
            end: rhs.get_span().end.clone(),
        },
        operator: operator_token.value,
        right_expr: Box::new(rhs),
    }))
}

pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance(true).value.clone();
    // One step below Assignment so that `a = b = c` nests to the right
    let rhs = parse_expr(parser, BindingPower::Comma)?;

    Ok(Expr::Assignment(AssignmentExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator,
        value: Box::new(rhs),
        assignee: Box::new(left),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance(true);
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.skip(TokenKind::NewLine);
    parser.expect_symbol(")")?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance(true);

    let mut arguments = vec![];

    while !parser.check_symbol(")") {
        arguments.push(parse_expr(parser, BindingPower::Default)?);
        parser.skip(TokenKind::NewLine);

        if !parser.match_symbol(",") {
            break;
        }
        parser.skip(TokenKind::NewLine);
    }

    parser.expect_symbol(")")?;

    Ok(Expr::Call(CallExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.last_end(),
        },
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_member_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance(false);
    let property = parser
        .expect_identifier("expected property name after '.'")?
        .value;

    Ok(Expr::Member(MemberExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.last_end(),
        },
        object: Box::new(left),
        property,
    }))
}

/// `function (params) [-> type] { body }` in expression position.
///
/// The closure comes out anonymous; see `Expr::named`.
pub fn parse_closure_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance(false).span.start.clone();

    let parameters = parse_parameters(parser)?;
    let return_type = parse_return_type(parser)?;
    let body = parse_block(parser)?;

    Ok(Expr::Closure(ClosureExpr {
        name: None,
        parameters,
        return_type,
        body,
        span: Span {
            start,
            end: parser.last_end(),
        },
    }))
}
