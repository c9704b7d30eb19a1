use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::{Keyword, Token, IDENTIFIER_KEY, NUMBER_KEY, STRING_KEY},
};

use super::{decl::*, expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Comma,
    Assignment,
    Logical,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Member,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type StmtMatcher = fn(&Token) -> bool;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

/// One row of the statement dispatch table.
pub struct StmtRule {
    pub name: &'static str,
    pub matches: StmtMatcher,
    pub handler: StmtHandler,
}

pub fn create_token_lookups(parser: &mut Parser) {
    parser.led("=", BindingPower::Assignment, parse_assignment_expr);
    parser.led("+=", BindingPower::Assignment, parse_assignment_expr);
    parser.led("-=", BindingPower::Assignment, parse_assignment_expr);

    // Logical
    parser.led("&&", BindingPower::Logical, parse_binary_expr);
    parser.led("||", BindingPower::Logical, parse_binary_expr);

    // Relational
    parser.led("<", BindingPower::Relational, parse_binary_expr);
    parser.led("<=", BindingPower::Relational, parse_binary_expr);
    parser.led(">", BindingPower::Relational, parse_binary_expr);
    parser.led(">=", BindingPower::Relational, parse_binary_expr);
    parser.led("==", BindingPower::Relational, parse_binary_expr);
    parser.led("!=", BindingPower::Relational, parse_binary_expr);

    // Additive and multiplicative
    parser.led("+", BindingPower::Additive, parse_binary_expr);
    parser.led("-", BindingPower::Additive, parse_binary_expr);
    parser.led("*", BindingPower::Multiplicative, parse_binary_expr);
    parser.led("/", BindingPower::Multiplicative, parse_binary_expr);
    parser.led("%", BindingPower::Multiplicative, parse_binary_expr);

    parser.led("(", BindingPower::Call, parse_call_expr);

    // Member
    parser.led(".", BindingPower::Member, parse_member_expr);

    // Literals and symbols
    parser.nud(NUMBER_KEY, parse_primary_expr);
    parser.nud(IDENTIFIER_KEY, parse_primary_expr);
    parser.nud(STRING_KEY, parse_primary_expr);
    parser.nud("-", parse_prefix_expr);
    parser.nud("!", parse_prefix_expr);
    parser.nud("(", parse_grouping_expr);
    parser.nud("function", parse_closure_expr);

    // Statements, first match wins; anything unmatched is an expression
    parser.stmt("block", |token| token.is_symbol("{"), parse_block_stmt);
    parser.stmt("if", |token| token.is_keyword(Keyword::If), parse_if_stmt);
    parser.stmt("function", |token| token.is_keyword(Keyword::Function), parse_fn_decl_stmt);
    parser.stmt("return", |token| token.is_keyword(Keyword::Return), parse_return_stmt);
    parser.stmt("for", |token| token.is_keyword(Keyword::For), parse_for_stmt);
    parser.stmt("class", |token| token.is_keyword(Keyword::Class), parse_class_decl_stmt);
    parser.stmt("let", |token| token.is_keyword(Keyword::Let), parse_var_decl_stmt);
    parser.stmt("var", |token| token.is_keyword(Keyword::Var), parse_var_decl_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = Vec<StmtRule>;
pub type NUDLookup = HashMap<String, NUDHandler>;
pub type LEDLookup = HashMap<String, LEDHandler>;
pub type BPLookup = HashMap<String, BindingPower>;
