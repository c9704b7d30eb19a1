//! Unit tests for the parser module.
//!
//! This module contains tests for parsing statements including:
//! - Blocks and their newline discipline
//! - Variable declarations and closure naming
//! - Conditionals, loops and returns
//! - Function and class declarations
//! - Expressions as handed back to the statement parsers
//! - Syntax errors

use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::{
    parser::Parser,
    stmt::{parse_block, parse_stmt},
};
use crate::{
    ast::{ast::Expr, ast::Stmt, types::Type},
    errors::errors::Error,
    lexer::{lexer::tokenize, tokens::TokenKind},
};

fn parser_for(source: &str) -> Parser {
    let tokens = tokenize(source.to_string(), Some("test.lang".to_string())).unwrap();
    Parser::with_lookups(tokens, Rc::new("test.lang".to_string()))
}

fn parse_one(source: &str) -> Stmt {
    parse_stmt(&mut parser_for(source)).unwrap()
}

fn render(source: &str) -> String {
    parse_one(source).to_string()
}

fn parse_error(source: &str) -> Error {
    parse_stmt(&mut parser_for(source)).unwrap_err()
}

// BLOCKS

#[test]
fn test_block_keeps_statements_in_order() {
    let mut parser = parser_for("{\n  a()\n  b()\n\n\n  c()\n}");
    let block = parse_block(&mut parser).unwrap();

    assert_eq!(block.len(), 3);
    assert_eq!(block.to_string(), "(block (call a) (call b) (call c))");
    assert!(!parser.has_tokens());
}

#[test]
fn test_block_allows_closing_brace_on_statement_line() {
    assert_eq!(render("{ a()\n b() }"), "(block (call a) (call b))");
}

#[test]
fn test_empty_block() {
    assert_eq!(render("{}"), "(block)");
    assert_eq!(render("{\n\n}"), "(block)");
}

#[test]
fn test_nested_blocks() {
    assert_eq!(
        render("{\n  let x = 10\n  {\n    let y = 20\n  }\n}"),
        "(block (let x any 10) (block (let y any 20)))"
    );
}

#[test]
fn test_block_requires_opening_brace() {
    let mut parser = parser_for("( a() )");
    let error = parse_block(&mut parser).unwrap_err();

    assert_eq!(error.get_message(), "expected '{'");
    assert_eq!(error.get_token(), Some("("));
    assert_eq!(parser.position(), 0);
}

#[test]
fn test_unterminated_block_consumes_everything() {
    let mut parser = parser_for("{\n  a()\n  b()\n");
    let error = parse_block(&mut parser).unwrap_err();

    assert_eq!(error.get_message(), "unterminated block");
    assert_eq!(error.get_token(), Some("end of input"));
    assert!(!parser.has_tokens());
}

#[test]
fn test_block_rejects_two_statements_on_one_line() {
    let error = parse_error("{ a() b() }");

    assert_eq!(error.get_message(), "expected newline or '}' after statement");
    assert_eq!(error.get_token(), Some("b"));
}

// VARIABLE DECLARATIONS

#[test]
fn test_let_without_annotation() {
    let Stmt::VarDecl(decl) = parse_one("let x = 1") else {
        panic!("expected a variable declaration");
    };

    assert_eq!(decl.identifier, "x");
    assert!(!decl.is_mutable);
    assert_eq!(decl.declared_type, Type::Any);
    assert!(matches!(decl.assigned_value, Expr::Number(ref number) if number.value == 1.0));
    assert_eq!(decl.span.start.0, 0);
    assert_eq!(decl.span.end.0, 9);
}

#[test]
fn test_var_with_type_and_no_initializer() {
    let Stmt::VarDecl(decl) = parse_one("var y: Int") else {
        panic!("expected a variable declaration");
    };

    assert!(decl.is_mutable);
    assert_eq!(decl.declared_type.to_string(), "Int");
    assert!(matches!(decl.assigned_value, Expr::Unassigned(_)));
    assert_eq!(render("var y: Int"), "(var y Int <unassigned>)");
}

#[test]
fn test_let_without_anything() {
    assert_eq!(render("let z"), "(let z any <unassigned>)");
}

#[test]
fn test_let_with_array_type() {
    assert_eq!(render("var xs: Int[] = ys"), "(var xs Int[] ys)");
}

#[test]
fn test_let_initializer_on_next_line() {
    assert_eq!(render("let x =\n\n  5 + 1"), "(let x any (+ 5 1))");
}

#[test]
fn test_let_requires_name() {
    let error = parse_error("let = 1");

    assert_eq!(error.get_message(), "expected variable name");
    assert_eq!(error.get_token(), Some("="));
}

#[test]
fn test_let_rejects_keyword_name() {
    assert_eq!(parse_error("var for = 1").get_message(), "expected variable name");
}

#[test]
fn test_let_names_closure() {
    let Stmt::VarDecl(decl) = parse_one("let f = function(x) { return x }") else {
        panic!("expected a variable declaration");
    };

    let Expr::Closure(closure) = &decl.assigned_value else {
        panic!("expected a closure");
    };
    assert_eq!(closure.name.as_deref(), Some("f"));
    assert_eq!(
        decl.assigned_value.to_string(),
        "(closure f (x:any) any (block (return x)))"
    );
}

#[test]
fn test_typed_let_names_closure() {
    assert_eq!(
        render("let f: Fn = function() -> Int { return 1 }"),
        "(let f Fn (closure f () Int (block (return 1))))"
    );
}

#[test]
fn test_let_leaves_other_initializers_alone() {
    assert_eq!(render("let n = g"), "(let n any g)");
    assert_eq!(
        render("let n = g(function() {})"),
        "(let n any (call g (closure <anonymous> () any (block))))"
    );
}

#[test]
fn test_assignment_does_not_name_closure() {
    let Stmt::Expression(stmt) = parse_one("obj.f = function() {}") else {
        panic!("expected an expression statement");
    };

    let Expr::Assignment(assignment) = &stmt.expression else {
        panic!("expected an assignment");
    };
    assert!(matches!(*assignment.value, Expr::Closure(ref closure) if closure.name.is_none()));
    assert_eq!(
        stmt.expression.to_string(),
        "(= (. obj f) (closure <anonymous> () any (block)))"
    );
}

// CONDITIONALS

#[test]
fn test_if_with_else() {
    assert_eq!(
        render("if c { a() } else { b() }"),
        "(if c (block (call a)) (block (call b)))"
    );
}

#[test]
fn test_if_without_else() {
    let Stmt::If(stmt) = parse_one("if c { a() }") else {
        panic!("expected an if statement");
    };

    assert!(stmt.else_body.is_none());
    assert_eq!(stmt.then_body.len(), 1);
}

#[test]
fn test_if_condition_is_a_full_expression() {
    assert_eq!(
        render("if x > 0 && ready {\n  go()\n}"),
        "(if (&& (> x 0) ready) (block (call go)))"
    );
}

#[test]
fn test_else_if_needs_braces() {
    assert_eq!(
        render("if a { b() } else { if c { d() } }"),
        "(if a (block (call b)) (block (if c (block (call d)))))"
    );
    assert_eq!(parse_error("if a { b() } else if c { d() }").get_message(), "expected '{'");
}

#[test]
fn test_if_requires_block() {
    assert_eq!(parse_error("if c a()").get_message(), "expected '{'");
}

// RETURNS

#[test]
fn test_return_expression() {
    assert_eq!(render("return 1 + 2"), "(return (+ 1 2))");
}

#[test]
fn test_return_requires_value() {
    let error = parse_error("{ return }");

    assert_eq!(error.get_message(), "expected expression");
    assert_eq!(error.get_token(), Some("}"));
}

// LOOPS

#[test]
fn test_for_with_bound_variables() {
    let parsed = parse_one("for xs { as k, v  f(k,v) }");
    assert_eq!(parsed.to_string(), "(for xs [k v] (block (call f k v)))");

    let Stmt::For(stmt) = parsed else {
        panic!("expected a for statement");
    };
    assert_eq!(stmt.variables, vec!["k".to_string(), "v".to_string()]);
    assert_eq!(stmt.body.len(), 1);
}

#[test]
fn test_for_body_needs_no_separators() {
    assert_eq!(render("for xs { f() g() }"), "(for xs [] (block (call f) (call g)))");
}

#[test]
fn test_for_across_lines() {
    assert_eq!(
        render("for items {\n  as item\n  print(item)\n\n  count = count + 1\n}"),
        "(for items [item] (block (call print item) (= count (+ count 1))))"
    );
}

#[test]
fn test_for_keeps_duplicate_names() {
    assert_eq!(render("for xs { as a, a }"), "(for xs [a a] (block))");
}

#[test]
fn test_for_requires_opening_brace() {
    assert_eq!(parse_error("for xs a()").get_message(), "expected '{'");
}

#[test]
fn test_for_requires_name_after_as() {
    assert_eq!(
        parse_error("for xs { as 1 }").get_message(),
        "expected variable name after 'as'"
    );
    assert_eq!(
        parse_error("for xs { as k, }").get_message(),
        "expected variable name after 'as'"
    );
}

#[test]
fn test_for_requires_closing_brace() {
    let error = parse_error("for xs { f()");

    assert_eq!(error.get_message(), "expected '}'");
    assert_eq!(error.get_token(), Some("end of input"));
}

// DECLARATIONS HANDED TO COLLABORATORS

#[test]
fn test_function_declaration() {
    assert_eq!(
        render("function add(a: Int, b) -> Int {\n  return a + b\n}"),
        "(function add (a:Int b:any) Int (block (return (+ a b))))"
    );
}

#[test]
fn test_function_declaration_body_uses_block_rules() {
    assert_eq!(
        parse_error("function f() { a() b() }").get_message(),
        "expected newline or '}' after statement"
    );
}

#[test]
fn test_class_declaration() {
    assert_eq!(
        render("class Point : Base {\n  var x: Int\n  var y: Int = 0\n}"),
        "(class Point:Base (block (var x Int <unassigned>) (var y Int 0)))"
    );
}

// DISPATCH AND EXPRESSIONS

#[test]
fn test_dispatcher_leaves_separator_for_caller() {
    let mut parser = parser_for("a()\nb()");
    let stmt = parse_stmt(&mut parser).unwrap();

    assert_eq!(stmt.to_string(), "(call a)");
    assert_eq!(parser.current_token_kind(), TokenKind::NewLine);
}

#[test]
fn test_expression_precedence() {
    assert_eq!(render("x = 1 + 2 * 3 - -y"), "(= x (- (+ 1 (* 2 3)) (- y)))");
    assert_eq!(render("a = b = 1"), "(= a (= b 1))");
    assert_eq!(render("(1 + 2) * 3"), "(* (+ 1 2) 3)");
}

#[test]
fn test_member_and_call_chain() {
    assert_eq!(render("a.b(c, d).e"), "(. (call (. a b) c d) e)");
    assert_eq!(render("print(\"hi\",\n  2)"), "(call print \"hi\" 2)");
}

#[test]
fn test_expression_statement_errors_surface() {
    assert_eq!(parse_error("else").get_message(), "expected expression");
    assert_eq!(parse_error("a.1").get_message(), "expected property name after '.'");
}

#[test]
fn test_number_literal_out_of_range() {
    let source = format!("let x = {}", "9".repeat(400));
    let error = parse_error(&source);

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_position().0, 8);
    assert_eq!(error.get_token().map(str::len), Some(400));

    assert_eq!(render("let x = 1.5"), "(let x any 1.5)");
}

// CURSOR

#[test]
fn test_cursor_advance_and_skip() {
    let mut parser = parser_for("a\n\n\nb c");

    assert_eq!(parser.advance(true).value, "a");
    assert_eq!(parser.current_token().value, "b");
    assert_eq!(parser.advance(false).value, "b");
    assert_eq!(parser.skip(TokenKind::NewLine), 0);
    assert_eq!(parser.advance(false).value, "c");
    assert!(!parser.has_tokens());

    // The cursor never moves past EOF
    parser.advance(true);
    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
}

#[test]
fn test_cursor_symbol_predicates() {
    let mut parser = parser_for(": =");

    assert!(parser.check_symbol(":"));
    assert!(parser.peek_symbol(":", false));
    assert_eq!(parser.position(), 0);
    assert!(!parser.match_symbol("="));
    assert!(parser.match_symbol(":"));
    assert!(parser.expect_symbol(":").is_err());
    assert_eq!(parser.expect_symbol("=").unwrap().value, "=");
}

#[test]
fn test_parser_appends_missing_eof() {
    let parser = Parser::with_lookups(vec![], Rc::new("empty.lang".to_string()));

    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
}
