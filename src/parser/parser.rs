//! Parser state and the token cursor.
//!
//! This module contains the main Parser struct. It owns the token stream and
//! a single position into it, and every parsing function takes it by
//! mutable reference. Lookahead is bounded to the current token.
//!
//! It maintains lookup tables for:
//! - Statement rules, tried in registration order
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//! - Type parsing handlers

use std::{collections::HashMap, rc::Rc};

use tracing::debug;

use crate::{
    ast::statements::BlockStmt,
    errors::errors::Error,
    lexer::tokens::{Keyword, Token, TokenKind},
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup, StmtMatcher, StmtRule,
    },
    stmt::parse_stmt,
    types::{
        create_token_type_lookups, TypeBPLookup, TypeLEDHandler, TypeLEDLookup, TypeNUDHandler,
        TypeNUDLookup,
    },
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always ending in `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream, never past the `EOF`
    pos: usize,
    /// Ordered statement rules, first match wins
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for type null denotation handlers
    type_nud_lookup: TypeNUDLookup,
    /// Lookup table for type left denotation handlers
    type_led_lookup: TypeLEDLookup,
    /// Lookup table for type binding powers
    type_binding_power_lookup: TypeBPLookup,
}

impl Parser {
    /// Creates a new Parser with empty lookup tables.
    ///
    /// An `EOF` token is appended when the stream does not already end in
    /// one, so the cursor always has a token to look at.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, Rc::clone(&file)));
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: Vec::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
            type_led_lookup: HashMap::new(),
            type_binding_power_lookup: HashMap::new(),
        }
    }

    /// Creates a Parser with the statement, expression and type grammars
    /// registered.
    pub fn with_lookups(tokens: Vec<Token>, file: Rc<String>) -> Self {
        let mut parser = Parser::new(tokens, file);
        create_token_lookups(&mut parser);
        create_token_type_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Index of the current token in the stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Consumes the current token and returns it.
    ///
    /// With `skip_newlines` set, any newlines following the consumed token
    /// are consumed as well. The cursor stays put on `EOF`.
    pub fn advance(&mut self, skip_newlines: bool) -> &Token {
        let consumed = self.pos;
        if self.tokens[consumed].kind != TokenKind::EOF {
            self.pos += 1;
        }
        if skip_newlines {
            self.skip(TokenKind::NewLine);
        }
        &self.tokens[consumed]
    }

    /// Consumes a run of tokens of `kind`, returning how many were skipped.
    pub fn skip(&mut self, kind: TokenKind) -> usize {
        let mut skipped = 0;
        while kind != TokenKind::EOF && self.current_token_kind() == kind {
            self.pos += 1;
            skipped += 1;
        }
        skipped
    }

    /// Whether the current token is the symbol `text`. Never consumes.
    pub fn check_symbol(&self, text: &str) -> bool {
        self.current_token().is_symbol(text)
    }

    /// Consumes the current token if it is the symbol `text`.
    pub fn match_symbol(&mut self, text: &str) -> bool {
        self.peek_symbol(text, true)
    }

    /// Whether the current token is the symbol `text`, consuming it only
    /// when `advance_if_match` is set.
    pub fn peek_symbol(&mut self, text: &str, advance_if_match: bool) -> bool {
        let matched = self.check_symbol(text);
        if matched && advance_if_match {
            self.advance(false);
        }
        matched
    }

    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current_token().is_keyword(keyword)
    }

    pub fn match_keyword(&mut self, keyword: Keyword) -> bool {
        let matched = self.check_keyword(keyword);
        if matched {
            self.advance(false);
        }
        matched
    }

    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        let matched = self.current_token_kind() == kind;
        if matched {
            self.advance(false);
        }
        matched
    }

    /// Consumes a token of `expected_kind`, or fails with `message`.
    pub fn expect_kind(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.error(message));
        }
        Ok(self.advance(false).clone())
    }

    /// Consumes a plain (non-keyword) identifier, or fails with `message`.
    pub fn expect_identifier(&mut self, message: &str) -> Result<Token, Error> {
        self.expect_kind(TokenKind::Identifier(None), message)
    }

    /// Consumes exactly the symbol `text`, or fails with "expected 'text'".
    pub fn expect_symbol(&mut self, text: &str) -> Result<Token, Error> {
        if !self.check_symbol(text) {
            return Err(self.error(&format!("expected '{}'", text)));
        }
        Ok(self.advance(false).clone())
    }

    /// Builds a syntax error pointing at the current token.
    pub fn error(&self, message: &str) -> Error {
        let token = self.current_token();
        let found = match token.kind {
            TokenKind::NewLine => String::from("newline"),
            TokenKind::EOF => String::from("end of input"),
            _ => token.value.clone(),
        };

        Error::syntax(message, Some(found), token.span.start.clone())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Returns where the most recently consumed token ends.
    pub fn last_end(&self) -> Position {
        match self.pos.checked_sub(1) {
            Some(previous) => self.tokens[previous].span.end.clone(),
            None => self.get_position(),
        }
    }

    /// Returns the ordered statement rules.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Returns a reference to the type binding power lookup table.
    pub fn get_type_bp_lookup(&self) -> &TypeBPLookup {
        &self.type_binding_power_lookup
    }

    /// Returns a reference to the type NUD lookup table.
    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    /// Returns a reference to the type LED lookup table.
    pub fn get_type_led_lookup(&self) -> &TypeLEDLookup {
        &self.type_led_lookup
    }

    /// Registers a left denotation (infix) handler for a lookup key.
    ///
    /// # Arguments
    ///
    /// * `key` - The token lookup key (see `Token::lookup_key`)
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, key: &str, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(key.to_string(), binding_power);
        self.led_lookup.insert(key.to_string(), led_fn);
    }

    /// Registers a null denotation (prefix) handler for a lookup key.
    ///
    /// Prefix handlers carry no binding power, so a token that can only
    /// start an expression ends the one before it.
    pub fn nud(&mut self, key: &str, nud_fn: NUDHandler) {
        self.nud_lookup.insert(key.to_string(), nud_fn);
    }

    /// Appends a statement rule. Rules are tried in the order they were
    /// registered.
    ///
    /// # Arguments
    ///
    /// * `name` - Rule name, reported in trace output
    /// * `matches` - Predicate over the current token
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, name: &'static str, matches: StmtMatcher, stmt_fn: StmtHandler) {
        self.stmt_lookup.push(StmtRule {
            name,
            matches,
            handler: stmt_fn,
        });
    }

    /// Registers a type left denotation handler.
    pub fn type_led(&mut self, key: &str, binding_power: BindingPower, led_fn: TypeLEDHandler) {
        self.type_binding_power_lookup
            .insert(key.to_string(), binding_power);
        self.type_led_lookup.insert(key.to_string(), led_fn);
    }

    /// Registers a type null denotation handler.
    pub fn type_nud(&mut self, key: &str, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(key.to_string(), nud_fn);
    }
}

/// Parses a stream of tokens into a program.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes all lookup tables, and parses newline separated statements
/// until EOF. The first error aborts the parse.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Reference-counted string containing the source file name
///
/// # Returns
///
/// The top-level statements as a BlockStmt, or the first Error met.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<BlockStmt, Error> {
    let mut parser = Parser::with_lookups(tokens, Rc::clone(&file));
    let start = Position(0, Rc::clone(&file));

    let mut body = vec![];

    loop {
        parser.skip(TokenKind::NewLine);
        if !parser.has_tokens() {
            break;
        }

        body.push(parse_stmt(&mut parser)?);

        if parser.has_tokens() && !parser.match_kind(TokenKind::NewLine) {
            return Err(parser.error("expected newline after statement"));
        }
    }

    debug!(file = %file, statements = body.len(), "parsed program");

    Ok(BlockStmt {
        body,
        span: Span {
            start,
            end: parser.last_end(),
        },
    })
}
