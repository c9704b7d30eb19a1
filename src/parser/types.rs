//! Type parsing implementation.
//!
//! This module handles parsing of type annotations. It supports:
//!
//! - Named types (identifiers)
//! - Array types, written with a postfix `[]`
//!
//! Similar to expression parsing, it uses NUD/LED handlers with
//! binding powers for parsing compound type expressions.

use std::collections::HashMap;

use crate::{
    ast::types::{ArrayType, SymbolType, Type},
    errors::errors::Error,
    lexer::tokens::IDENTIFIER_KEY,
};

use super::{lookups::BindingPower, parser::Parser};

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<Type, Error>;

/// Type alias for type left denotation handler functions.
pub type TypeLEDHandler = fn(&mut Parser, Type, BindingPower) -> Result<Type, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<String, TypeNUDHandler>;

/// Type alias for type LED lookup table.
pub type TypeLEDLookup = HashMap<String, TypeLEDHandler>;

/// Type alias for type binding power lookup table.
pub type TypeBPLookup = HashMap<String, BindingPower>;

/// Initializes the type parsing lookup tables.
///
/// # Arguments
///
/// * `parser` - Mutable reference to the parser to initialize
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(IDENTIFIER_KEY, parse_symbol_type);
    parser.type_led("[", BindingPower::Call, parse_array_type);
}

pub fn parse_symbol_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser.expect_identifier("expected type name")?;
    Ok(Type::Symbol(SymbolType {
        name: token.value,
        position: token.span.start,
    }))
}

pub fn parse_array_type(parser: &mut Parser, left: Type, _bp: BindingPower) -> Result<Type, Error> {
    parser.expect_symbol("[")?;
    parser.expect_symbol("]")?;

    Ok(Type::Array(ArrayType {
        underlying: Box::new(left),
    }))
}

pub fn parse_type(parser: &mut Parser, bp: BindingPower) -> Result<Type, Error> {
    // First parse NUD
    let nud = parser
        .get_type_nud_lookup()
        .get(parser.current_token().lookup_key())
        .copied();
    let Some(nud) = nud else {
        return Err(parser.error("expected type"));
    };

    let mut left = nud(parser)?;

    while let Some(next_bp) = parser
        .get_type_bp_lookup()
        .get(parser.current_token().lookup_key())
        .copied()
        .filter(|next_bp| *next_bp > bp)
    {
        let Some(led) = parser
            .get_type_led_lookup()
            .get(parser.current_token().lookup_key())
            .copied()
        else {
            return Err(parser.error("unexpected token in type"));
        };

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}
