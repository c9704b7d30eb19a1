use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("let", Keyword::Let);
        map.insert("var", Keyword::Var);
        map.insert("if", Keyword::If);
        map.insert("else", Keyword::Else);
        map.insert("for", Keyword::For);
        map.insert("as", Keyword::As);
        map.insert("return", Keyword::Return);
        map.insert("function", Keyword::Function);
        map.insert("class", Keyword::Class);
        map
    };
}

/// Tag carried by identifiers that spell a reserved word.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Let,
    Var,
    If,
    Else,
    For,
    As,
    Return,
    Function,
    Class,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Let => "let",
            Keyword::Var => "var",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::As => "as",
            Keyword::Return => "return",
            Keyword::Function => "function",
            Keyword::Class => "class",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    NewLine,
    Number,
    String,
    /// A name, tagged when it is a reserved word.
    Identifier(Option<Keyword>),
    /// Punctuation and operators; the text lives in [`Token::value`].
    Symbol,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Identifier(Some(keyword)) => write!(f, "Keyword({})", keyword.as_str()),
            TokenKind::Identifier(None) => write!(f, "Identifier"),
            _ => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::NewLine | TokenKind::EOF => write!(f, "{}", self.kind),
            _ => write!(f, "{} ({})", self.kind, self.value.escape_debug()),
        }
    }
}

impl Token {
    pub fn is_symbol(&self, text: &str) -> bool {
        self.kind == TokenKind::Symbol && self.value == text
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Identifier(Some(keyword))
    }

    /// Key used by the expression and type lookup tables.
    ///
    /// Symbols and keywords are keyed by their text, every other kind by a
    /// bracketed class name that no source text can spell.
    pub fn lookup_key(&self) -> &str {
        match self.kind {
            TokenKind::Symbol | TokenKind::Identifier(Some(_)) => self.value.as_str(),
            TokenKind::Identifier(None) => IDENTIFIER_KEY,
            TokenKind::Number => NUMBER_KEY,
            TokenKind::String => STRING_KEY,
            TokenKind::NewLine => "<newline>",
            TokenKind::EOF => "<eof>",
        }
    }
}

pub const IDENTIFIER_KEY: &str = "<identifier>";
pub const NUMBER_KEY: &str = "<number>";
pub const STRING_KEY: &str = "<string>";
