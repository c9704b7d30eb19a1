use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the text a pattern matched at the lexer's current offset.
pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(source: &str, handler: RegexHandler) -> RegexPattern {
    // Every pattern is a literal anchored at the current offset.
    let regex = Regex::new(&format!("^(?:{})", source)).unwrap();
    RegexPattern { regex, handler }
}

lazy_static! {
    // First match wins, so longer symbols come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern("[0-9]+(\\.[0-9]+)?", number_handler),
        pattern("[ \\t\\r]+", skip_handler),
        pattern("\\n", MK_DEFAULT_HANDLER!(TokenKind::NewLine, "\n")),
        pattern("\"(\\\\.|[^\"\\\\\\n])*\"", string_handler),
        pattern("//[^\\n]*", skip_handler),
        pattern("==", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "==")),
        pattern("!=", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "!=")),
        pattern("<=", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "<=")),
        pattern(">=", MK_DEFAULT_HANDLER!(TokenKind::Symbol, ">=")),
        pattern("&&", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "&&")),
        pattern("\\|\\|", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "||")),
        pattern("->", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "->")),
        pattern("\\+=", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "+=")),
        pattern("-=", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "-=")),
        pattern("\\{", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "{")),
        pattern("\\}", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "}")),
        pattern("\\(", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "(")),
        pattern("\\)", MK_DEFAULT_HANDLER!(TokenKind::Symbol, ")")),
        pattern("\\[", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "[")),
        pattern("\\]", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "]")),
        pattern("=", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "=")),
        pattern("<", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "<")),
        pattern(">", MK_DEFAULT_HANDLER!(TokenKind::Symbol, ">")),
        pattern("\\+", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "+")),
        pattern("-", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "-")),
        pattern("\\*", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "*")),
        pattern("/", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "/")),
        pattern("%", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "%")),
        pattern("!", MK_DEFAULT_HANDLER!(TokenKind::Symbol, "!")),
        pattern("\\.", MK_DEFAULT_HANDLER!(TokenKind::Symbol, ".")),
        pattern(",", MK_DEFAULT_HANDLER!(TokenKind::Symbol, ",")),
        pattern(":", MK_DEFAULT_HANDLER!(TokenKind::Symbol, ":")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from("shell")));

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    // `tokenize` rejects sources whose offsets do not fit in a `u32`
    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span of the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched.to_string(), span));
    lexer.advance_n(matched.len());
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn string_handler(lexer: &mut Lexer, matched: &str) {
    let literal = &matched[1..matched.len() - 1];

    let mut result = String::new();
    let mut chars = literal.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        // The pattern guarantees a character follows every backslash.
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('0') => result.push('\0'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some(other) => {
                result.push('\\'); // Keep unknown escapes verbatim
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::String, result, span));
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let keyword = RESERVED_LOOKUP.get(matched).copied();
    let span = lexer.span_of(matched.len());

    lexer.push(MK_TOKEN!(TokenKind::Identifier(keyword), String::from(matched), span));
    lexer.advance_n(matched.len());
}

/// Fails when a source of `len` bytes has offsets that a `Position` cannot
/// hold.
pub(crate) fn check_source_len(len: usize, file: &Rc<String>) -> Result<(), Error> {
    u32::try_from(len).map(|_| ()).map_err(|_| {
        Error::new(
            ErrorImpl::SourceTooLarge { size: len },
            Position(0, Rc::clone(file)),
        )
    })
}

/// Converts source text into tokens, always terminated by a single `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    check_source_len(lex.source.len(), &lex.file)?;

    while !lex.at_eof() {
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|found| (pattern.handler, found.as_str().to_string()))
        });

        match matched {
            Some((handler, text)) => handler(&mut lex, &text),
            None => {
                let token = lex.remainder().chars().next().map(String::from).unwrap_or_default();
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token }, lex.position()));
            }
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));

    debug!(file = %lex.file, tokens = lex.tokens.len(), "tokenized source");
    Ok(lex.tokens)
}
