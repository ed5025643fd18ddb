//! Lexer for WebIDL
//!
//! Handles tokenization including:
//! - Keywords (interface, namespace, enum, attribute, maplike, ...)
//! - Identifiers (with the leading-underscore escape removed) and literals (integer, float, string)
//! - Punctuation (`{ } ( ) [ ] < > ; , : ? = - ...`)
//! - Line (`//`) and block (`/* */`) comments
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `numbers` - Numeric literal scanning

mod numbers;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use webidl_core::lang::punctuation::PunctuationId;

/// Lexer for WebIDL source text.
///
/// Whitespace and comments are skipped; WebIDL has no layout-sensitive tokens.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// Returns a vector of tokens on success, or a vector of errors on failure.
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<CompileError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            ' ' | '\t' | '\r' | '\n' => {}

            '/' => {
                if self.match_char('/') {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                } else if self.match_char('*') {
                    self.scan_block_comment(start);
                } else {
                    self.unexpected('/', start);
                }
            }

            ',' => self.add_punct(PunctuationId::Comma, start),
            ';' => self.add_punct(PunctuationId::Semicolon, start),
            ':' => self.add_punct(PunctuationId::Colon, start),
            '?' => self.add_punct(PunctuationId::Question, start),
            '=' => self.add_punct(PunctuationId::Equals, start),
            '(' => self.add_punct(PunctuationId::LParen, start),
            ')' => self.add_punct(PunctuationId::RParen, start),
            '[' => self.add_punct(PunctuationId::LBracket, start),
            ']' => self.add_punct(PunctuationId::RBracket, start),
            '{' => self.add_punct(PunctuationId::LBrace, start),
            '}' => self.add_punct(PunctuationId::RBrace, start),
            '<' => self.add_punct(PunctuationId::LAngle, start),
            '>' => self.add_punct(PunctuationId::RAngle, start),

            '.' => {
                if self.peek() == Some('.') && self.peek_next() == Some('.') {
                    self.advance();
                    self.advance();
                    self.add_punct(PunctuationId::Ellipsis, start);
                } else if matches!(self.peek(), Some(d) if d.is_ascii_digit()) {
                    self.scan_number(start, '.', false);
                } else {
                    self.unexpected('.', start);
                }
            }

            '-' => match self.peek() {
                Some(d) if d.is_ascii_digit() || d == '.' => {
                    self.advance();
                    self.scan_number(start, d, true);
                }
                Some(a) if a.is_ascii_alphabetic() => self.scan_identifier(start),
                _ => self.add_punct(PunctuationId::Minus, start),
            },

            '"' => self.scan_string(start),

            '0'..='9' => self.scan_number(start, c, false),

            '_' if matches!(self.peek(), Some(a) if a.is_ascii_alphabetic()) => self.scan_identifier(start),
            _ if c.is_ascii_alphabetic() => self.scan_identifier(start),

            _ => self.unexpected(c, start),
        }
    }

    fn unexpected(&mut self, c: char, start: usize) {
        self.errors.push(CompileError::new(
            format!("Unexpected character '{}'", c),
            Span::new(start, self.current_pos),
        ));
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    // ========================================================================
    // Comments, strings, identifiers
    // ========================================================================

    fn scan_block_comment(&mut self, start: usize) {
        while let Some(c) = self.advance() {
            if c == '*' && self.match_char('/') {
                return;
            }
        }
        self.errors.push(
            CompileError::new(
                "Unterminated block comment".to_string(),
                Span::new(start, self.current_pos),
            )
            .with_hint("Close the comment with '*/'"),
        );
    }

    /// WebIDL strings have no escapes: everything up to the next `"`.
    fn scan_string(&mut self, start: usize) {
        let content_start = self.current_pos;
        while let Some(c) = self.peek() {
            if c == '"' {
                let value = self.source[content_start..self.current_pos].to_string();
                self.advance();
                self.add_token(TokenKind::String(value), start);
                return;
            }
            self.advance();
        }
        self.errors.push(CompileError::new(
            "Unterminated string literal".to_string(),
            Span::new(start, self.current_pos),
        ));
    }

    /// Identifier per `[_-]?[A-Za-z][0-9A-Z_a-z-]*`; the first character is already consumed.
    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        // An escaped identifier (`_interface`) is never a keyword.
        if let Some(escaped) = spelling.strip_prefix('_') {
            self.add_token(TokenKind::Ident(escaped.to_string()), start);
        } else if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Ident(spelling.to_string()), start);
        }
    }
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
