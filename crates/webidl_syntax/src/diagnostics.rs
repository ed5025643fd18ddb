//! Diagnostics and error reporting for the WebIDL frontend
//!
//! Lexer and parser report [`CompileError`]s. [`parse_definitions`](crate::parse_definitions) folds them into a
//! single [`ParseError`] that carries every diagnostic plus the location of the first one, ready for `miette`
//! rendering.

use crate::ast::Span;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// A lexer or parser error with location information
#[derive(Debug, Clone, PartialEq)]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Error,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Syntax,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Error,
    Syntax,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Error => write!(f, "error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.end.saturating_sub(span.start)).into()
    }
}

/// Malformed WebIDL text.
///
/// Display shows the first diagnostic; `errors` keeps all of them in source order.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("{message} (line {line}, column {column})")]
#[diagnostic(code(webidl::parse_error))]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
    #[label("here")]
    pub span: SourceSpan,
    pub kind: ErrorKind,
    #[help]
    pub help: Option<String>,
    pub errors: Vec<CompileError>,
}

impl ParseError {
    /// Build from the diagnostics a lexer or parser run produced.
    ///
    /// An empty list still yields an error, anchored at the start of the source.
    pub fn new(source: &str, errors: Vec<CompileError>) -> Self {
        let (message, span, kind, help) = match errors.first() {
            Some(first) => (first.message.clone(), first.span, first.kind, first.hints.first().cloned()),
            None => ("invalid WebIDL".to_string(), Span::default(), ErrorKind::Error, None),
        };
        let (line, column, _) = line_info(source, span.start);
        Self {
            message,
            line,
            column,
            span: span.into(),
            kind,
            help,
            errors,
        }
    }
}

/// Render an error with its source line and a caret underline (plain text).
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let (line_num, col_num, line_text) = line_info(source, error.span.start);
    let gutter = " ".repeat(line_num.to_string().len());

    let underline_len = if error.span.end > error.span.start {
        (error.span.end - error.span.start)
            .min(line_text.len().saturating_sub(col_num - 1))
            .max(1)
    } else {
        1
    };

    let mut out = String::new();
    out.push_str(&format!("{}: {}\n", error.kind, error.message));
    out.push_str(&format!("  --> {}:{}:{}\n", file_name, line_num, col_num));
    out.push_str(&format!("  {} |\n", gutter));
    out.push_str(&format!("  {} | {}\n", line_num, line_text));
    out.push_str(&format!(
        "  {} | {}{}\n",
        gutter,
        " ".repeat(col_num - 1),
        "^".repeat(underline_len)
    ));
    for note in &error.notes {
        out.push_str(&format!("  = note: {}\n", note));
    }
    for hint in &error.hints {
        out.push_str(&format!("  = hint: {}\n", hint));
    }
    out
}

/// Get 1-based line number, 1-based column number and line text for a byte offset
pub fn line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    (line_num, offset - line_start + 1, &source[line_start..line_end])
}
