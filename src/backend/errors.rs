//! Backend error types
//!
//! Every failure is fatal to the whole conversion: callers receive an error and never partial
//! declaration text.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;
use webidl_syntax::ast::Span;
use webidl_syntax::diagnostics::ParseError;

/// A definition or member the declaration mapping has no rule for.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
#[error("{construct} is not supported (in {})", location(.definition, .member))]
#[diagnostic(
    code(webidl::unsupported_construct),
    help("remove the construct or move it to a separate IDL file that is not converted")
)]
pub struct UnsupportedConstructError {
    /// Name of the enclosing definition (empty until attached with [`within`](Self::within)).
    pub definition: String,
    /// Member name or kind, when the construct sits inside a member.
    pub member: Option<String>,
    /// What is unsupported, e.g. `nullable array type 'long[]?'`.
    pub construct: String,
    #[label("not supported")]
    pub span: SourceSpan,
}

impl UnsupportedConstructError {
    pub fn new(construct: impl Into<String>, span: Span) -> Self {
        Self {
            definition: String::new(),
            member: None,
            construct: construct.into(),
            span: span.into(),
        }
    }

    /// Attach the enclosing definition and member, keeping any context that is already set.
    pub fn within(mut self, definition: &str, member: Option<&str>) -> Self {
        if self.definition.is_empty() {
            self.definition = definition.to_string();
        }
        if self.member.is_none() {
            self.member = member.map(str::to_string);
        }
        self
    }
}

fn location(definition: &str, member: &Option<String>) -> String {
    match member {
        Some(member) => format!("'{}', member '{}'", definition, member),
        None => format!("'{}'", definition),
    }
}

/// Error returned by [`convert`](crate::backend::convert).
#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    /// The WebIDL text is malformed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    /// The text parsed, but uses a construct with no declaration mapping.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Unsupported(#[from] UnsupportedConstructError),
}
