//! WebIDL syntax frontend: lexer, parser, AST, diagnostics.
//!
//! This crate produces the ordered definition tree the declaration backend consumes. It is dependency-light and knows
//! nothing about TypeScript.
//!
//! ## Notes
//! - Vocabulary identity (keywords/punctuation/builtin types) comes from `webidl_core::lang` registries.
//! - Extended attributes and default values are parsed and dropped; they never affect declarations.
//!
//! ## Examples
//! ```rust
//! use webidl_syntax::ast::Definition;
//!
//! let program = webidl_syntax::parse_definitions("enum Color { \"red\", \"green\" };").unwrap();
//! assert!(matches!(&program.definitions[0].node, Definition::Enum(e) if e.values.len() == 2));
//! ```
//!
//! ## See also
//! - `webidl_core::lang` for registry-backed vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;

use ast::Program;
use diagnostics::ParseError;

/// Lex and parse a WebIDL document into its definition tree.
///
/// ## Errors
/// Returns a [`ParseError`] carrying every lexer or parser diagnostic when the text is malformed. Lexer errors stop
/// the pipeline before parsing.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_definitions(source: &str) -> Result<Program, ParseError> {
    let tokens = lexer::lex(source).map_err(|errors| ParseError::new(source, errors))?;
    let program = parser::parse(&tokens).map_err(|errors| ParseError::new(source, errors))?;
    tracing::debug!(definitions = program.definitions.len(), "parsed WebIDL");
    Ok(program)
}
